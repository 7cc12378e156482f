use serde::{Deserialize, Serialize};

/// Maps integral axis values to labels, e.g. `0.0 → "Jan"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexAxisFormatter {
    pub values: Vec<String>,
}

impl IndexAxisFormatter {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Label at `value`; empty for non-integral or out-of-range input.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
            return String::new();
        }
        self.values
            .get(value as usize)
            .cloned()
            .unwrap_or_default()
    }
}
