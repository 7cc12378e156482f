use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const DEFAULT_SUFFIXES: [&str; 5] = ["", "k", "m", "b", "t"];
const DEFAULT_MAX_LENGTH: usize = 5;

/// Formats large values with an engineering suffix: 1100 → "1.1k",
/// 1000000 → "1m".
///
/// Only magnitudes covered by the suffix table are supported. Anything larger
/// is reported as [`ChartError::SuffixOutOfRange`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LargeValueFormatter {
    pub suffixes: Vec<String>,
    pub max_length: usize,
    /// Appended after the suffix, e.g. " $".
    pub text: String,
}

impl Default for LargeValueFormatter {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            max_length: DEFAULT_MAX_LENGTH,
            text: String::new(),
        }
    }
}

impl LargeValueFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replaces the suffix table; index `i` covers `10^(3 i)`.
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn format(&self, value: f64) -> ChartResult<String> {
        Ok(self.make_pretty(value)? + &self.text)
    }

    fn make_pretty(&self, value: f64) -> ChartResult<String> {
        if value == 0.0 || !value.is_finite() {
            return Ok(format_mantissa(if value == 0.0 { 0.0 } else { value }));
        }

        // values below one keep exponent zero
        let mut group = if value.abs() < 1.0 {
            0
        } else {
            value.abs().log10().floor() as i32 / 3
        };
        let mut mantissa_str = format_mantissa(value / 10f64.powi(group * 3));
        if mantissa_str.trim_start_matches('-').split('.').next().map_or(0, str::len) > 3 {
            group += 1;
            mantissa_str = format_mantissa(value / 10f64.powi(group * 3));
        }

        let suffix = self
            .suffixes
            .get(group as usize)
            .ok_or(ChartError::SuffixOutOfRange {
                exponent: group * 3,
                suffixes: self.suffixes.len(),
            })?;

        let mut r: Vec<char> = mantissa_str.chars().chain(suffix.chars()).collect();
        while r.len() >= 2 && (r.len() > self.max_length || ends_with_bare_point(&r)) {
            r.remove(r.len() - 2);
        }
        Ok(r.into_iter().collect())
    }
}

/// Mantissa with at most six decimals and no trailing zeros.
fn format_mantissa(value: f64) -> String {
    let s = format!("{:.6}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Matches `-?[0-9]+\.[a-z]`, a mantissa whose decimals were all trimmed.
fn ends_with_bare_point(r: &[char]) -> bool {
    let digits = r.strip_prefix(&['-']).unwrap_or(r);
    match digits {
        [int @ .., '.', letter] => {
            !int.is_empty() && int.iter().all(|c| c.is_ascii_digit()) && letter.is_ascii_lowercase()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mantissa_drops_trailing_zeros() {
        assert_eq!(format_mantissa(1.5), "1.5");
        assert_eq!(format_mantissa(100.0), "100");
        assert_eq!(format_mantissa(13.299999999999999), "13.3");
        assert_eq!(format_mantissa(-0.0), "0");
    }

    #[test]
    fn bare_point_detection() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert!(ends_with_bare_point(&chars("100.k")));
        assert!(ends_with_bare_point(&chars("-1.m")));
        assert!(!ends_with_bare_point(&chars("1.5k")));
        assert!(!ends_with_bare_point(&chars("100k")));
    }
}
