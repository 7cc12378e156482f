use serde::{Deserialize, Serialize};

/// A single (x, y) data point.
///
/// `x` is the ordering key for data sets; `data` is an opaque payload the
/// caller can attach and `icon` names an icon resource owned by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Entry {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            data: None,
            icon: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl From<(f64, f64)> for Entry {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Direction to move when an x lookup does not hit an entry exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rounding {
    Up,
    Down,
    #[default]
    Closest,
}
