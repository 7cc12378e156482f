use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::formatter::ValueFormatter;

pub const MIN_LABEL_COUNT: usize = 2;
pub const MAX_LABEL_COUNT: usize = 25;

/// Which y axis a data set is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// User-facing axis settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub label_count: usize,
    pub force_label_count: bool,
    pub granularity_enabled: bool,
    pub granularity: f64,
    pub center_labels: bool,
    pub custom_min: Option<f64>,
    pub custom_max: Option<f64>,
    /// Absolute space added below/above the data on an x axis.
    pub space_min: f64,
    pub space_max: f64,
    /// Space added above/below the data on a y axis, in percent of the range.
    pub space_top: f64,
    pub space_bottom: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            label_count: 6,
            force_label_count: false,
            granularity_enabled: false,
            granularity: 1.0,
            center_labels: false,
            custom_min: None,
            custom_max: None,
            space_min: 0.0,
            space_max: 0.0,
            space_top: 10.0,
            space_bottom: 10.0,
        }
    }
}

impl AxisConfig {
    pub fn with_label_count(mut self, count: usize, force: bool) -> Self {
        self.set_label_count(count, force);
        self
    }

    /// Sets the requested label count, clamped to `[2, 25]`.
    pub fn set_label_count(&mut self, count: usize, force: bool) {
        self.label_count = count.clamp(MIN_LABEL_COUNT, MAX_LABEL_COUNT);
        self.force_label_count = force;
    }

    /// Enables granularity with the given minimum interval.
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        self.granularity_enabled = true;
        self.granularity = granularity;
        self
    }

    pub fn with_center_labels(mut self, center: bool) -> Self {
        self.center_labels = center;
        self
    }

    pub(crate) fn normalize(&mut self) {
        if self.label_count != 0 {
            self.label_count = self.label_count.clamp(MIN_LABEL_COUNT, MAX_LABEL_COUNT);
        }
        if self.granularity.is_nan() || self.granularity <= 0.0 {
            self.granularity = 1.0;
        }
    }
}

/// Tick positions produced for one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub entries: Vec<f64>,
    /// Entries shifted by half an interval; empty unless labels are centered.
    pub centered_entries: Vec<f64>,
    pub decimals: usize,
    pub interval: f64,
}

impl AxisTicks {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Label for tick `index`, or an empty string past the end.
    pub fn formatted_label(&self, index: usize, formatter: &ValueFormatter) -> ChartResult<String> {
        match self.entries.get(index) {
            Some(&v) => formatter.format(v),
            None => Ok(String::new()),
        }
    }

    /// The label with the most characters, used to size the axis gutter.
    pub fn longest_label(&self, formatter: &ValueFormatter) -> ChartResult<String> {
        let mut longest = String::new();
        for &v in &self.entries {
            let label = formatter.format(v)?;
            if label.chars().count() > longest.chars().count() {
                longest = label;
            }
        }
        Ok(longest)
    }
}

/// Visible extent of an axis after spacing and custom limits are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            range: (max - min).abs(),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Extent of an x axis: absolute `space_min`/`space_max` padding unless a
    /// custom limit overrides it.
    pub fn for_x_axis(data_min: f64, data_max: f64, config: &AxisConfig) -> Self {
        let mut min = config.custom_min.unwrap_or(data_min - config.space_min);
        let mut max = config.custom_max.unwrap_or(data_max + config.space_max);
        if (max - min).abs() == 0.0 {
            max += 1.0;
            min -= 1.0;
        }
        Self::new(min, max)
    }

    /// Extent of a y axis: padding is a percentage of the data range.
    pub fn for_y_axis(data_min: f64, data_max: f64, config: &AxisConfig) -> Self {
        let mut min = data_min;
        let mut max = data_max;
        if (max - min).abs() == 0.0 {
            max += 1.0;
            min -= 1.0;
        }
        let range = (max - min).abs();
        let min = config
            .custom_min
            .unwrap_or(min - range / 100.0 * config.space_bottom);
        let max = config
            .custom_max
            .unwrap_or(max + range / 100.0 * config.space_top);
        Self::new(min, max)
    }
}
