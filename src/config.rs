//! Chart settings loaded from JSON.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_types::AxisConfig;
use crate::formatter::ValueFormatter;
use crate::view_port::{ViewPortConfig, ViewPortHandler};

/// Everything the numeric core needs to lay out one chart.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub x_axis: AxisConfig,
    pub left_axis: AxisConfig,
    pub right_axis: AxisConfig,
    pub view_port: ViewPortConfig,
    pub formatter: ValueFormatter,
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: ChartConfig =
            serde_json::from_str(json).wrap_err("failed to parse chart configuration")?;
        config.normalize();
        debug!(?config, "chart configuration loaded");
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read chart configuration {}", path.display()))?;
        Self::from_json_str(&json).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize chart configuration")
    }

    /// A viewport handler with this configuration's limits and drag offsets.
    pub fn view_port_handler(&self) -> ViewPortHandler {
        ViewPortHandler::from_config(&self.view_port)
    }

    fn normalize(&mut self) {
        self.x_axis.normalize();
        self.left_axis.normalize();
        self.right_axis.normalize();
        self.view_port.limits = self.view_port.limits.normalized();
        self.view_port.drag_offset_x = self.view_port.drag_offset_x.max(0.0);
        self.view_port.drag_offset_y = self.view_port.drag_offset_y.max(0.0);
    }
}
