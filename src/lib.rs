//! chart_core: the numeric core of an interactive 2D chart.
//!
//! Axis tick generation, data bounds tracking, line simplification, label
//! formatting and viewport/transform math, independent of any drawing surface.

pub mod config;
pub mod data_types;
pub mod decimation;
pub mod error;
pub mod formatter;
pub mod ticks;
pub mod transform;
pub mod view_port;

pub use config::ChartConfig;
pub use data_types::{
    AxisConfig, AxisDependency, AxisRange, AxisTicks, Bounds, ChartBounds, ChartData, DataSet,
    Entry, Rounding,
};
pub use error::{ChartError, ChartResult};
pub use formatter::ValueFormatter;
pub use ticks::compute_axis_values;
pub use transform::Transformer;
pub use view_port::{clamp, Rect, ScaleLimits, ViewMatrix, ViewPortHandler};
