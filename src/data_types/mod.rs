pub mod axis;
pub mod bounds;
pub mod chart_data;
pub mod data;
pub mod data_set;

pub use axis::*;
pub use bounds::*;
pub use chart_data::*;
pub use data::*;
pub use data_set::*;
