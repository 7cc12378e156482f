pub mod douglas_peucker;

pub use douglas_peucker::{reduce_points, reduce_with_douglas_peucker};
