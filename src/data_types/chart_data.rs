use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::axis::AxisDependency;
use super::bounds::Bounds;
use super::data::Entry;
use super::data_set::DataSet;
use crate::error::{ChartError, ChartResult};

/// Bounds of a whole chart, with the y extents split per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub all: Bounds,
    pub left: Bounds,
    pub right: Bounds,
}

impl ChartBounds {
    fn add(&mut self, set: Bounds, axis: AxisDependency) {
        self.all = self.all.union(&set);
        match axis {
            AxisDependency::Left => self.left = self.left.union(&set),
            AxisDependency::Right => self.right = self.right.union(&set),
        }
    }

    fn merge(mut self, other: ChartBounds) -> ChartBounds {
        self.all = self.all.union(&other.all);
        self.left = self.left.union(&other.left);
        self.right = self.right.union(&other.right);
        self
    }

    /// Minimum y for `axis`; an axis with no data falls back to the other one.
    pub fn y_min(&self, axis: AxisDependency) -> f64 {
        match axis {
            AxisDependency::Left if self.left.y_min == f64::INFINITY => self.right.y_min,
            AxisDependency::Left => self.left.y_min,
            AxisDependency::Right if self.right.y_min == f64::INFINITY => self.left.y_min,
            AxisDependency::Right => self.right.y_min,
        }
    }

    pub fn y_max(&self, axis: AxisDependency) -> f64 {
        match axis {
            AxisDependency::Left if self.left.y_max == f64::NEG_INFINITY => self.right.y_max,
            AxisDependency::Left => self.left.y_max,
            AxisDependency::Right if self.right.y_max == f64::NEG_INFINITY => self.left.y_max,
            AxisDependency::Right => self.right.y_max,
        }
    }
}

/// All data sets of one chart.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "ChartDataRepr")]
pub struct ChartData {
    data_sets: Vec<DataSet>,
    #[serde(skip)]
    bounds: ChartBounds,
}

#[derive(Deserialize)]
struct ChartDataRepr {
    #[serde(default)]
    data_sets: Vec<DataSet>,
}

impl From<ChartDataRepr> for ChartData {
    fn from(repr: ChartDataRepr) -> Self {
        ChartData::new(repr.data_sets)
    }
}

impl ChartData {
    pub fn new(data_sets: Vec<DataSet>) -> Self {
        let mut data = Self {
            data_sets,
            bounds: ChartBounds::default(),
        };
        data.calc_min_max();
        data
    }

    pub fn data_sets(&self) -> &[DataSet] {
        &self.data_sets
    }

    pub fn data_set(&self, index: usize) -> Option<&DataSet> {
        self.data_sets.get(index)
    }

    pub fn data_set_by_label(&self, label: &str) -> Option<&DataSet> {
        self.data_sets.iter().find(|s| s.label == label)
    }

    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    pub fn bounds(&self) -> ChartBounds {
        self.bounds
    }

    pub fn x_min(&self) -> f64 {
        self.bounds.all.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.bounds.all.x_max
    }

    pub fn y_min(&self, axis: AxisDependency) -> f64 {
        self.bounds.y_min(axis)
    }

    pub fn y_max(&self, axis: AxisDependency) -> f64 {
        self.bounds.y_max(axis)
    }

    /// Rebuilds the union of all data set bounds.
    pub fn calc_min_max(&mut self) {
        self.bounds = self
            .data_sets
            .par_iter()
            .map(|s| {
                let mut b = ChartBounds::default();
                b.add(s.bounds(), s.axis_dependency);
                b
            })
            .reduce(ChartBounds::default, ChartBounds::merge);
        debug!(
            sets = self.data_sets.len(),
            x_min = self.bounds.all.x_min,
            x_max = self.bounds.all.x_max,
            "chart bounds recomputed"
        );
    }

    /// Bounds restricted to the entries visible between `from_x` and `to_x`.
    /// Used to auto-scale the y axes to the current viewport.
    pub fn calc_min_max_y(&self, from_x: f64, to_x: f64) -> ChartBounds {
        self.data_sets
            .par_iter()
            .map(|s| {
                let (y_min, y_max) = s.calc_min_max_y(from_x, to_x);
                let set_bounds = Bounds {
                    x_min: s.x_min(),
                    x_max: s.x_max(),
                    y_min,
                    y_max,
                };
                let mut b = ChartBounds::default();
                b.add(set_bounds, s.axis_dependency);
                b
            })
            .reduce(ChartBounds::default, ChartBounds::merge)
    }

    pub fn add_data_set(&mut self, set: DataSet) {
        self.bounds.add(set.bounds(), set.axis_dependency);
        self.data_sets.push(set);
    }

    pub fn remove_data_set(&mut self, index: usize) -> ChartResult<DataSet> {
        if index >= self.data_sets.len() {
            return Err(ChartError::IndexOutOfRange {
                index,
                len: self.data_sets.len(),
            });
        }
        let removed = self.data_sets.remove(index);
        self.calc_min_max();
        Ok(removed)
    }

    /// Appends `entry` to the data set at `set_index`.
    pub fn add_entry(&mut self, entry: Entry, set_index: usize) -> ChartResult<()> {
        let len = self.data_sets.len();
        let set = self
            .data_sets
            .get_mut(set_index)
            .ok_or(ChartError::IndexOutOfRange { index: set_index, len })?;
        let mut entry_bounds = Bounds::EMPTY;
        entry_bounds.include(&entry);
        set.add_entry(entry);
        let axis = set.axis_dependency;
        self.bounds.add(entry_bounds, axis);
        Ok(())
    }

    pub fn remove_entry(&mut self, set_index: usize, entry_index: usize) -> ChartResult<Entry> {
        let len = self.data_sets.len();
        let set = self
            .data_sets
            .get_mut(set_index)
            .ok_or(ChartError::IndexOutOfRange { index: set_index, len })?;
        let removed = set.remove_entry(entry_index)?;
        self.calc_min_max();
        Ok(removed)
    }

    pub fn clear_values(&mut self) {
        self.data_sets.clear();
        self.bounds = ChartBounds::default();
    }

    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(DataSet::len).sum()
    }

    pub fn max_entry_count_set(&self) -> Option<&DataSet> {
        // first set wins on ties
        self.data_sets
            .iter()
            .fold(None, |best: Option<&DataSet>, s| match best {
                Some(b) if b.len() >= s.len() => Some(b),
                _ => Some(s),
            })
    }

    pub fn first_left(&self) -> Option<&DataSet> {
        self.data_sets
            .iter()
            .find(|s| s.axis_dependency == AxisDependency::Left)
    }

    pub fn first_right(&self) -> Option<&DataSet> {
        self.data_sets
            .iter()
            .find(|s| s.axis_dependency == AxisDependency::Right)
    }
}
