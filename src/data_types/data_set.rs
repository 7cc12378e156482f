use serde::{Deserialize, Serialize};
use tracing::trace;

use super::axis::AxisDependency;
use super::bounds::Bounds;
use super::data::{Entry, Rounding};
use crate::error::{ChartError, ChartResult};

/// One series of entries ordered by x.
///
/// The cached [`Bounds`] are kept in sync by every mutating method: appends
/// widen them in place, removals trigger a full rescan.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "DataSetRepr")]
pub struct DataSet {
    pub label: String,
    pub axis_dependency: AxisDependency,
    entries: Vec<Entry>,
    #[serde(skip)]
    bounds: Bounds,
}

#[derive(Deserialize)]
struct DataSetRepr {
    #[serde(default)]
    label: String,
    #[serde(default)]
    axis_dependency: AxisDependency,
    entries: Vec<Entry>,
}

impl From<DataSetRepr> for DataSet {
    fn from(repr: DataSetRepr) -> Self {
        DataSet::new(repr.entries, repr.label).with_axis_dependency(repr.axis_dependency)
    }
}

impl DataSet {
    pub fn new(entries: Vec<Entry>, label: impl Into<String>) -> Self {
        let mut set = Self {
            label: label.into(),
            axis_dependency: AxisDependency::Left,
            entries,
            bounds: Bounds::EMPTY,
        };
        set.calc_min_max();
        set
    }

    pub fn with_axis_dependency(mut self, axis: AxisDependency) -> Self {
        self.axis_dependency = axis;
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn x_min(&self) -> f64 {
        self.bounds.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.bounds.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.bounds.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.bounds.y_max
    }

    /// Recomputes the cached bounds from scratch.
    pub fn calc_min_max(&mut self) {
        self.bounds = Bounds::scan(&self.entries);
        trace!(label = %self.label, count = self.entries.len(), "data set bounds recomputed");
    }

    /// Y range of the entries visible between `from_x` and `to_x`, widened by
    /// one entry on each side so a line reaching into the window is covered.
    pub fn calc_min_max_y(&self, from_x: f64, to_x: f64) -> (f64, f64) {
        let mut bounds = Bounds::EMPTY;
        let (Some(from), Some(to)) = (
            self.entry_index(from_x, None, Rounding::Down),
            self.entry_index(to_x, None, Rounding::Up),
        ) else {
            return (bounds.y_min, bounds.y_max);
        };
        if to < from {
            return (bounds.y_min, bounds.y_max);
        }
        for e in &self.entries[from..=to] {
            bounds.include_y(e.y);
        }
        (bounds.y_min, bounds.y_max)
    }

    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.calc_min_max();
    }

    /// Appends an entry. The caller keeps the set ordered by x.
    pub fn add_entry(&mut self, entry: Entry) {
        self.bounds.include(&entry);
        self.entries.push(entry);
    }

    /// Inserts an entry at its x position, after any entries with the same x.
    pub fn add_entry_ordered(&mut self, entry: Entry) {
        self.bounds.include(&entry);
        let at = self.entries.partition_point(|e| e.x <= entry.x);
        self.entries.insert(at, entry);
    }

    pub fn remove_entry(&mut self, index: usize) -> ChartResult<Entry> {
        if index >= self.entries.len() {
            return Err(ChartError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        self.calc_min_max();
        Ok(removed)
    }

    /// Removes the entry closest to `x`.
    pub fn remove_entry_by_x(&mut self, x: f64) -> Option<Entry> {
        let index = self.entry_index(x, None, Rounding::Closest)?;
        self.remove_entry(index).ok()
    }

    pub fn remove_first(&mut self) -> Option<Entry> {
        if self.entries.is_empty() {
            return None;
        }
        self.remove_entry(0).ok()
    }

    pub fn remove_last(&mut self) -> Option<Entry> {
        let removed = self.entries.pop()?;
        self.calc_min_max();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.bounds = Bounds::EMPTY;
    }

    /// Binary search for the entry index nearest to `x`.
    ///
    /// With `Rounding::Up`/`Down` the result moves to the neighbour on that
    /// side when the closest hit lies on the other side of `x`. When
    /// `closest_to_y` is given, entries sharing the found x are disambiguated
    /// by their distance to that y.
    pub fn entry_index(
        &self,
        x: f64,
        closest_to_y: Option<f64>,
        rounding: Rounding,
    ) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        let mut low = 0;
        let mut high = self.entries.len() - 1;
        let mut closest = high;

        while low < high {
            let m = (low + high) / 2;
            let d1 = self.entries[m].x - x;
            let d2 = self.entries[m + 1].x - x;
            let (ad1, ad2) = (d1.abs(), d2.abs());

            if ad2 < ad1 {
                low = m + 1;
            } else if ad1 < ad2 {
                high = m;
            } else if d1 >= 0.0 {
                // equal distance on both sides
                high = m;
            } else {
                low = m + 1;
            }
            closest = high;
        }

        let closest_x = self.entries[closest].x;
        match rounding {
            Rounding::Up => {
                if closest_x < x && closest < self.entries.len() - 1 {
                    closest += 1;
                }
            }
            Rounding::Down => {
                if closest_x > x && closest > 0 {
                    closest -= 1;
                }
            }
            Rounding::Closest => {}
        }

        if let Some(target_y) = closest_to_y.filter(|y| !y.is_nan()) {
            let closest_x = self.entries[closest].x;
            while closest > 0 && self.entries[closest - 1].x == closest_x {
                closest -= 1;
            }
            let mut best = closest;
            let mut best_dist = (self.entries[closest].y - target_y).abs();
            for (i, e) in self.entries.iter().enumerate().skip(closest + 1) {
                if e.x != closest_x {
                    break;
                }
                let dist = (e.y - target_y).abs();
                if dist <= best_dist {
                    best_dist = dist;
                    best = i;
                }
            }
            closest = best;
        }

        Some(closest)
    }

    pub fn entry_for_x(
        &self,
        x: f64,
        closest_to_y: Option<f64>,
        rounding: Rounding,
    ) -> Option<&Entry> {
        self.entry_index(x, closest_to_y, rounding)
            .and_then(|i| self.entries.get(i))
    }

    /// All entries whose x equals `x` exactly.
    pub fn entries_for_x(&self, x: f64) -> &[Entry] {
        let start = self.entries.partition_point(|e| e.x < x);
        let end = self.entries.partition_point(|e| e.x <= x);
        &self.entries[start..end]
    }
}
