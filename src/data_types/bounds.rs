use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::data::Entry;

/// Above this many entries the scan is split across the rayon pool.
const PAR_SCAN_THRESHOLD: usize = 64 * 1024;
const PAR_CHUNK: usize = 8 * 1024;

/// Running min/max of x and y.
///
/// The empty value uses `+inf` for the minima and `-inf` for the maxima, so
/// a union with an empty tracker leaves the other side untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    pub fn include(&mut self, entry: &Entry) {
        self.include_x(entry.x);
        self.include_y(entry.y);
    }

    pub fn include_x(&mut self, x: f64) {
        if x < self.x_min {
            self.x_min = x;
        }
        if x > self.x_max {
            self.x_max = x;
        }
    }

    pub fn include_y(&mut self, y: f64) {
        if y < self.y_min {
            self.y_min = y;
        }
        if y > self.y_max {
            self.y_max = y;
        }
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Full linear scan of `entries`.
    pub fn scan(entries: &[Entry]) -> Bounds {
        if entries.len() >= PAR_SCAN_THRESHOLD {
            return entries
                .par_chunks(PAR_CHUNK)
                .map(Self::scan_seq)
                .reduce(|| Bounds::EMPTY, |a, b| a.union(&b));
        }
        Self::scan_seq(entries)
    }

    fn scan_seq(entries: &[Entry]) -> Bounds {
        let mut bounds = Bounds::EMPTY;
        for e in entries {
            bounds.include(e);
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
