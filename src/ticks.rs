//! Nice-interval axis tick generation.
//!
//! Given the visible extent of an axis and the requested label count, picks an
//! interval with a single significant digit and lays ticks on the multiples of
//! that interval inside the extent.

use tracing::{debug, trace};

use crate::data_types::{AxisConfig, AxisTicks};

/// Computes the tick positions for the range `[min, max]`.
///
/// Degenerate input (no labels requested, a zero, negative, infinite or NaN
/// range) yields empty ticks instead of failing.
pub fn compute_axis_values(min: f64, max: f64, config: &AxisConfig) -> AxisTicks {
    let label_count = config.label_count;
    let range = (max - min).abs();

    if label_count == 0 || range.is_nan() || range <= 0.0 || range.is_infinite() {
        trace!(min, max, label_count, "degenerate axis range, no ticks");
        return AxisTicks::empty();
    }

    let raw_interval = range / label_count as f64;
    let mut interval = round_to_next_significant(raw_interval);

    if config.granularity_enabled && interval < config.granularity {
        interval = config.granularity;
    }

    // Avoid intervals such as 0.9 or 90 by moving to the next power of ten.
    let magnitude = round_to_next_significant(10f64.powi(interval.log10().trunc() as i32));
    if magnitude > 0.0 {
        let sig_digit = (interval / magnitude).trunc();
        if sig_digit > 5.0 {
            let bumped = (10.0 * magnitude).floor();
            if bumped != 0.0 {
                interval = bumped;
            }
        }
    }

    let mut entries = if config.force_label_count {
        interval = if label_count > 1 {
            range / (label_count - 1) as f64
        } else {
            range
        };
        if config.granularity_enabled && interval < config.granularity {
            interval = config.granularity;
        }
        let mut v = min;
        let mut entries = Vec::with_capacity(label_count);
        for _ in 0..label_count {
            entries.push(v);
            v += interval;
        }
        entries
    } else {
        match grid_entries(min, max, interval, config.center_labels) {
            Some(entries) => entries,
            None => {
                trace!(min, max, interval, "interval below float resolution, no ticks");
                return AxisTicks::empty();
            }
        }
    };

    for v in entries.iter_mut() {
        // -0.0 == 0.0, store the positive zero
        if *v == 0.0 {
            *v = 0.0;
        }
    }

    let decimals = decimals_for(interval);

    let centered_entries = if config.center_labels {
        let offset = interval / 2.0;
        entries.iter().map(|v| v + offset).collect()
    } else {
        Vec::new()
    };

    debug!(
        min,
        max,
        interval,
        count = entries.len(),
        decimals,
        "axis values computed"
    );

    AxisTicks {
        entries,
        centered_entries,
        decimals,
        interval,
    }
}

/// Multiples of `interval` between `min` and `max`.
///
/// `None` when stepping by `interval` cannot move past a value of this
/// magnitude, e.g. a window of a few units around 1e20.
fn grid_entries(min: f64, max: f64, interval: f64, center_labels: bool) -> Option<Vec<f64>> {
    let mut n: usize = if center_labels { 1 } else { 0 };

    let mut first = if interval == 0.0 {
        0.0
    } else {
        (min / interval).ceil() * interval
    };
    if center_labels {
        first -= interval;
    }

    let last = if interval == 0.0 {
        0.0
    } else {
        next_up((max / interval).floor() * interval)
    };

    if interval != 0.0 && last != first {
        let mut f = first;
        while f <= last {
            let next = f + interval;
            if next == f {
                return None;
            }
            n += 1;
            f = next;
        }
    } else if last == first && n == 0 {
        n = 1;
    }

    let mut entries = Vec::with_capacity(n);
    let mut f = first;
    for _ in 0..n {
        entries.push(f);
        f += interval;
    }
    Some(entries)
}

/// Rounds `number` to one significant digit, e.g. 16.7 → 20, 0.034 → 0.03.
///
/// Returns 0 for zero, NaN and infinite input.
pub fn round_to_next_significant(number: f64) -> f64 {
    if !number.is_finite() || number == 0.0 {
        return 0.0;
    }

    let d = number.abs().log10().ceil();
    let pw = 1 - d as i32;
    if pw >= 0 {
        let magnitude = 10f64.powi(pw);
        (number * magnitude).round() / magnitude
    } else {
        // dividing by an exact power of ten keeps 0.03 as 0.03
        let magnitude = 10f64.powi(-pw);
        (number / magnitude).round() * magnitude
    }
}

/// The smallest double strictly greater than `d`.
pub fn next_up(d: f64) -> f64 {
    if d.is_nan() || d == f64::INFINITY {
        return d;
    }
    let d = d + 0.0;
    let bits = d.to_bits();
    if d >= 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Number of decimal digits needed to tell ticks `interval` apart.
pub fn decimals_for(interval: f64) -> usize {
    if interval > 0.0 && interval < 1.0 && interval.is_finite() {
        (-interval.log10()).ceil() as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_one_digit() {
        assert_eq!(round_to_next_significant(16.666), 20.0);
        assert_eq!(round_to_next_significant(0.034), 0.03);
        assert_eq!(round_to_next_significant(150.0), 200.0);
        assert_eq!(round_to_next_significant(10.0), 10.0);
        assert_eq!(round_to_next_significant(0.0), 0.0);
        assert_eq!(round_to_next_significant(f64::NAN), 0.0);
    }

    #[test]
    fn next_up_moves_one_ulp() {
        assert!(next_up(100.0) > 100.0);
        assert_eq!(next_up(-0.0), f64::from_bits(1));
        assert!(next_up(-1.0) > -1.0);
        assert_eq!(next_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn decimals_follow_interval() {
        assert_eq!(decimals_for(20.0), 0);
        assert_eq!(decimals_for(1.0), 0);
        assert_eq!(decimals_for(0.5), 1);
        assert_eq!(decimals_for(0.1), 1);
        assert_eq!(decimals_for(0.02), 2);
    }
}
