use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Simplifies a polyline stored as `[x0, y0, x1, y1, ...]`.
///
/// Points closer than `epsilon` to the segment joining their kept neighbours
/// are dropped. The first and last point are always kept.
pub fn reduce_with_douglas_peucker(points: &[f64], epsilon: f64) -> ChartResult<Vec<f64>> {
    let pairs: &[[f64; 2]] =
        bytemuck::try_cast_slice(points).map_err(|_| ChartError::OddBufferLength(points.len()))?;

    let reduced = reduce_points(pairs, epsilon);
    trace!(
        input = pairs.len(),
        output = reduced.len(),
        epsilon,
        "douglas-peucker reduction"
    );
    Ok(bytemuck::cast_slice::<[f64; 2], f64>(&reduced).to_vec())
}

/// Same as [`reduce_with_douglas_peucker`] over point pairs.
pub fn reduce_points(points: &[[f64; 2]], epsilon: f64) -> Vec<[f64; 2]> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0usize, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let line = Segment::new(points[start], points[end]);
        let mut greatest_index = start;
        let mut greatest_distance = 0.0;
        for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
            let distance = line.distance(*p);
            // strict: on ties the first index wins
            if distance > greatest_distance {
                greatest_distance = distance;
                greatest_index = i;
            }
        }

        if greatest_index > start && greatest_distance > epsilon {
            keep[greatest_index] = true;
            stack.push((greatest_index, end));
            stack.push((start, greatest_index));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

struct Segment {
    start: [f64; 2],
    dx: f64,
    dy: f64,
    cross: f64,
    length: f64,
}

impl Segment {
    fn new(start: [f64; 2], end: [f64; 2]) -> Self {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];
        Self {
            start,
            dx,
            dy,
            cross: end[0] * start[1] - end[1] * start[0],
            length: (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Perpendicular distance of `p` to the line through the segment.
    fn distance(&self, p: [f64; 2]) -> f64 {
        if self.length == 0.0 {
            let (ex, ey) = (p[0] - self.start[0], p[1] - self.start[1]);
            return (ex * ex + ey * ey).sqrt();
        }
        (self.dy * p[0] - self.dx * p[1] + self.cross).abs() / self.length
    }
}
