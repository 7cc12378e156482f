//! Transformer for coordinate projection between data values and pixels.
//!
//! A value goes through three matrices: value → content pixels (scale to the
//! content rect, y flipped), the viewport touch matrix (zoom/pan), and the
//! offset of the content rect inside the chart.

use glam::{DAffine2, DVec2};
use rayon::prelude::*;

use crate::error::{ChartError, ChartResult};
use crate::view_port::ViewPortHandler;

/// Buffers longer than this (in points) are mapped in parallel.
const PAR_MAP_THRESHOLD: usize = 32 * 1024;

#[derive(Clone, Debug)]
pub struct Transformer {
    value_to_px: DAffine2,
    offset: DAffine2,
}

impl Default for Transformer {
    fn default() -> Self {
        Self {
            value_to_px: DAffine2::IDENTITY,
            offset: DAffine2::IDENTITY,
        }
    }
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the data window starting at `(x_chart_min, y_chart_min)` and
    /// spanning `delta_x` by `delta_y` onto the content rectangle.
    pub fn prepare_matrix_value_px(
        &mut self,
        view_port: &ViewPortHandler,
        x_chart_min: f64,
        delta_x: f64,
        delta_y: f64,
        y_chart_min: f64,
    ) {
        let content = view_port.content_rect();
        let mut scale_x = content.width() / delta_x;
        let mut scale_y = content.height() / delta_y;
        if scale_x.is_infinite() {
            scale_x = 0.0;
        }
        if scale_y.is_infinite() {
            scale_y = 0.0;
        }

        self.value_to_px = DAffine2::from_scale(DVec2::new(scale_x, -scale_y))
            * DAffine2::from_translation(DVec2::new(-x_chart_min, -y_chart_min));
    }

    /// Moves the content origin to its place inside the chart. With
    /// `inverted` the y axis grows downwards.
    pub fn prepare_matrix_offset(&mut self, view_port: &ViewPortHandler, inverted: bool) {
        self.offset = if inverted {
            DAffine2::from_scale(DVec2::new(1.0, -1.0))
                * DAffine2::from_translation(DVec2::new(
                    view_port.offset_left(),
                    -view_port.offset_top(),
                ))
        } else {
            DAffine2::from_translation(DVec2::new(
                view_port.offset_left(),
                view_port.chart_height() - view_port.offset_bottom(),
            ))
        };
    }

    /// The full value → pixel transform for the current viewport.
    pub fn value_to_pixel_matrix(&self, view_port: &ViewPortHandler) -> DAffine2 {
        self.offset * view_port.matrix_touch().to_affine() * self.value_to_px
    }

    pub fn pixel_to_value_matrix(&self, view_port: &ViewPortHandler) -> ChartResult<DAffine2> {
        let m = self.value_to_pixel_matrix(view_port);
        let det = m.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(ChartError::NonInvertible);
        }
        Ok(m.inverse())
    }

    /// Converts a flat `[x0, y0, x1, y1, ...]` buffer of values to pixels in place.
    pub fn points_to_pixel(&self, view_port: &ViewPortHandler, pts: &mut [f64]) -> ChartResult<()> {
        let m = self.value_to_pixel_matrix(view_port);
        map_points(&m, pts)
    }

    /// Converts a flat buffer of pixels back to values in place.
    pub fn pixels_to_value(
        &self,
        view_port: &ViewPortHandler,
        pixels: &mut [f64],
    ) -> ChartResult<()> {
        let m = self.pixel_to_value_matrix(view_port)?;
        map_points(&m, pixels)
    }

    pub fn pixel_for_values(&self, view_port: &ViewPortHandler, x: f64, y: f64) -> (f64, f64) {
        let p = self
            .value_to_pixel_matrix(view_port)
            .transform_point2(DVec2::new(x, y));
        (p.x, p.y)
    }

    /// Data value under the touch point `(x, y)`.
    pub fn values_by_touch_point(
        &self,
        view_port: &ViewPortHandler,
        x: f64,
        y: f64,
    ) -> ChartResult<(f64, f64)> {
        let p = self
            .pixel_to_value_matrix(view_port)?
            .transform_point2(DVec2::new(x, y));
        Ok((p.x, p.y))
    }

    /// Visible x extent. Falls back to the full data range while the chart is
    /// fully zoomed out or too narrow to matter.
    pub fn visible_x_range(
        &self,
        view_port: &ViewPortHandler,
        data_min: f64,
        data_max: f64,
        inverted: bool,
    ) -> (f64, f64) {
        let content = view_port.content_rect();
        if content.width() <= 10.0 || view_port.is_fully_zoomed_out_x() {
            return (data_min, data_max);
        }
        let left = self.values_by_touch_point(view_port, content.left, content.top);
        let right = self.values_by_touch_point(view_port, content.right, content.top);
        match (left, right) {
            (Ok(l), Ok(r)) if !inverted => (l.0, r.0),
            (Ok(l), Ok(r)) => (r.0, l.0),
            _ => (data_min, data_max),
        }
    }

    /// Visible y extent, see [`Transformer::visible_x_range`].
    pub fn visible_y_range(
        &self,
        view_port: &ViewPortHandler,
        data_min: f64,
        data_max: f64,
        inverted: bool,
    ) -> (f64, f64) {
        let content = view_port.content_rect();
        if content.width() <= 10.0 || view_port.is_fully_zoomed_out_y() {
            return (data_min, data_max);
        }
        let top = self.values_by_touch_point(view_port, content.left, content.top);
        let bottom = self.values_by_touch_point(view_port, content.left, content.bottom);
        match (top, bottom) {
            (Ok(t), Ok(b)) if !inverted => (b.1, t.1),
            (Ok(t), Ok(b)) => (t.1, b.1),
            _ => (data_min, data_max),
        }
    }
}

fn map_points(m: &DAffine2, pts: &mut [f64]) -> ChartResult<()> {
    let len = pts.len();
    let pairs: &mut [[f64; 2]] =
        bytemuck::try_cast_slice_mut(pts).map_err(|_| ChartError::OddBufferLength(len))?;

    let map = |p: &mut [f64; 2]| {
        *p = m.transform_point2(DVec2::from_array(*p)).to_array();
    };
    if pairs.len() >= PAR_MAP_THRESHOLD {
        pairs.par_iter_mut().for_each(map);
    } else {
        pairs.iter_mut().for_each(map);
    }
    Ok(())
}
