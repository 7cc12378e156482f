//! Viewport state: the content rectangle inside the chart and the current
//! zoom/pan matrix, re-clamped after every gesture.

use glam::{DAffine2, DMat2, DVec2};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Scale and translation of the touch matrix. Skew is never used.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewMatrix {
    pub scale_x: f64,
    pub scale_y: f64,
    pub trans_x: f64,
    pub trans_y: f64,
}

impl Default for ViewMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewMatrix {
    pub const IDENTITY: ViewMatrix = ViewMatrix {
        scale_x: 1.0,
        scale_y: 1.0,
        trans_x: 0.0,
        trans_y: 0.0,
    };

    pub fn new(scale_x: f64, scale_y: f64, trans_x: f64, trans_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            trans_x,
            trans_y,
        }
    }

    /// Scales around the pivot `(px, py)` after the current transform.
    pub fn post_scale(self, sx: f64, sy: f64, px: f64, py: f64) -> Self {
        Self {
            scale_x: self.scale_x * sx,
            scale_y: self.scale_y * sy,
            trans_x: sx * (self.trans_x - px) + px,
            trans_y: sy * (self.trans_y - py) + py,
        }
    }

    pub fn post_translate(self, dx: f64, dy: f64) -> Self {
        Self {
            trans_x: self.trans_x + dx,
            trans_y: self.trans_y + dy,
            ..self
        }
    }

    pub fn to_affine(self) -> DAffine2 {
        DAffine2 {
            matrix2: DMat2::from_diagonal(DVec2::new(self.scale_x, self.scale_y)),
            translation: DVec2::new(self.trans_x, self.trans_y),
        }
    }
}

/// Pixel-space rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}

/// Allowed zoom per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleLimits {
    pub min_scale_x: f64,
    pub max_scale_x: f64,
    pub min_scale_y: f64,
    pub max_scale_y: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min_scale_x: 1.0,
            max_scale_x: f64::MAX,
            min_scale_y: 1.0,
            max_scale_y: f64::MAX,
        }
    }
}

impl ScaleLimits {
    /// Minimum scales below 1 become 1, a maximum of 0 means unbounded.
    pub fn normalized(self) -> Self {
        let max = |v: f64| if v == 0.0 { f64::MAX } else { v };
        Self {
            min_scale_x: self.min_scale_x.max(1.0),
            max_scale_x: max(self.max_scale_x),
            min_scale_y: self.min_scale_y.max(1.0),
            max_scale_y: max(self.max_scale_y),
        }
    }
}

/// Clamps a proposed matrix to the scale limits and keeps the content from
/// being dragged further than the drag offsets allow.
///
/// Applying it to its own output returns the same matrix.
pub fn clamp(
    matrix: ViewMatrix,
    content: &Rect,
    limits: &ScaleLimits,
    drag_offset_x: f64,
    drag_offset_y: f64,
) -> ViewMatrix {
    let scale_x = matrix.scale_x.max(limits.min_scale_x).min(limits.max_scale_x);
    let scale_y = matrix.scale_y.max(limits.min_scale_y).min(limits.max_scale_y);

    let max_trans_x = -content.width() * (scale_x - 1.0);
    let trans_x = matrix
        .trans_x
        .max(max_trans_x - drag_offset_x)
        .min(drag_offset_x);

    let max_trans_y = content.height() * (scale_y - 1.0);
    let trans_y = matrix
        .trans_y
        .min(max_trans_y + drag_offset_y)
        .max(-drag_offset_y);

    // adding +0.0 turns a -0.0 bound into 0.0
    ViewMatrix {
        scale_x,
        scale_y,
        trans_x: trans_x + 0.0,
        trans_y: trans_y + 0.0,
    }
}

/// Viewport settings read from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPortConfig {
    #[serde(flatten)]
    pub limits: ScaleLimits,
    pub drag_offset_x: f64,
    pub drag_offset_y: f64,
}

/// Zoom factor applied by a single zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 1.4;
/// Zoom factor applied by a single zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.7;

/// Owns the chart dimensions, the content rectangle and the touch matrix.
///
/// Gesture helpers (`zoom`, `translate`, ...) return a proposed matrix without
/// touching the handler; [`ViewPortHandler::refresh`] clamps and commits it.
#[derive(Clone, Debug, Default)]
pub struct ViewPortHandler {
    matrix_touch: ViewMatrix,
    content_rect: Rect,
    chart_width: f64,
    chart_height: f64,
    limits: ScaleLimits,
    drag_offset_x: f64,
    drag_offset_y: f64,
}

impl ViewPortHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ViewPortConfig) -> Self {
        Self {
            limits: config.limits.normalized(),
            drag_offset_x: config.drag_offset_x.max(0.0),
            drag_offset_y: config.drag_offset_y.max(0.0),
            ..Self::default()
        }
    }

    /// Resizes the chart, keeping the current offsets around the content.
    pub fn set_chart_dimens(&mut self, width: f64, height: f64) {
        let (left, top, right, bottom) = (
            self.offset_left(),
            self.offset_top(),
            self.offset_right(),
            self.offset_bottom(),
        );
        self.chart_width = width;
        self.chart_height = height;
        self.restrain_view_port(left, top, right, bottom);
    }

    pub fn has_chart_dimens(&self) -> bool {
        self.chart_width > 0.0 && self.chart_height > 0.0
    }

    /// Places the content rectangle `left`/`top`/`right`/`bottom` pixels
    /// inside the chart edges.
    pub fn restrain_view_port(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.content_rect = Rect::new(
            left,
            top,
            self.chart_width - right,
            self.chart_height - bottom,
        );
    }

    pub fn offset_left(&self) -> f64 {
        self.content_rect.left
    }

    pub fn offset_right(&self) -> f64 {
        self.chart_width - self.content_rect.right
    }

    pub fn offset_top(&self) -> f64 {
        self.content_rect.top
    }

    pub fn offset_bottom(&self) -> f64 {
        self.chart_height - self.content_rect.bottom
    }

    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    pub fn content_center(&self) -> (f64, f64) {
        self.content_rect.center()
    }

    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    pub fn matrix_touch(&self) -> ViewMatrix {
        self.matrix_touch
    }

    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    pub fn scale_x(&self) -> f64 {
        self.matrix_touch.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.matrix_touch.scale_y
    }

    pub fn trans_x(&self) -> f64 {
        self.matrix_touch.trans_x
    }

    pub fn trans_y(&self) -> f64 {
        self.matrix_touch.trans_y
    }

    pub fn zoom(&self, scale_x: f64, scale_y: f64, x: f64, y: f64) -> ViewMatrix {
        self.matrix_touch.post_scale(scale_x, scale_y, x, y)
    }

    pub fn zoom_in(&self, x: f64, y: f64) -> ViewMatrix {
        self.zoom(ZOOM_IN_FACTOR, ZOOM_IN_FACTOR, x, y)
    }

    pub fn zoom_out(&self, x: f64, y: f64) -> ViewMatrix {
        self.zoom(ZOOM_OUT_FACTOR, ZOOM_OUT_FACTOR, x, y)
    }

    /// Absolute zoom around the origin, dropping any translation.
    pub fn set_zoom(&self, scale_x: f64, scale_y: f64) -> ViewMatrix {
        ViewMatrix::new(scale_x, scale_y, 0.0, 0.0)
    }

    /// Absolute zoom around the pivot `(x, y)`.
    pub fn set_zoom_at(&self, scale_x: f64, scale_y: f64, x: f64, y: f64) -> ViewMatrix {
        ViewMatrix::IDENTITY.post_scale(scale_x, scale_y, x, y)
    }

    /// Back to scale 1 keeping the current translation; `refresh` pulls the
    /// translation back into range.
    pub fn reset_zoom(&self) -> ViewMatrix {
        ViewMatrix {
            scale_x: 1.0,
            scale_y: 1.0,
            ..self.matrix_touch
        }
    }

    /// Fully zoomed out with no translation. Also resets the minimum scales.
    pub fn fit_screen(&mut self) -> ViewMatrix {
        self.limits.min_scale_x = 1.0;
        self.limits.min_scale_y = 1.0;
        ViewMatrix::IDENTITY
    }

    /// Moves the content so the pixel `(x, y)` lands on the content origin.
    pub fn translate(&self, x: f64, y: f64) -> ViewMatrix {
        let dx = x - self.offset_left();
        let dy = y - self.offset_top();
        self.matrix_touch.post_translate(-dx, -dy)
    }

    /// Translates to `(x, y)` and commits the clamped result.
    pub fn center_view_port(&mut self, x: f64, y: f64) -> ViewMatrix {
        let proposed = self.translate(x, y);
        self.refresh(proposed)
    }

    /// Clamps `matrix` and makes it the current touch matrix.
    pub fn refresh(&mut self, matrix: ViewMatrix) -> ViewMatrix {
        self.matrix_touch = clamp(
            matrix,
            &self.content_rect,
            &self.limits,
            self.drag_offset_x,
            self.drag_offset_y,
        );
        trace!(
            scale_x = self.matrix_touch.scale_x,
            scale_y = self.matrix_touch.scale_y,
            trans_x = self.matrix_touch.trans_x,
            trans_y = self.matrix_touch.trans_y,
            "view port refreshed"
        );
        self.matrix_touch
    }

    fn reclamp(&mut self) {
        let current = self.matrix_touch;
        self.refresh(current);
    }

    pub fn set_minimum_scale_x(&mut self, scale: f64) {
        self.limits.min_scale_x = scale.max(1.0);
        self.reclamp();
    }

    pub fn set_maximum_scale_x(&mut self, scale: f64) {
        self.limits.max_scale_x = if scale == 0.0 { f64::MAX } else { scale };
        self.reclamp();
    }

    pub fn set_min_max_scale_x(&mut self, min: f64, max: f64) {
        self.limits.min_scale_x = min.max(1.0);
        self.limits.max_scale_x = if max == 0.0 { f64::MAX } else { max };
        self.reclamp();
    }

    pub fn set_minimum_scale_y(&mut self, scale: f64) {
        self.limits.min_scale_y = scale.max(1.0);
        self.reclamp();
    }

    pub fn set_maximum_scale_y(&mut self, scale: f64) {
        self.limits.max_scale_y = if scale == 0.0 { f64::MAX } else { scale };
        self.reclamp();
    }

    pub fn set_min_max_scale_y(&mut self, min: f64, max: f64) {
        self.limits.min_scale_y = min.max(1.0);
        self.limits.max_scale_y = if max == 0.0 { f64::MAX } else { max };
        self.reclamp();
    }

    /// How far, in pixels, the content may be dragged past its edges.
    pub fn set_drag_offset_x(&mut self, offset: f64) {
        self.drag_offset_x = offset.max(0.0);
    }

    pub fn set_drag_offset_y(&mut self, offset: f64) {
        self.drag_offset_y = offset.max(0.0);
    }

    pub fn drag_offset_x(&self) -> f64 {
        self.drag_offset_x
    }

    pub fn drag_offset_y(&self) -> f64 {
        self.drag_offset_y
    }

    pub fn has_no_drag_offset(&self) -> bool {
        self.drag_offset_x <= 0.0 && self.drag_offset_y <= 0.0
    }

    pub fn is_in_bounds(&self, x: f64, y: f64) -> bool {
        self.is_in_bounds_x(x) && self.is_in_bounds_y(y)
    }

    pub fn is_in_bounds_x(&self, x: f64) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }

    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }

    // One pixel of tolerance horizontally so edge points are still drawn.
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content_rect.left <= x + 1.0
    }

    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        let x = (x * 100.0).trunc() / 100.0;
        self.content_rect.right >= x - 1.0
    }

    pub fn is_in_bounds_top(&self, y: f64) -> bool {
        self.content_rect.top <= y
    }

    pub fn is_in_bounds_bottom(&self, y: f64) -> bool {
        let y = (y * 100.0).trunc() / 100.0;
        self.content_rect.bottom >= y
    }

    pub fn can_zoom_out_more_x(&self) -> bool {
        self.scale_x() > self.limits.min_scale_x
    }

    pub fn can_zoom_in_more_x(&self) -> bool {
        self.scale_x() < self.limits.max_scale_x
    }

    pub fn can_zoom_out_more_y(&self) -> bool {
        self.scale_y() > self.limits.min_scale_y
    }

    pub fn can_zoom_in_more_y(&self) -> bool {
        self.scale_y() < self.limits.max_scale_y
    }

    pub fn is_fully_zoomed_out(&self) -> bool {
        self.is_fully_zoomed_out_x() && self.is_fully_zoomed_out_y()
    }

    pub fn is_fully_zoomed_out_x(&self) -> bool {
        !(self.scale_x() > self.limits.min_scale_x || self.limits.min_scale_x > 1.0)
    }

    pub fn is_fully_zoomed_out_y(&self) -> bool {
        !(self.scale_y() > self.limits.min_scale_y || self.limits.min_scale_y > 1.0)
    }
}
