//! Viewport transform engine: the visible data-coordinate window and the
//! zoom / pan / reset operations applied to it.
//!
//! Zoom is anchored at a focus point: the focus keeps its relative position
//! inside the window while the window is scaled around it. Panning is not
//! clamped to the data, so the window may move arbitrarily far away from it.

/// Scale step applied per zoom action.
pub const ZOOM_BASE_SCALE: f64 = 1.2;
/// Legend marker row sits this fraction of the data's y-range above its max.
pub const LEGEND_OFFSET_FRACTION: f64 = 0.05;
/// Extra headroom above the legend marker row, as a fraction of the y-range.
pub const LEGEND_HEADROOM_FRACTION: f64 = 0.10;
/// Half-size used to widen a zero-width or zero-height extent.
pub const DEGENERATE_PAD: f64 = 0.5;
/// Bounds of the displayed zoom percentage.
pub const ZOOM_PERCENT_RANGE: (f64, f64) = (10.0, 1000.0);

/// Bounding box of the loaded samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataExtent {
    /// Extent used when there is no data to bound.
    pub const UNIT: DataExtent = DataExtent {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };

    /// Bounding box of the finite points, or `None` if there are none.
    pub fn from_points(times: &[f64], values: &[f64]) -> Option<Self> {
        let mut extent: Option<DataExtent> = None;
        for (&x, &y) in times.iter().zip(values) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let e = extent.get_or_insert(DataExtent {
                x_min: x,
                x_max: x,
                y_min: y,
                y_max: y,
            });
            e.x_min = e.x_min.min(x);
            e.x_max = e.x_max.max(x);
            e.y_min = e.y_min.min(y);
            e.y_max = e.y_max.max(y);
        }
        extent
    }

    /// Vertical position of the legend markers.
    pub fn legend_row(&self) -> f64 {
        let (lo, hi) = widen(self.y_min, self.y_max);
        hi + (hi - lo) * LEGEND_OFFSET_FRACTION
    }
}

/// The visible rectangle in data coordinates.
///
/// Always satisfies `x_min < x_max` and `y_min < y_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Window covering `extent` plus the legend reservation above the data.
    pub fn for_extent(extent: &DataExtent) -> Self {
        let (x_min, x_max) = widen(extent.x_min, extent.x_max);
        let (y_min, y_max) = widen(extent.y_min, extent.y_max);
        let y_range = y_max - y_min;
        let legend_row = y_max + y_range * LEGEND_OFFSET_FRACTION;
        Viewport {
            x_min,
            x_max,
            y_min,
            y_max: legend_row + y_range * LEGEND_HEADROOM_FRACTION,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        ]
    }

    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }

    /// Window scaled by `scale` around `focus`, keeping the focus at the same
    /// relative position.
    pub fn zoomed(&self, focus: [f64; 2], scale: f64) -> Self {
        let (x_min, x_max) = zoom_axis(self.x_min, self.x_max, focus[0], scale);
        let (y_min, y_max) = zoom_axis(self.y_min, self.y_max, focus[1], scale);
        Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn translated(&self, delta: [f64; 2]) -> Self {
        Viewport {
            x_min: self.x_min + delta[0],
            x_max: self.x_max + delta[0],
            y_min: self.y_min + delta[1],
            y_max: self.y_max + delta[1],
        }
    }
}

fn zoom_axis(min: f64, max: f64, focus: f64, scale: f64) -> (f64, f64) {
    let new_size = (max - min) * scale;
    let rel = (max - focus) / (max - min);
    (focus - new_size * (1.0 - rel), focus + new_size * rel)
}

fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if lo < hi {
        (lo, hi)
    } else {
        (lo - DEGENERATE_PAD, hi + DEGENERATE_PAD)
    }
}

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Factor applied to the window size.
    pub fn scale_factor(&self) -> f64 {
        match self {
            ZoomDirection::In => 1.0 / ZOOM_BASE_SCALE,
            ZoomDirection::Out => ZOOM_BASE_SCALE,
        }
    }

    /// Scroll-up/forward zooms in, scroll-down/back zooms out.
    /// A zero delta has no direction.
    pub fn from_scroll(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(ZoomDirection::In)
        } else if delta < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Owns the single active viewport of the loaded signal.
///
/// Every operation is a silent no-op until [`initialize`](Self::initialize)
/// has been called.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    current: Option<Viewport>,
    initial: Option<Viewport>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window to the data extent plus legend headroom. Replaces any
    /// previous viewport.
    pub fn initialize(&mut self, extent: DataExtent) {
        let vp = Viewport::for_extent(&extent);
        log::debug!("viewport initialized to {:?}", vp);
        self.initial = Some(vp);
        self.current = Some(vp);
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.current
    }

    pub fn initial_viewport(&self) -> Option<Viewport> {
        self.initial
    }

    /// Zoom keeping `focus` at the same relative position in the window.
    /// Returns `true` if the viewport changed.
    pub fn zoom_at(&mut self, focus: [f64; 2], direction: ZoomDirection) -> bool {
        self.zoom_with_factor(focus, direction.scale_factor())
    }

    /// Zoom with an explicit scale factor (`< 1` zooms in).
    pub fn zoom_with_factor(&mut self, focus: [f64; 2], scale: f64) -> bool {
        let Some(vp) = self.current else {
            return false;
        };
        if !focus[0].is_finite() || !focus[1].is_finite() || !(scale.is_finite() && scale > 0.0) {
            log::debug!("ignoring zoom with focus {:?} and scale {}", focus, scale);
            return false;
        }
        self.apply(vp.zoomed(focus, scale))
    }

    /// Zoom around the current window center.
    pub fn zoom_centered(&mut self, direction: ZoomDirection) -> bool {
        match self.current {
            Some(vp) => self.zoom_at(vp.center(), direction),
            None => false,
        }
    }

    /// Translate the window by `delta`. Not clamped to the data.
    pub fn pan(&mut self, delta: [f64; 2]) -> bool {
        let Some(vp) = self.current else {
            return false;
        };
        if !delta[0].is_finite() || !delta[1].is_finite() {
            log::debug!("ignoring non-finite pan {:?}", delta);
            return false;
        }
        self.apply(vp.translated(delta))
    }

    /// Restore the window computed by the last `initialize`.
    pub fn reset(&mut self) -> bool {
        match self.initial {
            Some(vp) => {
                self.current = Some(vp);
                true
            }
            None => false,
        }
    }

    /// `100 * initial_width / current_width`, clamped for display.
    pub fn zoom_percent(&self) -> Option<f64> {
        let (initial, current) = (self.initial?, self.current?);
        let pct = 100.0 * initial.width() / current.width();
        Some(pct.clamp(ZOOM_PERCENT_RANGE.0, ZOOM_PERCENT_RANGE.1))
    }

    fn apply(&mut self, next: Viewport) -> bool {
        if !next.is_valid() {
            log::debug!("rejecting degenerate viewport {:?}", next);
            return false;
        }
        self.current = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_extent_is_widened() {
        let vp = Viewport::for_extent(&DataExtent {
            x_min: 3.0,
            x_max: 3.0,
            y_min: 1.0,
            y_max: 1.0,
        });
        assert!(vp.is_valid());
        assert_eq!((vp.x_min, vp.x_max), (2.5, 3.5));
    }

    #[test]
    fn scroll_direction() {
        assert_eq!(ZoomDirection::from_scroll(1.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_scroll(-0.5), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_scroll(0.0), None);
    }

    #[test]
    fn extent_skips_non_finite() {
        let e = DataExtent::from_points(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 4.0]).unwrap();
        assert_eq!((e.x_min, e.x_max, e.y_min, e.y_max), (0.0, 2.0, 1.0, 4.0));
        assert!(DataExtent::from_points(&[], &[]).is_none());
    }
}
