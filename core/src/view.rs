//! Viewport state and the screen/plot coordinate transform.

use glam::Vec2;

use crate::{MAX_ZOOM, MIN_ZOOM, PLOT_MARGIN};

/// Zoom factor and pan offset applied when presenting the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    zoom: f32,
    offset: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewState {
    /// Creates a viewport, clamping the zoom into the supported range.
    ///
    /// Non-finite components fall back to the defaults.
    #[must_use]
    pub fn new(zoom: f32, offset: Vec2) -> Self {
        let offset = if offset.is_finite() {
            offset
        } else {
            Vec2::ZERO
        };
        Self {
            zoom: Self::clamp_zoom(zoom),
            offset,
        }
    }

    /// Clamps a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn clamp_zoom(zoom: f32) -> f32 {
        if zoom.is_nan() {
            return 1.0;
        }
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }

    /// Current zoom factor.
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current pan offset in plot units.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Zoom expressed as a rounded percentage for toolbar display.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Coordinate transform matching this viewport.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.zoom, self.offset, PLOT_MARGIN)
    }
}

/// Maps between screen pixels, canvas units and plot units.
///
/// Screen space relates to canvas space through `screen = zoom * (canvas + offset)`.
/// Plot space is canvas space shifted by the fixed margin: `canvas = plot + margin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    offset: Vec2,
    margin: f32,
}

impl ViewTransform {
    /// Creates a transform from explicit parameters.
    #[must_use]
    pub const fn new(zoom: f32, offset: Vec2, margin: f32) -> Self {
        Self {
            zoom,
            offset,
            margin,
        }
    }

    /// Zoom factor applied by the transform.
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Undoes zoom and pan, yielding canvas units.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom - self.offset
    }

    /// Applies pan then zoom to canvas units.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        (canvas + self.offset) * self.zoom
    }

    /// Shifts a plot position by the margin into canvas units.
    #[must_use]
    pub fn plot_to_canvas(&self, plot: Vec2) -> Vec2 {
        plot + Vec2::splat(self.margin)
    }

    /// Removes the margin from a canvas position.
    #[must_use]
    pub fn canvas_to_plot(&self, canvas: Vec2) -> Vec2 {
        canvas - Vec2::splat(self.margin)
    }

    /// Converts a screen position into plot units.
    #[must_use]
    pub fn screen_to_plot(&self, screen: Vec2) -> Vec2 {
        self.canvas_to_plot(self.screen_to_canvas(screen))
    }

    /// Converts a plot position into screen pixels.
    #[must_use]
    pub fn plot_to_screen(&self, plot: Vec2) -> Vec2 {
        self.canvas_to_screen(self.plot_to_canvas(plot))
    }

    /// Scales a plot-space length into screen pixels.
    #[must_use]
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.zoom
    }
}
