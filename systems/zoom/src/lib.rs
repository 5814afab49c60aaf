#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure zoom system that turns wheel ticks and toolbar steps into view updates.

use floorplan_core::{Command, ViewState, WheelEvent, ZoomDirection};
use tracing::debug;

/// Zoom system emitting `SetView` commands.
#[derive(Debug, Default)]
pub struct ZoomPan;

impl ZoomPan {
    /// Creates a new zoom system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Zooms by one wheel tick while keeping the point under the pointer fixed.
    ///
    /// The anchor is computed from the pointer position before the update and
    /// the factor that remains after clamping, so ticks at the zoom limits are
    /// dropped instead of shifting the view.
    ///
    /// The offset is solved exactly as `(anchor + offset) / factor - anchor`
    /// rather than with the first-order `offset + anchor * (1 - factor)`, which
    /// lets the anchored point drift by a few pixels per tick.
    pub fn handle_wheel(&self, wheel: WheelEvent, view: &ViewState, out: &mut Vec<Command>) {
        let Some(zoom) = next_zoom(view, wheel.direction) else {
            return;
        };

        let anchor = view.transform().screen_to_canvas(wheel.position);
        let effective = zoom / view.zoom();
        let offset = (anchor + view.offset()) / effective - anchor;
        debug!(zoom, ?offset, "wheel zoom");

        out.push(Command::SetView {
            view: ViewState::new(zoom, offset),
        });
    }

    /// Zooms by one toolbar step without anchoring, leaving the offset untouched.
    pub fn handle_step(&self, direction: ZoomDirection, view: &ViewState, out: &mut Vec<Command>) {
        let Some(zoom) = next_zoom(view, direction) else {
            return;
        };
        debug!(zoom, "toolbar zoom");

        out.push(Command::SetView {
            view: ViewState::new(zoom, view.offset()),
        });
    }

    /// Restores the initial view.
    pub fn reset(&self, view: &ViewState, out: &mut Vec<Command>) {
        if *view != ViewState::default() {
            out.push(Command::SetView {
                view: ViewState::default(),
            });
        }
    }
}

fn next_zoom(view: &ViewState, direction: ZoomDirection) -> Option<f32> {
    let zoom = ViewState::clamp_zoom(view.zoom() * direction.factor());
    (zoom != view.zoom()).then_some(zoom)
}
