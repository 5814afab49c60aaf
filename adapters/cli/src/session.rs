use std::{fs, path::Path};

use anyhow::{Context, Result};
use floorplan_core::{Plot, PointerEvent, RoomKind, WheelEvent, ZoomDirection};
use floorplan_rendering::Canvas;
use glam::Vec2;
use serde::Deserialize;

const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// Scripted studio session loaded from a TOML file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SessionConfig {
    /// Plot dimensions in plot units.
    pub(crate) plot: Dimensions,
    /// Canvas dimensions in screen pixels.
    #[serde(default = "default_canvas")]
    pub(crate) canvas: Dimensions,
    /// Library rooms added before any scripted event runs.
    #[serde(default)]
    pub(crate) rooms: Vec<RoomKind>,
    /// Input replayed in order after the initial rooms are placed.
    #[serde(default)]
    pub(crate) events: Vec<SessionEvent>,
}

/// Width and height pair.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Dimensions {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

fn default_canvas() -> Dimensions {
    Dimensions {
        width: DEFAULT_CANVAS_WIDTH,
        height: DEFAULT_CANVAS_HEIGHT,
    }
}

/// Single scripted host input.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub(crate) enum SessionEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerLeave,
    Wheel { x: f32, y: f32, delta: f32 },
    ZoomIn,
    ZoomOut,
    ResetView,
    AddRoom { kind: RoomKind },
    RemoveSelected,
    ClearLayout,
    SetCompliance { room: u32, compliant: bool },
    SetScore { score: f32 },
}

impl SessionEvent {
    /// Pointer input carried by the event, if any.
    pub(crate) fn pointer(&self) -> Option<PointerEvent> {
        match *self {
            Self::PointerDown { x, y } => Some(PointerEvent::Down {
                position: Vec2::new(x, y),
            }),
            Self::PointerMove { x, y } => Some(PointerEvent::Move {
                position: Vec2::new(x, y),
            }),
            Self::PointerUp => Some(PointerEvent::Up),
            Self::PointerLeave => Some(PointerEvent::Leave),
            _ => None,
        }
    }

    /// Wheel input carried by the event, if any.
    pub(crate) fn wheel(&self) -> Option<WheelEvent> {
        match *self {
            Self::Wheel { x, y, delta } => Some(WheelEvent::from_delta(delta, Vec2::new(x, y))),
            _ => None,
        }
    }

    /// Toolbar zoom direction carried by the event, if any.
    pub(crate) fn zoom_step(&self) -> Option<ZoomDirection> {
        match self {
            Self::ZoomIn => Some(ZoomDirection::In),
            Self::ZoomOut => Some(ZoomDirection::Out),
            _ => None,
        }
    }
}

impl SessionConfig {
    /// Reads and parses a session file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read session file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse session file {}", path.display()))
    }

    /// Parses a session from TOML text.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid session TOML")
    }

    /// Validated plot described by the session.
    pub(crate) fn plot(&self) -> Result<Plot> {
        Plot::new(self.plot.width, self.plot.height).context("invalid plot dimensions")
    }

    /// Validated canvas described by the session.
    pub(crate) fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.canvas.width, self.canvas.height).context("invalid canvas dimensions")
    }
}
