#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Declarative rendering pipeline for floor plan scenes.
//!
//! [`render`] turns a [`Scene`] into an ordered list of screen-space
//! [`DrawCommand`]s. Backends replay the list verbatim; nothing here touches a
//! real drawing surface.

use floorplan_core::{Plot, Room, RoomColor, RoomId, ViewState, ViewTransform, GRID_SIZE};
use glam::Vec2;
use serde::Serialize;
use thiserror::Error;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

impl From<RoomColor> for Color {
    fn from(color: RoomColor) -> Self {
        Self::from_rgb_u8(color.red(), color.green(), color.blue())
    }
}

const GRID_LINE_COLOR: Color = Color::from_rgb_u8(0xE0, 0xE0, 0xE0);
const GRID_LINE_WIDTH: f32 = 1.0;
const PLOT_BORDER_COLOR: Color = Color::from_rgb_u8(0x37, 0x41, 0x51);
const PLOT_BORDER_WIDTH: f32 = 4.0;
const ROOM_BORDER_WIDTH: f32 = 2.0;
const SELECTION_COLOR: Color = Color::from_rgb_u8(0x4A, 0x90, 0xE2);
const SELECTION_BORDER_WIDTH: f32 = 3.0;
const SELECTION_DASH: [f32; 2] = [5.0, 5.0];
const NAME_COLOR: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
const NAME_FONT_SIZE: f32 = 12.0;
const DIMENSIONS_COLOR: Color = Color::from_rgb_u8(0x66, 0x66, 0x66);
const DIMENSIONS_FONT_SIZE: f32 = 10.0;
const LABEL_SPACING: f32 = 8.0;
const COMPLIANT_COLOR: Color = Color::from_rgb_u8(0x10, 0xB9, 0x81);
const NON_COMPLIANT_COLOR: Color = Color::from_rgb_u8(0xF5, 0x9E, 0x0B);
const INDICATOR_RADIUS: f32 = 4.0;
const INDICATOR_INSET: f32 = 10.0;

/// Upper bound on grid lines drawn along one axis. Denser grids keep every
/// n-th line, still aligned with the plot origin.
pub const MAX_GRID_LINES_PER_AXIS: usize = 512;

/// Size of the host drawing surface in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    width: f32,
    height: f32,
}

impl Canvas {
    /// Creates a canvas descriptor.
    ///
    /// Returns an error when either dimension is not a positive finite number.
    pub fn new(width: f32, height: f32) -> Result<Self, RenderingError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderingError::InvalidCanvas { width, height });
        }

        Ok(Self { width, height })
    }

    /// Canvas width in screen pixels.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in screen pixels.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Canvas dimensions as a vector.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Single screen-space drawing primitive.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Straight line segment.
    Line {
        /// Segment start.
        from: Vec2,
        /// Segment end.
        to: Vec2,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f32,
    },
    /// Solid axis-aligned rectangle.
    FillRect {
        /// Top-left corner.
        origin: Vec2,
        /// Rectangle extent.
        size: Vec2,
        /// Fill color.
        color: Color,
    },
    /// Outline of an axis-aligned rectangle.
    StrokeRect {
        /// Top-left corner.
        origin: Vec2,
        /// Rectangle extent.
        size: Vec2,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f32,
        /// Dash and gap lengths, `None` for a solid stroke.
        dash: Option<[f32; 2]>,
    },
    /// Text centered on a point.
    Text {
        /// Label contents.
        text: String,
        /// Center of the label.
        center: Vec2,
        /// Font size in pixels.
        font_size: f32,
        /// Text color.
        color: Color,
    },
    /// Solid circle.
    FillCircle {
        /// Circle center.
        center: Vec2,
        /// Circle radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
}

/// Everything required to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Plot bounding the layout.
    pub plot: Plot,
    /// Rooms in draw order; later rooms are drawn on top.
    pub rooms: &'a [Room],
    /// Room highlighted as selected, if any.
    pub selection: Option<RoomId>,
    /// Zoom and pan applied to the frame.
    pub view: ViewState,
    /// Drawing surface dimensions.
    pub canvas: Canvas,
}

impl<'a> Scene<'a> {
    /// Creates a new scene descriptor.
    #[must_use]
    pub const fn new(
        plot: Plot,
        rooms: &'a [Room],
        selection: Option<RoomId>,
        view: ViewState,
        canvas: Canvas,
    ) -> Self {
        Self {
            plot,
            rooms,
            selection,
            view,
            canvas,
        }
    }
}

/// Produces the draw commands for a scene.
///
/// The grid comes first, then the plot boundary, then every room in collection
/// order with its fill, border, labels and compliance indicator.
#[must_use]
pub fn render(scene: &Scene<'_>) -> Vec<DrawCommand> {
    let transform = scene.view.transform();
    let mut commands = Vec::new();

    draw_grid(&transform, scene.canvas, &mut commands);
    commands.push(DrawCommand::StrokeRect {
        origin: transform.plot_to_screen(Vec2::ZERO),
        size: scene.plot.size() * transform.zoom(),
        color: PLOT_BORDER_COLOR,
        width: transform.scale_length(PLOT_BORDER_WIDTH),
        dash: None,
    });
    for room in scene.rooms {
        draw_room(&transform, room, scene.selection == Some(room.id), &mut commands);
    }

    commands
}

fn draw_grid(transform: &ViewTransform, canvas: Canvas, out: &mut Vec<DrawCommand>) {
    let top_left = transform.screen_to_plot(Vec2::ZERO);
    let bottom_right = transform.screen_to_plot(canvas.size());
    let width = transform.scale_length(GRID_LINE_WIDTH);

    for x in grid_positions(top_left.x, bottom_right.x) {
        let screen_x = transform.plot_to_screen(Vec2::new(x, 0.0)).x;
        out.push(DrawCommand::Line {
            from: Vec2::new(screen_x, 0.0),
            to: Vec2::new(screen_x, canvas.height()),
            color: GRID_LINE_COLOR,
            width,
        });
    }
    for y in grid_positions(top_left.y, bottom_right.y) {
        let screen_y = transform.plot_to_screen(Vec2::new(0.0, y)).y;
        out.push(DrawCommand::Line {
            from: Vec2::new(0.0, screen_y),
            to: Vec2::new(canvas.width(), screen_y),
            color: GRID_LINE_COLOR,
            width,
        });
    }
}

/// Grid multiples inside `[start, end]`, measured from the plot origin.
///
/// Yields at most `MAX_GRID_LINES_PER_AXIS + 1` positions.
fn grid_positions(start: f32, end: f32) -> impl Iterator<Item = f32> {
    let first = (start / GRID_SIZE).ceil() as i64;
    let last = (end / GRID_SIZE).floor() as i64;
    let count = last.saturating_sub(first).saturating_add(1).max(0);
    let cap = MAX_GRID_LINES_PER_AXIS as i64;
    let stride = (count / cap + i64::from(count % cap != 0)).max(1);
    let aligned = first.div_euclid(stride).saturating_mul(stride);
    let aligned = if aligned < first {
        aligned.saturating_add(stride)
    } else {
        aligned
    };

    (aligned..=last)
        .step_by(stride as usize)
        .map(|step| step as f32 * GRID_SIZE)
}

fn draw_room(
    transform: &ViewTransform,
    room: &Room,
    selected: bool,
    out: &mut Vec<DrawCommand>,
) {
    let origin = transform.plot_to_screen(room.origin());
    let size = room.size() * transform.zoom();
    let center = origin + size * 0.5;

    out.push(DrawCommand::FillRect {
        origin,
        size,
        color: room.fill_color().into(),
    });
    out.push(if selected {
        DrawCommand::StrokeRect {
            origin,
            size,
            color: SELECTION_COLOR,
            width: transform.scale_length(SELECTION_BORDER_WIDTH),
            dash: Some(SELECTION_DASH.map(|length| transform.scale_length(length))),
        }
    } else {
        DrawCommand::StrokeRect {
            origin,
            size,
            color: room.kind.default_border().into(),
            width: transform.scale_length(ROOM_BORDER_WIDTH),
            dash: None,
        }
    });

    let spacing = transform.scale_length(LABEL_SPACING);
    out.push(DrawCommand::Text {
        text: room.name.clone(),
        center: center - Vec2::new(0.0, spacing),
        font_size: transform.scale_length(NAME_FONT_SIZE),
        color: NAME_COLOR,
    });
    out.push(DrawCommand::Text {
        text: format!("{}' × {}'", room.rect.width(), room.rect.height()),
        center: center + Vec2::new(0.0, spacing),
        font_size: transform.scale_length(DIMENSIONS_FONT_SIZE),
        color: DIMENSIONS_COLOR,
    });

    let indicator =
        room.origin() + Vec2::new(room.rect.width() - INDICATOR_INSET, INDICATOR_INSET);
    out.push(DrawCommand::FillCircle {
        center: transform.plot_to_screen(indicator),
        radius: transform.scale_length(INDICATOR_RADIUS),
        color: if room.vastu_compliant {
            COMPLIANT_COLOR
        } else {
            NON_COMPLIANT_COLOR
        },
    });
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, Error, PartialEq)]
pub enum RenderingError {
    /// Canvas dimensions must be positive and finite.
    #[error("canvas dimensions must be positive (received {width} x {height})")]
    InvalidCanvas {
        /// Provided width.
        width: f32,
        /// Provided height.
        height: f32,
    },
}
