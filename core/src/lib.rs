#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the floorplan layout engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters translate host input into
//! [`PointerEvent`] and [`WheelEvent`] values, systems respond with
//! [`Command`] batches describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that systems and renderers react to. All coordinates stored in the layout
//! are plot units measured from the plot's top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod view;

pub use view::{ViewState, ViewTransform};

/// Side length of the snapping grid measured in plot units.
pub const GRID_SIZE: f32 = 20.0;

/// Distance from the canvas origin to the plot's top-left corner in canvas units.
pub const PLOT_MARGIN: f32 = 50.0;

/// Spacing between candidate origins probed by the placement search.
pub const PLACEMENT_STEP: f32 = 40.0;

/// Number of candidate rows probed by the placement search.
pub const PLACEMENT_SCAN_ROWS: u32 = 10;

/// Number of candidate columns probed by the placement search.
pub const PLACEMENT_SCAN_COLUMNS: u32 = 10;

/// Clearance kept free along the far plot edges when placing new rooms.
pub const PLACEMENT_CLEARANCE: f32 = 40.0;

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f32 = 0.1;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f32 = 3.0;

/// Commands that express all permissible layout mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Inserts a new room into the layout. The world allocates its identifier.
    AddRoom {
        /// Category of the room.
        kind: RoomKind,
        /// Human readable label rendered inside the room.
        name: String,
        /// Requested footprint of the room within the plot.
        rect: PlotRect,
        /// Optional fill override replacing the kind's default color.
        color: Option<RoomColor>,
        /// Floor finish recorded for the room.
        floor_material: FloorMaterial,
    },
    /// Moves a room so its top-left corner lands on the provided origin.
    MoveRoom {
        /// Identifier of the room being moved.
        room: RoomId,
        /// Requested top-left corner in plot units.
        origin: Vec2,
    },
    /// Removes a room from the layout.
    RemoveRoom {
        /// Identifier of the room targeted for removal.
        room: RoomId,
    },
    /// Removes every room and forgets the recorded compliance score.
    ClearLayout,
    /// Replaces the viewport zoom and pan offset.
    SetView {
        /// Viewport the world should adopt.
        view: ViewState,
    },
    /// Records the rule engine's verdict for a single room.
    SetRoomCompliance {
        /// Identifier of the assessed room.
        room: RoomId,
        /// Whether the room satisfies the placement guidelines.
        compliant: bool,
    },
    /// Records the rule engine's overall score for the layout.
    SetComplianceScore {
        /// Opaque score reported by the rule engine.
        score: f32,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a room joined the layout.
    RoomAdded {
        /// Fully-formed room as stored by the world.
        room: Room,
    },
    /// Confirms that a room changed position.
    RoomMoved {
        /// Identifier of the room that moved.
        room: RoomId,
        /// Top-left corner before the move.
        from: Vec2,
        /// Top-left corner after the move.
        to: Vec2,
    },
    /// Reports that a move request was rejected.
    RoomMoveRejected {
        /// Identifier carried by the rejected request.
        room: RoomId,
        /// Specific reason the move failed.
        reason: RoomError,
    },
    /// Confirms that a room left the layout.
    RoomRemoved {
        /// Identifier of the removed room.
        room: RoomId,
    },
    /// Reports that a removal request was rejected.
    RoomRemovalRejected {
        /// Identifier carried by the rejected request.
        room: RoomId,
        /// Specific reason the removal failed.
        reason: RoomError,
    },
    /// Announces that every room was removed.
    LayoutCleared,
    /// Announces that the viewport changed.
    ViewChanged {
        /// Viewport after the change.
        view: ViewState,
    },
    /// Announces that a room's compliance flag changed.
    ComplianceChanged {
        /// Identifier of the assessed room.
        room: RoomId,
        /// Flag recorded for the room.
        compliant: bool,
    },
    /// Reports that a compliance verdict targeted a room that does not exist.
    ComplianceRejected {
        /// Identifier carried by the rejected verdict.
        room: RoomId,
        /// Specific reason the verdict was rejected.
        reason: RoomError,
    },
    /// Announces that the layout's compliance score changed.
    ComplianceScoreChanged {
        /// Score recorded for the layout.
        score: f32,
    },
}

/// Reasons a room-targeted request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomError {
    /// No room with the provided identifier exists.
    MissingRoom,
}

/// Errors raised when constructing a plot.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PlotError {
    /// Plot dimensions must be finite and strictly positive.
    #[error("plot dimensions must be finite and positive (received {width}x{height})")]
    InvalidDimensions {
        /// Width that failed validation.
        width: f32,
        /// Height that failed validation.
        height: f32,
    },
}

/// Unique identifier assigned to a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates a new room identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Fixed buildable area that rooms are laid out on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    width: f32,
    height: f32,
}

impl Plot {
    /// Creates a plot with the provided dimensions.
    ///
    /// Returns an error unless both dimensions are finite and positive.
    pub fn new(width: f32, height: f32) -> Result<Self, PlotError> {
        let valid = |value: f32| value.is_finite() && value > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PlotError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    /// Width of the plot in plot units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the plot in plot units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Dimensions of the plot as a vector.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Rectangle covering the whole plot.
    #[must_use]
    pub const fn bounds(&self) -> PlotRect {
        PlotRect::new(0.0, 0.0, self.width, self.height)
    }

    /// Clamps a top-left corner so a footprint of `size` stays inside the plot.
    ///
    /// Each axis is limited to `[0, plot dimension - size]`. Footprints larger
    /// than the plot collapse to the origin along that axis.
    #[must_use]
    pub fn clamp_origin(&self, origin: Vec2, size: Vec2) -> Vec2 {
        let max = (self.size() - size).max(Vec2::ZERO);
        let origin = if origin.is_finite() { origin } else { Vec2::ZERO };
        origin.clamp(Vec2::ZERO, max)
    }
}

/// Axis-aligned rectangle expressed in plot units.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl PlotRect {
    /// Creates a rectangle from its top-left corner and dimensions.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a top-left corner and a size vector.
    #[must_use]
    pub const fn from_origin_and_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Horizontal coordinate of the left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate of the top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Horizontal extent of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Top-left corner of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Dimensions of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Horizontal coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Midpoint of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }

    /// Surface covered by the rectangle.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Returns a copy of the rectangle moved to a new top-left corner.
    #[must_use]
    pub const fn with_origin(self, origin: Vec2) -> Self {
        Self::from_origin_and_size(origin, self.size())
    }

    /// Reports whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Reports whether the two rectangles share interior area.
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &PlotRect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Reports whether `other` lies entirely within this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &PlotRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Opaque RGB color attached to rooms and room kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RoomColor {
    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(value: u32) -> Self {
        Self::from_rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Categories of rooms offered by the room library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// Social area for family gatherings.
    Living,
    /// Cooking and food preparation area.
    Kitchen,
    /// Primary sleeping area.
    Bedroom,
    /// Sanitation and hygiene area.
    Bathroom,
    /// Learning and concentration space.
    Study,
    /// Sacred space for worship.
    Pooja,
    /// Family dining area.
    Dining,
    /// Temporary accommodation.
    Guest,
}

struct RoomKindRow {
    kind: RoomKind,
    display_name: &'static str,
    default_size: Vec2,
    fill: RoomColor,
    border: RoomColor,
}

// Rows are indexed by discriminant.
const ROOM_KIND_TABLE: [RoomKindRow; 8] = [
    RoomKindRow {
        kind: RoomKind::Living,
        display_name: "Living Room",
        default_size: Vec2::new(180.0, 120.0),
        fill: RoomColor::from_hex(0xFEF3C7),
        border: RoomColor::from_hex(0xD97706),
    },
    RoomKindRow {
        kind: RoomKind::Kitchen,
        display_name: "Kitchen",
        default_size: Vec2::new(120.0, 100.0),
        fill: RoomColor::from_hex(0xDBEAFE),
        border: RoomColor::from_hex(0x2563EB),
    },
    RoomKindRow {
        kind: RoomKind::Bedroom,
        display_name: "Master Bedroom",
        default_size: Vec2::new(140.0, 120.0),
        fill: RoomColor::from_hex(0xF3E8FF),
        border: RoomColor::from_hex(0x9333EA),
    },
    RoomKindRow {
        kind: RoomKind::Bathroom,
        display_name: "Bathroom",
        default_size: Vec2::new(80.0, 80.0),
        fill: RoomColor::from_hex(0xD1FAE5),
        border: RoomColor::from_hex(0x059669),
    },
    RoomKindRow {
        kind: RoomKind::Study,
        display_name: "Study Room",
        default_size: Vec2::new(120.0, 100.0),
        fill: RoomColor::from_hex(0xFED7AA),
        border: RoomColor::from_hex(0xEA580C),
    },
    RoomKindRow {
        kind: RoomKind::Pooja,
        display_name: "Pooja Room",
        default_size: Vec2::new(80.0, 80.0),
        fill: RoomColor::from_hex(0xFEE2E2),
        border: RoomColor::from_hex(0xDC2626),
    },
    RoomKindRow {
        kind: RoomKind::Dining,
        display_name: "Dining Room",
        default_size: Vec2::new(120.0, 100.0),
        fill: RoomColor::from_hex(0xF0FDF4),
        border: RoomColor::from_hex(0x16A34A),
    },
    RoomKindRow {
        kind: RoomKind::Guest,
        display_name: "Guest Room",
        default_size: Vec2::new(120.0, 100.0),
        fill: RoomColor::from_hex(0xF1F5F9),
        border: RoomColor::from_hex(0x64748B),
    },
];

impl RoomKind {
    /// Every room kind in library order.
    pub const ALL: [RoomKind; 8] = [
        Self::Living,
        Self::Kitchen,
        Self::Bedroom,
        Self::Bathroom,
        Self::Study,
        Self::Pooja,
        Self::Dining,
        Self::Guest,
    ];

    fn row(self) -> &'static RoomKindRow {
        let row = &ROOM_KIND_TABLE[self as usize];
        debug_assert_eq!(row.kind, self);
        row
    }

    /// Label shown in the room library and used to name new rooms.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.row().display_name
    }

    /// Footprint proposed when the room is added from the library.
    #[must_use]
    pub fn default_size(self) -> Vec2 {
        self.row().default_size
    }

    /// Fill color used when a room carries no override.
    #[must_use]
    pub fn default_fill(self) -> RoomColor {
        self.row().fill
    }

    /// Border color used when the room is not selected.
    #[must_use]
    pub fn default_border(self) -> RoomColor {
        self.row().border
    }
}

/// Floor finishes recorded per room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorMaterial {
    /// Ceramic tiles, suitable for all rooms.
    #[default]
    Ceramic,
    /// Premium marble.
    Marble,
    /// Granite stone.
    Granite,
    /// Wood flooring.
    Wood,
}

/// Room placed within the plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier allocated to the room by the world.
    pub id: RoomId,
    /// Human readable label rendered inside the room.
    pub name: String,
    /// Category of the room.
    pub kind: RoomKind,
    /// Footprint of the room measured from the plot's top-left corner.
    pub rect: PlotRect,
    /// Optional fill override replacing the kind's default color.
    pub color: Option<RoomColor>,
    /// Floor finish recorded for the room.
    pub floor_material: FloorMaterial,
    /// Verdict supplied by the external rule engine.
    pub vastu_compliant: bool,
}

impl Room {
    /// Top-left corner of the room.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.rect.origin()
    }

    /// Dimensions of the room.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.rect.size()
    }

    /// Fill color, honouring the per-room override.
    #[must_use]
    pub fn fill_color(&self) -> RoomColor {
        self.color.unwrap_or_else(|| self.kind.default_fill())
    }
}

/// Library entry submitted when the user adds a room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomTemplate {
    /// Category of the room to create.
    pub kind: RoomKind,
    /// Footprint requested for the new room.
    pub default_size: Vec2,
    /// Base name given to the new room.
    pub display_name: String,
}

impl RoomTemplate {
    /// Builds the library entry for a room kind.
    #[must_use]
    pub fn for_kind(kind: RoomKind) -> Self {
        Self {
            kind,
            default_size: kind.default_size(),
            display_name: kind.display_name().to_owned(),
        }
    }
}

/// Pointer input expressed in host screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed at the provided position.
    Down {
        /// Pointer location in screen pixels.
        position: Vec2,
    },
    /// The pointer moved to the provided position.
    Move {
        /// Pointer location in screen pixels.
        position: Vec2,
    },
    /// The pressed button was released.
    Up,
    /// The pointer left the canvas.
    Leave,
}

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Magnifies the view.
    In,
    /// Shrinks the view.
    Out,
}

impl ZoomDirection {
    /// Multiplicative zoom factor applied per step.
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::In => 1.1,
            Self::Out => 0.9,
        }
    }
}

/// Wheel input expressed in host screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Zoom direction requested by the wheel tick.
    pub direction: ZoomDirection,
    /// Pointer location in screen pixels.
    pub position: Vec2,
}

impl WheelEvent {
    /// Creates a wheel event with an explicit direction.
    #[must_use]
    pub const fn new(direction: ZoomDirection, position: Vec2) -> Self {
        Self {
            direction,
            position,
        }
    }

    /// Interprets a raw wheel delta. Only the sign matters: positive deltas zoom out.
    #[must_use]
    pub fn from_delta(delta: f32, position: Vec2) -> Self {
        let direction = if delta > 0.0 {
            ZoomDirection::Out
        } else {
            ZoomDirection::In
        };
        Self::new(direction, position)
    }
}
