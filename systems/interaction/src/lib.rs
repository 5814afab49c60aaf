#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure interaction system translating pointer input into room selection and drags.
//!
//! Selection and the transient drag binding live together in a single
//! [`InteractionState`]. Pointer-down on a room selects it and starts a drag,
//! pointer-move emits clamped and grid-snapped `MoveRoom` commands, and
//! pointer-up or pointer-leave ends the drag while keeping the selection.

use floorplan_core::{Command, Event, Plot, PointerEvent, Room, RoomId, ViewState, GRID_SIZE};
use floorplan_system_hit_test::HitTester;
use glam::Vec2;
use tracing::debug;

/// Drag binding between pointer-down on a room and the matching release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No room is being dragged.
    #[default]
    Idle,
    /// A room follows the pointer.
    Dragging {
        /// Room bound to the drag.
        room: RoomId,
        /// Pointer offset from the room's top-left corner at drag start, in plot units.
        grab_offset: Vec2,
    },
}

/// Selection and drag state owned by the interaction system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    selection: Option<RoomId>,
    drag: DragState,
}

impl InteractionState {
    /// Currently selected room, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<RoomId> {
        self.selection
    }

    /// Current drag binding.
    #[must_use]
    pub const fn drag(&self) -> DragState {
        self.drag
    }

    /// Reports whether a room is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

/// Interaction system that owns selection and runs the drag state machine.
#[derive(Debug, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    /// Creates a new interaction system with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exposes the selection and drag state for rendering and inspection.
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.state
    }

    /// Reacts to world events so selection never refers to a removed room.
    pub fn observe(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::RoomRemoved { room } => self.forget(*room),
                Event::LayoutCleared => self.state = InteractionState::default(),
                _ => {}
            }
        }
    }

    /// Consumes a pointer event and emits the resulting room moves.
    ///
    /// `rooms` must be the world's current room collection and `hit_tester`
    /// must resolve points against that same collection.
    pub fn handle_pointer<H>(
        &mut self,
        event: PointerEvent,
        view: &ViewState,
        plot: Plot,
        rooms: &[Room],
        hit_tester: &H,
        out: &mut Vec<Command>,
    ) where
        H: HitTester,
    {
        let transform = view.transform();
        match event {
            PointerEvent::Down { position } => {
                if self.state.is_dragging() {
                    debug!("pointer pressed mid-drag, releasing previous binding");
                    self.state.drag = DragState::Idle;
                }

                let point = transform.screen_to_plot(position);
                let hit = hit_tester
                    .room_at(point)
                    .and_then(|id| rooms.iter().find(|room| room.id == id));
                match hit {
                    Some(room) => {
                        self.state.selection = Some(room.id);
                        self.state.drag = DragState::Dragging {
                            room: room.id,
                            grab_offset: point - room.origin(),
                        };
                        debug!(room = room.id.get(), ?point, "drag started");
                    }
                    None => self.state.selection = None,
                }
            }
            PointerEvent::Move { position } => {
                let DragState::Dragging { room, grab_offset } = self.state.drag else {
                    return;
                };
                let Some(entry) = rooms.iter().find(|entry| entry.id == room) else {
                    debug!(room = room.get(), "dragged room vanished, ending drag");
                    self.state.drag = DragState::Idle;
                    return;
                };

                let target = transform.screen_to_plot(position) - grab_offset;
                let origin = drag_origin(target, entry.size(), plot);
                if origin != entry.origin() {
                    out.push(Command::MoveRoom { room, origin });
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                if self.state.is_dragging() {
                    debug!("drag ended");
                }
                self.state.drag = DragState::Idle;
            }
        }
    }

    fn forget(&mut self, room: RoomId) {
        if self.state.selection == Some(room) {
            self.state.selection = None;
        }
        if let DragState::Dragging { room: bound, .. } = self.state.drag {
            if bound == room {
                self.state.drag = DragState::Idle;
            }
        }
    }
}

/// Converts an unconstrained drag target into a valid room origin.
///
/// Each axis is clamped to `[0, plot dimension - room dimension]` and then
/// rounded to the nearest grid multiple (halves round up). If rounding up
/// would push the room past the far edge, the axis snaps down instead, so the
/// result is always in bounds and grid aligned.
#[must_use]
pub fn drag_origin(target: Vec2, size: Vec2, plot: Plot) -> Vec2 {
    let clamped = plot.clamp_origin(target, size);
    let max = (plot.size() - size).max(Vec2::ZERO);

    Vec2::new(snap_axis(clamped.x, max.x), snap_axis(clamped.y, max.y))
}

fn snap_axis(value: f32, max: f32) -> f32 {
    let snapped = (value / GRID_SIZE).round() * GRID_SIZE;
    if snapped > max {
        (max / GRID_SIZE).floor() * GRID_SIZE
    } else {
        snapped.max(0.0)
    }
}
