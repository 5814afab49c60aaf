#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative layout state management for the floorplan engine.
//!
//! The [`World`] owns the plot, the ordered room collection and the viewport.
//! It is mutated exclusively through [`apply`], which enforces the room
//! bounds invariant on every mutation and reports what changed as
//! [`Event`] values. Read access goes through the [`query`] module.

mod rooms;

use floorplan_core::{Command, Event, Plot, PlotRect, Room, RoomError, ViewState, GRID_SIZE};
use glam::Vec2;
use tracing::{debug, warn};

use crate::rooms::RoomRegistry;

/// Represents the authoritative layout state.
#[derive(Debug)]
pub struct World {
    plot: Plot,
    rooms: RoomRegistry,
    view: ViewState,
    compliance_score: Option<f32>,
}

impl World {
    /// Creates an empty layout on the provided plot with the default viewport.
    #[must_use]
    pub fn new(plot: Plot) -> Self {
        Self {
            plot,
            rooms: RoomRegistry::new(),
            view: ViewState::default(),
            compliance_score: None,
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::AddRoom {
            kind,
            name,
            rect,
            color,
            floor_material,
        } => {
            let bounded = bound_rect(rect, world.plot);
            if bounded != rect {
                warn!(?rect, ?bounded, "room footprint adjusted to fit the plot");
            }

            let room = Room {
                id: world.rooms.allocate_id(),
                name,
                kind,
                rect: bounded,
                color,
                floor_material,
                vastu_compliant: false,
            };
            debug!(room = room.id.get(), ?kind, rect = ?room.rect, "room added");
            world.rooms.push(room.clone());
            out_events.push(Event::RoomAdded { room });
        }
        Command::MoveRoom { room, origin } => {
            let plot = world.plot;
            let Some(entry) = world.rooms.get_mut(room) else {
                out_events.push(Event::RoomMoveRejected {
                    room,
                    reason: RoomError::MissingRoom,
                });
                return;
            };

            let from = entry.origin();
            let to = plot.clamp_origin(origin, entry.size());
            if to != origin {
                debug!(room = room.get(), ?origin, ?to, "move clamped to plot bounds");
            }
            if to == from {
                return;
            }

            entry.rect = entry.rect.with_origin(to);
            out_events.push(Event::RoomMoved { room, from, to });
        }
        Command::RemoveRoom { room } => match world.rooms.remove(room) {
            Some(_) => {
                debug!(room = room.get(), "room removed");
                out_events.push(Event::RoomRemoved { room });
            }
            None => out_events.push(Event::RoomRemovalRejected {
                room,
                reason: RoomError::MissingRoom,
            }),
        },
        Command::ClearLayout => {
            world.rooms.clear();
            world.compliance_score = None;
            debug!("layout cleared");
            out_events.push(Event::LayoutCleared);
        }
        Command::SetView { view } => {
            let view = ViewState::new(view.zoom(), view.offset());
            if view == world.view {
                return;
            }

            world.view = view;
            out_events.push(Event::ViewChanged { view });
        }
        Command::SetRoomCompliance { room, compliant } => {
            let Some(entry) = world.rooms.get_mut(room) else {
                warn!(room = room.get(), "compliance verdict for unknown room");
                out_events.push(Event::ComplianceRejected {
                    room,
                    reason: RoomError::MissingRoom,
                });
                return;
            };

            if entry.vastu_compliant != compliant {
                entry.vastu_compliant = compliant;
                out_events.push(Event::ComplianceChanged { room, compliant });
            }
        }
        Command::SetComplianceScore { score } => {
            if !score.is_finite() {
                warn!(score, "ignoring non-finite compliance score");
                return;
            }

            world.compliance_score = Some(score);
            out_events.push(Event::ComplianceScoreChanged { score });
        }
    }
}

/// Brings a requested footprint inside the plot.
///
/// Degenerate dimensions grow to one grid cell (or the whole plot when it is
/// smaller), oversized dimensions shrink to the plot, and the origin is then
/// clamped so the footprint stays in bounds.
fn bound_rect(rect: PlotRect, plot: Plot) -> PlotRect {
    let fit_axis = |length: f32, limit: f32| {
        if length.is_finite() && length > 0.0 {
            length.min(limit)
        } else {
            GRID_SIZE.min(limit)
        }
    };
    let size = Vec2::new(
        fit_axis(rect.width(), plot.width()),
        fit_axis(rect.height(), plot.height()),
    );
    let origin = plot.clamp_origin(rect.origin(), size);

    PlotRect::from_origin_and_size(origin, size)
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use floorplan_core::{Plot, Room, RoomId, RoomKind, ViewState};

    use super::World;

    /// Provides the plot the layout is drawn on.
    #[must_use]
    pub fn plot(world: &World) -> Plot {
        world.plot
    }

    /// Provides the rooms in insertion order, which is also paint order.
    #[must_use]
    pub fn rooms(world: &World) -> &[Room] {
        world.rooms.as_slice()
    }

    /// Looks up a single room.
    #[must_use]
    pub fn room(world: &World, id: RoomId) -> Option<&Room> {
        world.rooms.get(id)
    }

    /// Provides the current viewport.
    #[must_use]
    pub fn view(world: &World) -> ViewState {
        world.view
    }

    /// Score last reported by the rule engine, if any.
    #[must_use]
    pub fn compliance_score(world: &World) -> Option<f32> {
        world.compliance_score
    }

    /// Counts the rooms of a given kind.
    #[must_use]
    pub fn count_of_kind(world: &World, kind: RoomKind) -> usize {
        world
            .rooms
            .as_slice()
            .iter()
            .filter(|room| room.kind == kind)
            .count()
    }

    /// Summarises the layout for status displays and cost estimation.
    #[must_use]
    pub fn stats(world: &World) -> LayoutStats {
        let rooms = world.rooms.as_slice();
        LayoutStats {
            room_count: rooms.len(),
            total_area: rooms.iter().map(|room| room.rect.area()).sum(),
            compliant_rooms: rooms.iter().filter(|room| room.vastu_compliant).count(),
        }
    }

    /// Aggregate figures describing the layout.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LayoutStats {
        /// Number of rooms placed.
        pub room_count: usize,
        /// Sum of all room areas in square plot units.
        pub total_area: f32,
        /// Number of rooms flagged compliant by the rule engine.
        pub compliant_rooms: usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::{FloorMaterial, RoomId, RoomKind};

    fn world() -> World {
        World::new(Plot::new(400.0, 400.0).expect("valid plot"))
    }

    fn add_room(world: &mut World, rect: PlotRect, events: &mut Vec<Event>) -> RoomId {
        apply(
            world,
            Command::AddRoom {
                kind: RoomKind::Bathroom,
                name: "Bathroom".to_owned(),
                rect,
                color: None,
                floor_material: FloorMaterial::Ceramic,
            },
            events,
        );
        match events.last() {
            Some(Event::RoomAdded { room }) => room.id,
            other => panic!("unexpected event: {other:?}"),
        }
    }

    fn assert_in_bounds(world: &World) {
        let bounds = query::plot(world).bounds();
        for room in query::rooms(world) {
            assert!(
                bounds.contains_rect(&room.rect),
                "room {:?} escaped the plot: {:?}",
                room.id,
                room.rect
            );
        }
    }

    #[test]
    fn add_room_allocates_sequential_identifiers() {
        let mut world = world();
        let mut events = Vec::new();

        let first = add_room(&mut world, PlotRect::new(0.0, 0.0, 80.0, 80.0), &mut events);
        let second = add_room(&mut world, PlotRect::new(80.0, 0.0, 80.0, 80.0), &mut events);

        assert_eq!(first, RoomId::new(0));
        assert_eq!(second, RoomId::new(1));
        assert_eq!(query::rooms(&world).len(), 2);
        let added = query::room(&world, second).expect("room stored");
        assert!(!added.vastu_compliant);
        assert_eq!(added.floor_material, FloorMaterial::Ceramic);
    }

    #[test]
    fn add_room_clamps_oversized_and_degenerate_footprints() {
        let mut world = world();
        let mut events = Vec::new();

        let wide = add_room(&mut world, PlotRect::new(350.0, 10.0, 900.0, 80.0), &mut events);
        let flat = add_room(&mut world, PlotRect::new(390.0, 390.0, -4.0, 0.0), &mut events);

        let wide = query::room(&world, wide).expect("room stored");
        assert_eq!(wide.rect, PlotRect::new(0.0, 10.0, 400.0, 80.0));
        let flat = query::room(&world, flat).expect("room stored");
        assert_eq!(flat.rect, PlotRect::new(380.0, 380.0, GRID_SIZE, GRID_SIZE));
        assert_in_bounds(&world);
    }

    #[test]
    fn move_room_clamps_to_plot_and_reports_change() {
        let mut world = world();
        let mut events = Vec::new();
        let room = add_room(&mut world, PlotRect::new(0.0, 0.0, 100.0, 100.0), &mut events);
        events.clear();

        apply(
            &mut world,
            Command::MoveRoom {
                room,
                origin: Vec2::new(380.0, -40.0),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::RoomMoved {
                room,
                from: Vec2::ZERO,
                to: Vec2::new(300.0, 0.0),
            }]
        );
        assert_in_bounds(&world);
    }

    #[test]
    fn move_to_current_position_is_silent() {
        let mut world = world();
        let mut events = Vec::new();
        let room = add_room(&mut world, PlotRect::new(40.0, 40.0, 80.0, 80.0), &mut events);
        events.clear();

        apply(
            &mut world,
            Command::MoveRoom {
                room,
                origin: Vec2::new(40.0, 40.0),
            },
            &mut events,
        );

        assert!(events.is_empty());
    }

    #[test]
    fn move_of_missing_room_is_rejected() {
        let mut world = world();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MoveRoom {
                room: RoomId::new(9),
                origin: Vec2::ZERO,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::RoomMoveRejected {
                room: RoomId::new(9),
                reason: RoomError::MissingRoom,
            }]
        );
    }

    #[test]
    fn compliance_for_missing_room_is_rejected() {
        let mut world = world();
        let mut events = Vec::new();
        let room = add_room(&mut world, PlotRect::new(0.0, 0.0, 80.0, 80.0), &mut events);
        events.clear();

        apply(
            &mut world,
            Command::SetRoomCompliance {
                room: RoomId::new(room.get() + 1),
                compliant: true,
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::SetRoomCompliance {
                room,
                compliant: true,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::ComplianceRejected {
                    room: RoomId::new(room.get() + 1),
                    reason: RoomError::MissingRoom,
                },
                Event::ComplianceChanged {
                    room,
                    compliant: true,
                },
            ]
        );
        assert_eq!(query::stats(&world).compliant_rooms, 1);
    }

    #[test]
    fn remove_and_clear_update_collection() {
        let mut world = world();
        let mut events = Vec::new();
        let first = add_room(&mut world, PlotRect::new(0.0, 0.0, 80.0, 80.0), &mut events);
        let _second = add_room(&mut world, PlotRect::new(80.0, 0.0, 80.0, 80.0), &mut events);
        events.clear();

        apply(&mut world, Command::RemoveRoom { room: first }, &mut events);
        apply(&mut world, Command::RemoveRoom { room: first }, &mut events);
        assert_eq!(
            events,
            vec![
                Event::RoomRemoved { room: first },
                Event::RoomRemovalRejected {
                    room: first,
                    reason: RoomError::MissingRoom,
                },
            ]
        );
        assert_eq!(query::rooms(&world).len(), 1);

        apply(&mut world, Command::SetComplianceScore { score: 72.0 }, &mut events);
        apply(&mut world, Command::ClearLayout, &mut events);
        assert!(query::rooms(&world).is_empty());
        assert_eq!(query::compliance_score(&world), None);
        assert_eq!(events.last(), Some(&Event::LayoutCleared));
    }

    #[test]
    fn set_view_clamps_zoom() {
        let mut world = world();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::SetView {
                view: ViewState::new(2.0, Vec2::new(5.0, 5.0)),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::SetView {
                view: ViewState::new(2.0, Vec2::new(5.0, 5.0)),
            },
            &mut events,
        );

        assert_eq!(events.len(), 1, "unchanged view must not be re-announced");
        assert_eq!(query::view(&world).zoom(), 2.0);
    }

    #[test]
    fn compliance_updates_feed_stats() {
        let mut world = world();
        let mut events = Vec::new();
        let room = add_room(&mut world, PlotRect::new(0.0, 0.0, 80.0, 80.0), &mut events);
        let _other = add_room(&mut world, PlotRect::new(100.0, 0.0, 100.0, 60.0), &mut events);
        events.clear();

        apply(
            &mut world,
            Command::SetRoomCompliance {
                room,
                compliant: true,
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::SetComplianceScore { score: f32::NAN },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::ComplianceChanged {
                room,
                compliant: true,
            }]
        );
        let stats = query::stats(&world);
        assert_eq!(stats.room_count, 2);
        assert_eq!(stats.total_area, 80.0 * 80.0 + 100.0 * 60.0);
        assert_eq!(stats.compliant_rooms, 1);
        assert_eq!(query::count_of_kind(&world, RoomKind::Bathroom), 2);
        assert_eq!(query::count_of_kind(&world, RoomKind::Kitchen), 0);
    }
}
