#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure placement system that turns room-library templates into add commands.
//!
//! New rooms are positioned by a bounded first-fit scan over a coarse grid.
//! When the scan finds no free slot the room lands on the plot origin and may
//! overlap existing rooms; callers can rely on the position being inside the
//! plot but not on it being overlap-free.

use floorplan_core::{
    Command, FloorMaterial, Plot, PlotRect, Room, RoomTemplate, GRID_SIZE, PLACEMENT_CLEARANCE,
    PLACEMENT_SCAN_COLUMNS, PLACEMENT_SCAN_ROWS, PLACEMENT_STEP,
};
use glam::Vec2;
use tracing::{debug, warn};

/// Result of a placement search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementOutcome {
    /// Top-left corner chosen for the new room.
    pub origin: Vec2,
    /// Set when no free slot was found and the plot origin was used instead.
    pub fallback: bool,
}

/// Searches for the first free slot for a footprint of `size`.
///
/// Candidates lie on a [`PLACEMENT_STEP`] grid and are visited row by row,
/// starting at the plot origin. A candidate is accepted when it overlaps no
/// existing room (touching edges are allowed) and keeps [`PLACEMENT_CLEARANCE`]
/// free along the far plot edges.
#[must_use]
pub fn find_placement(existing: &[Room], size: Vec2, plot: Plot) -> PlacementOutcome {
    let limit = plot.size() - Vec2::splat(PLACEMENT_CLEARANCE);

    for row in 0..PLACEMENT_SCAN_ROWS {
        for column in 0..PLACEMENT_SCAN_COLUMNS {
            let origin = Vec2::new(column as f32, row as f32) * PLACEMENT_STEP;
            let candidate = PlotRect::from_origin_and_size(origin, size);

            let fits = candidate.right() <= limit.x && candidate.bottom() <= limit.y;
            if !fits {
                continue;
            }

            let overlaps = existing
                .iter()
                .any(|room| candidate.intersects(&room.rect));
            if !overlaps {
                return PlacementOutcome {
                    origin,
                    fallback: false,
                };
            }
        }
    }

    PlacementOutcome {
        origin: Vec2::ZERO,
        fallback: true,
    }
}

/// Clamps a requested footprint so it fits inside the plot minus the clearance.
///
/// Each axis ends up in `[min(GRID_SIZE, limit), limit]`, where `limit` is the
/// plot dimension minus [`PLACEMENT_CLEARANCE`], or the whole plot dimension
/// when the plot is too small to keep the clearance.
#[must_use]
pub fn fit_size(size: Vec2, plot: Plot) -> Vec2 {
    let fit_axis = |length: f32, dimension: f32| {
        let limit = if dimension - PLACEMENT_CLEARANCE >= GRID_SIZE {
            dimension - PLACEMENT_CLEARANCE
        } else {
            dimension
        };
        let floor = GRID_SIZE.min(limit);
        if length.is_nan() {
            floor
        } else {
            length.clamp(floor, limit)
        }
    };

    Vec2::new(
        fit_axis(size.x, plot.width()),
        fit_axis(size.y, plot.height()),
    )
}

/// Names a new room after its template, numbering repeats of the same kind.
///
/// The first room of a kind keeps the bare display name; the second becomes
/// `"<name> 2"`, and so on.
#[must_use]
pub fn room_name(template: &RoomTemplate, existing: &[Room]) -> String {
    let count = existing
        .iter()
        .filter(|room| room.kind == template.kind)
        .count();
    if count == 0 {
        template.display_name.clone()
    } else {
        format!("{} {}", template.display_name, count + 1)
    }
}

/// Placement system that converts library templates into `AddRoom` commands.
#[derive(Debug, Default)]
pub struct Placement;

impl Placement {
    /// Creates a new placement system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Positions a room built from `template` and emits the command adding it.
    ///
    /// `rooms` must be the world's current room collection.
    pub fn handle(
        &self,
        template: &RoomTemplate,
        rooms: &[Room],
        plot: Plot,
        out: &mut Vec<Command>,
    ) {
        let size = fit_size(template.default_size, plot);
        if size != template.default_size {
            warn!(
                requested = ?template.default_size,
                fitted = ?size,
                "room template resized to fit the plot"
            );
        }

        let outcome = find_placement(rooms, size, plot);
        if outcome.fallback {
            warn!(
                kind = ?template.kind,
                "no free slot found, placing room at the plot origin"
            );
        } else {
            debug!(kind = ?template.kind, origin = ?outcome.origin, "placement found");
        }

        out.push(Command::AddRoom {
            kind: template.kind,
            name: room_name(template, rooms),
            rect: PlotRect::from_origin_and_size(outcome.origin, size),
            color: None,
            floor_material: FloorMaterial::default(),
        });
    }
}
