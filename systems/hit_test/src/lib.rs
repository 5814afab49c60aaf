#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure hit-testing system that resolves plot-space points to rooms.

use floorplan_core::{Room, RoomId};
use glam::Vec2;

/// Resolves the topmost room under a plot-space point.
///
/// Call sites depend on this trait rather than a concrete index so a spatial
/// partitioning structure can replace the linear scan transparently.
pub trait HitTester {
    /// Returns the topmost room whose footprint contains `point`, edges included.
    fn room_at(&self, point: Vec2) -> Option<RoomId>;
}

/// Linear scan over the room collection in reverse paint order.
#[derive(Clone, Copy, Debug)]
pub struct LinearHitTester<'a> {
    rooms: &'a [Room],
}

impl<'a> LinearHitTester<'a> {
    /// Creates a hit tester over rooms stored in paint order.
    #[must_use]
    pub const fn new(rooms: &'a [Room]) -> Self {
        Self { rooms }
    }
}

impl HitTester for LinearHitTester<'_> {
    fn room_at(&self, point: Vec2) -> Option<RoomId> {
        self.rooms
            .iter()
            .rev()
            .find(|room| room.rect.contains_point(point))
            .map(|room| room.id)
    }
}

impl<F> HitTester for F
where
    F: Fn(Vec2) -> Option<RoomId>,
{
    fn room_at(&self, point: Vec2) -> Option<RoomId> {
        self(point)
    }
}
