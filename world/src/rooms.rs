//! Authoritative room storage and identifier allocation.

use floorplan_core::{Room, RoomId};

/// Registry that stores rooms in insertion order and allocates identifiers.
///
/// Insertion order doubles as paint order: later rooms draw on top and win hit tests.
#[derive(Debug)]
pub(crate) struct RoomRegistry {
    entries: Vec<Room>,
    next_room_id: RoomId,
}

impl RoomRegistry {
    /// Creates an empty registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_room_id: RoomId::new(0),
        }
    }

    /// Reserves the next identifier. Identifiers are never reused, even after a clear.
    pub(crate) fn allocate_id(&mut self) -> RoomId {
        let id = self.next_room_id;
        self.next_room_id = RoomId::new(id.get().saturating_add(1));
        id
    }

    pub(crate) fn push(&mut self, room: Room) {
        self.entries.push(room);
    }

    pub(crate) fn get(&self, id: RoomId) -> Option<&Room> {
        self.entries.iter().find(|room| room.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.entries.iter_mut().find(|room| room.id == id)
    }

    /// Removes the room while preserving the order of the remaining entries.
    pub(crate) fn remove(&mut self, id: RoomId) -> Option<Room> {
        let index = self.entries.iter().position(|room| room.id == id)?;
        Some(self.entries.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn as_slice(&self) -> &[Room] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::{FloorMaterial, PlotRect, RoomKind};

    fn room(id: RoomId) -> Room {
        Room {
            id,
            name: "Bathroom".to_owned(),
            kind: RoomKind::Bathroom,
            rect: PlotRect::new(0.0, 0.0, 80.0, 80.0),
            color: None,
            floor_material: FloorMaterial::Ceramic,
            vastu_compliant: false,
        }
    }

    #[test]
    fn registry_starts_empty_with_zero_identifier() {
        let mut registry = RoomRegistry::new();
        assert!(registry.as_slice().is_empty());
        assert_eq!(registry.allocate_id(), RoomId::new(0));
        assert_eq!(registry.allocate_id(), RoomId::new(1));
    }

    #[test]
    fn identifiers_survive_clear() {
        let mut registry = RoomRegistry::new();
        let first = registry.allocate_id();
        registry.push(room(first));
        registry.clear();

        assert!(registry.get(first).is_none());
        assert_eq!(registry.allocate_id(), RoomId::new(1));
    }

    #[test]
    fn remove_preserves_order_of_remaining_rooms() {
        let mut registry = RoomRegistry::new();
        for _ in 0..3 {
            let id = registry.allocate_id();
            registry.push(room(id));
        }

        let removed = registry.remove(RoomId::new(1)).expect("room exists");
        assert_eq!(removed.id, RoomId::new(1));

        let remaining: Vec<RoomId> = registry.as_slice().iter().map(|room| room.id).collect();
        assert_eq!(remaining, vec![RoomId::new(0), RoomId::new(2)]);
        assert!(registry.remove(RoomId::new(1)).is_none());
    }
}
