use floorplan_core::{
    Command, Event, Plot, PointerEvent, RoomId, RoomKind, RoomTemplate, WheelEvent, ZoomDirection,
};
use floorplan_rendering::{render, Canvas, DrawCommand, Scene};
use floorplan_system_hit_test::LinearHitTester;
use floorplan_system_interaction::Interaction;
use floorplan_system_placement::Placement;
use floorplan_system_zoom::ZoomPan;
use floorplan_world::{self as world, query, World};
use tracing::debug;

use crate::session::SessionEvent;

/// Wires host input through the systems into the world.
#[derive(Debug)]
pub(crate) struct Studio {
    world: World,
    canvas: Canvas,
    interaction: Interaction,
    placement: Placement,
    zoom: ZoomPan,
}

impl Studio {
    pub(crate) fn new(plot: Plot, canvas: Canvas) -> Self {
        Self {
            world: World::new(plot),
            canvas,
            interaction: Interaction::new(),
            placement: Placement::new(),
            zoom: ZoomPan::new(),
        }
    }

    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn selection(&self) -> Option<RoomId> {
        self.interaction.state().selection()
    }

    /// Adds a library room and reports the id the world allocated for it.
    pub(crate) fn add_room(&mut self, kind: RoomKind) -> Option<RoomId> {
        let mut commands = Vec::new();
        self.placement.handle(
            &RoomTemplate::for_kind(kind),
            query::rooms(&self.world),
            query::plot(&self.world),
            &mut commands,
        );

        self.execute(commands).iter().find_map(|event| match event {
            Event::RoomAdded { room } => Some(room.id),
            _ => None,
        })
    }

    pub(crate) fn pointer(&mut self, event: PointerEvent) {
        let mut commands = Vec::new();
        let rooms = query::rooms(&self.world);
        self.interaction.handle_pointer(
            event,
            &query::view(&self.world),
            query::plot(&self.world),
            rooms,
            &LinearHitTester::new(rooms),
            &mut commands,
        );
        let _ = self.execute(commands);
    }

    pub(crate) fn wheel(&mut self, event: WheelEvent) {
        let mut commands = Vec::new();
        self.zoom
            .handle_wheel(event, &query::view(&self.world), &mut commands);
        let _ = self.execute(commands);
    }

    pub(crate) fn zoom_step(&mut self, direction: ZoomDirection) {
        let mut commands = Vec::new();
        self.zoom
            .handle_step(direction, &query::view(&self.world), &mut commands);
        let _ = self.execute(commands);
    }

    pub(crate) fn reset_view(&mut self) {
        let mut commands = Vec::new();
        self.zoom.reset(&query::view(&self.world), &mut commands);
        let _ = self.execute(commands);
    }

    pub(crate) fn remove_selected(&mut self) {
        if let Some(room) = self.selection() {
            let _ = self.execute(vec![Command::RemoveRoom { room }]);
        }
    }

    /// Runs a scripted session event.
    pub(crate) fn dispatch(&mut self, event: &SessionEvent) {
        if let Some(pointer) = event.pointer() {
            self.pointer(pointer);
            return;
        }
        if let Some(wheel) = event.wheel() {
            self.wheel(wheel);
            return;
        }
        if let Some(direction) = event.zoom_step() {
            self.zoom_step(direction);
            return;
        }

        match *event {
            SessionEvent::ResetView => self.reset_view(),
            SessionEvent::AddRoom { kind } => {
                let _ = self.add_room(kind);
            }
            SessionEvent::RemoveSelected => self.remove_selected(),
            SessionEvent::ClearLayout => {
                let _ = self.execute(vec![Command::ClearLayout]);
            }
            SessionEvent::SetCompliance { room, compliant } => {
                let _ = self.execute(vec![Command::SetRoomCompliance {
                    room: RoomId::new(room),
                    compliant,
                }]);
            }
            SessionEvent::SetScore { score } => {
                let _ = self.execute(vec![Command::SetComplianceScore { score }]);
            }
            SessionEvent::PointerDown { .. }
            | SessionEvent::PointerMove { .. }
            | SessionEvent::PointerUp
            | SessionEvent::PointerLeave
            | SessionEvent::Wheel { .. }
            | SessionEvent::ZoomIn
            | SessionEvent::ZoomOut => {}
        }
    }

    /// Draw commands for the current state.
    pub(crate) fn frame(&self) -> Vec<DrawCommand> {
        render(&Scene::new(
            query::plot(&self.world),
            query::rooms(&self.world),
            self.selection(),
            query::view(&self.world),
            self.canvas,
        ))
    }

    fn execute(&mut self, commands: Vec<Command>) -> Vec<Event> {
        let mut events = Vec::new();
        for command in commands {
            world::apply(&mut self.world, command, &mut events);
        }
        self.interaction.observe(&events);
        for event in &events {
            debug!(?event, "world event");
        }
        events
    }
}
