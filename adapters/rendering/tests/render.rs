use floorplan_core::{FloorMaterial, Plot, PlotRect, Room, RoomColor, RoomId, RoomKind, ViewState};
use floorplan_rendering::{render, Canvas, Color, DrawCommand, Scene, MAX_GRID_LINES_PER_AXIS};
use glam::Vec2;

fn plot() -> Plot {
    Plot::new(400.0, 400.0).expect("valid plot")
}

fn canvas() -> Canvas {
    Canvas::new(500.0, 500.0).expect("valid canvas")
}

fn room(id: u32, kind: RoomKind, rect: PlotRect) -> Room {
    Room {
        id: RoomId::new(id),
        name: kind.display_name().to_owned(),
        kind,
        rect,
        color: None,
        floor_material: FloorMaterial::Ceramic,
        vastu_compliant: false,
    }
}

fn non_grid(commands: &[DrawCommand]) -> &[DrawCommand] {
    let first = commands
        .iter()
        .position(|command| !matches!(command, DrawCommand::Line { .. }))
        .expect("plot boundary follows the grid");
    &commands[first..]
}

#[test]
fn empty_layout_renders_grid_and_plot_only() {
    let commands = render(&Scene::new(plot(), &[], None, ViewState::default(), canvas()));
    let rest = non_grid(&commands);

    assert!(commands.len() > 1, "grid lines expected");
    assert_eq!(
        rest,
        &[DrawCommand::StrokeRect {
            origin: Vec2::splat(50.0),
            size: Vec2::splat(400.0),
            color: Color::from_rgb_u8(0x37, 0x41, 0x51),
            width: 4.0,
            dash: None,
        }]
    );
}

#[test]
fn grid_lines_align_with_plot_origin_and_cover_canvas() {
    let commands = render(&Scene::new(plot(), &[], None, ViewState::default(), canvas()));
    let mut vertical = Vec::new();
    let mut horizontal = Vec::new();
    for command in &commands {
        if let DrawCommand::Line { from, to, .. } = command {
            if from.x == to.x {
                vertical.push(from.x);
                assert_eq!((from.y, to.y), (0.0, 500.0));
            } else {
                horizontal.push(from.y);
                assert_eq!((from.x, to.x), (0.0, 500.0));
            }
        }
    }

    assert_eq!(vertical.len(), 25);
    assert_eq!(horizontal.len(), 25);
    assert_eq!(vertical.first().copied(), Some(10.0));
    assert_eq!(vertical.last().copied(), Some(490.0));
    for x in vertical {
        assert_eq!((x - 50.0) % 20.0, 0.0, "line at {x} is off the plot grid");
    }
}

#[test]
fn room_primitives_follow_fixed_order() {
    let rooms = vec![room(1, RoomKind::Bathroom, PlotRect::new(0.0, 0.0, 80.0, 80.0))];
    let commands = render(&Scene::new(plot(), &rooms, None, ViewState::default(), canvas()));
    let rest = non_grid(&commands);

    assert_eq!(rest.len(), 6);
    assert_eq!(
        rest[1..],
        [
            DrawCommand::FillRect {
                origin: Vec2::splat(50.0),
                size: Vec2::splat(80.0),
                color: RoomKind::Bathroom.default_fill().into(),
            },
            DrawCommand::StrokeRect {
                origin: Vec2::splat(50.0),
                size: Vec2::splat(80.0),
                color: RoomKind::Bathroom.default_border().into(),
                width: 2.0,
                dash: None,
            },
            DrawCommand::Text {
                text: "Bathroom".to_owned(),
                center: Vec2::new(90.0, 82.0),
                font_size: 12.0,
                color: Color::from_rgb_u8(0x33, 0x33, 0x33),
            },
            DrawCommand::Text {
                text: "80' × 80'".to_owned(),
                center: Vec2::new(90.0, 98.0),
                font_size: 10.0,
                color: Color::from_rgb_u8(0x66, 0x66, 0x66),
            },
            DrawCommand::FillCircle {
                center: Vec2::new(120.0, 60.0),
                radius: 4.0,
                color: Color::from_rgb_u8(0xF5, 0x9E, 0x0B),
            },
        ]
    );
}

#[test]
fn selection_and_compliance_change_styling() {
    let mut compliant = room(7, RoomKind::Pooja, PlotRect::new(40.0, 20.0, 80.0, 80.0));
    compliant.vastu_compliant = true;
    compliant.color = Some(RoomColor::from_hex(0x12_34_56));
    let rooms = vec![compliant];

    let commands = render(&Scene::new(
        plot(),
        &rooms,
        Some(RoomId::new(7)),
        ViewState::default(),
        canvas(),
    ));
    let rest = non_grid(&commands);

    assert_eq!(
        rest[1],
        DrawCommand::FillRect {
            origin: Vec2::new(90.0, 70.0),
            size: Vec2::splat(80.0),
            color: Color::from_rgb_u8(0x12, 0x34, 0x56),
        }
    );
    assert_eq!(
        rest[2],
        DrawCommand::StrokeRect {
            origin: Vec2::new(90.0, 70.0),
            size: Vec2::splat(80.0),
            color: Color::from_rgb_u8(0x4A, 0x90, 0xE2),
            width: 3.0,
            dash: Some([5.0, 5.0]),
        }
    );
    assert!(matches!(
        rest[5],
        DrawCommand::FillCircle { color, .. } if color == Color::from_rgb_u8(0x10, 0xB9, 0x81)
    ));
}

#[test]
fn rooms_draw_in_collection_order() {
    let rooms = vec![
        room(2, RoomKind::Living, PlotRect::new(0.0, 0.0, 180.0, 120.0)),
        room(1, RoomKind::Kitchen, PlotRect::new(100.0, 100.0, 120.0, 100.0)),
    ];
    let commands = render(&Scene::new(plot(), &rooms, None, ViewState::default(), canvas()));
    let names: Vec<&str> = non_grid(&commands)
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text { text, font_size, .. } if *font_size == 12.0 => Some(text.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(names, vec!["Living Room", "Kitchen"]);
}

#[test]
fn zoom_scales_positions_and_lengths() {
    let rooms = vec![room(1, RoomKind::Bathroom, PlotRect::new(0.0, 0.0, 80.0, 80.0))];
    let view = ViewState::new(2.0, Vec2::new(-25.0, 10.0));
    let commands = render(&Scene::new(plot(), &rooms, Some(RoomId::new(1)), view, canvas()));
    let rest = non_grid(&commands);

    assert_eq!(
        rest[0],
        DrawCommand::StrokeRect {
            origin: Vec2::new(50.0, 120.0),
            size: Vec2::splat(800.0),
            color: Color::from_rgb_u8(0x37, 0x41, 0x51),
            width: 8.0,
            dash: None,
        }
    );
    assert!(matches!(
        &rest[2],
        DrawCommand::StrokeRect { width, dash: Some(dash), .. }
            if *width == 6.0 && *dash == [10.0, 10.0]
    ));
    assert!(matches!(
        &rest[3],
        DrawCommand::Text { font_size, center, .. }
            if *font_size == 24.0 && *center == Vec2::new(130.0, 184.0)
    ));
    assert!(matches!(
        &rest[5],
        DrawCommand::FillCircle { radius, .. } if *radius == 8.0
    ));
}

#[test]
fn oversized_canvas_keeps_grid_bounded() {
    let canvas = Canvas::new(1.0e9, 1.0e9).expect("finite canvas is accepted");
    let view = ViewState::new(0.1, Vec2::ZERO);
    let commands = render(&Scene::new(plot(), &[], None, view, canvas));

    let lines = commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Line { .. }))
        .count();
    assert!(
        lines <= 2 * (MAX_GRID_LINES_PER_AXIS + 1),
        "{lines} grid lines for an oversized canvas"
    );
    assert!(matches!(
        commands.last(),
        Some(DrawCommand::StrokeRect { .. })
    ));
}
