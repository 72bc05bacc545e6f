use std::f32::consts::FRAC_PI_2;

use eframe_floorplan::element::{factory, AttachmentKind, Element, ElementKind, RenderPrimitive, MIN_SEGMENT_LENGTH};
use eframe_floorplan::scene::Scene;
use egui::pos2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_wall_label_shows_length() {
    let wall = factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0);
    let geometry = wall.render_geometry();

    assert_eq!(geometry.label(), Some("100.00"));
    assert_eq!(wall.element_type(), "Wall");
    match &geometry.primitives[0] {
        RenderPrimitive::OrientedRect {
            length, thickness, angle, ..
        } => {
            assert!(approx(*length, 100.0));
            assert!(approx(*thickness, 24.0));
            assert!(approx(*angle, 0.0));
        }
        other => panic!("expected an oriented rect, got {:?}", other),
    }
}

#[test]
fn test_wall_label_rotates_with_wall() {
    let wall = factory::create_wall(pos2(0.0, 0.0), pos2(0.0, 50.0), 24.0);
    let geometry = wall.render_geometry();
    assert!(approx(geometry.label_angle().unwrap(), FRAC_PI_2));
    assert_eq!(geometry.label(), Some("50.00"));
}

#[test]
fn test_zero_length_wall_is_clamped() {
    let wall = factory::create_wall(pos2(10.0, 10.0), pos2(10.0, 10.0), 24.0);
    let geometry = wall.render_geometry();

    match &geometry.primitives[0] {
        RenderPrimitive::OrientedRect { length, angle, .. } => {
            assert!(approx(*length, MIN_SEGMENT_LENGTH));
            assert!(approx(*angle, 0.0));
        }
        other => panic!("expected an oriented rect, got {:?}", other),
    }
    assert_eq!(geometry.label(), Some("0.00"));
}

#[test]
fn test_draw_order_stacks_openings_above_walls() {
    let wall = factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0);
    let window = factory::create_window(pos2(10.0, 0.0), pos2(40.0, 0.0), 12.0);
    let door = factory::create_door(pos2(50.0, 0.0), pos2(80.0, 0.0), 8.0);
    let switch = factory::create_attachment(AttachmentKind::Switch, pos2(90.0, 0.0), 0.0, 12.0);

    assert!(wall.draw_order() < window.draw_order());
    assert!(window.draw_order() < door.draw_order());
    assert!(door.draw_order() < switch.draw_order());
    assert_eq!(window.render_geometry().label(), None);
}

#[test]
fn test_door_swing_arc() {
    let door = factory::create_door(pos2(0.0, 0.0), pos2(30.0, 0.0), 8.0);
    let geometry = door.render_geometry();

    let arc = geometry
        .primitives
        .iter()
        .find_map(|p| match p {
            RenderPrimitive::Arc {
                center, radius, sweep, ..
            } => Some((*center, *radius, *sweep)),
            _ => None,
        })
        .expect("door has a swing arc");

    assert_eq!(arc.0, pos2(0.0, 0.0));
    assert!(approx(arc.1, 60.0));
    assert!(approx(arc.2.abs(), FRAC_PI_2));
}

#[test]
fn test_switch_and_outlet_glyphs_differ() {
    let switch = factory::create_attachment(AttachmentKind::Switch, pos2(0.0, 0.0), 0.0, 12.0);
    let outlet = factory::create_attachment(AttachmentKind::Outlet, pos2(0.0, 0.0), 0.0, 12.0);

    assert_eq!(switch.kind(), ElementKind::Switch);
    assert_eq!(outlet.kind(), ElementKind::Outlet);
    assert_ne!(switch.render_geometry().primitives, outlet.render_geometry().primitives);
    assert!(switch.hit_test(pos2(3.0, 3.0), 0.0));
    assert!(!switch.hit_test(pos2(30.0, 0.0), 4.0));
}

#[test]
fn test_rectangle_normalizes_corners() {
    let rect = factory::create_rectangle(pos2(40.0, 30.0), pos2(10.0, 10.0));
    let geometry = rect.render_geometry();

    match &geometry.primitives[0] {
        RenderPrimitive::Rect(r) => {
            assert_eq!(r.min, pos2(10.0, 10.0));
            assert!(approx(r.width(), 30.0));
            assert!(approx(r.height(), 20.0));
        }
        other => panic!("expected a rect, got {:?}", other),
    }
    assert_eq!(geometry.label(), Some("W:30.00 H:20.00"));
}

#[test]
fn test_line_and_circle_hit_tests() {
    let line = factory::create_line(pos2(0.0, 0.0), pos2(100.0, 0.0));
    assert!(line.hit_test(pos2(50.0, 3.0), 4.0));
    assert!(!line.hit_test(pos2(50.0, 20.0), 4.0));
    assert_eq!(line.render_geometry().label(), Some("100.00"));

    let circle = factory::create_circle(pos2(0.0, 0.0), 10.0);
    assert!(circle.hit_test(pos2(0.0, 12.0), 4.0));
    assert!(!circle.hit_test(pos2(0.0, 20.0), 4.0));
}

#[test]
fn test_walls_expose_centerline_projection() {
    let wall = factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0);
    let line = factory::create_line(pos2(0.0, 0.0), pos2(100.0, 0.0));

    let projected = wall.project_point(pos2(30.0, 15.0)).unwrap();
    assert!(approx(projected.x, 30.0));
    assert!(approx(projected.y, 0.0));
    assert_eq!(line.project_point(pos2(30.0, 15.0)), None);
}

#[test]
fn test_scene_hit_prefers_top_layer() {
    let mut scene = Scene::new();
    let wall = factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0);
    let window = factory::create_window(pos2(20.0, 0.0), pos2(60.0, 0.0), 12.0);
    let wall_id = wall.id();
    let window_id = window.id();
    scene.add(window);
    scene.add(wall);

    assert_eq!(scene.element_at(pos2(40.0, 2.0), 4.0), Some(window_id));
    assert_eq!(scene.element_at(pos2(80.0, 2.0), 4.0), Some(wall_id));
    assert_eq!(scene.element_at(pos2(80.0, 200.0), 4.0), None);

    let order: Vec<_> = scene.in_draw_order().iter().map(|e| e.id()).collect();
    assert_eq!(order, vec![wall_id, window_id]);
    assert_eq!(scene.walls().count(), 1);
    assert_eq!(scene.of_kind(ElementKind::Window).count(), 1);
}

#[test]
fn test_factory_ids_are_unique() {
    let a = factory::create_line(pos2(0.0, 0.0), pos2(1.0, 1.0));
    let b = factory::create_line(pos2(0.0, 0.0), pos2(1.0, 1.0));
    assert_ne!(a.id(), b.id());
}
