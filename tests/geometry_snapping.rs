use eframe_floorplan::element::{factory, Element, ElementType, Wall};
use eframe_floorplan::geometry::{
    apply_orthogonal, distance_to_segment, nearest_wall, nearest_wall_within, project_point_onto_segment,
    snap_to_grid, Segment,
};
use egui::pos2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn walls(elements: &[ElementType]) -> Vec<&Wall> {
    elements.iter().filter_map(ElementType::as_wall).collect()
}

#[test]
fn test_snap_rounds_to_nearest_multiple() {
    assert_eq!(snap_to_grid(pos2(97.0, 3.0), 25.0), pos2(100.0, 0.0));
    assert_eq!(snap_to_grid(pos2(37.0, -37.0), 25.0), pos2(25.0, -25.0));
}

#[test]
fn test_snap_ties_round_away_from_zero() {
    assert_eq!(snap_to_grid(pos2(12.5, -12.5), 25.0), pos2(25.0, -25.0));
}

#[test]
fn test_snap_is_idempotent() {
    for p in [pos2(97.0, 3.0), pos2(-61.3, 140.2), pos2(12.5, 0.0)] {
        let once = snap_to_grid(p, 25.0);
        assert_eq!(snap_to_grid(once, 25.0), once);
    }
}

#[test]
fn test_snap_ignores_unusable_grid() {
    let p = pos2(13.0, 7.0);
    assert_eq!(snap_to_grid(p, 0.0), p);
    assert_eq!(snap_to_grid(p, -25.0), p);
    assert_eq!(snap_to_grid(p, f32::NAN), p);
}

#[test]
fn test_orthogonal_picks_dominant_axis() {
    let origin = Some(pos2(0.0, 0.0));
    assert_eq!(apply_orthogonal(pos2(50.0, 60.0), origin, true), pos2(0.0, 60.0));
    assert_eq!(apply_orthogonal(pos2(60.0, 50.0), origin, true), pos2(60.0, 0.0));
    // Equal deltas stay horizontal
    assert_eq!(apply_orthogonal(pos2(40.0, 40.0), origin, true), pos2(40.0, 0.0));
}

#[test]
fn test_orthogonal_passthrough() {
    let p = pos2(50.0, 60.0);
    assert_eq!(apply_orthogonal(p, Some(pos2(0.0, 0.0)), false), p);
    assert_eq!(apply_orthogonal(p, None, true), p);
}

#[test]
fn test_projection_stays_on_segment() {
    let segment = Segment::new(pos2(0.0, 0.0), pos2(100.0, 0.0));
    assert_eq!(project_point_onto_segment(pos2(40.0, 30.0), &segment), pos2(40.0, 0.0));
    assert_eq!(project_point_onto_segment(pos2(-20.0, 5.0), &segment), pos2(0.0, 0.0));
    assert_eq!(project_point_onto_segment(pos2(150.0, -5.0), &segment), pos2(100.0, 0.0));
    assert!(approx(distance_to_segment(pos2(40.0, 30.0), &segment), 30.0));
}

#[test]
fn test_projection_on_degenerate_segment() {
    let segment = Segment::new(pos2(5.0, 5.0), pos2(5.0, 5.0));
    assert_eq!(project_point_onto_segment(pos2(40.0, 30.0), &segment), pos2(5.0, 5.0));
    assert!(approx(segment.angle(), 0.0));
}

#[test]
fn test_nearest_wall_finds_closest() {
    let elements = vec![
        factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0),
        factory::create_wall(pos2(0.0, 100.0), pos2(100.0, 100.0), 24.0),
    ];
    let hit = nearest_wall(pos2(50.0, 80.0), walls(&elements)).unwrap();

    assert_eq!(hit.wall_id, elements[1].id());
    assert_eq!(hit.point, pos2(50.0, 100.0));
    assert!(approx(hit.distance, 20.0));
    assert!(approx(hit.angle, 0.0));
}

#[test]
fn test_nearest_wall_tie_keeps_first() {
    let elements = vec![
        factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0),
        factory::create_wall(pos2(0.0, 100.0), pos2(100.0, 100.0), 24.0),
    ];
    let hit = nearest_wall(pos2(50.0, 50.0), walls(&elements)).unwrap();
    assert_eq!(hit.wall_id, elements[0].id());
}

#[test]
fn test_nearest_wall_reports_angle() {
    let elements = vec![factory::create_wall(pos2(0.0, 0.0), pos2(0.0, 100.0), 24.0)];
    let hit = nearest_wall(pos2(10.0, 50.0), walls(&elements)).unwrap();
    assert!(approx(hit.angle, std::f32::consts::FRAC_PI_2));
    assert_eq!(hit.point, pos2(0.0, 50.0));
}

#[test]
fn test_nearest_wall_without_walls() {
    assert!(nearest_wall(pos2(0.0, 0.0), walls(&[])).is_none());
}

#[test]
fn test_nearest_wall_within_range() {
    let elements = vec![factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0)];
    assert!(nearest_wall_within(pos2(50.0, 20.0), walls(&elements), 30.0).is_some());
    assert!(nearest_wall_within(pos2(50.0, 40.0), walls(&elements), 30.0).is_none());
}
