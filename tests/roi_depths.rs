mod common;

use common::synthetic_rois::{roi, roi_json, scanfield_json, single_roi};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn single_scanfield_extends_to_every_depth() {
    init_logging();
    let roi = single_roi(128, 64, [0.5, -0.25], [3.0, 1.5]);
    for depth in [-250.0, 0.0, 3.5, 10_000.0] {
        let field = roi.get_field_at(depth).expect("single scanfield covers all depths");
        let g = field.geometry;
        assert_eq!(g.depth, depth);
        assert_eq!((g.width_px, g.height_px), (128, 64));
        assert_eq!((g.x_center_deg, g.y_center_deg), (0.5, -0.25));
        assert_eq!((g.width_deg, g.height_deg), (3.0, 1.5));
        assert_eq!(field.num_chunks(), 1);
    }
}

#[test]
fn continuous_mode_interpolates_every_attribute() {
    init_logging();
    let roi = roi(roi_json(
        false,
        &[0.0, 10.0],
        vec![
            scanfield_json(100, 100, [0.0, 1.0], [2.0, 2.0]),
            scanfield_json(300, 200, [1.0, -1.0], [4.0, 6.0]),
        ],
    ));
    let field = roi.get_field_at(5.0).expect("depth is covered");
    let g = field.geometry;
    assert_eq!(g.height_px, 150);
    assert_eq!(g.width_px, 200);
    assert_eq!(g.depth, 5.0);
    assert!(approx_eq(g.x_center_deg, 0.5));
    assert!(approx_eq(g.y_center_deg, 0.0));
    assert!(approx_eq(g.width_deg, 3.0));
    assert!(approx_eq(g.height_deg, 4.0));
}

#[test]
fn interpolated_pixel_sizes_are_even() {
    let roi = roi(roi_json(
        false,
        &[0.0, 10.0],
        vec![
            scanfield_json(100, 100, [0.0, 0.0], [1.0, 1.0]),
            scanfield_json(110, 103, [0.0, 0.0], [1.0, 1.0]),
        ],
    ));
    for depth in [1.0, 3.0, 5.0, 7.0, 9.0] {
        let g = roi.get_field_at(depth).expect("depth is covered").geometry;
        assert_eq!(g.height_px % 2, 0, "odd height at depth {depth}");
        assert_eq!(g.width_px % 2, 0, "odd width at depth {depth}");
    }
    // 101.5 px -> 102 px, 105 px -> 104 px (52.5 rounds to even).
    let g = roi.get_field_at(5.0).expect("depth is covered").geometry;
    assert_eq!((g.height_px, g.width_px), (102, 104));
}

#[test]
fn continuous_mode_is_absent_outside_scanfield_depths() {
    init_logging();
    let roi = roi(roi_json(
        false,
        &[20.0, -10.0, 5.0],
        vec![
            scanfield_json(64, 64, [0.0, 0.0], [1.0, 1.0]),
            scanfield_json(64, 64, [0.0, 0.0], [1.0, 1.0]),
            scanfield_json(64, 64, [0.0, 0.0], [1.0, 1.0]),
        ],
    ));
    assert!(roi.get_field_at(-10.0).is_some());
    assert!(roi.get_field_at(20.0).is_some());
    assert!(roi.get_field_at(0.0).is_some());
    assert!(roi.get_field_at(-10.5).is_none());
    assert!(roi.get_field_at(21.0).is_none());
    assert!(roi.get_field_at(1000.0).is_none());
}

#[test]
fn interpolated_roi_has_no_field_between_integer_depths() {
    let roi = roi(roi_json(
        false,
        &[0.0, 10.0],
        vec![
            scanfield_json(100, 100, [0.0, 0.0], [1.0, 1.0]),
            scanfield_json(100, 200, [0.0, 0.0], [1.0, 1.0]),
        ],
    ));
    assert!(roi.get_field_at(5.5).is_none());
    assert!(roi.get_field_at(0.25).is_none());
    assert!(roi.get_field_at(9.999).is_none());
    assert!(roi.get_field_at(5.0).is_some());
    assert!(roi.get_field_at(10.0).is_some());

    // A single scanfield still extends to any depth.
    let single = single_roi(32, 32, [0.0, 0.0], [1.0, 1.0]);
    assert_eq!(single.get_field_at(5.5).expect("covered").geometry.depth, 5.5);
}

#[test]
fn interpolation_uses_the_bracketing_pair() {
    let roi = roi(roi_json(
        false,
        &[0.0, 10.0, 30.0],
        vec![
            scanfield_json(64, 64, [0.0, 0.0], [1.0, 1.0]),
            scanfield_json(64, 64, [2.0, 0.0], [1.0, 1.0]),
            scanfield_json(64, 64, [-2.0, 0.0], [1.0, 1.0]),
        ],
    ));
    // Centres move out and back again; only depths need to be ordered.
    let g = roi.get_field_at(20.0).expect("depth is covered").geometry;
    assert!(approx_eq(g.x_center_deg, 0.0));
    let g = roi.get_field_at(25.0).expect("depth is covered").geometry;
    assert!(approx_eq(g.x_center_deg, -1.0));
}

#[test]
fn discrete_mode_last_definition_wins() {
    init_logging();
    let roi = roi(roi_json(
        true,
        &[5.0, 0.0, 5.0],
        vec![
            scanfield_json(64, 32, [0.0, 0.0], [1.0, 1.0]),
            scanfield_json(16, 16, [9.0, 9.0], [1.0, 1.0]),
            scanfield_json(128, 96, [1.0, 2.0], [3.0, 4.0]),
        ],
    ));
    let g = roi.get_field_at(5.0).expect("depth 5 is defined").geometry;
    assert_eq!((g.width_px, g.height_px), (128, 96));
    assert_eq!((g.x_center_deg, g.y_center_deg), (1.0, 2.0));

    let g = roi.get_field_at(0.0).expect("depth 0 is defined").geometry;
    assert_eq!((g.width_px, g.height_px), (16, 16));

    assert!(roi.get_field_at(2.5).is_none());
    assert!(roi.get_field_at(6.0).is_none());
}

#[test]
fn discrete_mode_single_scanfield_is_not_extended() {
    let roi = roi(roi_json(
        true,
        &[3.0],
        vec![scanfield_json(64, 64, [0.0, 0.0], [1.0, 1.0])],
    ));
    assert!(roi.get_field_at(3.0).is_some());
    assert!(roi.get_field_at(4.0).is_none());
}

#[test]
fn scanfields_are_built_once() {
    let roi = single_roi(32, 32, [0.0, 0.0], [1.0, 1.0]);
    let first = roi.scanfields();
    let second = roi.scanfields();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn fields_are_independent_of_the_roi() {
    let roi = single_roi(32, 32, [0.0, 0.0], [1.0, 1.0]);
    let mut field = roi.get_field_at(1.0).expect("covered");
    field.geometry.height_px = 2;
    field.geometry.x_center_deg = 40.0;
    let again = roi.get_field_at(1.0).expect("covered");
    assert_eq!(again.geometry.height_px, 32);
    assert_eq!(again.geometry.x_center_deg, 0.0);
}
