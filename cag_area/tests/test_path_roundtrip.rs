mod test_utils;

use cag_area::{
    core::math::{vec2, Transform2D},
    path::{FlattenOptions, PathCommand},
    Region, RegionError, WindingRule,
};
use test_utils::*;

fn rebuild(region: &Region<f64>) -> Region<f64> {
    Region::from_path(region.path_iter(None), WindingRule::NonZero).unwrap()
}

fn ring() -> Region<f64> {
    let mut r = circle(0.0, 0.0, 10.0);
    r.subtract(&circle(0.0, 0.0, 5.0)).unwrap();
    r
}

#[test]
fn rect_exports_canonical_commands() {
    let r = Region::from_rect(1.0, 2.0, 3.0, 4.0);
    let cmds: Vec<_> = r.path_iter(None).collect();
    assert_eq!(
        cmds,
        vec![
            PathCommand::MoveTo(vec2(1.0, 2.0)),
            PathCommand::LineTo(vec2(1.0, 6.0)),
            PathCommand::LineTo(vec2(4.0, 6.0)),
            PathCommand::LineTo(vec2(4.0, 2.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn export_then_rebuild_is_equal() {
    let shapes = vec![
        ("rect", rect(0.0, 0.0, 10.0, 5.0)),
        ("circle", circle(3.0, 4.0, 6.0)),
        ("ring", ring()),
        (
            "concave",
            polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 3.0), (0.0, 10.0)]),
        ),
    ];
    for (name, r) in shapes {
        let rebuilt = rebuild(&r);
        assert!(rebuilt.is_equal(&r).unwrap(), "{}", name);
        assert!(r.is_equal(&rebuilt).unwrap(), "{}", name);
        assert!(
            aabb_fuzzy_eq_eps(&rebuilt.bounds().unwrap(), &r.bounds().unwrap(), 1e-9),
            "{}",
            name
        );
    }
}

#[test]
fn ring_exports_two_subpaths() {
    let r = ring();
    let cmds: Vec<_> = r.path_iter(None).collect();
    let moves = cmds
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo(_)))
        .count();
    let closes = cmds.iter().filter(|c| **c == PathCommand::Close).count();
    assert_eq!(moves, 2);
    assert_eq!(closes, 2);
    assert!(!r.is_singular());
    assert!(!r.contains_point(0.0, 0.0));
    assert!(r.contains_point(7.5, 0.0));
}

#[test]
fn export_with_transform_matches_transformed() {
    let t = Transform2D::translate(16.0, -8.0);
    for r in [rect(0.0, 0.0, 4.0, 2.0), ring()] {
        let via_path = Region::from_path(r.path_iter(Some(&t)), WindingRule::NonZero).unwrap();
        let via_transform = r.transformed(&t).unwrap();
        assert!(via_path.is_equal(&via_transform).unwrap());
    }
}

#[test]
fn scale_round_trip_is_exact() {
    // scaling by powers of two loses no precision
    let original = ring();
    let mut r = original.clone();
    r.transform(&Transform2D::scale(2.0, 2.0)).unwrap();
    assert!(aabb_fuzzy_eq_eps(
        &r.bounds().unwrap(),
        &cag_area::AABB::new(-20.0, -20.0, 20.0, 20.0),
        1e-9
    ));
    r.transform(&Transform2D::scale(0.5, 0.5)).unwrap();
    assert!(r.is_equal(&original).unwrap());
}

#[test]
fn translate_round_trip_of_integer_polygon() {
    let original = polygon(&[(0.0, 0.0), (8.0, 1.0), (6.0, 7.0), (1.0, 5.0)]);
    let mut r = original.clone();
    r.transform(&Transform2D::translate(32.0, 64.0)).unwrap();
    assert!(!r.is_equal(&original).unwrap());
    r.transform(&Transform2D::translate(-32.0, -64.0)).unwrap();
    assert!(r.is_equal(&original).unwrap());
}

#[test]
fn non_finite_transform_is_rejected() {
    let mut r = rect(0.0, 0.0, 1.0, 1.0);
    let before = r.clone();
    let bad = Transform2D::new(f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0);
    assert!(matches!(
        r.transform(&bad),
        Err(RegionError::InvalidArgument(_))
    ));
    assert!(r.is_equal(&before).unwrap());
}

#[test]
fn flattening_emits_only_lines() {
    let options = FlattenOptions {
        tolerance: 1e-3,
        recursion_limit: 12,
    };
    let r = ring();
    let flat: Vec<_> = r.flattened_path(None, &options).unwrap().collect();
    assert!(flat.iter().all(|c| matches!(
        c,
        PathCommand::MoveTo(_) | PathCommand::LineTo(_) | PathCommand::Close
    )));
    // flattened copy encloses nearly the same area
    let area = region_area(&r);
    let expected = std::f64::consts::PI * (100.0 - 25.0);
    assert!((area - expected).abs() / expected < 1e-3, "{}", area);

    let rebuilt = Region::from_path(flat, WindingRule::NonZero).unwrap();
    assert!(rebuilt.is_polygonal());
    assert!(!r.is_polygonal());
    assert!(rebuilt.contains_point(7.5, 0.0));
    assert!(!rebuilt.contains_point(0.0, 0.0));
}

#[test]
fn flattening_rejects_non_positive_tolerance() {
    let r = circle(0.0, 0.0, 1.0);
    for tolerance in [0.0, -1.0, f64::NAN] {
        let options = FlattenOptions {
            tolerance,
            recursion_limit: 4,
        };
        assert!(matches!(
            r.flattened_path(None, &options),
            Err(RegionError::InvalidArgument(_))
        ));
    }
}

#[test]
fn empty_region_exports_nothing() {
    let r = Region::<f64>::new();
    assert_eq!(r.path_iter(None).next(), None);
    assert!(rebuild(&r).is_empty());
}

#[test]
fn shared_top_vertex_survives_rebuild() {
    let top = (97.64076786719825, 5.333649193639477);
    let shapes = [
        vec![top, (80.0, 13.35), (90.0, 12.0)],
        vec![top, (99.0, 13.35), (110.0, 12.0)],
        vec![top, (97.0, 13.35), (97.62, 9.1), (97.64, 13.0)],
    ];
    for points in shapes {
        let mut r = Region::new();
        r.add(&Region::from_path(polygon_commands(&points), WindingRule::EvenOdd).unwrap())
            .unwrap();
        assert_eq!(
            r.path_iter(None).next(),
            Some(PathCommand::MoveTo(vec2(top.0, top.1)))
        );
        for rule in [WindingRule::NonZero, WindingRule::EvenOdd] {
            let rebuilt = Region::from_path(r.path_iter(None), rule).unwrap();
            assert!(rebuilt.is_equal(&r).unwrap(), "{:?} {:?}", points, rule);
            assert_eq!(
                rebuilt.path_iter(None).next(),
                Some(PathCommand::MoveTo(vec2(top.0, top.1)))
            );
        }
    }
}
