use super::*;

fn sampler(division: u32) -> PathSampler {
    PathSampler {
        division,
        ..PathSampler::default()
    }
}

fn path(d: &str) -> BezPath {
    BezPath::from_svg(d).unwrap()
}

fn assert_close(a: Point, b: Point) {
    assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn allocation_is_proportional_and_rounds_up() {
    let s = sampler(300);
    assert_eq!(s.allocate(&[100.0, 300.0]), vec![75, 225]);
    assert_eq!(s.allocate(&[1.0, 1.0, 1.0]), vec![100, 100, 100]);
    assert_eq!(s.allocate(&[1.0, 2.0]), vec![100, 200]);
    // 300 * 1/7 = 42.86 -> 43, 300 * 6/7 = 257.14 -> 258
    assert_eq!(s.allocate(&[1.0, 6.0]), vec![43, 258]);
}

#[test]
fn zero_total_length_allocates_nothing() {
    let s = sampler(300);
    assert_eq!(s.allocate(&[0.0, 0.0]), vec![0, 0]);
    assert!(s.allocate(&[]).is_empty());
    assert!(s.sample_raw(&[path("M5 5 L5 5")]).is_empty());
}

#[test]
fn zero_length_subpath_contributes_no_points() {
    let s = sampler(10);
    let raw = s.sample_raw(&[path("M5 5 L5 5"), path("M0 0 L9 0")]);
    assert_eq!(raw.len(), 10);
    assert_close(raw[0], Point::new(0.0, 0.0));
    assert_close(raw[9], Point::new(9.0, 0.0));
}

#[test]
fn raw_count_matches_allocation_sum() {
    let s = sampler(300);
    let subpaths = [
        path("M0 0 L10 0 L10 10 L0 10 Z"),
        path("M20 0 L30 0"),
        path("M40 0 Q50 20 60 0"),
    ];
    let lengths: Vec<f64> = subpaths
        .iter()
        .map(|p| crate::assets::svg::contour_length(p, s.accuracy))
        .collect();
    let expected: usize = s.allocate(&lengths).iter().sum();
    assert_eq!(s.sample_raw(&subpaths).len(), expected);
}

#[test]
fn raw_samples_follow_glyph_subpath_lengths() {
    let s = sampler(7);
    let glyph = VectorGlyph::from_subpaths(
        "O",
        40.0,
        10.0,
        vec![path("M0 0 L10 0 L10 10 L0 10 Z"), path("M20 0 L40 0")],
    );
    let counts = s.allocate(&glyph.subpath_lengths(s.accuracy));
    assert_eq!(counts, [5, 3]);
    assert_eq!(s.sample_raw(&glyph.subpaths).len(), 8);
}

#[test]
fn closed_contour_is_spaced_without_repeating_start() {
    let s = sampler(4);
    let raw = s.sample_raw(&[path("M0 0 L10 0 L10 10 L0 10 Z")]);
    assert_eq!(raw.len(), 4);
    assert_close(raw[0], Point::new(0.0, 0.0));
    assert_close(raw[1], Point::new(10.0, 0.0));
    assert_close(raw[2], Point::new(10.0, 10.0));
    assert_close(raw[3], Point::new(0.0, 10.0));
}

#[test]
fn open_contour_includes_both_endpoints() {
    let s = sampler(3);
    let raw = s.sample_raw(&[path("M0 0 L10 0")]);
    assert_eq!(raw.len(), 3);
    assert_close(raw[0], Point::new(0.0, 0.0));
    assert_close(raw[1], Point::new(5.0, 0.0));
    assert_close(raw[2], Point::new(10.0, 0.0));
}

#[test]
fn dedup_collapses_seams_and_wraps() {
    let s = sampler(1);
    let raw = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.005),
        Point::new(2.0, 0.0),
        Point::new(0.0, 0.0),
    ];
    let kept = s.dedup(&raw);
    assert_eq!(
        kept,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.005),
            Point::new(2.0, 0.0),
        ]
    );
}

#[test]
fn retained_neighbors_are_farther_than_threshold() {
    let s = sampler(300);
    // The open stroke ends exactly where the next contour starts.
    let subpaths = [
        path("M0 0 L100 0"),
        path("M100 0 L100 100 L0 100 Z"),
        path("M30 30 C40 10 60 10 70 30"),
    ];
    let raw = s.sample_raw(&subpaths);
    let kept = s.dedup(&raw);
    assert!(kept.len() < raw.len());
    for i in 0..kept.len() {
        let next = kept[(i + 1) % kept.len()];
        assert!(kept[i].distance(next) > s.dedup_threshold, "i={i}");
    }
}

#[test]
fn placement_scales_flips_and_centers() {
    let placement = Placement {
        scale: 0.01,
        offset: Vec2::new(100.0, 0.0),
        height: 200.0,
    };
    let p = placement.apply(Point::new(10.0, 20.0));
    assert!((p.x - 1.1).abs() < 1e-12);
    assert!((p.y - 0.8).abs() < 1e-12);
}

#[test]
fn sample_indexes_points_in_traversal_order() {
    let s = sampler(8);
    let glyph = VectorGlyph::from_subpaths(
        "box",
        10.0,
        10.0,
        vec![path("M0 0 L10 0 L10 10 L0 10 Z")],
    );
    let placement = Placement {
        scale: 1.0,
        offset: Vec2::ZERO,
        height: 10.0,
    };
    let points = s.sample(&glyph, &placement);
    assert_eq!(points.len(), 8);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(p.index, i);
    }
    assert_close(points[0].position, Point::new(0.0, 5.0));
    assert_close(points[2].position, Point::new(10.0, 5.0));
}
