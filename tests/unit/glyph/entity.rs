use super::*;
use crate::foundation::core::{BezPath, Vec2};

fn line_points(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
}

fn motion(speed: f64, span: f64, phase_offset: f64) -> GlyphMotion {
    GlyphMotion {
        speed,
        span,
        phase_offset,
    }
}

#[test]
fn edges_track_window_bounds() {
    let mut g = Glyph::from_points("T", &line_points(20), motion(10.0, 4.0, 0.0));
    assert_eq!(g.edge1(), Some(Point::new(0.0, 0.0)));
    assert_eq!(g.edge2(), Some(Point::new(0.0, 0.0)));

    g.update(0.5);
    assert_eq!(g.edge1(), Some(Point::new(5.0, 0.0)));
    assert_eq!(g.edge2(), Some(Point::new(9.0, 0.0)));

    g.update(1.5);
    // progress 20 -> start 0, end 4
    assert_eq!(g.edge1(), Some(Point::new(0.0, 0.0)));
    assert_eq!(g.edge2(), Some(Point::new(4.0, 0.0)));
}

#[test]
fn visibility_buffer_matches_point_count_forever() {
    let mut g = Glyph::from_points("O1", &line_points(33), motion(50.0, 50.0, 7.0));
    assert_eq!(g.visibility().len(), g.len());
    assert!(g.visibility().iter().all(|v| *v == 1));
    for _ in 0..100 {
        g.update(1.0 / 60.0);
        assert_eq!(g.visibility().len(), 33);
    }
}

#[test]
fn speed_and_span_are_externally_mutable() {
    let mut g = Glyph::from_points("K", &line_points(100), motion(0.0, 0.0, 0.0));
    g.update(1.0);
    assert_eq!(g.bounds().map(|b| (b.start, b.end)), Some((0, 0)));

    g.speed = 10.0;
    g.span = 5.0;
    g.update(1.0);
    assert_eq!(g.bounds().map(|b| (b.start, b.end)), Some((10, 15)));
    assert_eq!(g.visibility().iter().filter(|v| **v == 0).count(), 6);
}

#[test]
fn empty_glyph_has_no_anchors_and_does_not_panic() {
    let mut g = Glyph::from_points("E", &[], motion(50.0, 50.0, 0.0));
    assert!(g.is_empty());
    assert_eq!(g.update(1.0), None);
    assert_eq!(g.edge1(), None);
    assert_eq!(g.edge2(), None);
}

#[test]
fn new_samples_and_places_source() {
    let source = VectorGlyph::from_subpaths(
        "D",
        100.0,
        100.0,
        vec![BezPath::from_svg("M0 0 L100 0 L100 100 L0 100 Z").unwrap()],
    );
    let sampler = PathSampler::default();
    let placement = Placement {
        scale: 0.01,
        offset: Vec2::new(240.0, 0.0),
        height: source.height,
    };
    let g = Glyph::new("D", &source, &sampler, &placement, motion(50.0, 50.0, 0.0));
    assert_eq!(g.len(), 300);
    assert_eq!(g.width(), 100.0);
    let first = g.points()[0].position;
    assert!((first.x - 2.4).abs() < 1e-9);
    assert!((first.y - 0.5).abs() < 1e-9);
}

#[test]
fn targets_are_recorded_per_edge() {
    let mut g = Glyph::from_points("Y", &line_points(4), motion(1.0, 1.0, 0.0));
    let slot = SlotId {
        glyph: 3,
        edge: Edge::End,
        draw: 1,
    };
    g.push_target(Edge::Start, slot);
    assert_eq!(g.targets(Edge::Start), &[slot]);
    assert!(g.targets(Edge::End).is_empty());
    assert_eq!(Edge::Start.tag(), "e1");
    assert_eq!(Edge::End.tag(), "e2");
}
