use super::*;
use crate::{foundation::config::RenderConfig, sampling::path_sampler::SampledPoint};

fn scene(w: u32, h: u32) -> CpuScene {
    CpuScene::new(
        Canvas::new(w, h).unwrap(),
        SceneStyle::from(&RenderConfig::default()),
    )
    .unwrap()
}

fn sampled(points: &[Point]) -> Vec<SampledPoint> {
    points
        .iter()
        .enumerate()
        .map(|(index, &position)| SampledPoint { index, position })
        .collect()
}

#[test]
fn empty_frame_is_background() {
    let mut s = scene(16, 8);
    s.begin_frame().unwrap();
    let frame = s.finish().unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.data.len(), 16 * 8 * 4);
    assert_eq!(frame.pixel(3, 5), Some([255, 255, 255, 255]));
}

#[test]
fn only_visible_points_are_drawn() {
    let mut s = scene(32, 32);
    s.set_view(Affine::translate((0.5, 0.5)));
    s.begin_frame().unwrap();
    let points = sampled(&[Point::new(8.0, 8.0), Point::new(24.0, 24.0)]);
    s.submit_points(PointSet {
        name: "A",
        points: &points,
        visibility: &[1, 0],
        transform: Affine::IDENTITY,
    })
    .unwrap();
    assert_eq!(s.draw_counts(), (1, 0));

    let frame = s.finish().unwrap();
    let drawn = frame.pixel(8, 8).unwrap();
    assert!(drawn[0] < 128, "{drawn:?}");
    assert_eq!(frame.pixel(24, 24), Some([255, 255, 255, 255]));
}

#[test]
fn segments_must_come_in_pairs() {
    let mut s = scene(8, 8);
    s.begin_frame().unwrap();
    let err = s
        .submit_segments(SegmentSet {
            vertices: &[Point::ORIGIN],
            dirty: true,
        })
        .unwrap_err();
    assert!(matches!(err, GlyphTrailError::Render(_)));
}

#[test]
fn mismatched_visibility_is_rejected() {
    let mut s = scene(8, 8);
    s.begin_frame().unwrap();
    let points = sampled(&[Point::ORIGIN]);
    let err = s
        .submit_points(PointSet {
            name: "A",
            points: &points,
            visibility: &[],
            transform: Affine::IDENTITY,
        })
        .unwrap_err();
    assert!(matches!(err, GlyphTrailError::Render(_)));
}

#[test]
fn connectors_darken_the_line() {
    let mut s = CpuScene::new(
        Canvas::new(32, 8).unwrap(),
        SceneStyle {
            line_rgba8: [0, 0, 0, 255],
            line_width_px: 2.0,
            ..SceneStyle::from(&RenderConfig::default())
        },
    )
    .unwrap();
    s.begin_frame().unwrap();
    s.submit_segments(SegmentSet {
        vertices: &[Point::new(0.0, 4.0), Point::new(32.0, 4.0)],
        dirty: true,
    })
    .unwrap();
    assert_eq!(s.draw_counts(), (0, 1));
    let frame = s.finish().unwrap();
    assert!(frame.pixel(16, 3).unwrap()[0] < 128);
    assert_eq!(frame.pixel(16, 0), Some([255, 255, 255, 255]));
}

#[test]
fn oversized_surface_is_rejected() {
    let err = CpuScene::new(
        Canvas::new(70_000, 10).unwrap(),
        SceneStyle::from(&RenderConfig::default()),
    )
    .err()
    .unwrap();
    assert!(matches!(err, GlyphTrailError::Render(_)));
}
