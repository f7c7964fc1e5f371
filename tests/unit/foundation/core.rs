use super::*;

#[test]
fn canvas_rejects_zero_sizes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(1600, 800).unwrap();
    assert_eq!(c.aspect(), 2.0);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_duration_matches_rate() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_floor(2.0), 120);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
}
