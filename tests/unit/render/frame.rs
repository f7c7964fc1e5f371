use super::*;

#[test]
fn pixel_lookup_is_row_major() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: (0u8..16).collect(),
        premultiplied: false,
    };
    assert_eq!(frame.pixel(0, 0), Some([0, 1, 2, 3]));
    assert_eq!(frame.pixel(1, 1), Some([12, 13, 14, 15]));
    assert_eq!(frame.pixel(2, 0), None);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let out = unpremultiply_rgba8(&[64, 0, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0]);
    assert_eq!(&out[0..4], &[128, 0, 0, 128]);
    assert_eq!(&out[4..8], &[10, 20, 30, 255]);
    assert_eq!(&out[8..12], &[0, 0, 0, 0]);
}

#[test]
fn write_png_rejects_short_buffers() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 3],
        premultiplied: true,
    };
    let err = frame
        .write_png(&std::env::temp_dir().join("glyphtrail_short.png"))
        .unwrap_err();
    assert!(matches!(err, GlyphTrailError::Render(_)));
}
