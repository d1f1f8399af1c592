use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use strip_builder_core::prelude::*;

#[test]
fn rgb_frames_become_opaque_rgba() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let rgb = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
    DynamicImage::ImageRgb8(rgb)
        .save(tmp.path().join("f0.png"))
        .expect("save");

    let frames = collect_frames(tmp.path(), "png").expect("collect");
    let strip = build_strip("walk", &frames).expect("strip");
    assert_eq!(strip.frame_count, 1);
    assert_eq!(*strip.rgba.get_pixel(2, 1), Rgba([10, 20, 30, 255]));
}

#[test]
fn corrupt_frame_aborts_with_its_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    RgbaImage::new(4, 4)
        .save(tmp.path().join("f0.png"))
        .expect("save");
    fs::write(tmp.path().join("f1.png"), b"not a png at all").expect("write");
    RgbaImage::new(4, 4)
        .save(tmp.path().join("f2.png"))
        .expect("save");

    let frames = collect_frames(tmp.path(), "png").expect("collect");
    assert_eq!(frames.len(), 3);
    match build_strip("broken", &frames) {
        Err(StripError::Decode { path, .. }) => {
            assert_eq!(path.file_name().and_then(|s| s.to_str()), Some("f1.png"));
        }
        other => panic!("expected decode error, got {:?}", other.map(|s| s.frame_count)),
    }
}

#[test]
fn strip_round_trips_through_png() {
    let tmp = tempfile::tempdir().expect("tempdir");
    RgbaImage::from_pixel(2, 3, Rgba([1, 2, 3, 4]))
        .save(tmp.path().join("a0.png"))
        .expect("save");
    RgbaImage::from_pixel(3, 2, Rgba([5, 6, 7, 8]))
        .save(tmp.path().join("a1.png"))
        .expect("save");
    let frames = collect_frames(tmp.path(), "png").expect("collect");
    let strip = build_strip("a", &frames).expect("strip");

    let out = tmp.path().join("a_strip.png");
    strip.save(&out).expect("save strip");
    let reread = image::open(&out).expect("open").to_rgba8();
    assert_eq!(reread.dimensions(), (6, 3));
    assert_eq!(reread, strip.rgba);

    let bytes = strip.encode_png().expect("encode");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded, strip.rgba);

    let rec = strip.record("a.png");
    assert_eq!((rec.frame_width, rec.frame_height), (3, 3));
    assert_eq!((rec.width, rec.height), (6, 3));
}
