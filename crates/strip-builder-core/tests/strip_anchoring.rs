use image::{Rgba, RgbaImage};
use strip_builder_core::prelude::*;

fn patterned(w: u32, h: u32, seed: u8) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let a = if (x + y) % 3 == 0 { 128 } else { 255 };
            img.put_pixel(
                x,
                y,
                Rgba([seed, x as u8 * 10, y as u8 * 10, a]),
            );
        }
    }
    img
}

#[test]
fn frames_are_pasted_unscaled_at_cell_origin() {
    let frames = vec![patterned(4, 3, 10), patterned(6, 5, 20), patterned(2, 5, 30)];
    let (strip, (cw, ch)) = compose_strip(&frames).expect("compose");
    assert_eq!((cw, ch), (6, 5));

    for (i, f) in frames.iter().enumerate() {
        let ox = i as u32 * cw;
        for y in 0..ch {
            for x in 0..cw {
                let got = *strip.get_pixel(ox + x, y);
                if x < f.width() && y < f.height() {
                    assert_eq!(got, *f.get_pixel(x, y), "frame {} pixel ({},{})", i, x, y);
                } else {
                    assert_eq!(got[3], 0, "padding not transparent at frame {} ({},{})", i, x, y);
                }
            }
        }
    }
}

#[test]
fn translucent_source_pixels_are_copied_not_blended() {
    let f = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 64]));
    let (strip, _) = compose_strip(&[f]).expect("compose");
    assert_eq!(*strip.get_pixel(1, 1), Rgba([200, 100, 50, 64]));
}
