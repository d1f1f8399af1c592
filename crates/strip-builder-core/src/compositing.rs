use image::RgbaImage;

/// Copy all of `src` into `canvas` with its top-left corner at (dx, dy).
///
/// Pixels are replaced, not blended, so source alpha lands in the canvas
/// unchanged. Anything falling outside the canvas is clipped.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        let ty = dy.saturating_add(yy);
        if ty >= ch {
            break;
        }
        for xx in 0..sw {
            let tx = dx.saturating_add(xx);
            if tx >= cw {
                break;
            }
            canvas.put_pixel(tx, ty, *src.get_pixel(xx, yy));
        }
    }
}

/// Top-left origin of cell `index` in a horizontal strip of `cell_w`-wide cells.
pub fn cell_origin(index: usize, cell_w: u32) -> (u32, u32) {
    (index as u32 * cell_w, 0)
}
