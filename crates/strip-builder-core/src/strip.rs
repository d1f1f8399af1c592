use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::{debug, instrument};

use crate::collect::FrameFile;
use crate::compositing::{blit_rgba, cell_origin};
use crate::error::{Result, StripError};
use crate::model::StripRecord;

/// A horizontal sprite strip: `frame_count` equal cells laid out left to right.
#[derive(Debug, Clone)]
pub struct Strip {
    /// Animation name (source directory basename).
    pub name: String,
    pub rgba: RgbaImage,
    /// Cell width: widest frame of the animation.
    pub frame_width: u32,
    /// Cell height: tallest frame of the animation.
    pub frame_height: u32,
    pub frame_count: usize,
}

impl Strip {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Report record for this strip written as `file_name`.
    pub fn record(&self, file_name: impl Into<String>) -> StripRecord {
        StripRecord {
            name: self.name.clone(),
            file_name: file_name.into(),
            frame_count: self.frame_count,
            frame_width: self.frame_width,
            frame_height: self.frame_height,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Writes the strip as PNG (lossless) to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.rgba
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| StripError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Encodes the strip as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.rgba
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}

/// Decodes one frame file to RGBA8; images without alpha become fully opaque.
pub fn decode_frame(path: &Path) -> Result<RgbaImage> {
    let decode = || -> image::ImageResult<DynamicImage> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };
    let decoded = decode().map_err(|source| StripError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}

/// Decodes every frame in order. The first failure aborts; bad frames are
/// never skipped, so cell `i` always holds the `i`-th sorted frame.
pub fn load_frames(frames: &[FrameFile]) -> Result<Vec<RgbaImage>> {
    let mut images = Vec::with_capacity(frames.len());
    for f in frames {
        let rgba = decode_frame(&f.path)?;
        debug!(frame = %f.name, w = rgba.width(), h = rgba.height(), "decoded frame");
        images.push(rgba);
    }
    Ok(images)
}

/// Cell size for a set of frames: (max width, max height). `None` when empty.
pub fn cell_size(images: &[RgbaImage]) -> Option<(u32, u32)> {
    if images.is_empty() {
        return None;
    }
    let w = images.iter().map(|i| i.width()).max().unwrap_or(0);
    let h = images.iter().map(|i| i.height()).max().unwrap_or(0);
    Some((w, h))
}

/// Lays `images` out left to right in equal cells, each anchored top-left.
///
/// Returns the strip canvas and the cell size. Unfilled cell area stays fully
/// transparent; frames are never scaled, centered or trimmed.
pub fn compose_strip(images: &[RgbaImage]) -> Result<(RgbaImage, (u32, u32))> {
    let (cell_w, cell_h) = cell_size(images).ok_or(StripError::Empty)?;
    let strip_w = u32::try_from(images.len())
        .ok()
        .and_then(|n| n.checked_mul(cell_w))
        .ok_or(StripError::TooLarge {
            frames: images.len(),
            cell_w,
            cell_h,
        })?;
    // RgbaImage::new is zero-filled, i.e. transparent black.
    let mut canvas = RgbaImage::new(strip_w, cell_h);
    for (i, img) in images.iter().enumerate() {
        let (dx, dy) = cell_origin(i, cell_w);
        blit_rgba(img, &mut canvas, dx, dy);
    }
    Ok((canvas, (cell_w, cell_h)))
}

#[instrument(skip_all, fields(animation = %name, frames = frames.len()))]
/// Builds the strip for one animation from its naturally ordered frame files.
///
/// `frames` must be non-empty; callers skip empty animations beforehand.
pub fn build_strip(name: &str, frames: &[FrameFile]) -> Result<Strip> {
    if frames.is_empty() {
        return Err(StripError::Empty);
    }
    let images = load_frames(frames)?;
    let (rgba, (frame_width, frame_height)) = compose_strip(&images)?;
    Ok(Strip {
        name: name.to_string(),
        rgba,
        frame_width,
        frame_height,
        frame_count: images.len(),
    })
}
