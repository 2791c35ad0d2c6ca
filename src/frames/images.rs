//! Module for reading walk frames out of image files.

use std::path::Path;

use image::imageops::FilterType;
use image::{GenericImageView, Rgba};
pub use image::ImageResult;
use smallvec::smallvec;

use super::*;

impl Frame {
    /// Reads a frame from an image file.
    ///
    /// The file can be in any image format supported by [`image::open()`],
    /// decided by the file extension given.
    ///
    /// Pixels with an alpha value above 128 become set pixels; color
    /// information in the file is discarded in favor of `color`. Art wider
    /// than [`MAX_FRAME_WIDTH`] is rescaled to fit, preserving aspect
    /// ratio, with nearest neighbor sampling.
    pub fn from_image_path<P: AsRef<Path>>(path: P, color: Option<Color>) -> ImageResult<Self> {
        let mut img = image::open(path)?;
        if img.width() > MAX_FRAME_WIDTH as u32 {
            let height = (img.height() * MAX_FRAME_WIDTH as u32 / img.width()).max(1);
            img = img.resize_exact(MAX_FRAME_WIDTH as u32, height, FilterType::Nearest);
        }
        let width = img.width() as u16;
        let mut rows: SmallVec<[u32; FRAME_STACK_SIZE]> = smallvec![0; img.height() as usize];
        for (x, y, Rgba([_, _, _, a])) in img.pixels() {
            if a > 128 {
                rows[y as usize] |= 1 << x;
            }
        }
        Ok(Self { rows, width, color })
    }
}

impl WalkCycle {
    /// Loads a full walk cycle from a directory, following the
    /// `walk[-white]{1..4}.png` naming convention for the given variant.
    pub fn from_image_dir<P: AsRef<Path>>(dir: P, variant: Variant) -> ImageResult<Self> {
        let tint = variant.tint();
        let mut frames = Vec::with_capacity(WALK_FRAMES);
        for n in 1..=WALK_FRAMES {
            let path = dir.as_ref().join(format!("{}.png", variant.frame_name(n)));
            frames.push(Frame::from_image_path(path, tint)?);
        }
        let frames: [Frame; WALK_FRAMES] = frames
            .try_into()
            .expect("loop should load exactly one frame per slot");
        Ok(Self::new(frames))
    }
}
