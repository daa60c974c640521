use image::RgbaImage;

use crate::{Rect, Result, SliceError};

/// Copy the given region of `image` into a new, independently owned
/// image. The input is never mutated.
///
/// Rectangle components are truncated to whole pixels. The region must
/// lie fully inside the image: nothing is clamped, a rectangle that
/// reaches outside fails with `OutOfBounds`. A zero-area rectangle
/// produces an empty image, not an error. Channel order and bit depth
/// pass through unchanged.
pub fn crop(image: &RgbaImage, rect: Rect) -> Result<RgbaImage> {
    if rect.width < 0.0 || rect.height < 0.0 {
        return Err(SliceError::InvalidArgument(format!(
            "Negative crop size: {}x{}",
            rect.width, rect.height
        )));
    }
    if rect.x < 0.0 || rect.y < 0.0 {
        return Err(SliceError::OutOfBounds(format!(
            "Crop origin ({},{}) outside image",
            rect.x, rect.y
        )));
    }
    let x = rect.x as usize;
    let y = rect.y as usize;
    let w = rect.width as usize;
    let h = rect.height as usize;
    let (img_w, img_h) = image.dimensions();
    if x + w > img_w as usize || y + h > img_h as usize {
        return Err(SliceError::OutOfBounds(format!(
            "Crop region {}x{} at ({},{}) exceeds image bounds {}x{}",
            w, h, x, y, img_w, img_h
        )));
    }

    let src = image.as_raw();
    let bpp = 4; // bytes per pixel
    let src_stride = bpp * img_w as usize;
    let mut data: Vec<u8> = Vec::with_capacity(bpp * w * h);
    for row in y..y + h {
        let ofs = row * src_stride + bpp * x;
        data.extend_from_slice(&src[ofs..ofs + bpp * w]);
    }
    // Buffer length matches the output dimensions by construction.
    Ok(RgbaImage::from_raw(w as u32, h as u32, data).unwrap())
}
