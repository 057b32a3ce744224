//! Rounded-rectangle stencil masks.

use crate::draw;
use crate::palette::TRANSPARENT;
use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Build a single-channel mask of `width × height`, 255 inside a rounded
/// rectangle spanning the whole buffer and 0 outside it.
///
/// A radius larger than half the smaller side is clamped, which yields a
/// stadium or circle.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let shape = draw::RoundedRect::new(0, 0, width as i32, height as i32, radius as i32);

    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        if shape.contains(x as i32, y as i32) {
            *pixel = Luma([255]);
        }
    }

    mask
}

/// Stencil `image` through `mask` onto a fresh transparent buffer.
///
/// Pixels where the mask is zero become fully transparent; elsewhere the
/// source colour is kept and its alpha scaled by the mask intensity.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let mut output = RgbaImage::from_pixel(image.width(), image.height(), TRANSPARENT);

    for (x, y, pixel) in output.enumerate_pixels_mut() {
        if x >= mask.width() || y >= mask.height() {
            continue;
        }

        let coverage = mask.get_pixel(x, y)[0] as u32;
        if coverage == 0 {
            continue;
        }

        let src = image.get_pixel(x, y);
        let alpha = (src[3] as u32 * coverage / 255) as u8;
        *pixel = Rgba([src[0], src[1], src[2], alpha]);
    }

    output
}
