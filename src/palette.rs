//! Fixed colours shared by the icon and banner renderers.

use image::{Rgb, Rgba};

/// Blue at the centre of the icon disc; also used for the banner rule.
pub const PRIMARY: Rgb<u8> = Rgb([41, 128, 185]);

/// Lighter blue at the rim of the icon disc.
pub const SECONDARY: Rgb<u8> = Rgb([52, 152, 219]);

/// White, for the TV frame, the stand and the banner title.
pub const ACCENT: Rgb<u8> = Rgb([255, 255, 255]);

/// Dark blue-grey, for outlines, the screen and the banner background.
pub const BACKGROUND: Rgb<u8> = Rgb([44, 62, 80]);

/// Semi-transparent black used for the title drop shadow.
pub const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 128]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Fully opaque version of `color`.
pub fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}
