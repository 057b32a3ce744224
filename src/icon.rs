//! The TV launcher icon: a radial-gradient disc with a TV drawn on top.

use crate::draw::{self, Outline, RoundedRect};
use crate::mask;
use crate::palette::{self, ACCENT, BACKGROUND, PRIMARY, SECONDARY, TRANSPARENT};
use image::{Rgba, RgbaImage};

/// Render a `size × size` icon. With `rounded`, the result is stencilled
/// through a rounded-square mask whose corner radius is `size / 8`.
pub fn render_icon(size: u32, rounded: bool) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);

    paint_gradient_disc(&mut img);
    draw_tv(&mut img);

    if rounded {
        let mask = mask::rounded_rect_mask(size, size, size / 8);
        return mask::apply_mask(&img, &mask);
    }

    img
}

/// Colour every pixel inside the inscribed circle, blending from the
/// primary colour at the centre to the secondary colour at the rim.
fn paint_gradient_disc(img: &mut RgbaImage) {
    let radius = img.width() as f64 / 2.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f64 - radius;
        let dy = y as f64 - radius;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < radius {
            *pixel = gradient_color(distance / radius);
        }
    }
}

fn gradient_color(ratio: f64) -> Rgba<u8> {
    let lerp = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * ratio) as u8;
    Rgba([
        lerp(PRIMARY[0], SECONDARY[0]),
        lerp(PRIMARY[1], SECONDARY[1]),
        lerp(PRIMARY[2], SECONDARY[2]),
        255,
    ])
}

fn draw_tv(img: &mut RgbaImage) {
    let size = img.width() as i32;
    let accent = palette::opaque(ACCENT);
    let background = palette::opaque(BACKGROUND);
    let outline = Some(Outline {
        color: background,
        width: (size / 50).max(1),
    });

    let padding = size / 5;
    let screen_width = size - 2 * padding;
    let screen_height = (screen_width as f64 * 0.6) as i32;
    let (screen_x, screen_y) = (padding, padding);

    // Frame
    let frame = RoundedRect::new(
        screen_x,
        screen_y,
        screen_x + screen_width,
        screen_y + screen_height,
        size / 20,
    );
    draw::fill_rounded_rect(img, frame, accent, outline);

    // Screen
    let inner_padding = size / 25;
    let screen = RoundedRect::new(
        screen_x + inner_padding,
        screen_y + inner_padding,
        screen_x + screen_width - inner_padding,
        screen_y + screen_height - inner_padding,
        size / 25,
    );
    draw::fill_rounded_rect(img, screen, background, None);

    // Stand
    let stand_width = screen_width / 3;
    let stand_height = size / 10;
    let stand_x = screen_x + (screen_width - stand_width) / 2;
    let stand_y = screen_y + screen_height + size / 30;
    draw::fill_rect(
        img,
        (stand_x, stand_y),
        (stand_x + stand_width, stand_y + stand_height),
        accent,
        outline,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dimensions_match_request() {
        for size in [1, 2, 7, 16, 48, 72, 83, 96, 144, 167, 192] {
            for rounded in [false, true] {
                let icon = render_icon(size, rounded);
                assert_eq!(icon.dimensions(), (size, size), "size {size} rounded {rounded}");
            }
        }
    }

    #[test]
    fn test_rounded_corners_are_transparent() {
        for size in [48, 72, 96, 144, 192] {
            let icon = render_icon(size, true);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(icon.get_pixel(x, y)[3], 0, "size {size} corner ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_rounded_and_square_share_centre_pixel() {
        for size in [48, 72, 96, 144, 192] {
            let square = render_icon(size, false);
            let round = render_icon(size, true);
            let c = size / 2;
            assert_eq!(square.get_pixel(c, c), round.get_pixel(c, c));
        }
    }

    #[test]
    fn test_disc_gradient_and_transparent_outside() {
        let icon = render_icon(100, false);

        // Outside the disc
        assert_eq!(icon.get_pixel(0, 0), &TRANSPARENT);
        assert_eq!(icon.get_pixel(99, 99), &TRANSPARENT);

        // Near the rim on the left, well below the TV
        let rim = icon.get_pixel(1, 50);
        assert_eq!(rim[3], 255);
        assert!(rim[2] > PRIMARY[2], "rim should drift toward the secondary colour");

        // Just below the stand, near the centre line
        let near_centre = icon.get_pixel(50, 88);
        assert_eq!(near_centre[3], 255);
        assert!(near_centre[2] >= PRIMARY[2] && near_centre[2] <= SECONDARY[2]);
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_color(0.0), palette::opaque(PRIMARY));
        let rim = gradient_color(1.0);
        assert_eq!(rim, palette::opaque(SECONDARY));
    }

    #[test]
    fn test_tv_layout_for_96px() {
        let icon = render_icon(96, false);
        let accent = palette::opaque(ACCENT);
        let background = palette::opaque(BACKGROUND);

        // padding 19, screen 58 wide and 34 tall, outline 1px, inset 3px
        assert_eq!(icon.get_pixel(48, 19), &background, "frame outline");
        assert_eq!(icon.get_pixel(48, 21), &accent, "frame body");
        assert_eq!(icon.get_pixel(48, 36), &background, "screen");

        // Stand: 19 wide, starting at x = 38, y = 56
        assert_eq!(icon.get_pixel(48, 58), &accent, "stand body");
        assert_eq!(icon.get_pixel(38, 60), &background, "stand outline");
    }
}
