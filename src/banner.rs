//! The Android TV banner: a lit background, the icon and the app title.

use crate::draw;
use crate::icon::render_icon;
use crate::palette::{self, ACCENT, BACKGROUND, PRIMARY, SHADOW};
use crate::text::TitleFont;
use image::RgbaImage;

pub const TITLE: &str = "TV App";

/// Brightness added to the top row; fades linearly to zero at the bottom.
const TOP_LIGHT: f64 = 30.0;

/// Title font size used for a banner of the given height.
pub fn title_font_size(height: u32) -> u32 {
    height / 4
}

/// Render a `width × height` banner, drawing the title with `font`.
pub fn render_banner(width: u32, height: u32, font: &TitleFont) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, palette::opaque(BACKGROUND));

    apply_top_light(&mut img);

    let icon_size = (height as f64 * 0.6) as u32;
    let icon_x = (width as f64 * 0.05) as u32;
    let icon_y = (height - icon_size) / 2;
    let icon = render_icon(icon_size, false);
    image::imageops::overlay(&mut img, &icon, icon_x.into(), icon_y.into());

    let text_x = (icon_x + icon_size + (width as f64 * 0.05) as u32) as i32;
    let text_y = (height / 2) as i32;
    let shadow_offset = (height as i32 / 80).max(2);
    font.draw_left_middle(
        &mut img,
        text_x + shadow_offset,
        text_y + shadow_offset,
        TITLE,
        SHADOW,
    );
    font.draw_left_middle(&mut img, text_x, text_y, TITLE, palette::opaque(ACCENT));

    let line_y = (height as f64 * 0.75) as i32;
    let line_end_x = (width as f64 * 0.9) as i32;
    draw::horizontal_line(
        &mut img,
        text_x,
        line_end_x,
        line_y,
        (height as i32 / 60).max(2),
        palette::opaque(PRIMARY),
    );

    img
}

fn apply_top_light(img: &mut RgbaImage) {
    let height = img.height() as f64;

    for (_, y, pixel) in img.enumerate_pixels_mut() {
        let boost = (TOP_LIGHT * (1.0 - y as f64 / height)) as u8;
        for c in 0..3 {
            pixel[c] = pixel[c].saturating_add(boost);
        }
        pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> RgbaImage {
        render_banner(400, 240, &TitleFont::builtin(title_font_size(240)))
    }

    #[test]
    fn test_banner_dimensions() {
        assert_eq!(banner().dimensions(), (400, 240));
    }

    #[test]
    fn test_top_rows_are_brighter_than_bottom_rows() {
        let img = banner();
        for x in [0, 5, 399] {
            let top = img.get_pixel(x, 0);
            let bottom = img.get_pixel(x, 239);
            for c in 0..3 {
                assert!(top[c] >= bottom[c], "column {x} channel {c}");
            }
        }

        assert_eq!(img.get_pixel(0, 0).0, [74, 92, 110, 255]);
        assert_eq!(img.get_pixel(0, 239).0, [44, 62, 80, 255]);
    }

    #[test]
    fn test_banner_is_opaque() {
        assert!(banner().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_shadow_darkens_without_transparency() {
        let img = banner();

        // Right end of the "T" crossbar shadow, past the white glyph itself
        let shadowed = img.get_pixel(220, 100);
        assert_eq!(shadowed[3], 255);
        assert!(shadowed[0] < 61 && shadowed[2] < 97, "{shadowed:?}");
    }

    #[test]
    fn test_icon_is_embedded_at_left() {
        let img = banner();
        let icon = render_icon(144, false);

        // Centre of the 144px icon pasted at (20, 48)
        let pasted = img.get_pixel(20 + 72, 48 + 72);
        let source = icon.get_pixel(72, 72);
        for c in 0..3 {
            assert!(pasted[c].abs_diff(source[c]) <= 1, "channel {c}: {pasted:?} vs {source:?}");
        }
        // Outside the disc the lit background shows through
        assert_eq!(img.get_pixel(21, 49).0, [67, 85, 103, 255]);
    }

    #[test]
    fn test_rule_and_title_are_drawn() {
        let img = banner();
        let primary = palette::opaque(PRIMARY);

        // 4px rule around y = 180 from x = 184 to x = 360
        assert_eq!(img.get_pixel(184, 180), &primary);
        assert_eq!(img.get_pixel(360, 181), &primary);
        assert_ne!(img.get_pixel(361, 180), &primary);

        let white = palette::opaque(ACCENT);
        let title_pixels = (184..400)
            .flat_map(|x| (90..150).map(move |y| (x, y)))
            .filter(|&(x, y)| img.get_pixel(x, y) == &white)
            .count();
        assert!(title_pixels > 0, "title text should be visible");
    }

    #[test]
    fn test_top_light_saturates() {
        let mut img = RgbaImage::from_pixel(2, 2, image::Rgba([250, 10, 0, 255]));
        apply_top_light(&mut img);
        assert_eq!(img.get_pixel(0, 0).0, [255, 40, 30, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 25, 15, 255]);
    }
}
