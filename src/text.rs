//! Title font loading and text drawing.
//!
//! The banner prefers a bold TrueType system font rendered with `rusttype`.
//! When that font cannot be read or parsed, a small built-in 5×7 bitmap
//! font scaled to roughly the same height is used instead.

use crate::draw;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Bold system font tried first for the banner title.
pub const PREFERRED_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

pub enum TitleFont {
    TrueType { font: Font<'static>, scale: Scale },
    /// Built-in bitmap font; each font pixel is drawn as a `pixel_size` square.
    Builtin { pixel_size: i32 },
}

impl TitleFont {
    /// Load the preferred system font at `size` pixels, falling back to the
    /// built-in font on any failure.
    pub fn load(size: u32) -> Self {
        Self::load_from(Path::new(PREFERRED_FONT_PATH), size)
    }

    /// `size` is the em size in pixels.
    pub fn load_from(path: &Path, size: u32) -> Self {
        std::fs::read(path)
            .ok()
            .and_then(Font::try_from_vec)
            .map(|font| {
                let scale = em_scale(&font, size);
                TitleFont::TrueType { font, scale }
            })
            .unwrap_or_else(|| Self::builtin(size))
    }

    pub fn builtin(size: u32) -> Self {
        TitleFont::Builtin {
            pixel_size: (size as i32 / (GLYPH_HEIGHT + 1)).max(1),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TitleFont::Builtin { .. })
    }

    /// Draw `text` starting at `x`, vertically centred on `y`.
    pub fn draw_left_middle(&self, image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        match self {
            TitleFont::TrueType { font, scale } => {
                let v_metrics = font.v_metrics(*scale);
                // Middle of the ascender/descender span lands on `y`
                let baseline = y as f32 + (v_metrics.ascent + v_metrics.descent) / 2.0;

                for glyph in font.layout(text, *scale, point(x as f32, baseline)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            draw::blend_pixel(
                                image,
                                bb.min.x + gx as i32,
                                bb.min.y + gy as i32,
                                color,
                                coverage,
                            );
                        });
                    }
                }
            }
            TitleFont::Builtin { pixel_size } => {
                let top = y - GLYPH_HEIGHT * pixel_size / 2;
                let mut pen_x = x;

                for ch in text.chars() {
                    let rows = glyph_rows(ch);
                    for (row, bits) in rows.iter().enumerate() {
                        for col in 0..GLYPH_WIDTH {
                            if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                                continue;
                            }
                            let px = pen_x + col * pixel_size;
                            let py = top + row as i32 * pixel_size;
                            for dy in 0..*pixel_size {
                                for dx in 0..*pixel_size {
                                    draw::blend_pixel(image, px + dx, py + dy, color, 1.0);
                                }
                            }
                        }
                    }
                    pen_x += GLYPH_ADVANCE * pixel_size;
                }
            }
        }
    }
}

/// `rusttype` scales by the ascent-to-descent span, not the em square.
fn em_scale(font: &Font<'_>, em_size: u32) -> Scale {
    let v_metrics = font.v_metrics_unscaled();
    let units_per_em = font.units_per_em().max(1) as f32;
    Scale::uniform(em_size as f32 * (v_metrics.ascent - v_metrics.descent) / units_per_em)
}

/// Rows of a 5×7 glyph, most significant of the low five bits on the left.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch {
        ' ' => [0; 7],
        'A'..='Z' => UPPERCASE[(ch as u8 - b'A') as usize],
        'a'..='z' => LOWERCASE[(ch as u8 - b'a') as usize],
        '0'..='9' => DIGITS[(ch as u8 - b'0') as usize],
        _ => UNKNOWN,
    }
}

const UNKNOWN: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

#[rustfmt::skip]
const UPPERCASE: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const LOWERCASE: [[u8; 7]; 26] = [
    [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111], // a
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110], // b
    [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110], // c
    [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111], // d
    [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110], // e
    [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000], // f
    [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110], // g
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001], // h
    [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110], // i
    [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100], // j
    [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010], // k
    [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // l
    [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001], // m
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001], // n
    [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110], // o
    [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000], // p
    [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001], // q
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000], // r
    [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110], // s
    [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110], // t
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101], // u
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // v
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010], // w
    [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001], // x
    [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110], // y
    [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111], // z
];

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];
