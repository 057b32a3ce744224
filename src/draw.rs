//! Minimal raster primitives on top of `RgbaImage`.
//!
//! Coordinates are signed and corners are inclusive; anything falling
//! outside the image is clipped. Shape fills overwrite pixels, text and
//! pasted glyphs go through [`blend_pixel`].

use image::{Rgba, RgbaImage};

/// Axis-aligned rectangle with circular corners, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
}

impl RoundedRect {
    /// The radius is clamped to half the smaller side.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> Self {
        let half_side = (x1 - x0).min(y1 - y0).max(0) / 2;
        Self {
            x0,
            y0,
            x1,
            y1,
            radius: radius.clamp(0, half_side),
        }
    }

    /// Same rectangle shrunk by `by` pixels on every side, radius included.
    pub fn inset(&self, by: i32) -> Self {
        Self::new(
            self.x0 + by,
            self.y0 + by,
            self.x1 - by,
            self.y1 - by,
            self.radius - by,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.is_empty() || x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }
        if self.radius == 0 {
            return true;
        }

        // Distance to the nearest corner centre; zero along the straight edges
        let cx = x.clamp(self.x0 + self.radius, self.x1 - self.radius);
        let cy = y.clamp(self.y0 + self.radius, self.y1 - self.radius);
        let (dx, dy) = (x - cx, y - cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Outline drawn inside the shape's bounds.
#[derive(Debug, Clone, Copy)]
pub struct Outline {
    pub color: Rgba<u8>,
    pub width: i32,
}

/// Fill `shape` with `fill`, painting the outermost `outline.width` pixels
/// with the outline colour instead.
pub fn fill_rounded_rect(
    image: &mut RgbaImage,
    shape: RoundedRect,
    fill: Rgba<u8>,
    outline: Option<Outline>,
) {
    if shape.is_empty() {
        return;
    }

    let inner = outline.map(|o| shape.inset(o.width));

    for y in shape.y0.max(0)..=shape.y1.min(image.height() as i32 - 1) {
        for x in shape.x0.max(0)..=shape.x1.min(image.width() as i32 - 1) {
            if !shape.contains(x, y) {
                continue;
            }

            let color = match (outline, inner) {
                (Some(o), Some(inner)) if !inner.contains(x, y) => o.color,
                _ => fill,
            };
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Plain rectangle, the zero-radius case of [`fill_rounded_rect`].
pub fn fill_rect(
    image: &mut RgbaImage,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    fill: Rgba<u8>,
    outline: Option<Outline>,
) {
    fill_rounded_rect(image, RoundedRect::new(x0, y0, x1, y1, 0), fill, outline);
}

/// Horizontal line from `x0` to `x1` on row `y`, `width` pixels thick and
/// centred on `y`.
pub fn horizontal_line(image: &mut RgbaImage, x0: i32, x1: i32, y: i32, width: i32, color: Rgba<u8>) {
    let width = width.max(1);
    let top = y - (width - 1) / 2;
    let bottom = top + width - 1;
    fill_rect(image, (x0.min(x1), top), (x0.max(x1), bottom), color, None);
}

/// Source-over blend of `color` at `coverage` (0.0..=1.0) onto one pixel.
/// Out-of-bounds coordinates are ignored.
pub fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }

    let src_alpha = color[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if src_alpha <= 0.0 {
        return;
    }

    let dst = image.get_pixel_mut(x as u32, y as u32);
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    for c in 0..3 {
        let blended = (color[c] as f32 * src_alpha
            + dst[c] as f32 * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        dst[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}
