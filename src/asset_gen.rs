use crate::banner::{render_banner, title_font_size};
use crate::contents_json::{self, ImageEntry};
use crate::icon::render_icon;
use crate::text::TitleFont;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct Args {
    /// Directory the Android and iOS project trees live under
    pub output: PathBuf,
    /// Also write Contents.json into the iOS icon set
    pub ios_contents: bool,
}

pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

pub const BANNER_SIZE: (u32, u32) = (400, 240);

pub const IOS_ICON_DIR: &str = "ios/tv/Images.xcassets/AppIcon.appiconset";

pub const IOS_POINT_SIZES: [f32; 7] = [20.0, 29.0, 40.0, 60.0, 76.0, 83.5, 1024.0];

/// Scale factors computed per point size; only the first two are written.
pub const IOS_SCALES: [u32; 3] = [1, 2, 3];
const IOS_EMITTED_SCALES: usize = 2;
const IOS_MAX_PIXEL_SIZE: u32 = 1024;

/// A file written by a run, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub android: Vec<GeneratedAsset>,
    pub ios: Vec<GeneratedAsset>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.android.len() + self.ios.len()
    }
}

pub fn generate_assets(args: &Args) -> Result<GenerationReport> {
    println!("Generating TV app icons and banner...");

    let mut report = GenerationReport::default();

    generate_android_icons(&args.output, &mut report)?;
    generate_android_banner(&args.output, &mut report)?;

    let ios_dir = args.output.join(IOS_ICON_DIR);
    if ios_dir.is_dir() {
        generate_ios_icons(&args.output, args.ios_contents, &mut report)?;
    }

    print_summary(&report);
    Ok(report)
}

fn generate_android_icons(root: &Path, report: &mut GenerationReport) -> Result<()> {
    println!("Generating Android icons...");

    for (density, size) in ANDROID_DENSITIES {
        let mipmap_dir = Path::new(ANDROID_RES_DIR).join(format!("mipmap-{density}"));
        create_dir_all(root.join(&mipmap_dir))
            .with_context(|| format!("Can't create {}", mipmap_dir.display()))?;

        for (filename, rounded) in [("ic_launcher.png", false), ("ic_launcher_round.png", true)] {
            let icon = render_icon(size, rounded);
            let asset = save_asset(root, &mipmap_dir.join(filename), &icon)?;
            report.android.push(asset);
        }
    }

    Ok(())
}

fn generate_android_banner(root: &Path, report: &mut GenerationReport) -> Result<()> {
    println!("Generating Android TV banner...");

    let (width, height) = BANNER_SIZE;
    let drawable_dir = Path::new(ANDROID_RES_DIR).join("drawable");
    create_dir_all(root.join(&drawable_dir))
        .with_context(|| format!("Can't create {}", drawable_dir.display()))?;

    let font = TitleFont::load(title_font_size(height));
    let banner = render_banner(width, height, &font);
    let asset = save_asset(root, &drawable_dir.join("tv_banner.png"), &banner)?;
    report.android.push(asset);

    Ok(())
}

fn generate_ios_icons(root: &Path, write_contents: bool, report: &mut GenerationReport) -> Result<()> {
    println!("Generating iOS icons...");

    let ios_dir = Path::new(IOS_ICON_DIR);
    let mut images: Vec<ImageEntry> = Vec::new();

    for point_size in IOS_POINT_SIZES {
        let point_label = format_point_size(point_size);

        for (scale, pixel_size) in ios_icon_variants(point_size) {
            let filename = format!("icon_{point_label}x{point_label}@{scale}x.png");
            let icon = render_icon(pixel_size, false);
            let asset = save_asset(root, &ios_dir.join(&filename), &icon)?;
            report.ios.push(asset);

            images.push(ImageEntry::app_icon(filename, &point_label, scale));
        }
    }

    if write_contents {
        contents_json::write_contents_json(&root.join(ios_dir), images)?;
        println!("  ✓ Created {}", ios_dir.join("Contents.json").display());
    }

    Ok(())
}

/// The `(scale, pixel size)` pairs written for an iOS point size: the 1x and
/// 2x variants, skipping any larger than 1024 pixels.
pub fn ios_icon_variants(point_size: f32) -> Vec<(u32, u32)> {
    IOS_SCALES
        .iter()
        .map(|&scale| (scale, (point_size * scale as f32) as u32))
        .take(IOS_EMITTED_SCALES)
        .filter(|&(_, pixels)| pixels <= IOS_MAX_PIXEL_SIZE)
        .collect()
}

/// Shortest decimal form of a point size: `20`, `83.5`.
pub fn format_point_size(point_size: f32) -> String {
    format!("{point_size}")
}

fn save_asset(root: &Path, relative: &Path, image: &RgbaImage) -> Result<GeneratedAsset> {
    save_png(image, &root.join(relative))?;

    let (width, height) = image.dimensions();
    println!("  ✓ Created {} ({width}x{height})", relative.display());

    Ok(GeneratedAsset {
        path: relative.to_path_buf(),
        width,
        height,
    })
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width(), image.height())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    println!("\nAll icons and banner generated successfully!");
    println!("\nAndroid assets:");
    println!("  - Icons: {ANDROID_RES_DIR}/mipmap-*/ic_launcher*.png");
    println!("  - Banner: {ANDROID_RES_DIR}/drawable/tv_banner.png");

    if !report.ios.is_empty() {
        println!("\niOS assets:");
        println!("  - Icons: {IOS_ICON_DIR}/icon_*.png");
    }
}
