//! Contents.json data model for the iOS app icon set
//!
//! Mirrors the subset of Apple's asset catalog `Contents.json` schema needed
//! to describe the generated launcher icons.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Author recorded in the `info` block of generated manifests
pub const AUTHOR: &str = "tv-asset-gen";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Array of image entries for different scales and sizes
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an app icon set
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// The filename of the PNG inside the icon set
    pub filename: String,

    /// The device type for the image (e.g., "iphone", "ipad", "ios-marketing")
    pub idiom: String,

    /// The size of the image in points (e.g., "29x29", "83.5x83.5")
    pub size: String,

    /// The scale factor for the image (e.g., "1x", "2x")
    pub scale: String,

    /// The role of the icon (e.g., "notificationCenter", "appLauncher")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The tool that authored the asset catalog
    pub author: String,
}

impl ContentsFile {
    pub fn new(author: &str) -> Self {
        Self {
            images: Vec::new(),
            info: Info {
                version: 1,
                author: author.to_string(),
            },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates an app icon entry for a point size and integer scale factor
    ///
    /// # Arguments
    /// * `filename` - The PNG filename inside the icon set
    /// * `point_size` - The size in points, already formatted (e.g., "83.5")
    /// * `scale` - The scale factor (1, 2, ...)
    pub fn app_icon(filename: String, point_size: &str, scale: u32) -> Self {
        Self {
            filename,
            idiom: ios_idiom(point_size).to_string(),
            size: format!("{point_size}x{point_size}"),
            scale: format!("{scale}x"),
            role: ios_role(point_size).map(str::to_string),
        }
    }
}

/// Device idiom for an iOS icon point size
fn ios_idiom(point_size: &str) -> &'static str {
    match point_size {
        "1024" => "ios-marketing",
        "20" | "29" | "40" | "60" => "iphone",
        "76" | "83.5" => "ipad",
        _ => "universal",
    }
}

/// Role of an iOS icon point size, if it has one
fn ios_role(point_size: &str) -> Option<&'static str> {
    match point_size {
        "20" => Some("notificationCenter"),
        "29" => Some("companionSettings"),
        "40" => Some("spotlight"),
        "60" | "76" | "83.5" => Some("appLauncher"),
        _ => None,
    }
}

/// Writes `Contents.json` into `dir` listing `images`
///
/// # Errors
/// Returns an error if serialization or writing the file fails
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let mut contents = ContentsFile::new(AUTHOR);
    for image in images {
        contents.add_image(image);
    }

    let contents_path = dir.join("Contents.json");
    let contents_json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;

    std::fs::write(&contents_path, contents_json)
        .with_context(|| format!("Failed to write {}", contents_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_file_creation() {
        let contents = ContentsFile::new("com.example.tv");
        assert_eq!(contents.info.author, "com.example.tv");
        assert_eq!(contents.info.version, 1);
        assert!(contents.images.is_empty());
    }

    #[test]
    fn test_app_icon_entry() {
        let icon = ImageEntry::app_icon("icon_83.5x83.5@2x.png".to_string(), "83.5", 2);

        assert_eq!(icon.filename, "icon_83.5x83.5@2x.png");
        assert_eq!(icon.idiom, "ipad");
        assert_eq!(icon.size, "83.5x83.5");
        assert_eq!(icon.scale, "2x");
        assert_eq!(icon.role.as_deref(), Some("appLauncher"));
    }

    #[test]
    fn test_marketing_icon_has_no_role() {
        let icon = ImageEntry::app_icon("icon_1024x1024@1x.png".to_string(), "1024", 1);

        assert_eq!(icon.idiom, "ios-marketing");
        assert_eq!(icon.role, None);

        let json = serde_json::to_string(&icon).unwrap();
        assert!(!json.contains("role"));
    }

    #[test]
    fn test_single_entry_json_serialization() {
        let mut contents = ContentsFile::new("com.test.app");
        contents.add_image(ImageEntry::app_icon("icon_60x60@2x.png".to_string(), "60", 2));

        let json = serde_json::to_string_pretty(&contents).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("Generated JSON should be valid");

        assert_eq!(parsed["images"].as_array().unwrap().len(), 1);
        let image = &parsed["images"][0];
        assert_eq!(image["filename"], "icon_60x60@2x.png");
        assert_eq!(image["idiom"], "iphone");
        assert_eq!(image["size"], "60x60");
        assert_eq!(image["scale"], "2x");
        assert_eq!(image["role"], "appLauncher");
        assert_eq!(parsed["info"]["version"], 1);
        assert_eq!(parsed["info"]["author"], "com.test.app");
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let images = vec![
            ImageEntry::app_icon("icon_20x20@1x.png".to_string(), "20", 1),
            ImageEntry::app_icon("icon_20x20@2x.png".to_string(), "20", 2),
        ];

        write_contents_json(temp_dir.path(), images).unwrap();

        let file_content =
            std::fs::read_to_string(temp_dir.path().join("Contents.json")).unwrap();
        assert!(file_content.contains("icon_20x20@1x.png"));
        assert!(file_content.contains("notificationCenter"));
        assert!(file_content.contains(AUTHOR));
        assert!(file_content.contains("\"version\": 1"));
    }
}
