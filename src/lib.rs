pub mod asset_gen;
pub mod banner;
pub mod contents_json;
pub mod draw;
pub mod icon;
pub mod mask;
pub mod palette;
pub mod text;
