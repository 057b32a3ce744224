use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tv_asset_gen::asset_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "tv-asset-gen",
    about = "Generate the launcher icons and banner of the TV app"
)]
struct Args {
    /// Directory containing the `android/` (and optionally `ios/`) project trees.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Also write Contents.json into the iOS app icon set.
    #[clap(long)]
    ios_contents: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    asset_gen::generate_assets(&asset_gen::Args {
        output: args.output,
        ios_contents: args.ios_contents,
    })?;

    Ok(())
}
