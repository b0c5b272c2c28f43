use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::Config;
use sketchpad::export::{self, ExportOptions, ExportSaveConfig};
use sketchpad::import::{FileImageSource, ImageLoader};
use sketchpad::input::InputState;
use sketchpad::script::Script;
use std::path::PathBuf;
use std::sync::Arc;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version = VERSION, about = "Headless annotation canvas with watermarked PNG export")]
struct Cli {
    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gesture script (TOML) to replay before exporting
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Image to import as the background (PNG, JPEG, BMP, GIF)
    #[arg(long, short = 'i', value_name = "PATH")]
    image: Option<PathBuf>,

    /// Write the PNG here instead of the configured save directory
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "N")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "N")]
    height: Option<i32>,

    /// Export without the watermark
    #[arg(long, action = ArgAction::SetTrue)]
    no_watermark: bool,

    /// Write a documented default config to ~/.config/sketchpad/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli);

    let mut state =
        InputState::from_config(&config).context("Failed to create drawing surface")?;

    if let Some(path) = &cli.image {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        let loader = ImageLoader::new(runtime.handle().clone());
        let pending = loader.spawn(Arc::new(FileImageSource::new(path)));
        let decoded = runtime
            .block_on(pending.wait())
            .with_context(|| format!("Failed to import image {}", path.display()))?;
        state.apply_decoded_image(decoded)?;
    }

    if let Some(path) = &cli.script {
        Script::load(path)?.apply(&mut state);
    }

    let png = state.export_png(&ExportOptions::from_config(&config.export))?;

    let saved = match &cli.output {
        Some(path) => export::save_export_to(&png, path)?,
        None => export::save_export(&png, &ExportSaveConfig::from_config(&config.export))?,
    };

    log::info!("Saved {} drawables to {}", state.frame.len(), saved.display());
    println!("{}", saved.display());
    Ok(())
}

/// Applies command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if cli.no_watermark {
        config.export.watermark_enabled = false;
    }
    config.validate_and_clamp();
}
