use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use image_inspector::config::Config;
use image_inspector::export::{export_with_indent, with_default_extension};
use image_inspector::inspect::{self, SUPPORTED_EXTENSIONS};

#[derive(Parser, Debug)]
#[command(
    name = "image-inspector",
    version,
    about = "Inspect an image's basic metadata and optionally export it as JSON"
)]
struct Cli {
    /// Image file to inspect
    #[arg(value_name = "PATH", required_unless_present = "init")]
    path: Option<PathBuf>,

    /// Write the metadata text to this JSON file
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Print the metadata as a structured JSON record instead of text
    #[arg(long)]
    json: bool,

    /// Path to config file (default: image-inspector.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config file and exit
    #[arg(long)]
    init: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let save_path = Config::default().save(cli.config.as_deref())?;
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    let Some(path) = cli.path else {
        anyhow::bail!("No input image specified. Use --help for usage.");
    };

    if !inspect::is_supported_image(&path) {
        log::warn!(
            "{} does not have a supported extension ({}); trying to decode anyway",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    let inspection = inspect::inspect_within(&path, config.thumbnail.bounds())?;
    let record = &inspection.record;
    let text = record.display_text();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{text}");
    }

    log::debug!(
        "Thumbnail: {}x{}",
        inspection.thumbnail.width(),
        inspection.thumbnail.height()
    );

    if let Some(dest) = cli.export {
        let dest = with_default_extension(dest);
        export_with_indent(&text, &dest, config.export.indent)?;
        eprintln!("Metadata saved to {}", dest.display());
    }

    Ok(())
}
