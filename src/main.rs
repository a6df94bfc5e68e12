use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkprep::models::{AppConfig, OutputFormat};
use inkprep::services::{BatchConverter, ImagePipeline};

#[derive(Parser)]
#[command(name = "inkprep")]
#[command(about = "Prepare photos for 6-color e-paper panels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every image in a directory
    Convert {
        /// Directory with the source photos
        source_dir: PathBuf,

        /// Directory for the converted images (created if missing)
        output_dir: PathBuf,

        #[command(flatten)]
        options: ConvertOptions,
    },
    /// Convert a single image
    File {
        /// Source photo
        input: PathBuf,

        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        options: ConvertOptions,
    },
    /// Print the configured palette
    Palette {
        /// YAML config file (falls back to CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ConvertOptions {
    /// YAML config file (falls back to CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Error diffusion strength, 0.0 (none) to 1.0 (full Floyd-Steinberg)
    #[arg(short, long)]
    strength: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkprep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            source_dir,
            output_dir,
            options,
        }) => run_convert_command(&source_dir, &output_dir, &options),
        Some(Commands::File {
            input,
            output,
            options,
        }) => run_file_command(&input, &output, &options),
        Some(Commands::Palette { config }) => run_palette_command(config),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Config path from the flag, else from the environment
fn config_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
}

/// Load the config file and apply command-line overrides
fn load_config(options: &ConvertOptions) -> anyhow::Result<AppConfig> {
    let path = config_path(options.config.clone());
    let mut config = AppConfig::load(path.as_deref()).context("Failed to load configuration")?;

    if let Some(strength) = options.strength {
        config.dither.strength = strength;
    }
    if let Some(format) = options.format {
        config.output.format = format;
    }
    Ok(config)
}

fn run_convert_command(
    source_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> anyhow::Result<()> {
    let config = load_config(options)?;
    let pipeline = ImagePipeline::from_config(&config).context("Invalid configuration")?;

    let report = BatchConverter::new(&pipeline)
        .run(source_dir, output_dir)
        .with_context(|| format!("Batch conversion of {} failed", source_dir.display()))?;

    println!(
        "Converted {} images ({} failed, {} skipped) into {}",
        report.converted,
        report.failed,
        report.skipped,
        output_dir.display()
    );
    Ok(())
}

fn run_file_command(input: &Path, output: &Path, options: &ConvertOptions) -> anyhow::Result<()> {
    let config = load_config(options)?;
    let pipeline = ImagePipeline::from_config(&config).context("Invalid configuration")?;

    pipeline
        .convert_file(input, output)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

fn run_palette_command(config: Option<PathBuf>) -> anyhow::Result<()> {
    let path = config_path(config);
    let config = AppConfig::load(path.as_deref()).context("Failed to load configuration")?;
    let palette = config.palette().context("Invalid palette")?;

    println!("Palette ({} colors):", palette.len());
    for (index, color) in palette.colors().iter().enumerate() {
        println!("  {index}: {color}");
    }
    Ok(())
}

/// Display version and default settings
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    let defaults = AppConfig::default();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("inkprep v{VERSION}");
    println!("Photo preparation for 6-color e-paper panels\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nDefaults:");
    println!(
        "  Panel:    {}x{}, {} colors",
        defaults.panel.width,
        defaults.panel.height,
        defaults.panel.palette.len()
    );
    println!("  Strength: {}", defaults.dither.strength);
    println!(
        "  Output:   <stem>{}.{}",
        defaults.output.suffix,
        defaults.output.format.extension()
    );

    println!("\nUsage:");
    println!("  inkprep convert <SOURCE_DIR> <OUTPUT_DIR>   Convert a directory");
    println!("  inkprep file <INPUT> <OUTPUT>               Convert one image");
    println!("  inkprep palette                             Show the palette");
    println!("\nRun 'inkprep --help' for all options.");
}
