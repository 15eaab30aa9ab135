//! Daub CLI - render and check drawing-action scene files
//!
//! Scenes are TOML or JSON lists of actions. `daub render` runs a scene
//! against the recording device and prints the device calls it produced;
//! `daub check` only parses and builds the chain.

mod config;
mod output;
mod scene;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daub_core::render;
use daub_paint::{Rect, RecordingContext};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{DaubConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "daub")]
#[command(about = "Render composable drawing-action scenes")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./daub.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a scene and print the recorded device calls
    Render {
        /// Scene file (.toml or .json)
        scene: PathBuf,

        /// Canvas width, overrides the config
        #[arg(long)]
        width: Option<f32>,

        /// Canvas height, overrides the config
        #[arg(long)]
        height: Option<f32>,

        /// Output format, overrides the config
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a scene and build its chain without rendering
    Check {
        /// Scene file (.toml or .json)
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DaubConfig::load(cli.config.as_deref())?;

    init_logging(&config.log.level);

    match cli.command {
        Commands::Render {
            scene,
            width,
            height,
            format,
            output,
        } => {
            let rect = Rect::new(
                0.0,
                0.0,
                width.unwrap_or(config.canvas.width),
                height.unwrap_or(config.canvas.height),
            );
            let format = format.unwrap_or(config.output.format);
            cmd_render(scene, rect, format, config.output.pretty, output)
        }
        Commands::Check { scene } => cmd_check(scene),
    }
}

/// `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(
    path: PathBuf,
    rect: Rect,
    format: OutputFormat,
    pretty: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let scene = scene::load_scene(&path)?;
    let chain = scene
        .build()
        .with_context(|| format!("Failed to build scene {}", path.display()))?;

    let mut device = RecordingContext::new();
    let stats = render(&chain, rect, Some(&mut device))
        .with_context(|| format!("Failed to render scene {}", path.display()))?;

    info!(
        actions = stats.actions,
        max_logical_depth = stats.max_logical_depth,
        max_device_depth = stats.max_device_depth,
        commands = device.commands().len(),
        "rendered {}",
        scene.name.as_deref().unwrap_or("scene")
    );

    let text = output::format_commands(device.commands(), format, pretty)?;
    match output {
        Some(out) => {
            fs::write(&out, text).with_context(|| format!("Failed to write {}", out.display()))?;
            info!("wrote {}", out.display());
        }
        None => println!("{}", text.trim_end()),
    }

    Ok(())
}

fn cmd_check(path: PathBuf) -> Result<()> {
    let scene = scene::load_scene(&path)?;
    let chain = scene
        .build()
        .with_context(|| format!("Invalid scene {}", path.display()))?;

    println!(
        "{}: {} top-level actions ({})",
        path.display(),
        chain.len(),
        chain.names().join(" -> ")
    );
    Ok(())
}
