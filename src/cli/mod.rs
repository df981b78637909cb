pub mod completions;
pub mod init;
pub mod layout;
pub mod render;
pub mod watch;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{ViewerConfig, MAX_TILE_SIZE};
use crate::error::{Result, ViewerError};

/// shapeview - Render shape instructions from chat messages
#[derive(Parser, Debug)]
#[command(name = "shapeview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log extraction and layout details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the shapes in a message to a PNG file
    Render(render::RenderArgs),

    /// Read messages from stdin, one per line, and render replies
    Watch(watch::WatchArgs),

    /// Print the grid layout for a number of tiles
    Layout(layout::LayoutArgs),

    /// Write a default viewer.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the configuration and apply command-line overrides.
pub(crate) fn load_config(path: Option<&Path>, tile_size: Option<u32>) -> Result<ViewerConfig> {
    let mut config = ViewerConfig::discover(path, Path::new("."))?;

    if let Some(tile_size) = tile_size {
        if tile_size == 0 || tile_size > MAX_TILE_SIZE {
            return Err(ViewerError::Parse {
                message: format!("--tile-size must be between 1 and {}", MAX_TILE_SIZE),
                help: None,
            });
        }
        config.tile_size = tile_size;
    }

    Ok(config)
}

/// Arguments shared by commands that load a viewer configuration.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file (default: ./viewer.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tile edge length in pixels (overrides the config)
    #[arg(long)]
    pub tile_size: Option<u32>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<ViewerConfig> {
        load_config(self.config.as_deref(), self.tile_size)
    }
}
