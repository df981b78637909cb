//! Layout command implementation.

use clap::Args;

use crate::error::{Result, ViewerError};
use crate::render::{GridLayout, DEFAULT_MAX_COLUMNS};

/// Print the grid layout for a number of tiles
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Number of tiles
    pub count: usize,

    /// Tile edge length in pixels
    #[arg(long, default_value = "56")]
    pub tile_size: u32,

    /// Most tiles per row
    #[arg(long, default_value_t = DEFAULT_MAX_COLUMNS)]
    pub max_columns: u32,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LayoutArgs) -> Result<()> {
    println!("{}", describe(&args)?);
    Ok(())
}

fn describe(args: &LayoutArgs) -> Result<String> {
    let layout = GridLayout::new(args.count, args.tile_size, args.max_columns).ok_or_else(|| {
        if args.count == 0 {
            ViewerError::Render {
                message: "Nothing to lay out".to_string(),
                help: Some("Pass a tile count of at least 1".to_string()),
            }
        } else {
            ViewerError::Render {
                message: format!(
                    "Grid of {} tiles at {} px does not fit in 32-bit pixel dimensions",
                    args.count, args.tile_size
                ),
                help: Some("Use a smaller --tile-size or --max-columns".to_string()),
            }
        }
    })?;

    if args.json {
        return serde_json::to_string_pretty(&layout).map_err(|e| ViewerError::Render {
            message: format!("Failed to serialize layout: {}", e),
            help: None,
        });
    }

    Ok(format!(
        "{} columns x {} rows, {}x{} px",
        layout.columns, layout.rows, layout.width, layout.height
    ))
}
