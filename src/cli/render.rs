//! Render command implementation.
//!
//! Renders the shapes in one message to a PNG file, without access checks.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, ViewerError};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::viewer::Viewer;

use super::ConfigArgs;

/// Render the shapes in a message to a PNG file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Message text; words are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Output file
    #[arg(long, short, default_value = "shapes.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let viewer = Viewer::builtin(args.config.load()?);
    let message = args.text.join(" ");

    let shapes = viewer.shapes(&message)?;
    let Some(image) = viewer.render_shapes(&shapes)? else {
        return Err(ViewerError::Shape {
            message: "No shapes found in message".to_string(),
            help: Some("Wrap short keys in braces, e.g. {CuCuCuCu+red}".to_string()),
        });
    };

    write_png(&image, &args.output)?;
    printer.status(
        "Rendered",
        &format!(
            "{} ({}x{}) to {}",
            plural(shapes.len(), "shape", "shapes"),
            image.width(),
            image.height(),
            display_path(&args.output)
        ),
    );

    Ok(())
}
