//! shapeview - Shape instruction viewer
//!
//! Finds `{key+modifier+...}` shape instructions in chat messages, renders
//! each shape as a tile and lays the tiles out in a grid, returned as PNG.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod viewer;
pub mod watcher;

pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use parser::{extract, scan, Extractor, Instruction, ShapeBuilder, ShortKeyBuilder};
pub use render::{encode_png, GridCompositor, GridLayout, RenderedShape, ShapeRenderer, TileRenderer};
pub use types::{Colour, ShapeColour, ShapeDescriptor, SubShape};
pub use viewer::{Attachment, Message, Viewer};
pub use watcher::{attach, MessageHub, Subscription};
