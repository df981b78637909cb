//! Rendering module for shapeview.
//!
//! This module turns descriptors into tiles, arranges tiles into a grid
//! and encodes the result as PNG.

mod grid;
mod png;
mod shape;

pub use grid::{GridCompositor, GridLayout, DEFAULT_MAX_COLUMNS};
pub use png::{encode_png, write_png};
pub use shape::{RenderedShape, ShapeRenderer, TileRenderer};
