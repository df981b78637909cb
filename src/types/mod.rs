//! Core domain types for shapeview.
//!
//! - `Colour` - RGBA colour values
//! - `ShapeDescriptor` - Layered quadrant shapes built from short keys

mod colour;
mod descriptor;

pub use colour::Colour;
pub use descriptor::{
    Layer, Quadrant, ShapeColour, ShapeDescriptor, SubShape, MAX_LAYERS, QUADRANTS,
};
