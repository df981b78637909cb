//! Parsing of shape instructions embedded in messages.
//!
//! Two layers:
//! - [`instruction`] finds `{key+modifier+...}` tokens in free-form text and
//!   hands them to a [`ShapeBuilder`]
//! - [`short_key`] is the built-in builder for `CuCuCuCu`-style keys
//!
//! # Usage
//!
//! ```
//! use shapeview::parser::{extract, ShortKeyBuilder};
//!
//! let shapes = extract("look at {CuCuCuCu+red}", &ShortKeyBuilder).unwrap();
//! assert_eq!(shapes[0].to_string(), "CrCrCrCr");
//! ```

pub mod instruction;
pub mod short_key;
pub mod span;

pub use instruction::{extract, scan, Extractor, Instruction, ShapeBuilder, DEFAULT_MODIFIER_LIMIT};
pub use short_key::{parse_short_key, ShortKeyBuilder};
pub use span::{Location, Span};
