//! Instruction extraction from free-form message text.
//!
//! A message may embed any number of `{key+modifier+...}` tokens. Text
//! outside the braces is ignored. Each token is handed to a [`ShapeBuilder`],
//! which turns it into zero or more shape descriptors.
//!
//! # Scanning rules
//!
//! - The message is split on `{`; whatever precedes the first `{` is dropped.
//! - Each fragment ends at its first `}`. A fragment without `}` is skipped.
//! - The body is split on `+`: the first element is the key, the rest are
//!   modifiers, in order.
//!
//! Because splitting happens on `{` alone, `{a {b}` yields only `b`: the
//! fragment `a ` has no `}` and is skipped.

use tracing::debug;

use crate::error::{Result, ViewerError};

use super::span::Span;

pub const START_MARKER: char = '{';
pub const END_MARKER: char = '}';
pub const MODIFIER_DELIMITER: char = '+';

/// Most modifiers a single token may carry.
pub const DEFAULT_MODIFIER_LIMIT: usize = 10;

/// One `{...}` token found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Leading element, selecting the builder logic.
    pub key: String,

    /// Remaining `+`-separated flags, in source order.
    pub modifiers: Vec<String>,

    /// Where the token sits in the message, braces included.
    pub span: Span,
}

/// Turns a shape key and its modifiers into descriptors.
///
/// A builder may return several descriptors for one token (composites) or
/// none at all. Any function `Fn(&str, &[String]) -> Result<Vec<D>>` is a
/// builder.
pub trait ShapeBuilder {
    type Descriptor;

    fn build(&self, key: &str, modifiers: &[String]) -> Result<Vec<Self::Descriptor>>;
}

impl<F, D> ShapeBuilder for F
where
    F: Fn(&str, &[String]) -> Result<Vec<D>>,
{
    type Descriptor = D;

    fn build(&self, key: &str, modifiers: &[String]) -> Result<Vec<D>> {
        self(key, modifiers)
    }
}

/// Scan a message for terminated instruction tokens.
///
/// No limits are enforced here; see [`Extractor`] for that.
pub fn scan(message: &str) -> impl Iterator<Item = Instruction> + '_ {
    message
        .match_indices(START_MARKER)
        .filter_map(move |(start, _)| {
            let body_start = start + START_MARKER.len_utf8();
            let rest = &message[body_start..];
            // The fragment runs to the next `{` or the end of the message
            let fragment = match rest.find(START_MARKER) {
                Some(next) => &rest[..next],
                None => rest,
            };
            let end = fragment.find(END_MARKER)?;
            let body = &fragment[..end];

            let mut parts = body.split(MODIFIER_DELIMITER);
            let key = parts.next().unwrap_or_default().to_string();
            let modifiers = parts.map(str::to_string).collect();

            let token_end = body_start + end + END_MARKER.len_utf8();
            Some(Instruction {
                key,
                modifiers,
                span: Span::from_offsets(message, start, token_end),
            })
        })
}

/// Extracts shape descriptors from messages, enforcing the per-token
/// modifier limit.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    modifier_limit: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_MODIFIER_LIMIT)
    }
}

impl Extractor {
    pub fn new(modifier_limit: usize) -> Self {
        Self { modifier_limit }
    }

    pub fn modifier_limit(&self) -> usize {
        self.modifier_limit
    }

    /// Extract every descriptor from the message, in token order.
    ///
    /// A token over the modifier limit fails the whole message: nothing
    /// built from earlier tokens is returned. Builder errors propagate
    /// the same way.
    pub fn extract<B: ShapeBuilder>(
        &self,
        message: &str,
        builder: &B,
    ) -> Result<Vec<B::Descriptor>> {
        let mut shapes = Vec::new();

        for instruction in scan(message) {
            if instruction.modifiers.len() > self.modifier_limit {
                return Err(ViewerError::ModifierLimitExceeded {
                    key: instruction.key,
                    count: instruction.modifiers.len(),
                    limit: self.modifier_limit,
                    location: instruction.span.start,
                });
            }

            let built = builder.build(&instruction.key, &instruction.modifiers)?;
            debug!(
                key = %instruction.key,
                modifiers = instruction.modifiers.len(),
                span = %instruction.span,
                shapes = built.len(),
                "built instruction"
            );
            shapes.extend(built);
        }

        Ok(shapes)
    }
}

/// Extract descriptors using the default modifier limit.
pub fn extract<B: ShapeBuilder>(message: &str, builder: &B) -> Result<Vec<B::Descriptor>> {
    Extractor::default().extract(message, builder)
}
