//! Token positions within a message, for error messages.

use std::fmt;

/// A location in message text (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of message
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The byte range a token covers, from its `{` to just past its `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

impl Span {
    /// Create a span from byte offsets, calculating line/column from the message.
    pub fn from_offsets(message: &str, start_offset: usize, end_offset: usize) -> Self {
        Self {
            start: offset_to_location(message, start_offset),
            end: offset_to_location(message, end_offset),
        }
    }

    /// Slice the covered text out of the message the span was taken from.
    pub fn slice<'a>(&self, message: &'a str) -> &'a str {
        let end = self.end.offset.min(message.len());
        let start = self.start.offset.min(end);
        &message[start..end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Convert a byte offset to a Location (line/column).
pub fn offset_to_location(message: &str, offset: usize) -> Location {
    let offset = offset.min(message.len());
    let before = &message[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[last_newline..].chars().count() as u32 + 1;

    Location { offset, line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_location_multiline() {
        let message = "look\n{Cu}";

        assert_eq!(offset_to_location(message, 0), Location::new(0, 1, 1));
        assert_eq!(offset_to_location(message, 4), Location::new(4, 1, 5));
        assert_eq!(offset_to_location(message, 5), Location::new(5, 2, 1));
        assert_eq!(offset_to_location(message, 99), Location::new(9, 2, 5));
    }

    #[test]
    fn test_offset_to_location_counts_chars() {
        // 'é' is two bytes but one column
        let message = "é {x}";
        assert_eq!(offset_to_location(message, 3), Location::new(3, 1, 3));
    }

    #[test]
    fn test_span_slice_and_display() {
        let message = "a {key+red} b";
        let span = Span::from_offsets(message, 2, 11);

        assert_eq!(span.slice(message), "{key+red}");
        assert_eq!(span.to_string(), "1:3-12");
    }
}
