//! Source location tracking
//!
//! Every located node is a `WithLoc<T>`. Position metadata lives only in the
//! `range` field, which is what fingerprinting erases.

use serde::{Deserialize, Serialize};

/// Source position: line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in UTF-8 code points)
    pub col: u32,
}

impl Pos {
    /// Create a new position
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Synthetic/unknown position
    pub const SYNTHETIC: Self = Self { line: 0, col: 0 };
}

/// Source range: start to end position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Pos,
    pub end: Pos,
}

impl Range {
    /// Shorthand for a range on explicit line/column pairs
    pub const fn span(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Pos::new(start_line, start_col),
            end: Pos::new(end_line, end_col),
        }
    }

    /// Synthetic/unknown range. Also the canonical placeholder used when
    /// positions are erased.
    pub const SYNTHETIC: Self = Self {
        start: Pos::SYNTHETIC,
        end: Pos::SYNTHETIC,
    };
}

/// Wrapper that attaches a source range to any tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithLoc<T> {
    /// The underlying value
    pub value: T,
    /// Source range
    pub range: Range,
}

impl<T> WithLoc<T> {
    /// Create a new located value
    pub const fn new(value: T, range: Range) -> Self {
        Self { value, range }
    }

    /// Create a synthetic (no location) value
    pub fn synthetic(value: T) -> Self {
        Self {
            value,
            range: Range::SYNTHETIC,
        }
    }

    /// Replace the range, keeping the value
    pub fn at(mut self, range: Range) -> Self {
        self.range = range;
        self
    }
}

impl<T> std::ops::Deref for WithLoc<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
