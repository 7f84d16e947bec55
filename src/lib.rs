//! chromaword: derive a visual design theme from a word.
//!
//! The core is a pure, deterministic pipeline: a word is hashed into a
//! 32-bit seed, classified into mood categories, mapped through one of
//! five color schemes into HSL and then sRGB, and post-processed so the
//! text and accent colors meet WCAG contrast minimums against the
//! background. A separate hash of the word (as typed) picks one of ten
//! curated heading/body font pairs.
//!
//! Everything is a total function of `(word, offset)`: the same inputs
//! always produce byte-identical output, and bumping `offset` by one
//! yields a fresh variation of the same word.

pub mod cli;
pub mod color;
pub mod fonts;
pub mod pipeline;
pub mod preview;
pub mod theme;
pub mod tui;
