//! # Inline Bold Segmenting
//!
//! Two passes over a string:
//!
//! 1. explicit `**bold**` spans are cut out with a [`Cursor`](crate::parsing::cursor::Cursor);
//!    a marker never spans a newline and `****` is not an empty bold run
//! 2. every plain line of the remaining text is checked for a `Label:` prefix,
//!    which is emitted bold with the rest of the line following after a single space
//!
//! Text inside explicit bold is never re-scanned for labels.

pub mod parser;
pub mod types;

pub use parser::parse_inline_bold;
pub use types::InlineSegment;
