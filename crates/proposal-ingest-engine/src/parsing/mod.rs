//! # Paste Parsing
//!
//! Stateless transforms from pasted plain text into structured content.
//!
//! ## Modules
//!
//! - **`cursor`**: byte `Cursor` shared with the HTML parser
//! - **`markers`**: bullet / numbered line detection shared by the other parsers
//! - **`blocks`**: `parse_mixed_content` splits a paste into typed `ContentBlock`s
//! - **`table`**: `parse_smart_table` turns delimiter-separated text into a `TableSpec`
//! - **`inline`**: `parse_inline_bold` splits text into bold / plain `InlineSegment`s
//!
//! Every entry point takes `&str` and returns a neutral empty value (`vec![]`
//! or `None`) for input it cannot structure. Nothing here can fail.

pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod markers;
pub mod table;

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub(crate) fn normalize_newlines(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('\r') {
        std::borrow::Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}

/// Returns the trimmed, non-empty lines of `text`.
pub(crate) fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// True when `line` ends in `.`, `?` or `!`.
pub(crate) fn ends_with_sentence_punctuation(line: &str) -> bool {
    line.trim_end().ends_with(['.', '?', '!'])
}
