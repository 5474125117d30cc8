use std::sync::OnceLock;

use regex::Regex;

use crate::options::BlockOptions;
use crate::parsing::ends_with_sentence_punctuation;

fn column_regex() -> &'static Regex {
    static COLUMN: OnceLock<Regex> = OnceLock::new();
    COLUMN.get_or_init(|| Regex::new(r"\t|\S {2,}\S").expect("Invalid column regex"))
}

/// True when `line` has a tab or a wide gap between two words.
pub fn has_column_break(line: &str) -> bool {
    column_regex().is_match(line)
}

/// A chunk of two or more lines is table-like when every line has a column
/// break, or when only the first line (a caption) lacks one and the second has one.
pub fn looks_like_table(lines: &[&str]) -> bool {
    if lines.len() < 2 {
        return false;
    }
    lines.iter().all(|line| has_column_break(line))
        || (!has_column_break(lines[0]) && has_column_break(lines[1]))
}

/// A lone line reads as a title when short and not a sentence.
pub fn is_title_line(line: &str, options: &BlockOptions) -> bool {
    line.chars().count() < options.title_max_chars && !ends_with_sentence_punctuation(line)
}

/// The first line of a multi-line chunk reads as its heading when short and not a sentence.
pub fn is_heading_line(line: &str, options: &BlockOptions) -> bool {
    line.chars().count() < options.heading_max_chars && !ends_with_sentence_punctuation(line)
}
