use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// What kind of list line a line of pasted text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMarker {
    Plain,
    /// `1. ` or `1) `
    Numbered,
    /// One of `• · * - >` followed by whitespace.
    Bullet,
}

fn numbered_regex() -> &'static Regex {
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    NUMBERED.get_or_init(|| Regex::new(r"^\d+[.)]\s").expect("Invalid numbered-marker regex"))
}

fn bullet_regex() -> &'static Regex {
    static BULLET: OnceLock<Regex> = OnceLock::new();
    BULLET.get_or_init(|| Regex::new(r"^[•·*\->]\s").expect("Invalid bullet-marker regex"))
}

/// Classifies `line` by its leading token. The marker must be at the very
/// start of the line; callers trim indentation first.
pub fn detect_marker(line: &str) -> LineMarker {
    if numbered_regex().is_match(line) {
        LineMarker::Numbered
    } else if bullet_regex().is_match(line) {
        LineMarker::Bullet
    } else {
        LineMarker::Plain
    }
}

pub fn is_numbered(line: &str) -> bool {
    detect_marker(line) == LineMarker::Numbered
}

pub fn is_bullet(line: &str) -> bool {
    detect_marker(line) == LineMarker::Bullet
}

/// Returns `line` without its list marker and the whitespace after it.
/// Plain lines come back unchanged.
pub fn strip_marker(line: &str) -> &str {
    let found = numbered_regex()
        .find(line)
        .or_else(|| bullet_regex().find(line));
    match found {
        Some(m) => line[m.end()..].trim_start(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1. First", LineMarker::Numbered)]
    #[case("12) Twelfth", LineMarker::Numbered)]
    #[case("3.\tTabbed", LineMarker::Numbered)]
    #[case("• Dot", LineMarker::Bullet)]
    #[case("· Middle dot", LineMarker::Bullet)]
    #[case("* Star", LineMarker::Bullet)]
    #[case("- Dash", LineMarker::Bullet)]
    #[case("> Quote", LineMarker::Bullet)]
    #[case("Plain text", LineMarker::Plain)]
    #[case("1.5 million", LineMarker::Plain)]
    #[case("-dash without space", LineMarker::Plain)]
    #[case("2024 was a good year", LineMarker::Plain)]
    #[case("  - indented", LineMarker::Plain)]
    #[case("", LineMarker::Plain)]
    fn classifies_leading_token(#[case] line: &str, #[case] expected: LineMarker) {
        assert_eq!(detect_marker(line), expected);
    }

    #[test]
    fn predicates_agree_with_detect() {
        assert!(is_numbered("1) a"));
        assert!(!is_bullet("1) a"));
        assert!(is_bullet("- a"));
        assert!(!is_numbered("- a"));
    }

    #[rstest]
    #[case("1. First", "First")]
    #[case("10)   Spaced", "Spaced")]
    #[case("• Dot", "Dot")]
    #[case("- Dash", "Dash")]
    #[case("No marker", "No marker")]
    fn strips_marker(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(strip_marker(line), expected);
    }
}
