//! # Mixed-Content Block Parsing
//!
//! Splits a paste into blank-line-separated chunks and classifies each one
//! independently. Chunks are never merged with their neighbours.
//!
//! Per chunk, in precedence order:
//!
//! 1. table-like (`classify::looks_like_table`) → `Table`, parsed by the smart table parser
//! 2. first line numbered → `Numbered`
//! 3. first line bulleted → `Bullets`
//! 4. single line → `Title` when short and not a sentence, else `Plain`
//! 5. several lines → `Title` (first line) with the rest as content when the
//!    first line is short and not a sentence, else `Plain`
//!
//! A one-line question such as `Ready to start?` is `Plain`: the terminal
//! punctuation check runs before any notion of "looks like a heading".

pub mod classify;
pub mod types;

pub use types::{BlockKind, ContentBlock};

use std::sync::OnceLock;

use regex::Regex;

use crate::options::ParseOptions;
use crate::parsing::{
    markers::{LineMarker, detect_marker},
    non_empty_lines, normalize_newlines,
    table::{TableSpec, parse_smart_table_with},
};
use classify::{has_column_break, is_heading_line, is_title_line, looks_like_table};

fn blank_line_regex() -> &'static Regex {
    static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE.get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid blank-line regex"))
}

/// Parses `text` with the default [`ParseOptions`].
pub fn parse_mixed_content(text: &str) -> Vec<ContentBlock> {
    parse_mixed_content_with(text, &ParseOptions::default())
}

pub fn parse_mixed_content_with(text: &str, options: &ParseOptions) -> Vec<ContentBlock> {
    let text = normalize_newlines(text);
    blank_line_regex()
        .split(&text)
        .filter_map(|chunk| classify_chunk(chunk, options))
        .collect()
}

fn classify_chunk(chunk: &str, options: &ParseOptions) -> Option<ContentBlock> {
    let lines = non_empty_lines(chunk);
    let first = *lines.first()?;

    let block = if looks_like_table(&lines) {
        ContentBlock::table(lines.join("\n"), table_from_lines(&lines, options))
    } else {
        match detect_marker(first) {
            LineMarker::Numbered => ContentBlock::new(BlockKind::Numbered, lines.join("\n")),
            LineMarker::Bullet => ContentBlock::new(BlockKind::Bullets, lines.join("\n")),
            LineMarker::Plain if lines.len() == 1 => {
                if is_title_line(first, &options.blocks) {
                    ContentBlock::titled(first, "")
                } else {
                    ContentBlock::new(BlockKind::Plain, first)
                }
            }
            LineMarker::Plain => {
                if is_heading_line(first, &options.blocks) {
                    ContentBlock::titled(first, lines[1..].join("\n"))
                } else {
                    ContentBlock::new(BlockKind::Plain, lines.join("\n"))
                }
            }
        }
    };

    log::debug!("mixed content: {} line(s) -> {:?}", lines.len(), block.kind);
    Some(block)
}

/// A first line without a column break is the caption, whatever punctuation
/// it holds, and only the lines below it are parsed as the table.
fn table_from_lines(lines: &[&str], options: &ParseOptions) -> Option<TableSpec> {
    if has_column_break(lines[0]) {
        return parse_smart_table_with(&lines.join("\n"), &options.table);
    }
    let mut table = parse_smart_table_with(&lines[1..].join("\n"), &options.table)?;
    table.title = lines[0].to_string();
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BlockOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(blocks: &[ContentBlock]) -> Vec<BlockKind> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[rstest]
    #[case("Our Approach")]
    #[case("  Scope of Work  ")]
    #[case("Phase 2: Delivery")]
    fn short_line_is_title(#[case] input: &str) {
        let blocks = parse_mixed_content(input);
        assert_eq!(blocks, vec![ContentBlock::titled(input.trim(), "")]);
    }

    #[test]
    fn short_question_stays_plain() {
        // Known boundary: terminal punctuation beats shortness.
        let blocks = parse_mixed_content("Ready to start?");
        assert_eq!(blocks, vec![ContentBlock::new(BlockKind::Plain, "Ready to start?")]);
    }

    #[test]
    fn long_single_line_is_plain() {
        let line = "word ".repeat(20);
        let blocks = parse_mixed_content(&line);
        assert_eq!(kinds(&blocks), vec![BlockKind::Plain]);
        assert_eq!(blocks[0].content, line.trim());
    }

    #[test]
    fn chunks_stay_separate_and_ordered() {
        let input = "Introduction\n\nWe build things.\n\n\n\n- one\n- two\n\n1. first\n2. second";
        let blocks = parse_mixed_content(input);

        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Title,
                BlockKind::Plain,
                BlockKind::Bullets,
                BlockKind::Numbered
            ]
        );
        assert_eq!(blocks[2].content, "- one\n- two");
        assert_eq!(blocks[3].content, "1. first\n2. second");
    }

    #[test]
    fn multi_line_chunk_with_heading() {
        let blocks = parse_mixed_content("About Us\nWe are a small studio.\nFounded in 2010.");
        assert_eq!(
            blocks,
            vec![ContentBlock::titled(
                "About Us",
                "We are a small studio.\nFounded in 2010."
            )]
        );
    }

    #[test]
    fn multi_line_chunk_starting_with_sentence_is_plain() {
        let blocks = parse_mixed_content("We are a small studio.\nFounded in 2010.");
        assert_eq!(
            blocks,
            vec![ContentBlock::new(
                BlockKind::Plain,
                "We are a small studio.\nFounded in 2010."
            )]
        );
    }

    #[test]
    fn list_marker_wins_over_heading() {
        let blocks = parse_mixed_content("- Short item\nAnother line");
        assert_eq!(kinds(&blocks), vec![BlockKind::Bullets]);
    }

    #[test]
    fn tab_separated_chunk_becomes_table() {
        let blocks = parse_mixed_content("Intro\n\nName\tPrice\nWidget\t10\nGadget\t20");

        assert_eq!(kinds(&blocks), vec![BlockKind::Title, BlockKind::Table]);
        let table = blocks[1].table.as_ref().unwrap();
        assert_eq!(table.header_labels(), vec!["Name", "Price"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(blocks[1].content, "Name\tPrice\nWidget\t10\nGadget\t20");
    }

    #[test]
    fn captioned_table_keeps_caption_as_title() {
        let blocks = parse_mixed_content("Pricing\nDesign\t500\nBuild\t900");

        assert_eq!(kinds(&blocks), vec![BlockKind::Table]);
        let table = blocks[0].table.as_ref().unwrap();
        assert_eq!(table.title, "Pricing");
    }

    #[rstest]
    #[case("Pricing (USD, excl. VAT)")]
    #[case("Rates: 2024")]
    #[case("Env = production")]
    fn punctuated_caption_is_not_table_data(#[case] caption: &str) {
        let blocks = parse_mixed_content(&format!("{caption}\nService\tCost\nDesign\t500"));

        assert_eq!(kinds(&blocks), vec![BlockKind::Table]);
        let table = blocks[0].table.as_ref().unwrap();
        assert_eq!(table.title, caption);
        assert_eq!(table.header_labels(), vec!["Service", "Cost"]);
        assert_eq!(table.cells(), vec![vec!["Design", "500"]]);
        assert_eq!(blocks[0].lines().next(), Some(caption));
    }

    #[rstest]
    #[case("- alpha\n- beta\n- gamma", BlockKind::Bullets)]
    #[case("• alpha\n• beta", BlockKind::Bullets)]
    #[case("1. alpha\n2. beta", BlockKind::Numbered)]
    #[case("1) alpha\n2) beta", BlockKind::Numbered)]
    fn list_output_reparses_to_same_kind(#[case] input: &str, #[case] kind: BlockKind) {
        let first = parse_mixed_content(input);
        assert_eq!(kinds(&first), vec![kind]);

        let again = parse_mixed_content(&first[0].content);
        assert_eq!(kinds(&again), vec![kind]);
        assert_eq!(again[0].content, first[0].content);
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(parse_mixed_content("").is_empty());
        assert!(parse_mixed_content(" \n\n\t\n  ").is_empty());
    }

    #[test]
    fn crlf_blank_lines_split_chunks() {
        let blocks = parse_mixed_content("Heading\r\n\r\nBody text here.\r\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Title, BlockKind::Plain]);
    }

    #[test]
    fn title_threshold_is_configurable() {
        let options = ParseOptions {
            blocks: BlockOptions {
                title_max_chars: 5,
                ..BlockOptions::default()
            },
            ..ParseOptions::default()
        };
        let blocks = parse_mixed_content_with("Our Approach", &options);
        assert_eq!(kinds(&blocks), vec![BlockKind::Plain]);
    }
}
