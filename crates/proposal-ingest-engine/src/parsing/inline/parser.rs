use std::sync::OnceLock;

use regex::Regex;

use super::types::InlineSegment;
use crate::parsing::cursor::Cursor;

const BOLD: &[u8] = b"**";

fn label_regex() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| Regex::new(r"^([^:]+:)\s*(.*)$").expect("Invalid label regex"))
}

/// Splits `text` into bold and plain segments.
///
/// Adjacent segments with the same weight are merged, so the output
/// alternates. Concatenating the texts gives back `text` without the `**`
/// markers, except that whitespace after a `Label:` is normalised to one space.
pub fn parse_inline_bold(text: &str) -> Vec<InlineSegment> {
    let mut out = Vec::new();
    for segment in split_bold_markers(text) {
        if segment.bold {
            push_merged(&mut out, segment);
        } else {
            split_labels(&segment.text, &mut out);
        }
    }
    out
}

/// First pass: explicit `**...**` spans.
fn split_bold_markers(text: &str) -> Vec<InlineSegment> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let marker_start = cur.pos();
        if let Some(inner) = try_parse_bold(&mut cur) {
            if marker_start > text_start {
                out.push(InlineSegment::plain(&text[text_start..marker_start]));
            }
            out.push(InlineSegment::bold(inner));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if cur.pos() > text_start {
        out.push(InlineSegment::plain(&text[text_start..]));
    }
    out
}

/// Attempts to parse `**inner**` at the current position.
///
/// Returns `None` when not at `**`, when the span is empty, or when no
/// closing marker appears before the end of the line. On failure the cursor
/// is restored.
fn try_parse_bold<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.starts_with(BOLD) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(BOLD.len());
    let inner_start = cur.pos();
    cur.bump_while(|b| b != b'\n' && b != b'*');
    // a lone `*` inside the span is content, keep scanning past it
    while cur.peek() == Some(b'*') && !cur.starts_with(BOLD) {
        cur.bump();
        cur.bump_while(|b| b != b'\n' && b != b'*');
    }

    if !cur.starts_with(BOLD) || cur.pos() == inner_start {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump_n(BOLD.len());
    Some(inner)
}

/// Second pass over a plain segment: `Label:` prefixes, line by line.
fn split_labels(text: &str, out: &mut Vec<InlineSegment>) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            push_merged(out, InlineSegment::plain("\n"));
        }
        if line.is_empty() {
            continue;
        }
        match label_regex().captures(line) {
            Some(caps) => {
                push_merged(out, InlineSegment::bold(&caps[1]));
                let rest = &caps[2];
                if !rest.is_empty() {
                    push_merged(out, InlineSegment::plain(format!(" {rest}")));
                } else if line.len() > caps[1].len() {
                    // only whitespace after the label; keep one space before what follows
                    push_merged(out, InlineSegment::plain(" "));
                }
            }
            None => push_merged(out, InlineSegment::plain(line)),
        }
    }
}

fn push_merged(out: &mut Vec<InlineSegment>, segment: InlineSegment) {
    match out.last_mut() {
        Some(last) if last.bold == segment.bold => last.text.push_str(&segment.text),
        _ => out.push(segment),
    }
}
