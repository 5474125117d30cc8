use super::entities::decode_entities;
use super::node::{Element, HtmlNode, Tag};
use crate::parsing::cursor::Cursor;

const COMMENT_OPEN: &[u8] = b"<!--";
const COMMENT_CLOSE: &[u8] = b"-->";
const CLOSE_TAG: &[u8] = b"</";
/// Elements opened deeper than this are kept as empty elements and their
/// content becomes siblings, so the tree depth stays bounded.
const MAX_DEPTH: usize = 256;

/// Parses an HTML fragment into a node tree.
///
/// Recovery rules for editor output that is not well formed:
/// - unclosed elements close at end of input or when an ancestor closes
/// - a closing tag with no open element of that name is ignored
/// - `<p>` and `<li>` close an open element of the same name
/// - a `<` that does not start a tag is text
/// - comments are dropped
/// - nesting stops at [`MAX_DEPTH`]; deeper content is flattened into the
///   innermost element that was still accepted
pub fn parse_fragment(html: &str) -> Vec<HtmlNode> {
    let mut parser = FragmentParser {
        cur: Cursor::new(html),
        open: vec![],
    };
    parser.parse_children()
}

struct FragmentParser<'a> {
    cur: Cursor<'a>,
    /// Tags of the elements currently being filled, innermost last.
    open: Vec<Tag>,
}

struct OpenTag {
    tag: Tag,
    attrs: Vec<(String, String)>,
    self_closing: bool,
}

impl<'a> FragmentParser<'a> {
    /// Parses nodes until EOF or until a closing tag for the innermost open
    /// element (consumed) or for an outer one (left for the caller).
    fn parse_children(&mut self) -> Vec<HtmlNode> {
        let mut out = vec![];
        let mut text_start = self.cur.pos();

        while !self.cur.eof() {
            let tag_start = self.cur.pos();

            if self.cur.starts_with(COMMENT_OPEN) {
                self.flush_text(&mut out, text_start, tag_start);
                self.cur.bump_n(COMMENT_OPEN.len());
                if self.cur.bump_until(COMMENT_CLOSE) {
                    self.cur.bump_n(COMMENT_CLOSE.len());
                }
                text_start = self.cur.pos();
                continue;
            }

            if self.cur.starts_with(CLOSE_TAG) {
                let Some(tag) = self.read_close_tag() else {
                    self.cur.i = tag_start + 1;
                    continue;
                };
                if self.open.last() == Some(&tag) {
                    self.flush_text(&mut out, text_start, tag_start);
                    return out;
                }
                if self.open.contains(&tag) {
                    self.flush_text(&mut out, text_start, tag_start);
                    self.cur.i = tag_start;
                    return out;
                }
                log::warn!("html: ignoring stray closing tag {tag:?}");
                self.flush_text(&mut out, text_start, tag_start);
                text_start = self.cur.pos();
                continue;
            }

            if self.cur.peek() == Some(b'<')
                && self.cur.peek_at(1).is_some_and(|b| b.is_ascii_alphabetic())
            {
                let Some(open) = self.read_open_tag() else {
                    self.cur.i = tag_start + 1;
                    continue;
                };
                self.flush_text(&mut out, text_start, tag_start);

                if open.tag.closes_open_sibling() && self.open.last() == Some(&open.tag) {
                    self.cur.i = tag_start;
                    return out;
                }

                let mut element = Element {
                    tag: open.tag,
                    attrs: open.attrs,
                    children: vec![],
                };
                if self.open.len() >= MAX_DEPTH {
                    log::debug!("html: nesting limit reached, flattening {:?}", element.tag);
                } else if !open.self_closing && !element.tag.is_void() {
                    self.open.push(element.tag.clone());
                    element.children = self.parse_children();
                    self.open.pop();
                }
                log::trace!(
                    "html: parsed {:?} with {} child(ren)",
                    element.tag,
                    element.children.len()
                );
                out.push(HtmlNode::Element(element));
                text_start = self.cur.pos();
                continue;
            }

            self.cur.bump();
        }

        self.flush_text(&mut out, text_start, self.cur.pos());
        out
    }

    fn flush_text(&self, out: &mut Vec<HtmlNode>, start: usize, end: usize) {
        if end > start {
            let raw = &self.cur.s[start..end];
            out.push(HtmlNode::Text(decode_entities(raw)));
        }
    }

    /// Reads `name` out of the input, lowercased.
    fn read_name(&mut self) -> String {
        let start = self.cur.pos();
        self.cur
            .bump_while(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b':');
        self.cur.slice_from(start).to_ascii_lowercase()
    }

    /// Reads `</name ...>`. Returns `None` if no name follows `</`.
    fn read_close_tag(&mut self) -> Option<Tag> {
        self.cur.bump_n(CLOSE_TAG.len());
        let name = self.read_name();
        if name.is_empty() {
            return None;
        }
        if self.cur.bump_until(b">") {
            self.cur.bump();
        }
        Some(Tag::from_name(&name))
    }

    /// Reads `<name attr="value" ...>`. Returns `None` if the tag never closes.
    fn read_open_tag(&mut self) -> Option<OpenTag> {
        self.cur.bump(); // <
        let tag = Tag::from_name(&self.read_name());
        let mut attrs = vec![];

        loop {
            self.cur.bump_while(|b| b.is_ascii_whitespace());
            match self.cur.peek()? {
                b'>' => {
                    self.cur.bump();
                    return Some(OpenTag {
                        tag,
                        attrs,
                        self_closing: false,
                    });
                }
                b'/' if self.cur.peek_at(1) == Some(b'>') => {
                    self.cur.bump_n(2);
                    return Some(OpenTag {
                        tag,
                        attrs,
                        self_closing: true,
                    });
                }
                _ => {}
            }

            let name_start = self.cur.pos();
            self.cur.bump_while(|b| {
                !b.is_ascii_whitespace() && !matches!(b, b'=' | b'>' | b'/' | b'"' | b'\'')
            });
            let name = self.cur.slice_from(name_start).to_ascii_lowercase();
            if name.is_empty() {
                // junk such as a stray quote or slash
                self.cur.bump();
                continue;
            }

            self.cur.bump_while(|b| b.is_ascii_whitespace());
            let value = if self.cur.peek() == Some(b'=') {
                self.cur.bump();
                self.cur.bump_while(|b| b.is_ascii_whitespace());
                self.read_attr_value()?
            } else {
                String::new()
            };
            attrs.push((name, value));
        }
    }

    fn read_attr_value(&mut self) -> Option<String> {
        match self.cur.peek()? {
            quote @ (b'"' | b'\'') => {
                self.cur.bump();
                let start = self.cur.pos();
                if !self.cur.bump_until(&[quote]) {
                    return None;
                }
                let value = decode_entities(self.cur.slice_from(start));
                self.cur.bump();
                Some(value)
            }
            _ => {
                let start = self.cur.pos();
                self.cur.bump_while(|b| !b.is_ascii_whitespace() && b != b'>');
                Some(decode_entities(self.cur.slice_from(start)))
            }
        }
    }
}
