use crate::html::{Element, HtmlNode, Tag, text_of};
use crate::options::SectionOptions;
use crate::parsing::ends_with_sentence_punctuation;

/// One top-level piece of the pasted HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portion {
    Header(String),
    List { ordered: bool, lines: Vec<String> },
    /// Paragraph text with bold spans written as `**bold**`.
    Paragraph(String),
}

const ASIDE_PREFIXES: [&str; 3] = ["note:", "ps:", "p.s."];

/// Splits a parsed fragment into portions at heading, paragraph and list
/// boundaries. Loose inline content between blocks forms one paragraph.
pub fn split_portions(nodes: &[HtmlNode], options: &SectionOptions) -> Vec<Portion> {
    let mut out = vec![];
    let mut loose: Vec<&HtmlNode> = vec![];

    for node in nodes {
        let block = node.as_element().filter(|el| {
            matches!(el.tag, Tag::P | Tag::Ul | Tag::Ol | Tag::Heading(_))
                || el.tag.is_block_wrapper()
        });
        let Some(el) = block else {
            loose.push(node);
            continue;
        };
        flush_loose(&mut loose, &mut out);

        match &el.tag {
            Tag::Heading(_) => {
                let text = el.text_content().trim().to_string();
                if !text.is_empty() {
                    out.push(Portion::Header(text));
                }
            }
            Tag::P => out.extend(classify_paragraph(el, options)),
            Tag::Ul | Tag::Ol => {
                let lines = list_lines(el);
                if !lines.is_empty() {
                    out.push(Portion::List {
                        ordered: el.tag == Tag::Ol,
                        lines,
                    });
                }
            }
            // Wrappers such as `<div>`: their own blocks still split
            _ => out.extend(split_portions(&el.children, options)),
        }
    }
    flush_loose(&mut loose, &mut out);

    out
}

fn flush_loose(loose: &mut Vec<&HtmlNode>, out: &mut Vec<Portion>) {
    if loose.is_empty() {
        return;
    }
    let mut text = String::new();
    for node in loose.drain(..) {
        write_marked_bold(std::slice::from_ref(node), false, &mut text);
    }
    let text = text.trim();
    if !text.is_empty() {
        out.push(Portion::Paragraph(text.to_string()));
    }
}

fn classify_paragraph(p: &Element, options: &SectionOptions) -> Option<Portion> {
    let text = p.text_content();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let chars = text.chars().count();

    if all_text_bold(&p.children, false) && chars < options.bold_header_max_chars {
        log::debug!("sections: bold paragraph {text:?} is a header");
        return Some(Portion::Header(text.to_string()));
    }
    if is_unstyled(&p.children)
        && (options.header_min_chars..=options.header_max_chars).contains(&chars)
        && !text.contains('\n')
        && !ends_with_sentence_punctuation(text)
        && !is_aside(text)
    {
        log::debug!("sections: short paragraph {text:?} is a header");
        return Some(Portion::Header(text.to_string()));
    }

    let mut marked = String::new();
    write_marked_bold(&p.children, false, &mut marked);
    Some(Portion::Paragraph(marked.trim().to_string()))
}

fn is_aside(text: &str) -> bool {
    let lower = text.to_lowercase();
    ASIDE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// True when every non-blank text node sits inside `<b>` or `<strong>`.
fn all_text_bold(nodes: &[HtmlNode], in_bold: bool) -> bool {
    nodes.iter().all(|node| match node {
        HtmlNode::Text(text) => in_bold || text.trim().is_empty(),
        HtmlNode::Element(el) => all_text_bold(&el.children, in_bold || el.tag.is_bold()),
    })
}

fn is_unstyled(nodes: &[HtmlNode]) -> bool {
    nodes.iter().all(|node| match node {
        HtmlNode::Text(_) => true,
        HtmlNode::Element(el) => !el.tag.is_styling() && is_unstyled(&el.children),
    })
}

/// Writes the text of `nodes`, wrapping bold runs in `**`.
fn write_marked_bold(nodes: &[HtmlNode], in_bold: bool, out: &mut String) {
    for node in nodes {
        match node {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(el) if el.tag == Tag::Br => out.push('\n'),
            HtmlNode::Element(el) if el.tag.is_bold() && !in_bold => {
                let inner = text_of(&el.children);
                if inner.trim().is_empty() {
                    out.push_str(&inner);
                } else {
                    out.push_str("**");
                    out.push_str(&inner);
                    out.push_str("**");
                }
            }
            HtmlNode::Element(el) => write_marked_bold(&el.children, in_bold, out),
        }
    }
}

/// `• item` / `N. item` lines for the `<li>` children of a list. Nested
/// lists continue as further lines with their own markers.
fn list_lines(list: &Element) -> Vec<String> {
    let mut lines = vec![];
    let mut number = 0;

    for item in list.children.iter().filter_map(HtmlNode::as_element) {
        if item.tag != Tag::Li {
            continue;
        }
        let (nested, inline): (Vec<&HtmlNode>, Vec<&HtmlNode>) =
            item.children.iter().partition(|child| {
                child
                    .as_element()
                    .is_some_and(|el| matches!(el.tag, Tag::Ul | Tag::Ol))
            });

        let mut text = String::new();
        for node in inline {
            write_marked_bold(std::slice::from_ref(node), false, &mut text);
        }
        let text = text.trim();
        if !text.is_empty() {
            number += 1;
            if list.tag == Tag::Ol {
                lines.push(format!("{number}. {text}"));
            } else {
                lines.push(format!("• {text}"));
            }
        }

        for el in nested.into_iter().filter_map(HtmlNode::as_element) {
            lines.extend(list_lines(el));
        }
    }

    lines
}
