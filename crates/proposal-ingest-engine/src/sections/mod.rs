//! # HTML to Page Sections
//!
//! Segments editor HTML into the [`Section`] records a page stores.
//!
//! - **`portion`**: splits the parsed fragment into header / list / paragraph portions
//! - **`types`**: `Section` and `SectionKind`
//!
//! Portions are folded into sections in order:
//!
//! - a header after a bare title becomes its bold subtitle (`**subtitle**` content)
//! - a list after a bare title takes that title instead of starting a new section
//! - a paragraph after a title section is appended to its content, blank-line joined
//! - anything else starts a new section; an orphan paragraph gets an empty title

mod portion;
pub mod types;

pub use types::{Section, SectionKind};

use crate::html::parse_fragment;
use crate::options::ParseOptions;
use portion::{Portion, split_portions};

/// Converts `html` with the default [`ParseOptions`].
pub fn parse_mixed_to_sections(html: &str) -> Vec<Section> {
    parse_mixed_to_sections_with(html, &ParseOptions::default())
}

pub fn parse_mixed_to_sections_with(html: &str, options: &ParseOptions) -> Vec<Section> {
    if html.trim().is_empty() {
        return vec![];
    }
    // Source line breaks are layout only; `<br>` carries real breaks
    let html = html.replace(['\r', '\n'], " ");
    let nodes = parse_fragment(&html);

    let mut sections: Vec<Section> = vec![];
    for portion in split_portions(&nodes, &options.sections) {
        fold_portion(&mut sections, portion);
    }
    log::debug!("sections: produced {} section(s)", sections.len());
    sections
}

fn fold_portion(sections: &mut Vec<Section>, portion: Portion) {
    let last = sections.last_mut();

    match portion {
        Portion::Header(text) => match last {
            Some(open) if open.is_bare_title() && !open.title.is_empty() => {
                open.content = format!("**{text}**");
            }
            _ => sections.push(Section::new(SectionKind::Title, text, "")),
        },
        Portion::List { ordered, lines } => {
            let kind = if ordered {
                SectionKind::Numbered
            } else {
                SectionKind::Bullets
            };
            match last {
                Some(open) if open.is_bare_title() => {
                    open.kind = kind;
                    open.content = lines.join("\n");
                }
                _ => sections.push(Section::new(kind, "", lines.join("\n"))),
            }
        }
        Portion::Paragraph(text) => match last {
            Some(open) if open.kind == SectionKind::Title => {
                if open.content.is_empty() {
                    open.content = text;
                } else {
                    open.content.push_str("\n\n");
                    open.content.push_str(&text);
                }
            }
            _ => sections.push(Section::new(SectionKind::Title, "", text)),
        },
    }
}
