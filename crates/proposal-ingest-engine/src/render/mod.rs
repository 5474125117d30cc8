//! # Render Nodes
//!
//! Styled paragraph / list / text nodes handed to the document renderer.
//!
//! - **`style`**: `TextStyle` records and the `StyleStack` used while walking inline markup
//! - **`rich_text`**: `render_rich_text()` from editor HTML to `RenderNode`s
//! - **`typst`**: Typst markup for `RenderNode`s and `ContentBlock`s, ready for a
//!   document compiler to paginate

pub mod rich_text;
pub mod style;
pub mod typst;

use serde::Serialize;

use style::TextStyle;

/// A literal run of text with one resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// One list entry: its literal marker (`•` or `3.`) and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderListItem {
    pub marker: String,
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderNode {
    Paragraph {
        #[serde(skip_serializing_if = "Option::is_none")]
        align: Option<TextAlign>,
        runs: Vec<TextRun>,
    },
    List {
        ordered: bool,
        items: Vec<RenderListItem>,
    },
    /// Tag-stripped fallback for markup outside paragraphs and lists.
    Text(TextRun),
}

impl RenderNode {
    /// Plain text of the node, list markers included.
    pub fn plain_text(&self) -> String {
        fn runs_text(runs: &[TextRun]) -> String {
            runs.iter().map(|r| r.text.as_str()).collect()
        }
        match self {
            Self::Paragraph { runs, .. } => runs_text(runs),
            Self::List { items, .. } => items
                .iter()
                .map(|item| format!("{} {}", item.marker, runs_text(&item.runs)))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Text(run) => run.text.clone(),
        }
    }
}
