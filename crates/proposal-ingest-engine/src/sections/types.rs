use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Title,
    Bullets,
    Numbered,
}

/// An editable content record of a page.
///
/// List sections keep one `• item` / `N. item` line per entry in `content`;
/// a list that followed a header carries that header in `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(kind: SectionKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            content: content.into(),
        }
    }

    /// A title section that has nothing under it yet.
    pub fn is_bare_title(&self) -> bool {
        self.kind == SectionKind::Title && self.content.is_empty()
    }
}
