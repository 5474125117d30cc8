use serde::Serialize;

use crate::parsing::table::TableSpec;

/// Classification of one blank-line-separated chunk of pasted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Plain,
    Bullets,
    Numbered,
    Table,
}

/// A typed chunk produced by [`crate::parse_mixed_content`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Set only for [`BlockKind::Title`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Newline-joined lines; empty for a bare title.
    pub content: String,
    /// Parsed form of a [`BlockKind::Table`] block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableSpec>,
}

impl ContentBlock {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            content: content.into(),
            table: None,
        }
    }

    pub fn titled(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Title,
            title: Some(title.into()),
            content: content.into(),
            table: None,
        }
    }

    pub fn table(content: impl Into<String>, table: Option<TableSpec>) -> Self {
        Self {
            kind: BlockKind::Table,
            title: None,
            content: content.into(),
            table,
        }
    }

    /// Content lines, for list and table blocks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n').filter(|line| !line.is_empty())
    }
}
