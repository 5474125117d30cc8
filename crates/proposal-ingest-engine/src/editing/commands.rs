use super::SectionId;
use crate::sections::Section;

/// Commands that can be applied to page content
#[derive(Debug, Clone, PartialEq)]
pub enum SectionCmd {
    /// Insert at `at`, or append when `None`.
    Add {
        section: Section,
        at: Option<usize>,
    },
    /// Replace the fields that are `Some`.
    Update {
        id: SectionId,
        title: Option<String>,
        content: Option<String>,
    },
    Delete {
        id: SectionId,
    },
    /// Move to position `to` of the page after removal.
    Move {
        id: SectionId,
        to: usize,
    },
    /// Remove every section.
    Reset,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Unknown section: {0}")]
    UnknownSection(SectionId),
    #[error("Index {index} out of range for a page of {len} section(s)")]
    IndexOutOfRange { index: usize, len: usize },
}
