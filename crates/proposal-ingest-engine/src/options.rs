//! Tunable thresholds for the paste heuristics.
//!
//! `Default` reproduces the constants the editors have always used, so the
//! plain `parse_*` entry points and the `*_with(.., &ParseOptions::default())`
//! forms behave identically.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub blocks: BlockOptions,
    pub table: TableOptions,
    pub sections: SectionOptions,
}

/// Thresholds for [`crate::parse_mixed_content`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockOptions {
    /// A single-line block shorter than this (in chars) may become a title.
    pub title_max_chars: usize,
    /// The first line of a multi-line block shorter than this may become its title.
    pub heading_max_chars: usize,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            title_max_chars: 80,
            heading_max_chars: 100,
        }
    }
}

/// Defaults and keywords for [`crate::parse_smart_table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub default_title: String,
    /// Placeholder labels for `col1..col3` when no header row is detected.
    pub default_headers: [String; 3],
    /// Case-insensitive substrings that mark a line as a header row.
    pub header_keywords: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            default_title: "Pasted Table".to_string(),
            default_headers: ["Item".to_string(), "Value".to_string(), "Note".to_string()],
            header_keywords: [
                "service", "cost", "price", "item", "desc", "title", "timeline", "date", "qty",
                "quantity",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        }
    }
}

/// Header-likelihood bounds for [`crate::parse_mixed_to_sections`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOptions {
    pub header_min_chars: usize,
    pub header_max_chars: usize,
    /// A paragraph that is entirely bold and shorter than this is a header.
    pub bold_header_max_chars: usize,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            header_min_chars: 2,
            header_max_chars: 85,
            bold_header_max_chars: 100,
        }
    }
}
