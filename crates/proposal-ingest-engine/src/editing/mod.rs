//! # Page Editing
//!
//! Page content is a list of [`crate::Section`]s, each held under a stable
//! [`SectionId`]. All changes go through [`SectionCmd`]s applied with
//! [`PageContent::apply`], which returns a [`Patch`] naming the sections that
//! changed and the new page version.
//!
//! - **`commands`**: `SectionCmd` and `EditError`
//! - **`page`**: `PageContent`, `StoredSection`, `SectionId`
//! - **`patch`**: edit result metadata
//!
//! ```rust
//! use proposal_ingest_engine::editing::{PageContent, SectionCmd};
//!
//! let mut page = PageContent::new();
//! let patch = page.paste_html("<h2>Scope</h2><ul><li>Design</li><li>Build</li></ul>");
//! assert_eq!(patch.changed.len(), 1);
//!
//! let id = page.sections()[0].id;
//! page.apply(SectionCmd::Update {
//!     id,
//!     title: Some("Deliverables".into()),
//!     content: None,
//! })
//! .unwrap();
//! assert_eq!(page.sections()[0].section.title, "Deliverables");
//! ```

pub mod commands;
pub mod page;
pub mod patch;

pub use commands::{EditError, SectionCmd};
pub use page::{PageContent, SectionId, StoredSection};
pub use patch::Patch;
