use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EditError, Patch, SectionCmd};
use crate::options::ParseOptions;
use crate::sections::{Section, parse_mixed_to_sections_with};

/// Stable identifier of a section that survives edits and reordering
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSection {
    pub id: SectionId,
    #[serde(flatten)]
    pub section: Section,
}

/// The editable sections of one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    sections: Vec<StoredSection>,
    version: u64,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page holding `sections` in order, each under a fresh id.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .map(|section| StoredSection {
                    id: SectionId::new(),
                    section,
                })
                .collect(),
            version: 0,
        }
    }

    pub fn sections(&self) -> &[StoredSection] {
        &self.sections
    }

    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections
            .iter()
            .find(|stored| stored.id == id)
            .map(|stored| &stored.section)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Incremented by every successful command.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `cmd`. A failed command leaves the page and its version untouched.
    pub fn apply(&mut self, cmd: SectionCmd) -> Result<Patch, EditError> {
        let mut patch = Patch::default();

        match cmd {
            SectionCmd::Add { section, at } => {
                let index = at.unwrap_or(self.sections.len());
                self.check_index(index, self.sections.len())?;
                let id = SectionId::new();
                self.sections.insert(index, StoredSection { id, section });
                patch.changed.push(id);
            }
            SectionCmd::Update { id, title, content } => {
                let index = self.index_of(id)?;
                let section = &mut self.sections[index].section;
                if let Some(title) = title {
                    section.title = title;
                }
                if let Some(content) = content {
                    section.content = content;
                }
                patch.changed.push(id);
            }
            SectionCmd::Delete { id } => {
                let index = self.index_of(id)?;
                self.sections.remove(index);
                patch.removed.push(id);
            }
            SectionCmd::Move { id, to } => {
                let from = self.index_of(id)?;
                self.check_index(to, self.sections.len() - 1)?;
                let stored = self.sections.remove(from);
                self.sections.insert(to, stored);
                patch.changed.push(id);
            }
            SectionCmd::Reset => {
                patch.removed = self.sections.drain(..).map(|stored| stored.id).collect();
            }
        }

        self.version += 1;
        patch.version = self.version;
        log::debug!(
            "page v{}: {} changed, {} removed",
            patch.version,
            patch.changed.len(),
            patch.removed.len()
        );
        Ok(patch)
    }

    /// Converts pasted editor HTML with the default [`ParseOptions`] and
    /// appends the resulting sections.
    pub fn paste_html(&mut self, html: &str) -> Patch {
        self.paste_html_with(html, &ParseOptions::default())
    }

    pub fn paste_html_with(&mut self, html: &str, options: &ParseOptions) -> Patch {
        let mut patch = Patch {
            version: self.version,
            ..Patch::default()
        };
        for section in parse_mixed_to_sections_with(html, options) {
            let added = self.apply(SectionCmd::Add { section, at: None });
            // Appending is always in range
            if let Ok(added) = added {
                patch.changed.extend(added.changed);
                patch.version = added.version;
            }
        }
        patch
    }

    fn index_of(&self, id: SectionId) -> Result<usize, EditError> {
        self.sections
            .iter()
            .position(|stored| stored.id == id)
            .ok_or(EditError::UnknownSection(id))
    }

    fn check_index(&self, index: usize, max: usize) -> Result<(), EditError> {
        if index > max {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.sections.len(),
            });
        }
        Ok(())
    }
}
