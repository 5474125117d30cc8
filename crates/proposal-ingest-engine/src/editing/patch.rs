use super::SectionId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch {
    /// Sections added or modified, in page order.
    pub changed: Vec<SectionId>,
    pub removed: Vec<SectionId>,
    pub version: u64,
}
