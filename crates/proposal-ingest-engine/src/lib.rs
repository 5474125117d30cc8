pub mod editing;
pub mod html;
pub mod options;
pub mod parsing;
pub mod render;
pub mod sections;

// Re-export key types for easier usage
pub use editing::{EditError, PageContent, Patch, SectionCmd, SectionId, StoredSection};
pub use options::{BlockOptions, ParseOptions, SectionOptions, TableOptions};
pub use parsing::{
    blocks::{BlockKind, ContentBlock, parse_mixed_content, parse_mixed_content_with},
    inline::{InlineSegment, parse_inline_bold},
    markers::{LineMarker, detect_marker, is_bullet, is_numbered, strip_marker},
    table::{TableHeaders, TableRow, TableSpec, parse_smart_table, parse_smart_table_with},
};
pub use render::{
    RenderListItem, RenderNode, TextAlign, TextRun,
    rich_text::render_rich_text,
    style::{FontStyle, FontWeight, StyleStack, TextDecoration, TextStyle},
    typst::{blocks_to_typst, nodes_to_typst},
};
pub use sections::{Section, SectionKind, parse_mixed_to_sections, parse_mixed_to_sections_with};
