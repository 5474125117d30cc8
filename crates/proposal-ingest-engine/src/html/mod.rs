//! # Restricted HTML
//!
//! A small recursive-descent parser for the HTML a WYSIWYG editor produces
//! for proposal pages. It builds an explicit node tree instead of slicing the
//! markup with regexes, so nested and overlapping inline tags resolve
//! predictably.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` / `Element` tree and the `Tag` subset
//! - **`parser`**: `parse_fragment()` with recovery for malformed markup
//! - **`entities`**: entity decoding for text and attribute values
//! - **`css`**: inline `style` attribute declarations
//!
//! Only `p ul ol li b strong i em u span br h1..h6` carry meaning for the
//! renderers, and only `color`, `background-color` and `text-align` are read
//! from `style`. Other tags parse as [`Tag::Other`] and contribute their text.

pub mod css;
pub mod entities;
pub mod node;
pub mod parser;

pub use entities::decode_entities;
pub use node::{Element, HtmlNode, Tag, text_of};
pub use parser::parse_fragment;
