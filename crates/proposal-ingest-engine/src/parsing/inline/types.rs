use serde::Serialize;

/// A run of text that is either entirely bold or entirely plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSegment {
    pub text: String,
    pub bold: bool,
}

impl InlineSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}
