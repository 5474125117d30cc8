use serde::Serialize;

use crate::html::{Element, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    None,
    Underline,
}

/// Style of a text run. Unset fields inherit from the enclosing style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl TextStyle {
    pub fn bold() -> Self {
        Self {
            font_weight: Some(FontWeight::Bold),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            font_style: Some(FontStyle::Italic),
            ..Self::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            text_decoration: Some(TextDecoration::Underline),
            ..Self::default()
        }
    }

    /// The style change an inline element applies, or `None` for elements
    /// that do not style their content.
    pub fn delta_for(element: &Element) -> Option<Self> {
        match element.tag {
            Tag::B | Tag::Strong => Some(Self::bold()),
            Tag::I | Tag::Em => Some(Self::italic()),
            Tag::U => Some(Self::underline()),
            Tag::Span => Some(Self {
                color: element.style_property("color").map(str::to_string),
                background_color: element
                    .style_property("background-color")
                    .map(str::to_string),
                ..Self::default()
            }),
            _ => None,
        }
    }

    /// `self` with every field that `delta` sets replaced.
    pub fn merged(&self, delta: &TextStyle) -> TextStyle {
        TextStyle {
            font_weight: delta.font_weight.or(self.font_weight),
            text_decoration: delta.text_decoration.or(self.text_decoration),
            font_style: delta.font_style.or(self.font_style),
            color: delta.color.clone().or_else(|| self.color.clone()),
            background_color: delta
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight == Some(FontWeight::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == Some(FontStyle::Italic)
    }

    pub fn is_underlined(&self) -> bool {
        self.text_decoration == Some(TextDecoration::Underline)
    }
}

/// Stack of resolved style snapshots for nested inline elements.
///
/// Each frame is the full style at that depth, so popping restores the
/// parent exactly and siblings never see each other's changes. The base
/// frame is never popped.
#[derive(Debug, Clone)]
pub struct StyleStack {
    frames: Vec<TextStyle>,
}

impl StyleStack {
    pub fn new(base: TextStyle) -> Self {
        Self { frames: vec![base] }
    }

    pub fn current(&self) -> &TextStyle {
        // frames is never empty: pop keeps the base frame
        &self.frames[self.frames.len() - 1]
    }

    pub fn push(&mut self, delta: &TextStyle) {
        let next = self.current().merged(delta);
        self.frames.push(next);
    }

    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }
}
