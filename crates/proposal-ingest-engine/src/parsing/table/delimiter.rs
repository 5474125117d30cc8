use std::sync::OnceLock;

use regex::Regex;

/// Column separator chosen for a pasted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Equals,
    Colon,
    /// Two or more whitespace characters.
    MultiSpace,
}

impl Delimiter {
    /// Characters whose presence marks a line as delimited data rather than a title.
    pub const MARKER_CHARS: [char; 4] = ['\t', ',', '=', ':'];

    /// Picks the delimiter for `line` in priority order tab, comma, equals,
    /// colon, falling back to runs of whitespace.
    pub fn detect(line: &str) -> Self {
        if line.contains('\t') {
            Self::Tab
        } else if line.contains(',') {
            Self::Comma
        } else if line.contains('=') {
            Self::Equals
        } else if line.contains(':') {
            Self::Colon
        } else {
            Self::MultiSpace
        }
    }

    /// Splits `line` into trimmed fields.
    pub fn split(self, line: &str) -> Vec<&str> {
        let fields: Vec<&str> = match self {
            Self::Tab => line.split('\t').collect(),
            Self::Comma => line.split(',').collect(),
            Self::Equals => line.split('=').collect(),
            Self::Colon => line.split(':').collect(),
            Self::MultiSpace => multi_space_regex().split(line).collect(),
        };
        fields.into_iter().map(str::trim).collect()
    }
}

fn multi_space_regex() -> &'static Regex {
    static MULTI_SPACE: OnceLock<Regex> = OnceLock::new();
    MULTI_SPACE.get_or_init(|| Regex::new(r"\s{2,}").expect("Invalid multi-space regex"))
}

/// True when `line` contains any of [`Delimiter::MARKER_CHARS`].
pub fn has_delimiter_char(line: &str) -> bool {
    line.contains(Delimiter::MARKER_CHARS)
}
