use super::css;

/// Tag names the renderers understand. Everything else is kept as
/// [`Tag::Other`] so its text is still reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    P,
    Ul,
    Ol,
    Li,
    B,
    Strong,
    I,
    Em,
    U,
    Span,
    Br,
    /// `h1` to `h6`.
    Heading(u8),
    Other(String),
}

impl Tag {
    /// Maps a lowercase tag name to a [`Tag`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "p" => Self::P,
            "ul" => Self::Ul,
            "ol" => Self::Ol,
            "li" => Self::Li,
            "b" => Self::B,
            "strong" => Self::Strong,
            "i" => Self::I,
            "em" => Self::Em,
            "u" => Self::U,
            "span" => Self::Span,
            "br" => Self::Br,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            other => Self::Other(other.to_string()),
        }
    }

    /// Elements that never have children or a closing tag.
    pub fn is_void(&self) -> bool {
        match self {
            Self::Br => true,
            Self::Other(name) => matches!(
                name.as_str(),
                "img" | "hr" | "input" | "meta" | "link" | "wbr" | "col" | "area" | "source"
            ),
            _ => false,
        }
    }

    /// Unknown tags that group blocks rather than run inside a line.
    pub fn is_block_wrapper(&self) -> bool {
        match self {
            Self::Other(name) => matches!(
                name.as_str(),
                "div"
                    | "section"
                    | "article"
                    | "aside"
                    | "main"
                    | "header"
                    | "footer"
                    | "nav"
                    | "blockquote"
                    | "figure"
                    | "table"
                    | "thead"
                    | "tbody"
                    | "tfoot"
                    | "tr"
                    | "td"
                    | "th"
                    | "body"
                    | "html"
            ),
            _ => false,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Self::B | Self::Strong)
    }

    /// Inline formatting tags that carry style.
    pub fn is_styling(&self) -> bool {
        matches!(
            self,
            Self::B | Self::Strong | Self::I | Self::Em | Self::U | Self::Span
        )
    }

    /// `<p>` and `<li>` close an open sibling of the same kind.
    pub fn closes_open_sibling(&self) -> bool {
        matches!(self, Self::P | Self::Li)
    }
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    /// Attribute names are lowercase; values are entity-decoded.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a declaration in this element's `style` attribute.
    pub fn style_property(&self, property: &str) -> Option<&str> {
        css::property(self.attr("style")?, property)
    }

    /// True when the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Concatenated text of all descendants; `<br>` contributes a newline.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

/// A node of the parsed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Element(Element),
    /// Entity-decoded text.
    Text(String),
}

impl HtmlNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(std::slice::from_ref(self), &mut out);
        out
    }
}

/// Concatenated text of `nodes`.
pub fn text_of(nodes: &[HtmlNode]) -> String {
    let mut out = String::new();
    collect_text(nodes, &mut out);
    out
}

fn collect_text(nodes: &[HtmlNode], out: &mut String) {
    for node in nodes {
        match node {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(el) if el.tag == Tag::Br => out.push('\n'),
            HtmlNode::Element(el) => collect_text(&el.children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names() {
        assert_eq!(Tag::from_name("strong"), Tag::Strong);
        assert_eq!(Tag::from_name("h3"), Tag::Heading(3));
        assert_eq!(Tag::from_name("div"), Tag::Other("div".into()));
        assert!(Tag::Br.is_void());
        assert!(Tag::Other("img".into()).is_void());
        assert!(!Tag::P.is_void());
        assert!(Tag::from_name("div").is_block_wrapper());
        assert!(!Tag::from_name("a").is_block_wrapper());
        assert!(!Tag::P.is_block_wrapper());
    }

    #[test]
    fn element_attributes() {
        let el = Element {
            tag: Tag::P,
            attrs: vec![
                ("class".into(), "ql-align-center intro".into()),
                ("style".into(), "text-align: right".into()),
            ],
            children: vec![HtmlNode::Text("x".into())],
        };
        assert!(el.has_class("ql-align-center"));
        assert!(!el.has_class("ql-align"));
        assert_eq!(el.style_property("text-align"), Some("right"));
        assert_eq!(el.attr("id"), None);
    }

    #[test]
    fn text_content_includes_line_breaks() {
        let el = Element {
            tag: Tag::P,
            attrs: vec![],
            children: vec![
                HtmlNode::Text("a".into()),
                HtmlNode::Element(Element::new(Tag::Br)),
                HtmlNode::Element(Element {
                    tag: Tag::B,
                    attrs: vec![],
                    children: vec![HtmlNode::Text("b".into())],
                }),
            ],
        };
        assert_eq!(el.text_content(), "a\nb");
    }
}
