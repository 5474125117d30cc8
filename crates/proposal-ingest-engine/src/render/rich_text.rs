use super::style::{StyleStack, TextStyle};
use super::{RenderListItem, RenderNode, TextAlign, TextRun};
use crate::html::{Element, HtmlNode, Tag, parse_fragment};

const BULLET: &str = "•";

/// Renders editor HTML into paragraph, list and text nodes.
///
/// Top-level `<p>` becomes a paragraph, `<ul>`/`<ol>` a list with literal
/// markers. Anything else is flattened to its text and emitted with
/// `base` style when non-empty; consecutive inline nodes outside any
/// paragraph are flattened together.
pub fn render_rich_text(html: &str, base: &TextStyle) -> Vec<RenderNode> {
    let nodes = parse_fragment(html);
    let mut out = vec![];
    let mut loose: Vec<&HtmlNode> = vec![];

    for node in &nodes {
        match node {
            HtmlNode::Element(el) if el.tag == Tag::P => {
                flush_loose(&mut loose, base, &mut out);
                out.push(paragraph(el, base));
            }
            HtmlNode::Element(el) if matches!(el.tag, Tag::Ul | Tag::Ol) => {
                flush_loose(&mut loose, base, &mut out);
                out.push(list(el, base));
            }
            HtmlNode::Element(el) if !(el.tag.is_styling() || el.tag == Tag::Br) => {
                flush_loose(&mut loose, base, &mut out);
                loose.push(node);
                flush_loose(&mut loose, base, &mut out);
            }
            _ => loose.push(node),
        }
    }
    flush_loose(&mut loose, base, &mut out);

    log::debug!(
        "rich text: {} top-level node(s) -> {} render node(s)",
        nodes.len(),
        out.len()
    );
    out
}

fn flush_loose(loose: &mut Vec<&HtmlNode>, base: &TextStyle, out: &mut Vec<RenderNode>) {
    if loose.is_empty() {
        return;
    }
    let text: String = loose.iter().map(|node| node.text_content()).collect();
    loose.clear();
    let text = text.trim();
    if !text.is_empty() {
        out.push(RenderNode::Text(TextRun {
            text: text.to_string(),
            style: base.clone(),
        }));
    }
}

fn paragraph(el: &Element, base: &TextStyle) -> RenderNode {
    RenderNode::Paragraph {
        align: alignment(el),
        runs: inline_runs(&el.children, base),
    }
}

/// Alignment from an editor class (`ql-align-center`) or an inline `text-align`.
fn alignment(el: &Element) -> Option<TextAlign> {
    let from_class = el.attr("class").and_then(|classes| {
        classes
            .split_whitespace()
            .find_map(|class| class.strip_prefix("ql-align-"))
            .and_then(TextAlign::from_name)
    });
    from_class.or_else(|| el.style_property("text-align").and_then(TextAlign::from_name))
}

fn list(el: &Element, base: &TextStyle) -> RenderNode {
    let ordered = el.tag == Tag::Ol;
    let items = el
        .children
        .iter()
        .filter_map(HtmlNode::as_element)
        .filter(|child| child.tag == Tag::Li)
        .enumerate()
        .map(|(i, li)| RenderListItem {
            marker: if ordered {
                format!("{}.", i + 1)
            } else {
                BULLET.to_string()
            },
            runs: inline_runs(&li.children, base),
        })
        .collect();
    RenderNode::List { ordered, items }
}

/// One run per literal text node, styled by the stack of enclosing inline tags.
fn inline_runs(nodes: &[HtmlNode], base: &TextStyle) -> Vec<TextRun> {
    let mut stack = StyleStack::new(base.clone());
    let mut runs = vec![];
    walk_inline(nodes, &mut stack, &mut runs);
    runs
}

fn walk_inline(nodes: &[HtmlNode], stack: &mut StyleStack, runs: &mut Vec<TextRun>) {
    for node in nodes {
        match node {
            HtmlNode::Text(text) if !text.is_empty() => runs.push(TextRun {
                text: text.clone(),
                style: stack.current().clone(),
            }),
            HtmlNode::Text(_) => {}
            HtmlNode::Element(el) if el.tag == Tag::Br => runs.push(TextRun {
                text: "\n".to_string(),
                style: stack.current().clone(),
            }),
            HtmlNode::Element(el) => match TextStyle::delta_for(el) {
                Some(delta) => {
                    stack.push(&delta);
                    walk_inline(&el.children, stack, runs);
                    stack.pop();
                }
                None => {
                    // nested blocks inside a paragraph or item keep their text only,
                    // one line each
                    if matches!(el.tag, Tag::Ul | Tag::Ol | Tag::Li | Tag::P)
                        && runs.last().is_some_and(|r| !r.text.ends_with('\n'))
                    {
                        runs.push(TextRun {
                            text: "\n".to_string(),
                            style: stack.current().clone(),
                        });
                    }
                    walk_inline(&el.children, stack, runs);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::{FontWeight, TextDecoration};
    use pretty_assertions::assert_eq;

    fn run(text: &str, style: TextStyle) -> TextRun {
        TextRun {
            text: text.to_string(),
            style,
        }
    }

    fn render(html: &str) -> Vec<RenderNode> {
        render_rich_text(html, &TextStyle::default())
    }

    #[test]
    fn bold_then_plain_run() {
        assert_eq!(
            render("<p><b>Bold</b> text</p>"),
            vec![RenderNode::Paragraph {
                align: None,
                runs: vec![
                    run("Bold", TextStyle::bold()),
                    run(" text", TextStyle::default())
                ],
            }]
        );
    }

    #[test]
    fn nested_styles_accumulate_and_unwind() {
        let nodes = render("<p><strong>a<em>b<u>c</u></em>d</strong>e</p>");
        let RenderNode::Paragraph { runs, .. } = &nodes[0] else {
            panic!("expected paragraph");
        };

        let bold_italic = TextStyle::bold().merged(&TextStyle::italic());
        assert_eq!(
            runs,
            &vec![
                run("a", TextStyle::bold()),
                run("b", bold_italic.clone()),
                run("c", bold_italic.merged(&TextStyle::underline())),
                run("d", TextStyle::bold()),
                run("e", TextStyle::default()),
            ]
        );
    }

    #[test]
    fn span_colors_merge_over_base() {
        let base = TextStyle {
            color: Some("#222222".into()),
            ..TextStyle::default()
        };
        let nodes = render_rich_text(
            r#"<p>x<span style="background-color: #ffff00;">y</span><span style="color: red">z</span></p>"#,
            &base,
        );
        let RenderNode::Paragraph { runs, .. } = &nodes[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(runs[0].style.color.as_deref(), Some("#222222"));
        assert_eq!(runs[1].style.color.as_deref(), Some("#222222"));
        assert_eq!(runs[1].style.background_color.as_deref(), Some("#ffff00"));
        assert_eq!(runs[2].style.color.as_deref(), Some("red"));
        assert_eq!(runs[2].style.background_color, None);
    }

    #[test]
    fn alignment_from_class_or_style() {
        let nodes = render(
            r#"<p class="ql-align-center">a</p><p style="text-align: right">b</p><p>c</p>"#,
        );
        let aligns: Vec<_> = nodes
            .iter()
            .map(|n| match n {
                RenderNode::Paragraph { align, .. } => *align,
                _ => panic!("expected paragraph"),
            })
            .collect();
        assert_eq!(aligns, vec![Some(TextAlign::Center), Some(TextAlign::Right), None]);
    }

    #[test]
    fn lists_get_literal_markers() {
        let nodes = render("<ul><li>one</li><li><b>two</b></li></ul><ol><li>a</li><li>b</li></ol>");
        assert_eq!(nodes[0].plain_text(), "• one\n• two");
        assert_eq!(nodes[1].plain_text(), "1. a\n2. b");
        let RenderNode::List { items, ordered } = &nodes[0] else {
            panic!("expected list");
        };
        assert!(!ordered);
        assert_eq!(items[1].runs[0].style.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn numbering_restarts_per_list() {
        let nodes = render("<ol><li>a</li></ol><ol><li>b</li></ol>");
        assert_eq!(nodes[0].plain_text(), "1. a");
        assert_eq!(nodes[1].plain_text(), "1. b");
    }

    #[test]
    fn other_markup_falls_back_to_stripped_text() {
        let nodes = render("<h2>Heading</h2><div><i>inside</i> div</div>  <p>p</p> tail <b>bold</b>");
        assert_eq!(
            nodes,
            vec![
                RenderNode::Text(run("Heading", TextStyle::default())),
                RenderNode::Text(run("inside div", TextStyle::default())),
                RenderNode::Paragraph {
                    align: None,
                    runs: vec![run("p", TextStyle::default())],
                },
                RenderNode::Text(run("tail bold", TextStyle::default())),
            ]
        );
    }

    #[test]
    fn nested_list_items_break_once() {
        let nodes = render("<ul><li>a<ul><li>b</li><li>c</li></ul></li><li>d</li></ul>");
        assert_eq!(nodes[0].plain_text(), "• a\nb\nc\n• d");
    }

    #[test]
    fn deeply_nested_styling_renders_its_text() {
        let nodes = render(&format!("<p>{}x</p>", "<b>".repeat(3_000)));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].plain_text(), "x");

        let nodes = render(&format!("{}x", "<span>".repeat(10_000)));
        assert_eq!(nodes, vec![RenderNode::Text(run("x", TextStyle::default()))]);
    }

    #[test]
    fn entities_are_decoded_in_runs() {
        let nodes = render("<p>Fish &amp; Chips&nbsp;&#39;24</p>");
        assert_eq!(nodes[0].plain_text(), "Fish & Chips '24");
    }

    #[test]
    fn line_breaks_become_newline_runs() {
        let nodes = render("<p>a<br>b</p>");
        assert_eq!(nodes[0].plain_text(), "a\nb");
    }

    #[test]
    fn empty_paragraph_is_kept_for_spacing() {
        let nodes = render("<p><br></p>");
        assert_eq!(
            nodes,
            vec![RenderNode::Paragraph {
                align: None,
                runs: vec![run("\n", TextStyle::default())],
            }]
        );
    }

    #[test]
    fn underline_decoration() {
        let nodes = render("<p><u>u</u></p>");
        let RenderNode::Paragraph { runs, .. } = &nodes[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(runs[0].style.text_decoration, Some(TextDecoration::Underline));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render("").is_empty());
        assert!(render("   \n ").is_empty());
    }
}
