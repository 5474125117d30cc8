use super::style::TextStyle;
use super::{RenderNode, TextAlign, TextRun};
use crate::parsing::blocks::{BlockKind, ContentBlock};
use crate::parsing::inline::parse_inline_bold;
use crate::parsing::markers::strip_marker;
use crate::parsing::table::TableSpec;

const PREAMBLE: &str = "#set par(linebreaks: \"optimized\")\n\n";

/// Named colors that exist as Typst built-ins.
const NAMED_COLORS: &[&str] = &[
    "black", "gray", "silver", "white", "navy", "blue", "aqua", "teal", "purple", "fuchsia",
    "maroon", "red", "orange", "yellow", "olive", "green", "lime",
];

/// Convert rendered rich text to Typst markup
pub fn nodes_to_typst(nodes: &[RenderNode]) -> String {
    let mut out = String::from(PREAMBLE);

    for node in nodes {
        match node {
            RenderNode::Paragraph { align, runs } => {
                if runs.iter().all(|r| r.text.trim().is_empty()) {
                    out.push_str("#v(1em)\n\n");
                    continue;
                }
                match align.and_then(align_wrapper) {
                    Some(wrapper) => {
                        out.push_str(wrapper);
                        out.push('[');
                        runs_to_typst(runs, &mut out);
                        out.push_str("]\n\n");
                    }
                    None => {
                        runs_to_typst(runs, &mut out);
                        out.push_str("\n\n");
                    }
                }
            }
            RenderNode::List { ordered, items } => {
                // Keep short lists together on one page
                let keep_together = items.len() <= 5;
                if keep_together {
                    out.push_str("#block(breakable: false)[\n");
                }
                let prefix = if *ordered { "+" } else { "-" };
                for item in items {
                    out.push_str(prefix);
                    out.push(' ');
                    runs_to_typst(&item.runs, &mut out);
                    out.push('\n');
                }
                if keep_together {
                    out.push(']');
                }
                out.push_str("\n\n");
            }
            RenderNode::Text(run) => {
                run_to_typst(run, &mut out);
                out.push_str("\n\n");
            }
        }
    }

    out
}

/// Convert parsed paste blocks to Typst markup
pub fn blocks_to_typst(blocks: &[ContentBlock]) -> String {
    let mut out = String::from(PREAMBLE);

    for block in blocks {
        match block.kind {
            BlockKind::Title => {
                // Keep heading with its content
                out.push_str("#block(breakable: false)[\n== ");
                escape_into(block.title.as_deref().unwrap_or_default(), &mut out);
                out.push_str("\n\n");
                if !block.content.is_empty() {
                    lines_to_typst(block.lines(), &mut out);
                    out.push_str("\n\n");
                }
                out.push_str("]\n\n");
            }
            BlockKind::Plain => {
                lines_to_typst(block.lines(), &mut out);
                out.push_str("\n\n");
            }
            BlockKind::Bullets | BlockKind::Numbered => {
                let prefix = if block.kind == BlockKind::Numbered {
                    "+"
                } else {
                    "-"
                };
                for line in block.lines() {
                    out.push_str(prefix);
                    out.push(' ');
                    inline_to_typst(strip_marker(line), &mut out);
                    out.push('\n');
                }
                out.push('\n');
            }
            BlockKind::Table => match &block.table {
                Some(table) => {
                    out.push_str("#block(breakable: false)[\n");
                    // Only a caption line from the paste, not the placeholder title
                    if block.lines().next() == Some(table.title.as_str()) {
                        out.push_str("=== ");
                        escape_into(&table.title, &mut out);
                        out.push_str("\n\n");
                    }
                    table_to_typst(table, &mut out);
                    out.push_str("]\n\n");
                }
                None => {
                    lines_to_typst(block.lines(), &mut out);
                    out.push_str("\n\n");
                }
            },
        }
    }

    out
}

/// Left is the page default and needs no wrapper.
fn align_wrapper(align: TextAlign) -> Option<&'static str> {
    match align {
        TextAlign::Left => None,
        TextAlign::Center => Some("#align(center)"),
        TextAlign::Right => Some("#align(right)"),
        TextAlign::Justify => Some("#par(justify: true)"),
    }
}

fn runs_to_typst(runs: &[TextRun], out: &mut String) {
    for run in runs {
        run_to_typst(run, out);
    }
}

fn run_to_typst(run: &TextRun, out: &mut String) {
    if run.text == "\n" {
        out.push_str(" \\\n");
        return;
    }

    let wrappers = style_wrappers(&run.style);
    for wrapper in &wrappers {
        out.push_str(wrapper);
        out.push('[');
    }
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.push_str(" \\\n");
        }
        escape_into(line, out);
    }
    for _ in &wrappers {
        out.push(']');
    }
}

/// Typst function calls that apply `style`, outermost first.
fn style_wrappers(style: &TextStyle) -> Vec<String> {
    let mut wrappers = vec![];
    if let Some(fill) = style.background_color.as_deref().and_then(typst_color) {
        wrappers.push(format!("#highlight(fill: {fill})"));
    }
    if let Some(fill) = style.color.as_deref().and_then(typst_color) {
        wrappers.push(format!("#text(fill: {fill})"));
    }
    if style.is_underlined() {
        wrappers.push("#underline".to_string());
    }
    if style.is_italic() {
        wrappers.push("#emph".to_string());
    }
    if style.is_bold() {
        wrappers.push("#strong".to_string());
    }
    wrappers
}

/// Typst expression for a CSS color, if it is one Typst can express directly.
fn typst_color(css: &str) -> Option<String> {
    let css = css.trim().to_ascii_lowercase();
    if let Some(hex) = css.strip_prefix('#') {
        let valid = matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
        return valid.then(|| format!("rgb(\"#{hex}\")"));
    }
    if let Some(args) = css
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = args
            .split(',')
            .filter_map(|c| c.trim().parse().ok())
            .collect();
        return (channels.len() == 3)
            .then(|| format!("rgb({}, {}, {})", channels[0], channels[1], channels[2]));
    }
    NAMED_COLORS.contains(&css.as_str()).then_some(css)
}

fn lines_to_typst<'a>(lines: impl Iterator<Item = &'a str>, out: &mut String) {
    for (i, line) in lines.enumerate() {
        if i > 0 {
            out.push_str(" \\\n");
        }
        inline_to_typst(line, out);
    }
}

/// Plain text with `**bold**` and `Label:` emphasis.
fn inline_to_typst(text: &str, out: &mut String) {
    for segment in parse_inline_bold(text) {
        if segment.bold {
            out.push_str("#strong[");
            escape_into(&segment.text, out);
            out.push(']');
        } else {
            escape_into(&segment.text, out);
        }
    }
}

fn table_to_typst(table: &TableSpec, out: &mut String) {
    out.push_str("#table(\n");
    out.push_str(&format!("  columns: {},\n", table.column_count));

    // Header cells (bold)
    for label in table.header_labels() {
        out.push_str("  [*");
        escape_into(label, out);
        out.push_str("*],\n");
    }

    // Data rows
    for row in table.cells() {
        for cell in row {
            out.push_str("  [");
            escape_into(cell, out);
            out.push_str("],\n");
        }
    }

    out.push_str(")\n");
}

/// Escape characters that have meaning in Typst markup
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '~' | '='
            | '-' | '+' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::parse_mixed_content;
    use crate::render::rich_text::render_rich_text;

    fn html_to_typst(html: &str) -> String {
        nodes_to_typst(&render_rich_text(html, &TextStyle::default()))
    }

    #[test]
    fn paragraph_with_bold_run() {
        assert_eq!(
            html_to_typst("<p><b>Bold</b> text</p>"),
            format!("{PREAMBLE}#strong[Bold] text\n\n")
        );
    }

    #[test]
    fn centered_paragraph() {
        assert_eq!(
            html_to_typst(r#"<p class="ql-align-center">Hi</p>"#),
            format!("{PREAMBLE}#align(center)[Hi]\n\n")
        );
    }

    #[test]
    fn colors_and_decorations() {
        let out = html_to_typst(
            r#"<p><span style="color: #e60000; background-color: rgb(255, 255, 0)"><u>x</u></span></p>"#,
        );
        assert!(out.contains(
            "#highlight(fill: rgb(255, 255, 0))[#text(fill: rgb(\"#e60000\"))[#underline[x]]]"
        ));
    }

    #[test]
    fn unknown_colors_are_dropped() {
        let out = html_to_typst(r#"<p><span style="color: var(--brand)">x</span></p>"#);
        assert_eq!(out, format!("{PREAMBLE}x\n\n"));
    }

    #[test]
    fn short_list_kept_together() {
        assert_eq!(
            html_to_typst("<ol><li>a</li><li>b</li></ol>"),
            format!("{PREAMBLE}#block(breakable: false)[\n+ a\n+ b\n]\n\n")
        );
    }

    #[test]
    fn empty_paragraph_is_vertical_space() {
        assert_eq!(html_to_typst("<p><br></p>"), format!("{PREAMBLE}#v(1em)\n\n"));
    }

    #[test]
    fn escapes_special_chars() {
        assert_eq!(
            html_to_typst("<p>a * b # c_d</p>"),
            format!("{PREAMBLE}a \\* b \\# c\\_d\n\n")
        );
    }

    #[test]
    fn title_block_with_content() {
        let blocks = parse_mixed_content("Overview\nCost: 500");
        assert_eq!(
            blocks_to_typst(&blocks),
            format!(
                "{PREAMBLE}#block(breakable: false)[\n== Overview\n\n#strong[Cost:] 500\n\n]\n\n"
            )
        );
    }

    #[test]
    fn bullet_block_strips_markers() {
        let blocks = parse_mixed_content("- one\n- **two**");
        assert_eq!(
            blocks_to_typst(&blocks),
            format!("{PREAMBLE}- one\n- #strong[two]\n\n")
        );
    }

    #[test]
    fn captioned_table_block() {
        let blocks = parse_mixed_content("Rates\nRole\tDay rate\nDeveloper\t500");
        let out = blocks_to_typst(&blocks);
        assert!(out.contains("#block(breakable: false)[\n=== Rates\n\n#table(\n  columns: 2,\n"));
    }

    #[test]
    fn table_block() {
        let blocks = parse_mixed_content("Name\tPrice\nWidget\t10");
        assert_eq!(
            blocks_to_typst(&blocks),
            format!(
                "{PREAMBLE}#block(breakable: false)[\n#table(\n  columns: 2,\n  [*Name*],\n  [*Price*],\n  [Widget],\n  [10],\n)\n]\n\n"
            )
        );
    }
}
