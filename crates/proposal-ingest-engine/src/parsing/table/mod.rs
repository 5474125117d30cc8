//! # Smart Table Parsing
//!
//! Recovers a 2 or 3 column table from a pasted spreadsheet range, CSV,
//! `.env`-style `KEY=value` lines or a colon-separated list.
//!
//! 1. A first line without any delimiter followed by one with a delimiter is a title.
//! 2. The delimiter is chosen from the first data line (`delimiter::Delimiter::detect`).
//! 3. The first data line is a header row when it names a header keyword or has
//!    the same field count as the second line.
//! 4. Each remaining line becomes a row of up to three fields; extra fields are dropped.
//! 5. The third column survives only if its header is a real label or some row fills it.

pub mod delimiter;
pub mod types;

pub use delimiter::{Delimiter, has_delimiter_char};
pub use types::{TableHeaders, TableRow, TableSpec};

use uuid::Uuid;

use crate::options::TableOptions;
use crate::parsing::{non_empty_lines, normalize_newlines};

/// Parses `text` with the default [`TableOptions`].
///
/// Returns `None` for empty or whitespace-only input.
pub fn parse_smart_table(text: &str) -> Option<TableSpec> {
    parse_smart_table_with(text, &TableOptions::default())
}

pub fn parse_smart_table_with(text: &str, options: &TableOptions) -> Option<TableSpec> {
    let text = normalize_newlines(text);
    let lines = non_empty_lines(&text);
    if lines.is_empty() {
        return None;
    }

    let (title, data) =
        if lines.len() >= 2 && !has_delimiter_char(lines[0]) && has_delimiter_char(lines[1]) {
            (lines[0].to_string(), &lines[1..])
        } else {
            (options.default_title.clone(), &lines[..])
        };

    let delimiter = Delimiter::detect(data[0]);
    let (headers, body) = match header_row(data, delimiter, options) {
        Some(headers) => (headers, &data[1..]),
        None => (options.default_headers.clone(), data),
    };
    log::debug!(
        "smart table: title={title:?} delimiter={delimiter:?} header_row={} rows={}",
        body.len() < data.len(),
        body.len()
    );

    let cells: Vec<[String; 3]> = body
        .iter()
        .map(|line| {
            let fields = delimiter.split(line);
            std::array::from_fn(|i| fields.get(i).map(|f| f.to_string()).unwrap_or_default())
        })
        .collect();

    let keep_col3 = (!headers[2].is_empty() && headers[2] != options.default_headers[2])
        || cells.iter().any(|row| !row[2].is_empty());
    if !keep_col3 {
        log::debug!("smart table: third column is empty, collapsing to 2 columns");
    }

    let [h1, h2, h3] = headers;
    let rows = cells
        .into_iter()
        .map(|[col1, col2, col3]| TableRow {
            id: Uuid::new_v4(),
            col1,
            col2,
            col3: keep_col3.then_some(col3),
        })
        .collect();

    Some(TableSpec {
        title,
        column_count: if keep_col3 { 3 } else { 2 },
        headers: TableHeaders {
            col1: h1,
            col2: h2,
            col3: keep_col3.then_some(h3),
        },
        rows,
    })
}

/// Header labels from the first data line, if it looks like a header row.
/// Empty or missing labels fall back to the placeholder defaults.
fn header_row(data: &[&str], delimiter: Delimiter, options: &TableOptions) -> Option<[String; 3]> {
    if data.len() < 2 {
        return None;
    }
    let first = delimiter.split(data[0]);
    let second = delimiter.split(data[1]);

    let names_keyword = first.iter().any(|field| {
        let field = field.to_lowercase();
        options
            .header_keywords
            .iter()
            .any(|keyword| field.contains(&keyword.to_lowercase()))
    });
    if !names_keyword && first.len() != second.len() {
        return None;
    }

    Some(std::array::from_fn(|i| match first.get(i) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => options.default_headers[i].clone(),
    }))
}
