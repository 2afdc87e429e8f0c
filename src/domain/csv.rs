//! Tabular text parsing for remote catalog sources.
//!
//! Rows are comma separated. A field may be wrapped in double quotes, in which
//! case it may contain commas, and a doubled quote stands for one literal
//! quote. Whitespace outside quotes is trimmed.

use crate::domain::{Catalog, CatalogName, Category, SourceRef};

/// Row index (1-based) where values start; row 1 holds the headers.
const FIRST_VALUE_ROW: usize = 2;

/// Split text into rows of fields, skipping blank lines.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines().filter(|line| !line.trim().is_empty()).map(parse_line).collect()
}

/// Parse a single row into its fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = FieldBuf::default();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push_quoted('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => {
                in_quotes = true;
                field.quoted = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field).finish()),
            _ if in_quotes => field.push_quoted(ch),
            _ => field.push_plain(ch),
        }
    }
    fields.push(field.finish());
    fields
}

#[derive(Default)]
struct FieldBuf {
    text: String,
    /// Length of `text` up to and including the last character read inside quotes.
    protected: usize,
    quoted: bool,
}

impl FieldBuf {
    fn push_quoted(&mut self, ch: char) {
        self.text.push(ch);
        self.protected = self.text.len();
    }

    fn push_plain(&mut self, ch: char) {
        if ch.is_whitespace() && self.text.is_empty() && !self.quoted {
            return;
        }
        self.text.push(ch);
    }

    fn finish(mut self) -> String {
        let keep = self.protected + self.text[self.protected..].trim_end().len();
        self.text.truncate(keep);
        self.text
    }
}

/// Turn parsed rows into categories.
///
/// Row 0 holds category names. Each non-empty header collects the non-blank
/// cells beneath it, in row order. Columns without values are omitted.
pub fn transform_to_categories(rows: &[Vec<String>], name: CatalogName) -> Catalog {
    let Some((headers, data)) = rows.split_first() else {
        return Catalog::new();
    };

    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.trim().is_empty())
        .map(|(col, header)| {
            let values = data
                .iter()
                .filter_map(|row| row.get(col))
                .filter(|cell| !cell.trim().is_empty())
                .cloned();
            let source = SourceRef {
                sheet: name.as_str().to_string(),
                col: col + 1,
                row_start: FIRST_VALUE_ROW,
            };
            Category::new(header.clone(), values, source)
        })
        .collect()
}
