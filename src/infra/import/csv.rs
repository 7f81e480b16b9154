use csv::StringRecord;
use tracing::debug;

use crate::domain::entities::dataset::Dataset;

/// Splits one CSV line into trimmed fields.
///
/// A `"` toggles quoted mode and is dropped from the output; commas inside
/// quotes are kept as text. Doubled quotes are not treated as an escape.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parses the offer CSV. The first non-blank line is the header; a data line
/// whose field count differs from the header width is skipped whole.
pub fn parse_csv(text: &str) -> Dataset {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Dataset::default();
    };
    let header = StringRecord::from(tokenize_line(header_line));
    let width = header.len();

    let mut records = Vec::new();
    let mut skipped = 0_usize;
    for (line_idx, line) in lines {
        let fields = tokenize_line(line);
        if fields.len() != width {
            debug!(
                line = line_idx + 1,
                expected = width,
                found = fields.len(),
                "skipping malformed csv line"
            );
            skipped += 1;
            continue;
        }
        records.push(StringRecord::from(fields));
    }

    Dataset::new(header, records, skipped)
}
