//! Quote-aware field splitting for comma-delimited lines
//!
//! OCR lines are frequently malformed, so the scanner hands back whatever it
//! collected instead of rejecting the line.

/// Split one comma-delimited line into trimmed fields
///
/// - `""` decodes to a literal quote without toggling the quoted state
/// - a lone `"` toggles the quoted state, unless it directly follows a
///   backslash, in which case it is kept as a literal character
/// - commas inside quotes are literal
/// - the last field is always pushed, even when empty
///
/// An unterminated quote simply leaves the scanner inside quotes at the end
/// of the line; the accumulated text is emitted as the final field.
pub fn split_quoted_csv(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '"' && chars.get(i + 1) == Some(&'"') {
            current.push('"');
            i += 2;
            continue;
        }

        if ch == '"' && (i == 0 || chars[i - 1] != '\\') {
            inside_quotes = !inside_quotes;
            i += 1;
            continue;
        }

        if ch == ',' && !inside_quotes {
            fields.push(current.trim().to_string());
            current.clear();
            i += 1;
            continue;
        }

        current.push(ch);
        i += 1;
    }

    fields.push(current.trim().to_string());
    fields
}
