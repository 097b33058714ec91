//! Width-aware assembly of expression chunks.

use vclfmt_config::fmt::FormatterConfig;

use crate::string;

/// Joins `chunks` with single spaces, breaking onto a fresh line indented one
/// level deeper than `nest` whenever appending the next chunk would pass
/// `config.line_length`.
///
/// `start_col` is the column already occupied by the caller's prefix on the
/// first line; the column counter is threaded explicitly instead of being
/// inferred from a buffer.
pub(crate) fn chunked_string(
    chunks: &[String],
    nest: usize,
    start_col: usize,
    config: &FormatterConfig,
) -> String {
    let continuation = string::indent(config, nest + 1);
    let continuation_width = continuation.chars().count();

    let mut out = String::new();
    let mut col = start_col;
    for (i, chunk) in chunks.iter().enumerate() {
        let width = chunk.chars().count();
        if i == 0 {
            out.push_str(chunk);
            col += width;
        } else if col + 1 + width > config.line_length {
            out.push('\n');
            out.push_str(&continuation);
            out.push_str(chunk);
            col = continuation_width + width;
        } else {
            out.push(' ');
            out.push_str(chunk);
            col += 1 + width;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn chunks(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).into()).collect()
    }

    #[test]
    fn fits_on_one_line() {
        let config = FormatterConfig { line_length: 40, ..Default::default() };
        let out = chunked_string(&chunks(&["req.http.Host", "==", "\"a\""]), 0, 4, &config);
        assert_eq!(out, "req.http.Host == \"a\"");
    }

    #[test]
    fn wraps_past_line_length() {
        let config = FormatterConfig { line_length: 20, ..Default::default() };
        let out = chunked_string(
            &chunks(&["req.http.Host", "==", "\"example.com\""]),
            1,
            10,
            &config,
        );
        assert_eq!(out, "req.http.Host\n    == \"example.com\"");
    }

    #[test]
    fn start_column_counts_against_the_first_line() {
        let config = FormatterConfig { line_length: 20, ..Default::default() };
        let parts = chunks(&["\"aaaa\"", "+", "\"bb\""]);
        assert_eq!(chunked_string(&parts, 0, 0, &config), "\"aaaa\" + \"bb\"");
        assert_eq!(chunked_string(&parts, 0, 12, &config), "\"aaaa\" +\n  \"bb\"");
    }
}
