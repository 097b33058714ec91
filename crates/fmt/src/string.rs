//! Low-level text utilities shared by the renderers.

use vclfmt_config::fmt::{FormatterConfig, IndentStyle};

/// Whitespace prefix for `nest` levels of indentation.
pub(crate) fn indent(config: &FormatterConfig, nest: usize) -> String {
    match config.indent_style {
        IndentStyle::Space => " ".repeat(config.tab_width * nest),
        IndentStyle::Tab => "\t".repeat(nest),
    }
}

/// Collapses every run of consecutive blank lines down to a single blank
/// line.
pub(crate) fn trim_multiple_line_feeds(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut feeds = 0usize;
    for ch in s.chars() {
        if ch == '\n' {
            feeds += 1;
            if feeds <= 2 {
                out.push(ch);
            }
        } else {
            feeds = 0;
            out.push(ch);
        }
    }
    out
}

/// Strips spaces and tabs hanging at the end of each line.
pub(crate) fn trim_trailing_whitespace(s: &str) -> String {
    s.split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn config() -> FormatterConfig {
        FormatterConfig::default()
    }

    #[test]
    fn indent_spaces() {
        assert_eq!(indent(&config(), 0), "");
        assert_eq!(indent(&config(), 2), "    ");
    }

    #[test]
    fn indent_tabs() {
        let config = FormatterConfig { indent_style: IndentStyle::Tab, ..config() };
        assert_eq!(indent(&config, 3), "\t\t\t");
    }

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(trim_multiple_line_feeds("a\n\n\n\nb\n"), "a\n\nb\n");
        assert_eq!(trim_multiple_line_feeds("a\n\nb"), "a\n\nb");
        assert_eq!(trim_multiple_line_feeds("a\nb"), "a\nb");
    }

    #[test]
    fn trims_line_ends() {
        assert_eq!(trim_trailing_whitespace("a  \n  b\t\n"), "a\n  b\n");
        assert_eq!(trim_trailing_whitespace("a"), "a");
    }
}
