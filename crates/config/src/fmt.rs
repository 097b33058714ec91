//! Configuration specific to the `vclfmt` command and the `vclfmt` package

use serde::{Deserialize, Serialize};

/// Contains the config and rule set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Maximum line length where formatter will try to wrap the line
    pub line_length: usize,
    /// Number of spaces per indentation level
    pub tab_width: usize,
    /// Indentation character
    pub indent_style: IndentStyle,
    /// Column-align trailing comments of statements that are not separated by
    /// a blank line
    pub align_trailing_comments: bool,
    /// Spelling of the else-if keyword
    pub else_if_keyword: ElseIfKeyword,
    /// Always print `else if` and `else` keywords on their own line
    pub else_if_new_line: bool,
    /// Indent `case`/`default` labels one level deeper than the switch
    pub indent_case_labels: bool,
    /// Surround return values with parenthesis
    pub return_parenthesis: bool,
    /// Spelling of the `remove` statement, which is an alias of `unset`
    pub unset_keyword: UnsetKeyword,
}

/// Indentation character
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    /// Indent with `tab_width` spaces per level
    #[default]
    Space,
    /// Indent with one tab per level
    Tab,
}

impl IndentStyle {
    /// Returns true if the option is `Tab`
    #[inline]
    pub fn is_tab(self) -> bool {
        matches!(self, Self::Tab)
    }
}

/// Spelling of the else-if keyword
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElseIfKeyword {
    /// Use the keyword defined in the source code (`else if`, `elseif` or
    /// `elsif`)
    #[default]
    Preserve,
    /// Always print `else if`
    Normalize,
}

impl ElseIfKeyword {
    /// Returns true if the option is `Normalize`
    #[inline]
    pub fn is_normalize(self) -> bool {
        matches!(self, Self::Normalize)
    }
}

/// Spelling of the `remove` statement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetKeyword {
    /// Use the keyword defined in the source code
    #[default]
    Preserve,
    /// Always print `remove` as `unset`
    Unset,
}

impl UnsetKeyword {
    /// Returns true if the option is `Unset`
    #[inline]
    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            line_length: 120,
            tab_width: 2,
            indent_style: IndentStyle::Space,
            align_trailing_comments: false,
            else_if_keyword: ElseIfKeyword::Preserve,
            else_if_new_line: false,
            indent_case_labels: false,
            return_parenthesis: true,
            unset_keyword: UnsetKeyword::Preserve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn toml_round_trip() {
        let mut value = toml::Value::try_from(FormatterConfig::default()).unwrap();
        let table = value.as_table_mut().unwrap();
        table.insert("indent_style".into(), toml::Value::String("tab".into()));
        table.insert("else_if_keyword".into(), toml::Value::String("normalize".into()));
        table.insert("unset_keyword".into(), toml::Value::String("unset".into()));
        table.insert("line_length".into(), toml::Value::Integer(80));

        let config: FormatterConfig = value.try_into().unwrap();
        assert_eq!(config.indent_style, IndentStyle::Tab);
        assert_eq!(config.else_if_keyword, ElseIfKeyword::Normalize);
        assert_eq!(config.unset_keyword, UnsetKeyword::Unset);
        assert_eq!(config.line_length, 80);
        assert_eq!(config.tab_width, 2);
    }

    #[test]
    fn defaults() {
        let config = FormatterConfig::default();
        assert!(!config.else_if_keyword.is_normalize());
        assert!(!config.unset_keyword.is_unset());
        assert!(!config.indent_style.is_tab());
        assert!(config.return_parenthesis);
    }
}
