//! The VCL statement formatter.

use vclfmt_config::fmt::FormatterConfig;

use crate::{
    ast::{
        AddStatement, BlockStatement, CallStatement, CaseSection, DeclareStatement,
        ErrorStatement, Expression, FunctionCallStatement, GotoDestinationStatement,
        GotoStatement, IfStatement, ImportStatement, IncludeStatement, LogStatement, Meta,
        RemoveStatement, ReturnStatement, SetStatement, Statement, SubroutineDeclaration,
        SwitchStatement, SyntheticBase64Statement, SyntheticStatement, UnsetStatement,
    },
    buffer::{GroupedLines, Line, Lines},
    chunk, comments, expression, string,
};

/// Formats annotated VCL statements according to a [`FormatterConfig`].
pub struct Formatter {
    config: FormatterConfig,
    in_functional_subroutine: bool,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config, in_functional_subroutine: false }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats a whole subroutine declaration, including the `sub` header.
    pub fn format_subroutine(&mut self, sub: &SubroutineDeclaration) -> String {
        trace!(name = %sub.name, functional = sub.return_type.is_some(), "formatting subroutine");
        self.in_functional_subroutine = sub.return_type.is_some();

        let mut buf =
            comments::format_comments(&sub.meta.leading, "\n", &self.indent(sub.meta.nest));
        buf.push_str(&self.indent(sub.meta.nest));
        buf.push_str("sub ");
        buf.push_str(&sub.name);
        buf.push(' ');
        if let Some(return_type) = &sub.return_type {
            buf.push_str(return_type);
            buf.push(' ');
        }
        buf.push_str(&self.format_block_statement(&sub.block));
        let trailing = comments::format_trailing(&sub.meta.trailing);
        if !trailing.is_empty() {
            buf.push(' ');
            buf.push_str(&trailing);
        }
        buf.push('\n');

        self.in_functional_subroutine = false;
        string::trim_trailing_whitespace(&buf)
    }

    /// Formats a single statement, yielding its rendered text with a final
    /// line feed.
    pub fn format(&mut self, stmt: &Statement) -> String {
        let mut out = String::new();
        self.format_statement(stmt).write_into(&mut out);
        string::trim_trailing_whitespace(&out)
    }

    fn indent(&self, nest: usize) -> String {
        string::indent(&self.config, nest)
    }

    fn leading(&self, meta: &Meta, nest: usize) -> String {
        comments::format_comments(&meta.leading, "\n", &self.indent(nest))
    }

    fn chunked(&self, expr: &Expression, nest: usize, start_col: usize) -> String {
        chunk::chunked_string(&expression::chunks(expr), nest, start_col, &self.config)
    }

    pub(crate) fn format_statement(&self, stmt: &Statement) -> Line {
        self.format_statement_at(stmt, stmt.meta().nest)
    }

    /// Renders one statement at an explicit nest level.
    ///
    /// The override is how case bodies compensate for the parser not
    /// deepening their nest; every other caller passes the node's own value.
    pub(crate) fn format_statement_at(&self, stmt: &Statement, nest: usize) -> Line {
        if let Statement::Block(block) = stmt {
            // The braces sit one level shallower than the block's own nest.
            return Line {
                leading: self.leading(&block.meta, nest.saturating_sub(1)),
                buffer: self.indent(nest.saturating_sub(1)) + &self.format_block_statement(block),
                trailing: comments::format_trailing(&block.meta.trailing),
            };
        }

        let meta = stmt.meta();
        let mut line = Line {
            leading: self.leading(meta, nest),
            buffer: self.indent(nest),
            ..Default::default()
        };

        // Statements may be preceded by blank lines without any leading
        // comment; the marker replaces the plain prefix.
        if meta.previous_empty_lines > 0 {
            line.buffer = format!("\n{}", self.indent(nest));
        }

        let body = match stmt {
            Statement::Import(s) => self.format_import_statement(s),
            Statement::Include(s) => self.format_include_statement(s),
            Statement::Declare(s) => self.format_declare_statement(s),
            Statement::Set(s) => self.format_set_statement(s, nest),
            Statement::Add(s) => self.format_add_statement(s, nest),
            Statement::Unset(s) => self.format_unset_statement(s),
            Statement::Remove(s) => self.format_remove_statement(s),
            Statement::Restart(_) => "restart;".to_string(),
            Statement::Esi(_) => "esi;".to_string(),
            Statement::Call(s) => self.format_call_statement(s),
            Statement::Error(s) => self.format_error_statement(s),
            Statement::Log(s) => self.format_log_statement(s, nest),
            Statement::Return(s) => self.format_return_statement(s),
            Statement::Synthetic(s) => self.format_synthetic_statement(s, nest),
            Statement::SyntheticBase64(s) => self.format_synthetic_base64_statement(s, nest),
            Statement::Goto(s) => self.format_goto_statement(s),
            Statement::GotoDestination(s) => self.format_goto_destination_statement(s),
            Statement::FunctionCall(s) => self.format_function_call_statement(s, nest),
            Statement::Break(_) => "break;".to_string(),
            Statement::If(s) => self.format_if_statement(s, nest),
            Statement::Switch(s) => self.format_switch_statement(s, nest),
            Statement::Block(_) => unreachable!("handled above"),
        };
        line.buffer.push_str(&body);
        line.trailing = comments::format_trailing(&trailing_owner(stmt).trailing);

        line
    }

    fn format_import_statement(&self, stmt: &ImportStatement) -> String {
        format!("import {};", stmt.name)
    }

    fn format_include_statement(&self, stmt: &IncludeStatement) -> String {
        format!("include \"{}\";", stmt.module)
    }

    fn format_declare_statement(&self, stmt: &DeclareStatement) -> String {
        format!("declare local {} {};", stmt.name, stmt.value_type)
    }

    fn format_set_statement(&self, stmt: &SetStatement, nest: usize) -> String {
        let mut buf = format!("set {} {} ", stmt.ident, stmt.operator);
        let value = self.chunked(&stmt.value, nest, buf.len());
        buf.push_str(&value);
        buf.push(';');
        buf
    }

    fn format_add_statement(&self, stmt: &AddStatement, nest: usize) -> String {
        let mut buf = format!("add {} {} ", stmt.ident, stmt.operator);
        let value = self.chunked(&stmt.value, nest, buf.len());
        buf.push_str(&value);
        buf.push(';');
        buf
    }

    fn format_unset_statement(&self, stmt: &UnsetStatement) -> String {
        format!("unset {};", stmt.ident)
    }

    // The "remove" statement is an alias of "unset", so configuration may
    // replace the keyword.
    fn format_remove_statement(&self, stmt: &RemoveStatement) -> String {
        if self.config.unset_keyword.is_unset() {
            format!("unset {};", stmt.ident)
        } else {
            format!("remove {};", stmt.ident)
        }
    }

    fn format_call_statement(&self, stmt: &CallStatement) -> String {
        format!("call {};", stmt.subroutine)
    }

    fn format_error_statement(&self, stmt: &ErrorStatement) -> String {
        let mut buf = format!("error {}", expression::inline(&stmt.code));
        if let Some(argument) = &stmt.argument {
            buf.push(' ');
            buf.push_str(&expression::inline(argument));
        }
        buf.push(';');
        buf
    }

    fn format_log_statement(&self, stmt: &LogStatement, nest: usize) -> String {
        let mut buf = String::from("log ");
        let value = self.chunked(&stmt.value, nest, buf.len());
        buf.push_str(&value);
        buf.push(';');
        buf
    }

    fn format_return_statement(&self, stmt: &ReturnStatement) -> String {
        let mut buf = String::from("return");
        if let Some(value) = &stmt.value {
            // Inside a functional subroutine the value is always bare,
            // whatever the configuration says.
            let parenthesize = self.config.return_parenthesis && !self.in_functional_subroutine;
            buf.push_str(if parenthesize { " (" } else { " " });
            buf.push_str(&expression::inline(value));
            if parenthesize {
                buf.push(')');
            }
        }
        buf.push(';');
        buf
    }

    fn format_synthetic_statement(&self, stmt: &SyntheticStatement, nest: usize) -> String {
        let mut buf = String::from("synthetic ");
        let value = self.chunked(&stmt.value, nest, buf.len());
        buf.push_str(&value);
        buf.push(';');
        buf
    }

    fn format_synthetic_base64_statement(
        &self,
        stmt: &SyntheticBase64Statement,
        nest: usize,
    ) -> String {
        let mut buf = String::from("synthetic.base64 ");
        let value = self.chunked(&stmt.value, nest, buf.len());
        buf.push_str(&value);
        buf.push(';');
        buf
    }

    fn format_goto_statement(&self, stmt: &GotoStatement) -> String {
        format!("goto {};", stmt.destination)
    }

    fn format_goto_destination_statement(&self, stmt: &GotoDestinationStatement) -> String {
        stmt.name.clone()
    }

    fn format_function_call_statement(&self, stmt: &FunctionCallStatement, nest: usize) -> String {
        let mut buf = format!("{}(", stmt.function);
        // Every argument chunk starts right after the opening parenthesis.
        let start_col = buf.len();
        for (i, argument) in stmt.arguments.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push_str(&self.chunked(argument, nest, start_col));
        }
        buf.push_str(");");
        buf
    }

    /// Renders `{`, the blank-line-grouped statement sequence, any infix
    /// comments, then `}` one level shallower than the block's own nest.
    pub(crate) fn format_block_statement(&self, block: &BlockStatement) -> String {
        let mut grouped = GroupedLines::default();
        let mut lines = Lines::new();
        for stmt in &block.statements {
            if stmt.meta().previous_empty_lines > 0 {
                grouped.push(std::mem::take(&mut lines));
            }
            lines.push(self.format_statement(stmt));
        }
        grouped.push(lines);
        if self.config.align_trailing_comments {
            grouped.align();
        }

        let mut buf = String::from("{\n");
        buf.push_str(&grouped.render());
        if !block.infix.is_empty() {
            buf.push_str(&comments::format_comments(
                &block.infix,
                "\n",
                &self.indent(block.meta.nest),
            ));
        }
        buf.push_str(&self.indent(block.meta.nest.saturating_sub(1)));
        buf.push('}');

        string::trim_multiple_line_feeds(&buf)
    }

    fn format_if_statement(&self, stmt: &IfStatement, nest: usize) -> String {
        let mut buf = format!("{} (", stmt.keyword);
        buf.push_str(&self.format_condition(&stmt.condition, nest));
        buf.push_str(&self.format_block_statement(&stmt.consequence));

        // else if, elseif, elsif
        for branch in &stmt.alternatives {
            if !branch.meta.leading.is_empty() || self.config.else_if_new_line {
                buf.push('\n');
                buf.push_str(&self.leading(&branch.meta, branch.meta.nest));
                buf.push_str(&self.indent(branch.meta.nest));
            } else {
                buf.push(' ');
            }

            let keyword = if self.config.else_if_keyword.is_normalize() {
                "else if"
            } else {
                branch.keyword.as_str()
            };
            buf.push_str(keyword);
            buf.push_str(" (");
            buf.push_str(&self.format_condition(&branch.condition, branch.meta.nest));
            buf.push_str(&self.format_block_statement(&branch.consequence));
        }

        if let Some(alternative) = &stmt.alternative {
            if !alternative.meta.leading.is_empty() || self.config.else_if_new_line {
                buf.push('\n');
                buf.push_str(&self.leading(&alternative.meta, nest));
                buf.push_str(&self.indent(nest));
            } else {
                buf.push(' ');
            }
            buf.push_str("else ");
            buf.push_str(&self.format_block_statement(alternative));
        }

        buf
    }

    /// Renders a branch condition. When the chunked rendering spans multiple
    /// lines the condition moves onto its own indented lines, with the
    /// closing parenthesis back at the construct's indent.
    fn format_condition(&self, condition: &Expression, nest: usize) -> String {
        let chunk = self.chunked(condition, nest, nest * self.config.tab_width);
        if chunk.contains('\n') {
            format!("\n{}{}\n{}) ", self.indent(nest + 1), chunk, self.indent(nest))
        } else {
            format!("{chunk}) ")
        }
    }

    fn format_switch_statement(&self, stmt: &SwitchStatement, nest: usize) -> String {
        let mut buf = format!("switch ({}) {{\n", expression::inline(&stmt.control));
        for section in &stmt.cases {
            let label_nest = self.case_label_nest(&section.meta);
            buf.push_str(&self.leading(&section.meta, label_nest));
            buf.push_str(&self.indent(label_nest));

            match &section.test {
                Some(test) => {
                    buf.push_str("case ");
                    if test.operator == "~" {
                        buf.push_str("~ ");
                    }
                    buf.push_str(&expression::inline(&test.expression));
                    buf.push_str(":\n");
                }
                None => buf.push_str("default:\n"),
            }
            buf.push_str(&self.format_case_section(section));
        }
        if !stmt.infix.is_empty() {
            buf.push_str(&comments::format_comments(&stmt.infix, "\n", &self.indent(nest + 1)));
        }
        buf.push_str(&self.indent(nest));
        buf.push('}');
        buf
    }

    /// Case labels drop one indent level when `indent_case_labels` is off;
    /// computed on read, never written back to the node.
    fn case_label_nest(&self, meta: &Meta) -> usize {
        if self.config.indent_case_labels {
            meta.nest
        } else {
            meta.nest.saturating_sub(1)
        }
    }

    fn format_case_section(&self, section: &CaseSection) -> String {
        let mut grouped = GroupedLines::default();
        let mut lines = Lines::new();
        for stmt in &section.statements {
            // The parser does not deepen nesting for case bodies; the label
            // toggle moves only the label line, never the body.
            let nest = stmt.meta().nest + 1;
            if stmt.meta().previous_empty_lines > 0 {
                grouped.push(std::mem::take(&mut lines));
            }
            lines.push(self.format_statement_at(stmt, nest));
        }
        grouped.push(lines);
        if self.config.align_trailing_comments {
            grouped.align();
        }

        let mut buf = grouped.render();
        if section.fallthrough {
            buf.push_str(&self.indent(section.meta.nest + 1));
            buf.push_str("fallthrough;\n");
        }

        string::trim_multiple_line_feeds(&buf)
    }
}

/// Trailing comments attach to whichever node textually ends a construct:
/// for an if chain that is the else block if present, otherwise the last
/// else-if branch, otherwise the consequence.
fn trailing_owner(stmt: &Statement) -> &Meta {
    match stmt {
        Statement::If(stmt) => {
            if let Some(alternative) = &stmt.alternative {
                &alternative.meta
            } else if let Some(last) = stmt.alternatives.last() {
                &last.meta
            } else {
                &stmt.consequence.meta
            }
        }
        other => other.meta(),
    }
}
