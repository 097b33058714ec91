#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod ast;
mod buffer;
mod chunk;
mod comments;
mod expression;
mod formatter;
mod string;

pub use vclfmt_config::fmt::*;

pub use formatter::Formatter;

/// Formats a subroutine declaration to canonical source text.
pub fn format_subroutine(sub: &ast::SubroutineDeclaration, config: FormatterConfig) -> String {
    Formatter::new(config).format_subroutine(sub)
}

/// Formats a single statement to canonical source text.
pub fn format_statement(stmt: &ast::Statement, config: FormatterConfig) -> String {
    Formatter::new(config).format(stmt)
}
