//! Expression rendering: the inline form plus chunk extraction for wrapping.

use itertools::Itertools;

use crate::ast::Expression;

/// Renders an expression on a single line.
pub(crate) fn inline(expr: &Expression) -> String {
    match expr {
        Expression::Ident(name) => name.clone(),
        Expression::Str { value, long } => {
            if *long {
                format!("{{\"{value}\"}}")
            } else {
                format!("\"{value}\"")
            }
        }
        Expression::Integer(value) => value.to_string(),
        Expression::Float(value) => value.to_string(),
        Expression::Bool(value) => value.to_string(),
        Expression::RTime(value) => value.clone(),
        Expression::Prefix { operator, right } => format!("{operator}{}", inline(right)),
        Expression::Grouped(inner) => format!("({})", inline(inner)),
        Expression::Binary { operator, left, right } => {
            format!("{} {operator} {}", inline(left), inline(right))
        }
        Expression::FunctionCall { name, arguments } => {
            format!("{name}({})", arguments.iter().map(inline).join(", "))
        }
    }
}

/// Flattens binary chains into operand and operator chunks so the chunked
/// renderer can wrap between them; any other expression is a single chunk.
pub(crate) fn chunks(expr: &Expression) -> Vec<String> {
    match expr {
        Expression::Binary { operator, left, right } => {
            let mut out = chunks(left);
            out.push(operator.clone());
            out.extend(chunks(right));
            out
        }
        other => vec![inline(other)],
    }
}
