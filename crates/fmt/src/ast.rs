//! The annotated VCL syntax tree consumed by the formatter.
//!
//! Nodes arrive already parsed and validated. Each statement carries a
//! [`Meta`] describing its layout in the original source: comment tokens
//! attached before and after the node, the nesting depth, and the number of
//! blank lines that immediately preceded it.

/// A raw comment token, stored with its marker (`#`, `//` or `/* */`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Layout metadata attached to every statement node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    /// Comment tokens on the lines before the node.
    pub leading: Vec<Comment>,
    /// Comment tokens on the same line, after the node.
    pub trailing: Vec<Comment>,
    /// Nesting depth used to compute the indentation prefix.
    pub nest: usize,
    /// Blank source lines immediately preceding the node.
    pub previous_empty_lines: usize,
}

impl Meta {
    pub fn new(nest: usize) -> Self {
        Self { nest, ..Default::default() }
    }
}

/// A VCL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Ident(String),
    /// String literal; `long` is the `{"..."}` form.
    Str {
        value: String,
        long: bool,
    },
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Relative-time literal such as `5m` or `1h30m`, kept verbatim.
    RTime(String),
    Prefix {
        operator: String,
        right: Box<Expression>,
    },
    Grouped(Box<Expression>),
    Binary {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    FunctionCall {
        name: String,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Str { value: value.into(), long: false }
    }

    pub fn binary(operator: impl Into<String>, left: Self, right: Self) -> Self {
        Self::Binary { operator: operator.into(), left: Box::new(left), right: Box::new(right) }
    }
}

/// The fixed set of VCL statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Import(ImportStatement),
    Include(IncludeStatement),
    Declare(DeclareStatement),
    Set(SetStatement),
    Add(AddStatement),
    Unset(UnsetStatement),
    Remove(RemoveStatement),
    Restart(RestartStatement),
    Esi(EsiStatement),
    Call(CallStatement),
    Error(ErrorStatement),
    Log(LogStatement),
    Return(ReturnStatement),
    Synthetic(SyntheticStatement),
    SyntheticBase64(SyntheticBase64Statement),
    Goto(GotoStatement),
    GotoDestination(GotoDestinationStatement),
    FunctionCall(FunctionCallStatement),
    Break(BreakStatement),
    If(IfStatement),
    Switch(SwitchStatement),
    Block(BlockStatement),
}

impl Statement {
    /// Layout metadata of the statement itself.
    pub fn meta(&self) -> &Meta {
        match self {
            Self::Import(s) => &s.meta,
            Self::Include(s) => &s.meta,
            Self::Declare(s) => &s.meta,
            Self::Set(s) => &s.meta,
            Self::Add(s) => &s.meta,
            Self::Unset(s) => &s.meta,
            Self::Remove(s) => &s.meta,
            Self::Restart(s) => &s.meta,
            Self::Esi(s) => &s.meta,
            Self::Call(s) => &s.meta,
            Self::Error(s) => &s.meta,
            Self::Log(s) => &s.meta,
            Self::Return(s) => &s.meta,
            Self::Synthetic(s) => &s.meta,
            Self::SyntheticBase64(s) => &s.meta,
            Self::Goto(s) => &s.meta,
            Self::GotoDestination(s) => &s.meta,
            Self::FunctionCall(s) => &s.meta,
            Self::Break(s) => &s.meta,
            Self::If(s) => &s.meta,
            Self::Switch(s) => &s.meta,
            Self::Block(s) => &s.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStatement {
    pub meta: Meta,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncludeStatement {
    pub meta: Meta,
    /// Module path without surrounding quotes.
    pub module: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclareStatement {
    pub meta: Meta,
    pub name: String,
    pub value_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetStatement {
    pub meta: Meta,
    pub ident: String,
    pub operator: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddStatement {
    pub meta: Meta,
    pub ident: String,
    pub operator: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnsetStatement {
    pub meta: Meta,
    pub ident: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveStatement {
    pub meta: Meta,
    pub ident: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestartStatement {
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EsiStatement {
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStatement {
    pub meta: Meta,
    pub subroutine: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorStatement {
    pub meta: Meta,
    pub code: Expression,
    /// The response argument is arbitrary.
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogStatement {
    pub meta: Meta,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub meta: Meta,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticStatement {
    pub meta: Meta,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticBase64Statement {
    pub meta: Meta,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GotoStatement {
    pub meta: Meta,
    pub destination: String,
}

/// A goto label; prints as the bare name without a trailing semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct GotoDestinationStatement {
    pub meta: Meta,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallStatement {
    pub meta: Meta,
    pub function: String,
    pub arguments: Vec<Expression>,
}

/// Only valid inside a switch case; always prints as the literal `break;`.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub meta: Meta,
    /// Keyword as spelled in the source (`if`).
    pub keyword: String,
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternatives: Vec<ElseIfBranch>,
    pub alternative: Option<BlockStatement>,
}

/// An `else if` / `elseif` / `elsif` branch.
///
/// The parser stores the construct's own nest level in `meta.nest`, the same
/// value as the enclosing [`IfStatement`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfBranch {
    pub meta: Meta,
    pub keyword: String,
    pub condition: Expression,
    pub consequence: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub meta: Meta,
    pub control: Expression,
    pub cases: Vec<CaseSection>,
    /// Comments between the last case and the closing brace.
    pub infix: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseSection {
    pub meta: Meta,
    /// `None` for the `default:` label.
    pub test: Option<CaseTest>,
    pub statements: Vec<Statement>,
    pub fallthrough: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseTest {
    /// `==` or `~`; a regex match keeps its literal `~` prefix in the label.
    pub operator: String,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub meta: Meta,
    pub statements: Vec<Statement>,
    /// Comments between the last statement and the closing brace.
    pub infix: Vec<Comment>,
}

impl BlockStatement {
    pub fn new(nest: usize, statements: Vec<Statement>) -> Self {
        Self { meta: Meta::new(nest), statements, infix: Vec::new() }
    }
}

/// A subroutine declaration, the usual top-level formatting entry point.
///
/// A `return_type` marks a functional (value-returning) subroutine, which
/// changes how `return` statements inside the body are parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct SubroutineDeclaration {
    pub meta: Meta,
    pub name: String,
    pub return_type: Option<String>,
    pub block: BlockStatement,
}
