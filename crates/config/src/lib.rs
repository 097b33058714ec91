//! Configuration for the `vclfmt` formatter.

pub mod fmt;

pub use fmt::FormatterConfig;
