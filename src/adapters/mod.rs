//! Source-format adapters that turn raw input into a [`DocumentAst`](crate::core::ast::DocumentAst).

pub mod markdown;
