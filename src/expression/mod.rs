//! Expression module split into submodules for clarity
//!
//! Parses the expression strings the solver emits and evaluates them exactly, so an
//! answer can be checked independently of the search that produced it.

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Expression;
pub use errors::ExpressionError;
