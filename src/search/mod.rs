//! Generic Tree-of-Thoughts search engine
//!
//! The engine owns the frontier, the visited set and the traversal loop. Everything
//! problem-specific is supplied through the [`Problem`] trait.

mod engine;
mod errors;
mod frontier;
mod node;
mod strategy;

pub use engine::{Problem, SearchConfig, SearchOutcome, SearchStats, TreeSearch};
pub use errors::SearchError;
pub use frontier::Frontier;
pub use node::{Ancestors, Node};
pub use strategy::Strategy;
