use thiserror::Error;

use crate::search::SearchError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Expected exactly {expected} numbers, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}
