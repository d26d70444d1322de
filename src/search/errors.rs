use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Unknown search strategy '{0}' (expected 'bfs' or 'dfs')")]
    InvalidStrategy(String),
}
