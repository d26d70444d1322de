use std::fmt;
use std::str::FromStr;

use crate::search::errors::SearchError;

/// Traversal order of the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO frontier, shallow states first
    BreadthFirst,
    /// LIFO frontier, deepest pending state first
    DepthFirst,
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            _ => Err(SearchError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
        }
    }
}

#[cfg(test)]
mod tests_inner {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("DFS".parse::<Strategy>(), Ok(Strategy::DepthFirst));
        assert_eq!("Bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "astar".parse::<Strategy>(),
            Err(SearchError::InvalidStrategy("astar".to_string()))
        );
        assert!("".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}
