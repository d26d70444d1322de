use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, info};

use crate::search::errors::SearchError;
use crate::search::frontier::Frontier;
use crate::search::node::Node;
use crate::search::strategy::Strategy;

/// The behaviors a search problem plugs into [`TreeSearch`]
pub trait Problem {
    type State;
    type Key: Eq + Hash;

    /// Candidate next-states, each paired with a label describing the transition
    fn expand(&self, state: &Self::State) -> Vec<(Self::State, String)>;

    /// Heuristic score in `[0.0, 1.0]`, used only for pruning
    fn evaluate(&self, state: &Self::State) -> f64;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Canonical fingerprint; states with equal keys are expanded at most once
    fn key(&self, state: &Self::State) -> Self::Key;
}

/// Configuration for a search engine instance
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Nodes at this depth or deeper are never expanded
    pub max_depth: usize,
    /// Popped nodes scoring strictly below this are not expanded
    pub prune_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            prune_threshold: 0.0,
        }
    }
}

/// Counters collected during a single search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_created: usize,
    pub nodes_expanded: usize,
    pub nodes_pruned: usize,
    pub depth_cutoffs: usize,
    pub duplicates_skipped: usize,
    pub max_depth_reached: usize,
}

/// Result of [`TreeSearch::run`]
#[derive(Debug)]
pub struct SearchOutcome<S> {
    pub goal: Option<Rc<Node<S>>>,
    pub stats: SearchStats,
}

/// Tree-of-Thoughts search over a [`Problem`]
///
/// The engine holds only the problem and its configuration; each call builds a fresh
/// frontier and visited set, so one instance can serve any number of searches.
pub struct TreeSearch<P: Problem> {
    problem: P,
    config: SearchConfig,
}

impl<P: Problem> TreeSearch<P> {
    pub fn new(problem: P, config: SearchConfig) -> Self {
        Self { problem, config }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `initial_state` using the strategy named by `strategy`
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidStrategy`] if `strategy` is neither `"bfs"` nor
    /// `"dfs"` (case-insensitive). Nothing is evaluated in that case.
    pub fn search(
        &self,
        initial_state: P::State,
        strategy: &str,
    ) -> Result<Option<Rc<Node<P::State>>>, SearchError> {
        let strategy: Strategy = strategy.parse()?;
        Ok(self.search_with(initial_state, strategy))
    }

    pub fn search_with(
        &self,
        initial_state: P::State,
        strategy: Strategy,
    ) -> Option<Rc<Node<P::State>>> {
        self.run(initial_state, strategy).goal
    }

    /// Run the search loop and report statistics alongside the goal node
    pub fn run(&self, initial_state: P::State, strategy: Strategy) -> SearchOutcome<P::State> {
        info!(
            "Starting {} search (max_depth={}, prune_threshold={})",
            strategy, self.config.max_depth, self.config.prune_threshold
        );

        let mut stats = SearchStats::default();
        let mut visited: HashSet<P::Key> = HashSet::new();
        let mut frontier = Frontier::new(strategy);

        let score = self.problem.evaluate(&initial_state);
        visited.insert(self.problem.key(&initial_state));
        frontier.push(Rc::new(Node::root(initial_state, score)));
        stats.nodes_created += 1;

        while let Some(node) = frontier.pop() {
            if self.problem.is_goal(&node.state) {
                info!(
                    "Goal found at depth {} after expanding {} nodes",
                    node.depth, stats.nodes_expanded
                );
                return SearchOutcome {
                    goal: Some(node),
                    stats,
                };
            }

            if node.depth >= self.config.max_depth {
                stats.depth_cutoffs += 1;
                continue;
            }

            if node.score < self.config.prune_threshold {
                debug!(
                    "Pruning node at depth {} with score {:.4}",
                    node.depth, node.score
                );
                stats.nodes_pruned += 1;
                continue;
            }

            stats.nodes_expanded += 1;
            for (next_state, action) in self.problem.expand(&node.state) {
                if !visited.insert(self.problem.key(&next_state)) {
                    stats.duplicates_skipped += 1;
                    continue;
                }

                let score = self.problem.evaluate(&next_state);
                let child = Node::child(&node, next_state, action, score);
                stats.nodes_created += 1;
                stats.max_depth_reached = stats.max_depth_reached.max(child.depth);
                frontier.push(Rc::new(child));
            }
            debug!(
                "Expanded node at depth {}, frontier size {}",
                node.depth,
                frontier.len()
            );
        }

        info!(
            "Search exhausted: {} nodes created, {} expanded, {} duplicates skipped",
            stats.nodes_created, stats.nodes_expanded, stats.duplicates_skipped
        );
        SearchOutcome { goal: None, stats }
    }
}
