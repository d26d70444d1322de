use std::collections::VecDeque;

use crate::search::strategy::Strategy;

/// Pending nodes, ordered by the traversal discipline
///
/// Pushes always go to the back. Breadth-first pops from the front, depth-first
/// from the back.
#[derive(Debug)]
pub struct Frontier<T> {
    queue: VecDeque<T>,
    strategy: Strategy,
}

impl<T> Frontier<T> {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            queue: VecDeque::new(),
            strategy,
        }
    }

    pub fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        match self.strategy {
            Strategy::BreadthFirst => self.queue.pop_front(),
            Strategy::DepthFirst => self.queue.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests_inner {
    use super::*;

    #[test]
    fn test_breadth_first_is_fifo() {
        let mut frontier = Frontier::new(Strategy::BreadthFirst);
        frontier.push(1);
        frontier.push(2);
        frontier.push(3);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_depth_first_is_lifo() {
        let mut frontier = Frontier::new(Strategy::DepthFirst);
        frontier.push(1);
        frontier.push(2);
        assert_eq!(frontier.pop(), Some(2));
        frontier.push(3);
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(1));
        assert!(frontier.pop().is_none());
    }
}
