use std::rc::Rc;

/// A record in the search tree
///
/// Nodes are built once, when a successor is first discovered, and never mutated
/// afterwards. Children share their parent through `Rc`; a node never points at its
/// children, so no cycles can form.
#[derive(Debug)]
pub struct Node<S> {
    pub state: S,
    pub parent: Option<Rc<Node<S>>>,
    pub depth: usize,
    pub score: f64,
    /// Label of the transition from the parent, absent for the root
    pub action: Option<String>,
}

impl<S> Node<S> {
    pub fn root(state: S, score: f64) -> Self {
        Self {
            state,
            parent: None,
            depth: 0,
            score,
            action: None,
        }
    }

    pub fn child(parent: &Rc<Node<S>>, state: S, action: String, score: f64) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            depth: parent.depth + 1,
            score,
            action: Some(action),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Walk from this node up to the root, this node first
    pub fn ancestors(&self) -> Ancestors<'_, S> {
        Ancestors { next: Some(self) }
    }

    /// Action labels from the root down to this node
    pub fn path(&self) -> Vec<String> {
        let mut actions: Vec<String> = self
            .ancestors()
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }
}

// Unlink the parent chain iteratively; the default recursive drop overflows the stack
// on deep searches.
impl<S> Drop for Node<S> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Ancestors<'a, S> {
    next: Option<&'a Node<S>>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
