//! Completion counts shown next to each navigation entry.

use crate::store::CheckStore;
use crate::syllabus::{Node, NodeId, Section};
use crate::tree::{VisualNode, CHECKED};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How many topics of a section are checked.
pub struct Progress {
    /// Checked topics, at any depth.
    pub checked: usize,
    /// All topics, at any depth.
    pub total: usize,
}

impl Progress {
    #[must_use]
    /// Counts check marks for a section that is not currently rendered, straight from the store.
    pub fn of_section(section: &Section, index: usize, store: &dyn CheckStore) -> Self {
        let mut progress = Self::default();
        progress.add_nodes(&section.children, &NodeId::root(index), store);
        progress
    }

    #[must_use]
    /// Counts check marks in a rendered tree.
    pub fn of_tree(roots: &[VisualNode]) -> Self {
        let mut progress = Self::default();
        progress.add_visual(roots);
        progress
    }

    #[must_use]
    /// Whether every topic is checked. An empty section is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }

    fn add_nodes(&mut self, nodes: &[Node], parent: &NodeId, store: &dyn CheckStore) {
        for (index, node) in nodes.iter().enumerate() {
            let id = parent.child(index);
            self.total += 1;
            if store.get(&id.storage_key()).as_deref() == Some(CHECKED) {
                self.checked += 1;
            }
            self.add_nodes(&node.children, &id, store);
        }
    }

    fn add_visual(&mut self, nodes: &[VisualNode]) {
        for node in nodes {
            self.total += 1;
            if node.checked {
                self.checked += 1;
            }
            self.add_visual(&node.children);
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.checked, self.total)
    }
}

#[cfg(test)]
#[path = "tests/progress.rs"]
mod tests;
