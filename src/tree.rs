//! Builds the interactive tree for one section.
//!
//! Each topic becomes a [`VisualNode`] carrying its positional [`NodeId`], its restored check
//! mark and its expand state. The visual tree is thrown away whenever another section is
//! activated, so expand state never outlives a render while check marks live in the store.

use crate::store::CheckStore;
use crate::syllabus::{Node, NodeId};
use tracing::trace;

/// Store value that marks a node as checked. Anything else, including absence, is unchecked.
pub const CHECKED: &str = "true";
/// Store value written when a node is unchecked.
pub const UNCHECKED: &str = "false";

#[derive(Clone, Debug, PartialEq)]
/// On-screen representation of a topic in the active section.
pub struct VisualNode {
    /// Positional identity, also the persistence key.
    pub id: NodeId,
    /// Label text.
    pub title: String,
    /// Checkbox state.
    pub checked: bool,
    /// Whether the child container is shown. Meaningless for leaves.
    pub expanded: bool,
    /// Rendered subtopics.
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    #[must_use]
    /// Whether a toggle control is shown for this node.
    pub fn has_toggle(&self) -> bool {
        !self.children.is_empty()
    }

    /// Flips between expanded and collapsed. Leaves have no toggle and are left alone.
    pub fn toggle(&mut self) {
        if self.has_toggle() {
            self.expanded = !self.expanded;
        }
    }
}

#[must_use]
/// Recursively renders `nodes` below `parent`, restoring check marks from `store`.
///
/// Every container starts expanded.
pub fn render(nodes: &[Node], parent: &NodeId, store: &dyn CheckStore) -> Vec<VisualNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let id = parent.child(index);
            let checked = store.get(&id.storage_key()).as_deref() == Some(CHECKED);
            trace!(id = %id, checked, "rendered node");
            let children = if node.has_children() {
                render(&node.children, &id, store)
            } else {
                Vec::new()
            };
            VisualNode {
                id,
                title: node.title.clone(),
                checked,
                expanded: true,
                children,
            }
        })
        .collect()
}

#[must_use]
/// Serialised form of a checkbox state.
pub fn checked_value(checked: bool) -> &'static str {
    if checked {
        CHECKED
    } else {
        UNCHECKED
    }
}

#[must_use]
/// Locates the node at `id` within a rendered section tree.
pub fn find<'a>(roots: &'a [VisualNode], id: &NodeId) -> Option<&'a VisualNode> {
    let (first, rest) = id.path().split_first()?;
    let mut node = roots.get(*first)?;
    for index in rest {
        node = node.children.get(*index)?;
    }
    Some(node)
}

/// Mutable counterpart of [`find`].
pub fn find_mut<'a>(roots: &'a mut [VisualNode], id: &NodeId) -> Option<&'a mut VisualNode> {
    let (first, rest) = id.path().split_first()?;
    let mut node = roots.get_mut(*first)?;
    for index in rest {
        node = node.children.get_mut(*index)?;
    }
    Some(node)
}

#[derive(Clone, Copy, Debug)]
/// A node as it appears in the flattened, scrollable view.
pub struct Row<'a> {
    /// Nesting depth, zero for a section's top-level topics.
    pub depth: usize,
    /// The node drawn on this row.
    pub node: &'a VisualNode,
}

#[must_use]
/// Flattens the tree depth-first, hiding descendants of collapsed nodes.
pub fn visible_rows(roots: &[VisualNode]) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    push_rows(roots, 0, &mut rows);
    rows
}

fn push_rows<'a>(nodes: &'a [VisualNode], depth: usize, rows: &mut Vec<Row<'a>>) {
    for node in nodes {
        rows.push(Row { depth, node });
        if node.expanded {
            push_rows(&node.children, depth + 1, rows);
        }
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
