//! The view-state reducer behind the checklist.
//!
//! Key presses never touch the tree directly. They are turned into [`Command`]s and applied by
//! [`AppState::dispatch`], one at a time and to completion, which is the only place that mutates
//! the rendered tree or writes to the check store.

use crate::nav::Navigation;
use crate::progress::Progress;
use crate::store::{CheckStore, MemoryStore};
use crate::syllabus::{NodeId, Syllabus};
use crate::tree::{self, VisualNode};
use tracing::debug;

/// Text shown in place of the tree when the document could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Error loading syllabus data.";

#[derive(Clone, Debug, PartialEq)]
/// A user intent, applied synchronously by [`AppState::dispatch`].
pub enum Command {
    /// Make a section active and render its tree from scratch.
    ActivateSection(usize),
    /// Flip a node's child container between expanded and collapsed.
    ToggleNode(NodeId),
    /// Set a node's checkbox and persist it.
    SetChecked(NodeId, bool),
}

#[derive(Clone, Debug, PartialEq)]
/// The rendered tree of the active section.
pub struct SectionView {
    /// Index of the section in the document.
    pub index: usize,
    /// Section heading.
    pub title: String,
    /// Top-level visual nodes.
    pub tree: Vec<VisualNode>,
}

#[derive(Clone, Debug, PartialEq)]
/// What the content area currently shows.
pub enum Content {
    /// No section is active (the document has no sections).
    Empty,
    /// A section tree.
    Section(SectionView),
    /// The document failed to load; the message replaces the tree.
    Error(String),
}

/// Single source of truth for the running checklist.
pub struct AppState {
    /// The loaded document.
    pub syllabus: Syllabus,
    /// Section entries and the active one.
    pub nav: Navigation,
    /// Content area state.
    pub content: Content,
    /// Selected row among the visible rows of the active tree.
    pub cursor: usize,
    store: Box<dyn CheckStore>,
}

impl AppState {
    #[must_use]
    /// Builds the navigation list and activates the first section, if there is one.
    pub fn new(syllabus: Syllabus, store: Box<dyn CheckStore>) -> Self {
        let nav = Navigation::new(&syllabus);
        let mut state = Self {
            syllabus,
            nav,
            content: Content::Empty,
            cursor: 0,
            store,
        };
        state.dispatch(Command::ActivateSection(0));
        state
    }

    #[must_use]
    /// State for a document that could not be loaded: no sections and an error message.
    pub fn failed() -> Self {
        Self {
            syllabus: Syllabus::default(),
            nav: Navigation::default(),
            content: Content::Error(LOAD_FAILURE_MESSAGE.to_string()),
            cursor: 0,
            store: Box::new(MemoryStore::new()),
        }
    }

    #[must_use]
    /// Read access to the check store.
    pub fn store(&self) -> &dyn CheckStore {
        self.store.as_ref()
    }

    /// Applies one command.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::ActivateSection(index) => self.activate_section(index),
            Command::ToggleNode(id) => self.toggle_node(&id),
            Command::SetChecked(id, checked) => self.set_checked(&id, checked),
        }
    }

    fn activate_section(&mut self, index: usize) {
        if !self.nav.activate(index) {
            return;
        }
        let section = &self.syllabus.sections[index];
        let tree = tree::render(
            &section.children,
            &NodeId::root(index),
            self.store.as_ref(),
        );
        debug!(section = index, title = %section.title, "activated section");
        self.content = Content::Section(SectionView {
            index,
            title: section.title.clone(),
            tree,
        });
        self.cursor = 0;
    }

    fn toggle_node(&mut self, id: &NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.toggle();
        debug!(id = %id, expanded = node.expanded, "toggled node");
        // Keep the cursor on the toggled node; rows below it may have disappeared.
        self.select(id);
    }

    fn set_checked(&mut self, id: &NodeId, checked: bool) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.checked = checked;
        self.store
            .set(&id.storage_key(), tree::checked_value(checked));
        debug!(id = %id, checked, "stored check mark");
    }

    #[must_use]
    /// The active section's tree, if any.
    pub fn tree(&self) -> Option<&[VisualNode]> {
        match &self.content {
            Content::Section(view) => Some(view.tree.as_slice()),
            Content::Empty | Content::Error(_) => None,
        }
    }

    /// Rendered node for `id`, provided it belongs to the active section.
    fn node_mut(&mut self, id: &NodeId) -> Option<&mut VisualNode> {
        match &mut self.content {
            Content::Section(view) if view.index == id.section() => {
                tree::find_mut(&mut view.tree, id)
            }
            _ => None,
        }
    }

    #[must_use]
    /// Rows currently visible in the content area.
    pub fn visible_rows(&self) -> Vec<tree::Row<'_>> {
        self.tree().map(tree::visible_rows).unwrap_or_default()
    }

    #[must_use]
    /// The node under the cursor.
    pub fn selected_node(&self) -> Option<&VisualNode> {
        self.visible_rows().get(self.cursor).map(|row| row.node)
    }

    /// Moves the cursor to `id` if that node is visible.
    pub fn select(&mut self, id: &NodeId) {
        let position = self
            .visible_rows()
            .iter()
            .position(|row| &row.node.id == id);
        match position {
            Some(position) => self.cursor = position,
            None => self.clamp_cursor(),
        }
    }

    /// Moves the cursor one row up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one row down.
    pub fn cursor_down(&mut self) {
        let rows = self.visible_rows().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let rows = self.visible_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    #[must_use]
    /// Command that flips the checkbox under the cursor.
    pub fn check_selected(&self) -> Option<Command> {
        self.selected_node()
            .map(|node| Command::SetChecked(node.id.clone(), !node.checked))
    }

    #[must_use]
    /// Command that flips the toggle under the cursor, when the node has one.
    pub fn toggle_selected(&self) -> Option<Command> {
        self.selected_node()
            .filter(|node| node.has_toggle())
            .map(|node| Command::ToggleNode(node.id.clone()))
    }

    /// Collapses the selected node, or moves to its parent if it is already collapsed or a leaf.
    pub fn collapse_or_parent(&mut self) {
        let Some(node) = self.selected_node() else {
            return;
        };
        if node.has_toggle() && node.expanded {
            let id = node.id.clone();
            self.dispatch(Command::ToggleNode(id));
            return;
        }
        let path = node.id.path();
        if path.len() > 1 {
            let mut parent = NodeId::root(node.id.section());
            for index in &path[..path.len() - 1] {
                parent = parent.child(*index);
            }
            self.select(&parent);
        }
    }

    /// Expands the selected node if it is collapsed.
    pub fn expand_selected(&mut self) {
        let Some(node) = self.selected_node() else {
            return;
        };
        if node.has_toggle() && !node.expanded {
            let id = node.id.clone();
            self.dispatch(Command::ToggleNode(id));
        }
    }

    #[must_use]
    /// Completion of section `index`, live for the active section and from the store otherwise.
    pub fn section_progress(&self, index: usize) -> Progress {
        if let Content::Section(view) = &self.content {
            if view.index == index {
                return Progress::of_tree(&view.tree);
            }
        }
        self.syllabus
            .sections
            .get(index)
            .map(|section| Progress::of_section(section, index, self.store.as_ref()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
