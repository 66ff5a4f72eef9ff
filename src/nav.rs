//! Section navigation: one entry per section, at most one of them active.

use crate::syllabus::Syllabus;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A selectable section in the navigation list.
pub struct NavEntry {
    /// Section title as written in the document.
    pub title: String,
}

#[derive(Clone, Debug, Default)]
/// Navigation list in document order with the active entry.
pub struct Navigation {
    entries: Vec<NavEntry>,
    active: Option<usize>,
}

impl Navigation {
    #[must_use]
    /// Builds one entry per section. Nothing is active until [`Navigation::activate`] is called.
    pub fn new(syllabus: &Syllabus) -> Self {
        Self {
            entries: syllabus
                .sections
                .iter()
                .map(|section| NavEntry {
                    title: section.title.clone(),
                })
                .collect(),
            active: None,
        }
    }

    #[must_use]
    /// Entries in document order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    #[must_use]
    /// Index of the active entry.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// Whether entry `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Makes entry `index` the only active entry. Returns `false` if no such entry exists.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    #[must_use]
    /// Entry after the active one, wrapping around.
    pub fn next(&self) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        Some(self.active.map_or(0, |i| (i + 1) % len))
    }

    #[must_use]
    /// Entry before the active one, wrapping around.
    pub fn prev(&self) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        Some(self.active.map_or(0, |i| (i + len - 1) % len))
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
