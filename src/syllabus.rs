//! The syllabus document: ordered sections of recursively nested topics.
//!
//! The document is authored by hand, so decoding is forgiving. A missing or mistyped `title`
//! becomes an empty string, and a missing or mistyped `children` (or `sections`) becomes an empty
//! list. Only input that cannot be read, is not JSON, or whose root is not an object fails to load.
//!
//! Topics may nest arbitrarily deep. The text is parsed into a [`Value`] with serde_json's
//! recursion limit lifted and the stack grown on demand, then walked into the typed tree.

use crate::error::LoadError;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq)]
/// Root of the data document.
pub struct Syllabus {
    /// Top-level units in navigation order.
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Top-level syllabus unit and the root of one tree.
pub struct Section {
    /// Heading shown in the navigation list and above the tree.
    pub title: String,
    /// Topics directly under this section.
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// A topic, possibly with nested subtopics.
pub struct Node {
    /// Label shown next to the checkbox.
    pub title: String,
    /// Subtopics; empty for a leaf.
    pub children: Vec<Node>,
}

impl Node {
    #[must_use]
    /// Whether this topic carries subtopics (and so gets a toggle control).
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn from_object(mut fields: Map<String, Value>) -> Self {
        Self {
            title: title(fields.remove("title")),
            children: list(fields.remove("children"), Node::from_object),
        }
    }
}

impl Syllabus {
    /// Reads and decodes the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and [`LoadError::Parse`] if it is not
    /// a JSON object.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Decodes a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the text is not JSON or its root is not an object.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;

        match value {
            Value::Object(mut root) => Ok(Self {
                sections: list(root.remove("sections"), Section::from_object),
            }),
            _ => Err(LoadError::Parse(serde_json::Error::custom(
                "syllabus root must be a JSON object",
            ))),
        }
    }
}

impl Section {
    fn from_object(mut fields: Map<String, Value>) -> Self {
        Self {
            title: title(fields.remove("title")),
            children: list(fields.remove("children"), Node::from_object),
        }
    }
}

fn title(value: Option<Value>) -> String {
    match value {
        Some(Value::String(title)) => title,
        _ => String::new(),
    }
}

/// Decodes each object in an array with `decode`; anything that is not an object is a default.
fn list<T: Default>(value: Option<Value>, decode: fn(Map<String, Value>) -> T) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(fields) => decode(fields),
                _ => T::default(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Positional identity of a node: its section index and the child index taken at each level.
///
/// Identifiers say where a node sits, not what it is. Inserting or reordering topics in the
/// document moves stored check marks onto whichever node now occupies the old position.
pub struct NodeId {
    section: usize,
    path: Vec<usize>,
}

impl NodeId {
    #[must_use]
    /// The identifier a section's top-level topics hang off.
    pub fn root(section: usize) -> Self {
        Self {
            section,
            path: Vec::new(),
        }
    }

    #[must_use]
    /// Identifier of the `index`-th child below this one.
    pub fn child(&self, index: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(index);
        Self {
            section: self.section,
            path,
        }
    }

    #[must_use]
    /// Index of the owning section.
    pub fn section(&self) -> usize {
        self.section
    }

    #[must_use]
    /// Child indices from the section root down to this node.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    #[must_use]
    /// Key under which this node's check mark is stored.
    pub fn storage_key(&self) -> String {
        format!("check-{self}")
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section)?;
        for index in &self.path {
            write!(f, "-{index}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/syllabus.rs"]
mod tests;
