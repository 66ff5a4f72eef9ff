//! syllabus: a checkable, collapsible syllabus tree for the terminal.
//!
//! A syllabus document lists sections of nested topics. One section at a time is rendered as a
//! tree whose nodes can be collapsed and checked off; check marks persist between sessions under
//! keys derived from each node's position.

pub mod app_state;
pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
pub mod progress;
pub mod store;
pub mod syllabus;
pub mod tree;
pub mod ui;
