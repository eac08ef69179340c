//! Structure module - typed project structure trees
//!
//! A structure file is a JSON object where every key names a filesystem
//! entry. Object values become directories, everything else becomes a file.
//! The JSON is discriminated into [`Node`] once, at load time, so the
//! expander never inspects `serde_json::Value` directly.
//!
//! # Example
//!
//! ```
//! use scaffolder::structure::{self, Node};
//!
//! let root = structure::parse_str(r#"{"src": {"index.html": "<html></html>"}, "README.md": ""}"#)?;
//! assert_eq!(root.directory_count(), 1);
//! assert_eq!(root.file_count(), 2);
//!
//! if let Node::Directory(entries) = &root {
//!     assert_eq!(entries[0].0, "src");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::Path;

pub use internal::{Node, StructureError};

/// Load and parse a structure file from disk
///
/// Fails if the file cannot be read, is not valid JSON, or does not have
/// an object at its root.
pub fn load(path: &Path) -> Result<Node> {
    internal::load(path)
}

/// Parse a structure from a JSON string
pub fn parse_str(json: &str) -> Result<Node> {
    internal::parse_str(json)
}

/// Convert an already-parsed JSON document into a structure tree
pub fn from_value(value: serde_json::Value) -> Result<Node, StructureError> {
    Node::from_root(value)
}
