//! Internal implementation for structure module

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// A single entry in a project structure tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Directory with its entries, in document order
    Directory(Vec<(String, Node)>),
    /// File with its initial contents (empty string means empty file)
    File(String),
}

/// Parse-time failures of a structure document
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("structure root must be a JSON object, found {0}")]
    RootNotObject(&'static str),
    #[error("invalid entry name {name:?} at '{parent}': {reason}")]
    InvalidName {
        parent: String,
        name: String,
        reason: &'static str,
    },
}

impl Node {
    /// Build a tree from a whole JSON document, requiring an object root
    pub fn from_root(value: Value) -> Result<Self, StructureError> {
        match value {
            Value::Object(_) => Self::from_value(value, ""),
            other => Err(StructureError::RootNotObject(kind_of(&other))),
        }
    }

    fn from_value(value: Value, path: &str) -> Result<Self, StructureError> {
        match value {
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (name, child) in map {
                    check_name(path, &name)?;
                    let child_path = if path.is_empty() {
                        name.clone()
                    } else {
                        format!("{path}/{name}")
                    };
                    let node = Self::from_value(child, &child_path)?;
                    entries.push((name, node));
                }
                Ok(Node::Directory(entries))
            }
            Value::String(s) => Ok(Node::File(s)),
            // Any other leaf is an empty file
            _ => Ok(Node::File(String::new())),
        }
    }

    /// Number of directories below (not including) this node
    pub fn directory_count(&self) -> usize {
        match self {
            Node::Directory(entries) => entries
                .iter()
                .map(|(_, child)| match child {
                    Node::Directory(_) => 1 + child.directory_count(),
                    Node::File(_) => 0,
                })
                .sum(),
            Node::File(_) => 0,
        }
    }

    /// Number of files anywhere below this node
    pub fn file_count(&self) -> usize {
        match self {
            Node::Directory(entries) => entries
                .iter()
                .map(|(_, child)| match child {
                    Node::Directory(_) => child.file_count(),
                    Node::File(_) => 1,
                })
                .sum(),
            Node::File(_) => 0,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

pub fn load(path: &Path) -> Result<Node> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read structure file: {}", path.display()))?;
    parse_str(&content).with_context(|| format!("Invalid structure in '{}'", path.display()))
}

pub fn parse_str(json: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(json).context("Invalid JSON")?;
    Ok(Node::from_root(value)?)
}

fn check_name(parent: &str, name: &str) -> Result<(), StructureError> {
    let invalid = |reason| StructureError::InvalidName {
        parent: if parent.is_empty() {
            ".".to_string()
        } else {
            parent.to_string()
        },
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }

    let path = Path::new(name);
    if path.is_absolute() || path.has_root() {
        return Err(invalid("absolute paths are not allowed"));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid("'..' would escape the destination"));
    }

    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
