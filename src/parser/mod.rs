//! Workflow Document Parser
//!
//! Turns raw YAML text into a [`Node`] tree. Knows nothing about the
//! workflow schema; that lives in [`crate::validation`].

pub mod node;

pub use node::Node;

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Deserializer;
use thiserror::Error;

/// Failure to turn a file into a document tree
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Error reading file: {0}")]
    Read(#[from] io::Error),
    /// The content is not well-formed YAML
    #[error("YAML syntax error: {0}")]
    Syntax(#[from] serde_yaml::Error),
}

/// Parse YAML text into a document tree.
///
/// Only the first document of a multi-document stream is kept; an empty
/// stream yields [`Node::Null`].
pub fn parse_document(text: &str) -> Result<Node, serde_yaml::Error> {
    first_document(Deserializer::from_str(text))
}

/// Parse raw bytes; invalid UTF-8 is reported as a syntax error
pub fn parse_bytes(bytes: &[u8]) -> Result<Node, serde_yaml::Error> {
    first_document(Deserializer::from_slice(bytes))
}

fn first_document(mut stream: Deserializer<'_>) -> Result<Node, serde_yaml::Error> {
    match stream.next() {
        Some(document) => Ok(Node::from(serde_yaml::Value::deserialize(document)?)),
        None => Ok(Node::Null),
    }
}

/// Read a file and parse it into a document tree
pub fn load_document(path: &Path) -> Result<Node, LoadError> {
    let bytes = fs::read(path)?;
    Ok(parse_bytes(&bytes)?)
}
