//! Parse Utilities
//!
//! Node positions within the parsed input tree and the compile error
//! taxonomy.

use std::fmt;

use thiserror::Error;

/// Position of a node in the parsed input tree, as the sequence of child
/// indices leading to it from the root. Carried by errors so a failed pass
/// can point at the offending node even though the external parser supplies
/// no source spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        NodePath(segments)
    }

    pub fn segments(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "root");
        }
        let joined = self
            .0
            .iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", joined)
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a compilation pass. A failed pass never yields a
/// partial tree.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A structural precondition was violated, e.g. a `forelse` attribute on
    /// a node whose preceding sibling is not a loop.
    #[error("invalid element at {path}: {message}")]
    InvalidElement { message: String, path: NodePath },

    /// The component catalog named an implementation that the resolution
    /// service could not produce. The service's own error is preserved as
    /// the source.
    #[error("component `{name}` could not be resolved")]
    ComponentResolution {
        name: String,
        #[source]
        source: BoxError,
    },
}

impl CompileError {
    pub fn invalid_element(message: impl Into<String>, path: &NodePath) -> Self {
        CompileError::InvalidElement {
            message: message.into(),
            path: path.clone(),
        }
    }
}
