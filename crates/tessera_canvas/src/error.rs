//! Host tree errors.

use tessera_carton::{CompactString, NodeId};
use thiserror::Error;

/// Errors raised by a host tree when it rejects an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Element creation with a malformed tag name
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(CompactString),

    /// The node id does not exist (never created, or already removed)
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Insert reference is not a child of the target parent
    #[error("Node {child} is not a child of node {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Insert would create a cycle or give a text node children
    #[error("Cannot insert node {child} into node {parent}")]
    Hierarchy { parent: NodeId, child: NodeId },

    /// Element-only operation on a text node
    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    /// Text-only operation on an element
    #[error("Node {0} is not a text node")]
    NotText(NodeId),
}
