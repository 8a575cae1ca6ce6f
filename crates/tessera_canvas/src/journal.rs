//! Mutation journal.

use tessera_carton::{CompactString, NodeId};

/// A mutation received by a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Element node created
    CreateElement { node: NodeId, tag: CompactString },
    /// Text node created
    CreateText { node: NodeId },
    /// Text content replaced
    SetText { node: NodeId },
    SetAttribute {
        node: NodeId,
        name: CompactString,
        value: CompactString,
    },
    RemoveAttribute { node: NodeId, name: CompactString },
    SetProperty { node: NodeId, name: CompactString },
    RemoveProperty { node: NodeId, name: CompactString },
    AddListener { node: NodeId, event: CompactString },
    RemoveListener { node: NodeId, event: CompactString },
    /// Node inserted (or moved) under `parent`, before `before`
    Insert {
        parent: NodeId,
        node: NodeId,
        before: Option<NodeId>,
    },
    /// Node detached and released
    Remove { node: NodeId },
    /// Node detached but kept alive
    Detach { node: NodeId },
}

impl Mutation {
    /// Node the mutation applies to.
    pub fn node(&self) -> NodeId {
        match self {
            Mutation::CreateElement { node, .. }
            | Mutation::CreateText { node }
            | Mutation::SetText { node }
            | Mutation::SetAttribute { node, .. }
            | Mutation::RemoveAttribute { node, .. }
            | Mutation::SetProperty { node, .. }
            | Mutation::RemoveProperty { node, .. }
            | Mutation::AddListener { node, .. }
            | Mutation::RemoveListener { node, .. }
            | Mutation::Insert { node, .. }
            | Mutation::Remove { node }
            | Mutation::Detach { node } => *node,
        }
    }

    /// Whether the mutation changes tree structure rather than node content.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Mutation::CreateElement { .. }
                | Mutation::CreateText { .. }
                | Mutation::Insert { .. }
                | Mutation::Remove { .. }
                | Mutation::Detach { .. }
        )
    }
}
