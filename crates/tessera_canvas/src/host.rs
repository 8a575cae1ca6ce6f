//! The host tree capability consumed by the reconciler.

use tessera_carton::NodeId;
use tessera_relief::{EventHandler, PropValue};

use crate::error::HostError;

/// A live, mutable document tree.
///
/// Every operation is synchronous and immediately observable through the
/// read methods. Errors are the host's way of rejecting malformed input
/// (bad tag names, stale ids, impossible insertions); the reconciler
/// propagates them unchanged.
pub trait HostTree {
    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError>;

    fn create_text(&mut self, text: &str) -> Result<NodeId, HostError>;

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), HostError>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), HostError>;

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), HostError>;

    /// Assign a live property (not reflected as an attribute).
    fn set_property(&mut self, node: NodeId, name: &str, value: &PropValue)
        -> Result<(), HostError>;

    fn remove_property(&mut self, node: NodeId, name: &str) -> Result<(), HostError>;

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event: &str,
        handler: &EventHandler,
    ) -> Result<(), HostError>;

    fn remove_event_listener(
        &mut self,
        node: NodeId,
        event: &str,
        handler: &EventHandler,
    ) -> Result<(), HostError>;

    /// Insert `child` into `parent` before `reference`, or append when
    /// `reference` is `None`. A child that already has a parent is moved.
    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), HostError>;

    /// Detach `node` from its parent and release it.
    fn remove(&mut self, node: NodeId) -> Result<(), HostError>;

    /// Current children, in order.
    fn children(&self, node: NodeId) -> Result<&[NodeId], HostError>;

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, HostError>;

    fn first_child(&self, node: NodeId) -> Result<Option<NodeId>, HostError> {
        Ok(self.children(node)?.first().copied())
    }

    fn child_at(&self, node: NodeId, index: usize) -> Result<Option<NodeId>, HostError> {
        Ok(self.children(node)?.get(index).copied())
    }

    fn next_sibling(&self, node: NodeId) -> Result<Option<NodeId>, HostError> {
        let Some(parent) = self.parent(node)? else {
            return Ok(None);
        };
        let siblings = self.children(parent)?;
        Ok(siblings
            .iter()
            .position(|&id| id == node)
            .and_then(|pos| siblings.get(pos + 1).copied()))
    }
}
