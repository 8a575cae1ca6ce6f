//! In-memory document.

use rustc_hash::FxHashMap;
use tessera_carton::{is_valid_tag_name, CompactString, NodeId};
use tessera_relief::{Event, EventHandler, PropValue};

use crate::error::HostError;
use crate::host::HostTree;
use crate::journal::Mutation;
use crate::node::{ElementData, HostNode, HostNodeKind};

/// An arena-backed host tree.
///
/// Nodes live in a map keyed by [`NodeId`]; ids are never reused, so a stale
/// id reliably reports [`HostError::UnknownNode`] after removal.
#[derive(Debug, Default)]
pub struct Document {
    /// All nodes by ID
    nodes: FxHashMap<NodeId, HostNode>,
    /// Next available node ID
    next_id: NodeId,
    /// Mutations received since the last drain
    journal: Vec<Mutation>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            next_id: 1,
            journal: Vec::new(),
        }
    }

    fn alloc(&mut self, node: impl FnOnce(NodeId) -> HostNode) -> NodeId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.nodes.insert(id, node(id));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&HostNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Result<&HostNode, HostError> {
        self.nodes.get(&id).ok_or(HostError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut HostNode, HostError> {
        self.nodes.get_mut(&id).ok_or(HostError::UnknownNode(id))
    }

    fn element(&self, id: NodeId) -> Result<&ElementData, HostError> {
        self.node(id)?
            .as_element()
            .ok_or(HostError::NotAnElement(id))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, HostError> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(HostError::NotAnElement(id))
    }

    /// Tag name of an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|el| el.tag.as_str())
    }

    /// Content of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.kind {
            HostNodeKind::Text(content) => Some(content.as_str()),
            HostNodeKind::Element(_) => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attribute(name)
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self, id: NodeId) -> Vec<(&str, &str)> {
        self.get(id)
            .and_then(HostNode::as_element)
            .map(|el| {
                el.attributes
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn property(&self, id: NodeId, name: &str) -> Option<&PropValue> {
        self.get(id)?.as_element()?.properties.get(name)
    }

    pub fn listener_count(&self, id: NodeId, event: &str) -> usize {
        self.get(id)
            .and_then(HostNode::as_element)
            .map_or(0, |el| el.listeners_for(event).count())
    }

    /// Invoke every listener registered on `target` for `event`, in
    /// registration order. Events do not bubble. Returns how many handlers
    /// ran.
    pub fn dispatch_event(
        &self,
        target: NodeId,
        event: &str,
        detail: Option<&str>,
    ) -> Result<usize, HostError> {
        let handlers: Vec<EventHandler> = self
            .element(target)?
            .listeners_for(event)
            .cloned()
            .collect();
        let mut ev = Event::new(event, target);
        if let Some(detail) = detail {
            ev = ev.with_detail(detail);
        }
        for handler in &handlers {
            handler.call(&ev);
        }
        Ok(handlers.len())
    }

    /// Mutations received since the journal was last drained.
    pub fn mutations(&self) -> &[Mutation] {
        &self.journal
    }

    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    pub fn clear_mutations(&mut self) {
        self.journal.clear();
    }

    /// Walk the subtree rooted at `start`, depth-first, pre-order.
    pub fn walk_preorder(&self, start: NodeId) -> TreeWalker<'_> {
        TreeWalker::new(self, start)
    }

    /// Unlink `node` from its parent, keeping it and its subtree alive so it
    /// can be inserted again later.
    pub fn detach_node(&mut self, node: NodeId) -> Result<(), HostError> {
        self.node(node)?;
        self.detach(node);
        self.journal.push(Mutation::Detach { node });
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == candidate {
                return true;
            }
            match self.nodes.get(&id).and_then(|node| node.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.nodes.get_mut(&id).and_then(|node| node.parent.take());
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.remove_child(id);
        }
    }

    /// Collect a node and all its descendants.
    fn collect_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = vec![id];
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                for &child_id in &node.children {
                    result.push(child_id);
                    stack.push(child_id);
                }
            }
        }

        result
    }
}

impl HostTree for Document {
    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        if !is_valid_tag_name(tag) {
            return Err(HostError::InvalidTagName(tag.into()));
        }
        let id = self.alloc(|id| HostNode::element(id, tag));
        self.journal.push(Mutation::CreateElement {
            node: id,
            tag: tag.into(),
        });
        Ok(id)
    }

    fn create_text(&mut self, text: &str) -> Result<NodeId, HostError> {
        let id = self.alloc(|id| HostNode::text(id, text));
        self.journal.push(Mutation::CreateText { node: id });
        Ok(id)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), HostError> {
        match &mut self.node_mut(node)?.kind {
            HostNodeKind::Text(content) => *content = CompactString::from(text),
            HostNodeKind::Element(_) => return Err(HostError::NotText(node)),
        }
        self.journal.push(Mutation::SetText { node });
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), HostError> {
        self.element_mut(node)?.set_attribute(name, value);
        self.journal.push(Mutation::SetAttribute {
            node,
            name: name.into(),
            value: value.into(),
        });
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), HostError> {
        self.element_mut(node)?.remove_attribute(name);
        self.journal.push(Mutation::RemoveAttribute {
            node,
            name: name.into(),
        });
        Ok(())
    }

    fn set_property(
        &mut self,
        node: NodeId,
        name: &str,
        value: &PropValue,
    ) -> Result<(), HostError> {
        self.element_mut(node)?
            .properties
            .insert(name.into(), value.clone());
        self.journal.push(Mutation::SetProperty {
            node,
            name: name.into(),
        });
        Ok(())
    }

    fn remove_property(&mut self, node: NodeId, name: &str) -> Result<(), HostError> {
        self.element_mut(node)?.properties.remove(name);
        self.journal.push(Mutation::RemoveProperty {
            node,
            name: name.into(),
        });
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event: &str,
        handler: &EventHandler,
    ) -> Result<(), HostError> {
        self.element_mut(node)?.add_listener(event, handler);
        self.journal.push(Mutation::AddListener {
            node,
            event: event.into(),
        });
        Ok(())
    }

    fn remove_event_listener(
        &mut self,
        node: NodeId,
        event: &str,
        handler: &EventHandler,
    ) -> Result<(), HostError> {
        self.element_mut(node)?.remove_listener(event, handler);
        self.journal.push(Mutation::RemoveListener {
            node,
            event: event.into(),
        });
        Ok(())
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), HostError> {
        if self.node(parent)?.is_text() || self.is_ancestor_or_self(child, parent) {
            self.node(child)?;
            return Err(HostError::Hierarchy { parent, child });
        }
        self.node(child)?;

        // Inserting a node before itself keeps its position.
        let reference = match reference {
            Some(r) if r == child => self.next_sibling(child)?,
            other => other,
        };
        if let Some(r) = reference {
            if self.node(r)?.parent != Some(parent) {
                return Err(HostError::NotAChild { parent, child: r });
            }
        }

        self.detach(child);
        let siblings = &mut self.node_mut(parent)?.children;
        let pos = reference
            .and_then(|r| siblings.iter().position(|&id| id == r))
            .unwrap_or(siblings.len());
        siblings.insert(pos, child);
        self.node_mut(child)?.parent = Some(parent);

        self.journal.push(Mutation::Insert {
            parent,
            node: child,
            before: reference,
        });
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), HostError> {
        self.node(node)?;
        self.detach(node);
        for id in self.collect_descendants(node) {
            self.nodes.remove(&id);
        }
        self.journal.push(Mutation::Remove { node });
        Ok(())
    }

    fn children(&self, node: NodeId) -> Result<&[NodeId], HostError> {
        Ok(&self.node(node)?.children)
    }

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, HostError> {
        Ok(self.node(node)?.parent)
    }
}

/// Iterator for tree traversal.
pub struct TreeWalker<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> TreeWalker<'a> {
    fn new(doc: &'a Document, start: NodeId) -> Self {
        Self {
            doc,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = &'a HostNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(node) = self.doc.get(id) {
                // Reverse so children come out left-to-right
                for &child_id in node.children.iter().rev() {
                    self.stack.push(child_id);
                }
                return Some(node);
            }
        }
        None
    }
}
