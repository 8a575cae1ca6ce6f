//! Host node definitions.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tessera_carton::{CompactString, NodeId};
use tessera_relief::{EventHandler, PropValue};

/// A node in the host document.
#[derive(Debug, Clone)]
pub struct HostNode {
    /// Unique node ID
    pub id: NodeId,
    /// Node type and content
    pub kind: HostNodeKind,
    /// Parent node, if attached
    pub parent: Option<NodeId>,
    /// Child node IDs
    pub children: SmallVec<[NodeId; 4]>,
}

impl HostNode {
    /// Create a detached element node.
    pub fn element(id: NodeId, tag: impl Into<CompactString>) -> Self {
        Self::new(id, HostNodeKind::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn text(id: NodeId, content: impl Into<CompactString>) -> Self {
        Self::new(id, HostNodeKind::Text(content.into()))
    }

    fn new(id: NodeId, kind: HostNodeKind) -> Self {
        Self {
            id,
            kind,
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.kind {
            HostNodeKind::Element(data) => Some(data),
            HostNodeKind::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.kind {
            HostNodeKind::Element(data) => Some(data),
            HostNodeKind::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, HostNodeKind::Text(_))
    }

    /// Remove a child.
    pub fn remove_child(&mut self, child_id: NodeId) {
        if let Some(pos) = self.children.iter().position(|&id| id == child_id) {
            self.children.remove(pos);
        }
    }
}

/// Node type variants.
#[derive(Debug, Clone)]
pub enum HostNodeKind {
    Element(ElementData),
    Text(CompactString),
}

/// Element-specific data.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Tag name
    pub tag: CompactString,
    /// Attributes in the order they were first set
    pub attributes: SmallVec<[(CompactString, CompactString); 4]>,
    /// Live properties, never serialized
    pub properties: FxHashMap<CompactString, PropValue>,
    /// Registered listeners, one entry per (event, handler identity)
    pub listeners: SmallVec<[(CompactString, EventHandler); 2]>,
}

impl ElementData {
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value.into(),
            None => self.attributes.push((name.into(), value.into())),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        match self.attributes.iter().position(|(n, _)| n == name) {
            Some(pos) => {
                self.attributes.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Register a listener; registering the same handler twice is a no-op.
    pub fn add_listener(&mut self, event: &str, handler: &EventHandler) {
        let exists = self
            .listeners
            .iter()
            .any(|(name, existing)| name == event && existing.same(handler));
        if !exists {
            self.listeners.push((event.into(), handler.clone()));
        }
    }

    pub fn remove_listener(&mut self, event: &str, handler: &EventHandler) -> bool {
        match self
            .listeners
            .iter()
            .position(|(name, existing)| name == event && existing.same(handler))
        {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn listeners_for<'a>(&'a self, event: &'a str) -> impl Iterator<Item = &'a EventHandler> {
        self.listeners
            .iter()
            .filter(move |(name, _)| name == event)
            .map(|(_, handler)| handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node() {
        let node = HostNode::element(1, "div");
        assert_eq!(node.id, 1);
        assert_eq!(node.as_element().map(|el| el.tag.as_str()), Some("div"));
        assert!(!node.is_text());
    }

    #[test]
    fn test_attributes_keep_order() {
        let mut el = ElementData::new("div");
        el.set_attribute("foo", "bar");
        el.set_attribute("j", "1");
        el.set_attribute("foo", "baz");
        let names: Vec<_> = el.attributes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["foo", "j"]);
        assert_eq!(el.attribute("foo"), Some("baz"));
        assert!(el.remove_attribute("foo"));
        assert!(!el.remove_attribute("foo"));
    }

    #[test]
    fn test_listener_dedup() {
        let mut el = ElementData::new("button");
        let handler = EventHandler::new(|_| {});
        el.add_listener("click", &handler);
        el.add_listener("click", &handler.clone());
        assert_eq!(el.listeners_for("click").count(), 1);
        el.add_listener("click", &EventHandler::new(|_| {}));
        assert_eq!(el.listeners_for("click").count(), 2);
        assert!(el.remove_listener("click", &handler));
        assert_eq!(el.listeners_for("click").count(), 1);
    }
}
