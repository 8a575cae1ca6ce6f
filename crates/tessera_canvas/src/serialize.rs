//! HTML serialization.

use htmlize::{escape_attribute, escape_text};
use tessera_carton::{is_void_tag, NodeId};

use crate::document::Document;
use crate::error::HostError;
use crate::node::HostNodeKind;

impl Document {
    /// Serialize the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> Result<String, HostError> {
        let node = self.get(id).ok_or(HostError::UnknownNode(id))?;
        let mut out = String::new();
        for &child in &node.children {
            self.write_node(child, &mut out);
        }
        Ok(out)
    }

    /// Serialize `id` itself, including its own tag.
    pub fn outer_html(&self, id: NodeId) -> Result<String, HostError> {
        if !self.contains(id) {
            return Err(HostError::UnknownNode(id));
        }
        let mut out = String::new();
        self.write_node(id, &mut out);
        Ok(out)
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.kind {
            HostNodeKind::Text(content) => out.push_str(&escape_text(content.as_str())),
            HostNodeKind::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value.as_str()));
                    out.push('"');
                }
                out.push('>');

                // Void elements have no closing tag
                if is_void_tag(&el.tag) && node.children.is_empty() {
                    return;
                }
                for &child in &node.children {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}
