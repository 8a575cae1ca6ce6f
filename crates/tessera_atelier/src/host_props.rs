//! Host property synchronization.

use tessera_canvas::HostTree;
use tessera_carton::{event_name, is_reserved_prop, NodeId};
use tessera_relief::{PropValue, Props};

use crate::errors::ReconcileError;
use crate::reconciler::Reconciler;

impl<H: HostTree> Reconciler<H> {
    /// Bring the attributes, live properties and listeners of `node` from
    /// `prev` to `props`. Only entries that changed are touched; handlers
    /// compare by identity.
    pub(crate) fn update_host_props(
        &mut self,
        node: NodeId,
        props: &Props,
        prev: Option<&Props>,
    ) -> Result<(), ReconcileError> {
        for (name, value) in props.iter() {
            let old = prev.and_then(|prev| prev.get(name));
            if old == Some(value) {
                continue;
            }
            self.set_host_prop(node, name, value, old)?;
        }

        let Some(prev) = prev else {
            return Ok(());
        };
        for (name, old) in prev.iter() {
            if props.contains(name) || is_reserved_prop(name) {
                continue;
            }
            self.remove_host_prop(node, name, old)?;
        }
        Ok(())
    }

    fn set_host_prop(
        &mut self,
        node: NodeId,
        name: &str,
        value: &PropValue,
        old: Option<&PropValue>,
    ) -> Result<(), ReconcileError> {
        let old_handler = old.and_then(PropValue::as_handler);
        if value.as_handler().is_some() || old_handler.is_some() {
            if let Some(event) = event_name(&self.options.event_prefix, name) {
                if let Some(handler) = value.as_handler() {
                    self.host.add_event_listener(node, &event, handler)?;
                }
                if let Some(old_handler) = old_handler {
                    self.host.remove_event_listener(node, &event, old_handler)?;
                }
                return Ok(());
            }
        }

        if self.options.is_live_property(name) {
            self.host.set_property(node, name, value)?;
        } else if !is_reserved_prop(name) {
            match value.to_attribute_value() {
                Some(attr) => self.host.set_attribute(node, name, &attr)?,
                // An attribute that turned into a non-attribute value
                None if old.and_then(PropValue::to_attribute_value).is_some() => {
                    self.host.remove_attribute(node, name)?
                }
                None => {}
            }
        }
        Ok(())
    }

    fn remove_host_prop(
        &mut self,
        node: NodeId,
        name: &str,
        old: &PropValue,
    ) -> Result<(), ReconcileError> {
        if let Some(handler) = old.as_handler() {
            if let Some(event) = event_name(&self.options.event_prefix, name) {
                self.host.remove_event_listener(node, &event, handler)?;
                return Ok(());
            }
        }
        if self.options.is_live_property(name) {
            self.host.remove_property(node, name)?;
        } else if old.to_attribute_value().is_some() {
            self.host.remove_attribute(node, name)?;
        }
        Ok(())
    }
}
