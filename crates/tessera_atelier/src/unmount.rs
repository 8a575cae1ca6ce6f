//! Unmounting host nodes and component chains.

use smallvec::SmallVec;
use tessera_canvas::HostTree;
use tessera_carton::{event_name, NodeId};
use tessera_relief::ComponentId;

use crate::errors::ReconcileError;
use crate::instance::LifecyclePhase;
use crate::reconciler::Reconciler;

impl<H: HostTree> Reconciler<H> {
    /// Remove `node` and everything below it, tearing down the components
    /// rendered there.
    ///
    /// Host children go first. `skip_owner` leaves the chain that owns `node`
    /// alone, for replacements that happen inside a live chain.
    pub(crate) fn unmount_node(
        &mut self,
        node: NodeId,
        skip_owner: bool,
    ) -> Result<(), ReconcileError> {
        let Some(vnode) = self.elements.get(&node).cloned() else {
            tracing::trace!("removing foreign node {}", node);
            return Ok(self.host.remove(node)?);
        };

        let children: SmallVec<[NodeId; 8]> = self.host.children(node)?.iter().copied().collect();
        for child in children {
            self.unmount_node(child, false)?;
        }

        if !skip_owner {
            if let Some(owner) = vnode.owner() {
                self.teardown_chain(owner)?;
            }
        }

        if let Some(callback) = vnode.props().ref_callback() {
            callback.call(None);
        }
        for (name, value) in vnode.props().iter() {
            let Some(handler) = value.as_handler() else {
                continue;
            };
            if let Some(event) = event_name(&self.options.event_prefix, name) {
                self.host.remove_event_listener(node, &event, handler)?;
            }
        }

        tracing::trace!("removing node {}", node);
        self.elements.remove(&node);
        self.host.remove(node)?;
        Ok(())
    }

    /// Run `component_will_unmount` on `start` and every instance below it in
    /// its chain, then drop them. Instances already tearing down are skipped,
    /// so each one is unmounted once however many paths reach it.
    pub(crate) fn teardown_chain(&mut self, start: ComponentId) -> Result<(), ReconcileError> {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let Some(inst) = self.instances.get_mut(&id) else {
                break;
            };
            cursor = inst.child;
            if inst.phase == LifecyclePhase::Unmounting {
                continue;
            }
            inst.phase = LifecyclePhase::Unmounting;
            tracing::debug!("unmounting component {} ({})", id, inst.ty.name());

            self.call_hook(id, |c, cx| c.component_will_unmount(cx))?;

            if let Some(inst) = self.instances.remove(&id) {
                if let Some(callback) = inst.props.ref_callback() {
                    callback.call(None);
                }
            }
        }
        Ok(())
    }
}
