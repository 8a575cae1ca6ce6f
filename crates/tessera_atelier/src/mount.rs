//! Mounting elements and components.

use tessera_canvas::HostTree;
use tessera_carton::NodeId;
use tessera_relief::{ComponentId, RefTarget, VNode, VNodeKind};

use crate::errors::ReconcileError;
use crate::instance::{Instance, LifecyclePhase};
use crate::reconciler::Reconciler;

impl<H: HostTree> Reconciler<H> {
    /// Create the host subtree for `vnode` inside `container`, replacing `old`
    /// when given.
    pub(crate) fn mount_element(
        &mut self,
        vnode: VNode,
        container: NodeId,
        old: Option<NodeId>,
        parent: Option<ComponentId>,
    ) -> Result<(), ReconcileError> {
        if vnode.is_component() {
            self.mount_component(vnode, container, old, parent)
        } else {
            self.mount_simple_node(vnode, container, old, parent)
        }
    }

    fn mount_component(
        &mut self,
        vnode: VNode,
        container: NodeId,
        old: Option<NodeId>,
        parent: Option<ComponentId>,
    ) -> Result<(), ReconcileError> {
        let Some(ty) = vnode.component_type().cloned() else {
            return self.mount_simple_node(vnode, container, old, parent);
        };
        let props = vnode.props().clone();
        let component = ty.construct(&props);
        let state = component.initial_state(&props);
        let id = self.alloc_instance(Instance::new(component, ty.clone(), props, state, parent));
        if let Some(inst) = parent.and_then(|p| self.instances.get_mut(&p)) {
            inst.child = Some(id);
        }
        tracing::debug!("mounting component {} ({})", id, ty.name());

        self.set_phase(id, LifecyclePhase::WillMount);
        self.call_hook(id, |c, cx| c.component_will_mount(cx))?;

        let Some(mut next) = self.render_instance(id) else {
            return Ok(());
        };
        next.set_owner(Some(self.root_of(id)));
        if next.is_component() {
            self.mount_component(next, container, old, Some(id))?;
        } else {
            self.mount_simple_node(next, container, old, parent)?;
        }

        self.set_phase(id, LifecyclePhase::Mounted);
        self.flush_pending(id)?;
        self.call_hook(id, |c, cx| c.component_did_mount(cx))?;
        if let Some(callback) = vnode.props().ref_callback() {
            callback.call(Some(RefTarget::Component(id)));
        }
        Ok(())
    }

    /// Mount a host element or text node.
    ///
    /// Inside a chain (`parent` set) the old node's owner is left alone: the
    /// chain above is still alive and its replaced members were torn down
    /// already.
    fn mount_simple_node(
        &mut self,
        vnode: VNode,
        container: NodeId,
        old: Option<NodeId>,
        parent: Option<ComponentId>,
    ) -> Result<(), ReconcileError> {
        let next_sibling = match old {
            Some(old) => self.host.next_sibling(old)?,
            None => None,
        };

        let node = match vnode.kind() {
            VNodeKind::Text(content) => self.host.create_text(content)?,
            VNodeKind::Element(tag) => {
                let node = self.host.create_element(tag)?;
                self.update_host_props(node, vnode.props(), None)?;
                node
            }
            VNodeKind::Component(_) => {
                return self.mount_component(vnode, container, old, parent);
            }
        };
        tracing::trace!("created node {} for {:?}", node, vnode.kind());
        self.elements.insert(node, vnode.clone());

        if let Some(old) = old {
            self.unmount_node(old, parent.is_some())?;
        }
        self.host.insert_before(container, node, next_sibling)?;
        if let Some(owner) = vnode.owner() {
            self.set_chain_host(owner, node);
        }

        for child in vnode.children() {
            self.mount_element(child.clone(), node, None, None)?;
        }

        if let Some(callback) = vnode.props().ref_callback() {
            callback.call(Some(RefTarget::Node(node)));
        }
        Ok(())
    }
}
