//! Element and component diffing.

use tessera_canvas::HostTree;
use tessera_carton::NodeId;
use tessera_relief::{ComponentId, VNode, VNodeKind};

use crate::errors::ReconcileError;
use crate::instance::LifecyclePhase;
use crate::reconciler::Reconciler;

impl<H: HostTree> Reconciler<H> {
    /// Reconcile `vnode` against `old`, a child of `container`.
    ///
    /// `parent` is the component whose render produced `vnode`, when the
    /// call continues a higher-order chain.
    pub(crate) fn diff(
        &mut self,
        vnode: VNode,
        container: NodeId,
        old: Option<NodeId>,
        parent: Option<ComponentId>,
    ) -> Result<(), ReconcileError> {
        if vnode.is_component() {
            let old_component = match parent {
                Some(parent) => self.instances.get(&parent).and_then(|inst| inst.child),
                None => old
                    .and_then(|node| self.elements.get(&node))
                    .and_then(VNode::owner),
            };
            return self.diff_component(vnode, container, old, old_component, parent);
        }

        if let Some(node) = old {
            let reusable = self
                .elements
                .get(&node)
                .is_some_and(|prev| prev.same_type(&vnode) && prev.owner() == vnode.owner());
            if reusable {
                return self.patch_node(vnode, node);
            }
        }

        self.mount_element(vnode, container, old, parent)
    }

    /// Update a host node in place and recurse into its children.
    fn patch_node(&mut self, vnode: VNode, node: NodeId) -> Result<(), ReconcileError> {
        let Some(prev) = self.elements.insert(node, vnode.clone()) else {
            return Ok(());
        };
        match vnode.kind() {
            VNodeKind::Text(content) => {
                if prev.text_content() != Some(content.as_str()) {
                    self.host.set_text(node, content)?;
                }
            }
            VNodeKind::Element(_) => {
                self.update_host_props(node, vnode.props(), Some(prev.props()))?;
            }
            VNodeKind::Component(_) => {}
        }
        self.diff_list(vnode.children(), node)
    }

    /// Reconcile a component element against the instance currently at this
    /// position.
    ///
    /// A matching instance goes through the props update path; anything else
    /// tears the old chain down and mounts `vnode` fresh. `vnode` may also be
    /// a host element when a chain member stops rendering a component.
    pub(crate) fn diff_component(
        &mut self,
        vnode: VNode,
        container: NodeId,
        old: Option<NodeId>,
        old_component: Option<ComponentId>,
        parent: Option<ComponentId>,
    ) -> Result<(), ReconcileError> {
        let matching = old_component.filter(|id| {
            self.instances.get(id).is_some_and(|inst| {
                inst.phase != LifecyclePhase::Unmounting
                    && vnode.component_type().is_some_and(|ty| *ty == inst.ty)
            })
        });

        if let Some(id) = matching {
            return self.update_component(id, vnode, container, old);
        }

        if let Some(old_component) = old_component {
            self.teardown_chain(old_component)?;
        }
        if let Some(inst) = parent.and_then(|p| self.instances.get_mut(&p)) {
            inst.child = None;
        }
        self.mount_element(vnode, container, old, parent)
    }

    /// The props path of the component lifecycle.
    fn update_component(
        &mut self,
        id: ComponentId,
        vnode: VNode,
        container: NodeId,
        old: Option<NodeId>,
    ) -> Result<(), ReconcileError> {
        let next_props = vnode.props().clone();

        self.set_phase(id, LifecyclePhase::Updating);
        self.call_hook(id, |c, cx| {
            c.component_will_receive_props(cx, &next_props)
        })?;

        let Some(state) = self.instances.get(&id).map(|inst| inst.state.clone()) else {
            return Ok(());
        };
        if !self.should_update(id, &next_props, &state) {
            tracing::debug!("component {} skipped props update", id);
            self.set_phase(id, LifecyclePhase::Mounted);
            if let Some(inst) = self.instances.get_mut(&id) {
                inst.pending = false;
            }
            return Ok(());
        }

        self.call_hook(id, |c, cx| c.component_will_update(cx, &next_props, &state))?;

        let Some(inst) = self.instances.get_mut(&id) else {
            return Ok(());
        };
        let prev_props = std::mem::replace(&mut inst.props, next_props);
        let child = inst.child;
        let old = inst.host.or(old);
        tracing::debug!("component {} re-rendering for new props", id);

        let Some(mut next) = self.render_instance(id) else {
            return Ok(());
        };
        next.set_owner(Some(self.root_of(id)));
        match child {
            Some(child) => self.diff_component(next, container, old, Some(child), Some(id))?,
            None => self.diff(next, container, old, Some(id))?,
        }

        self.set_phase(id, LifecyclePhase::Mounted);
        self.flush_pending(id)?;
        self.call_hook(id, |c, cx| c.component_did_update(cx, &prev_props, &state))
    }
}
