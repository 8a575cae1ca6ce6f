//! The reconciler: public entry points and instance bookkeeping.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tessera_canvas::HostTree;
use tessera_carton::NodeId;
use tessera_relief::{
    Component, ComponentId, Context, Props, RenderContext, State, Updater, VNode,
};

use crate::errors::ReconcileError;
use crate::instance::{Instance, LifecyclePhase};
use crate::options::ReconcilerOptions;

/// Reconciles virtual element trees onto a host tree.
///
/// The reconciler owns the host tree, every mounted component instance, and a
/// side table recording which element each engine-created host node was last
/// reconciled against. Host nodes missing from that table are foreign: they
/// are replaced or removed, never patched.
///
/// # Example
///
/// ```
/// use tessera_atelier::Reconciler;
/// use tessera_canvas::{Document, HostTree};
/// use tessera_relief::{children, create_element, props};
///
/// let mut doc = Document::new();
/// let container = doc.create_element("main").unwrap();
/// let mut reconciler = Reconciler::new(doc);
///
/// let tree = create_element("p", props! { "class" => "greeting" }, children!["hello"]);
/// reconciler.render(tree, container).unwrap();
///
/// assert_eq!(
///     reconciler.host().inner_html(container).unwrap(),
///     r#"<p class="greeting">hello</p>"#
/// );
/// ```
pub struct Reconciler<H: HostTree> {
    pub(crate) host: H,
    pub(crate) options: ReconcilerOptions,
    /// Last element reconciled against each engine-created host node
    pub(crate) elements: FxHashMap<NodeId, VNode>,
    pub(crate) instances: FxHashMap<ComponentId, Instance>,
    next_component: u32,
    /// Error raised by a state update requested from inside a hook
    fault: Option<ReconcileError>,
}

impl<H: HostTree> Reconciler<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, ReconcilerOptions::default())
    }

    pub fn with_options(host: H, options: ReconcilerOptions) -> Self {
        Self {
            host,
            options,
            elements: FxHashMap::default(),
            instances: FxHashMap::default(),
            next_component: 0,
            fault: None,
        }
    }

    pub fn options(&self) -> &ReconcilerOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host tree.
    ///
    /// Nodes created through this handle are foreign to the reconciler.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Synchronize the children of `container` with `vnode`.
    ///
    /// The container's first child is what the previous call rendered (if
    /// anything); calling again with a new tree updates it in place.
    pub fn render(&mut self, vnode: VNode, container: NodeId) -> Result<(), ReconcileError> {
        let old = self.host.first_child(container)?;
        tracing::debug!("render into node {} (previous: {:?})", container, old);
        self.diff(vnode, container, old, None)
    }

    /// Merge `partial` into the state of `id` and re-render it.
    ///
    /// State is merged even when the component declines the update through
    /// `should_component_update`, or when it is not attached yet (inside
    /// `component_will_mount`) or already tearing down; in those cases no
    /// render happens right away. State that reaches a mounting or updating
    /// component after its render (a child's hook updating its parent) is
    /// rendered as soon as that component's own pass finishes, before its
    /// `component_did_mount`/`component_did_update`. Unknown ids are ignored.
    pub fn set_state(&mut self, id: ComponentId, partial: State) -> Result<(), ReconcileError> {
        let Some(inst) = self.instances.get_mut(&id) else {
            tracing::warn!("set_state on unknown component {}", id);
            return Ok(());
        };
        if !inst.accepts_render() {
            tracing::debug!("component {} is {:?}; merging state only", id, inst.phase);
            inst.state = inst.state.merged(&partial);
            if inst.defers_render() {
                inst.pending = true;
            }
            return Ok(());
        }

        let Some(node) = inst.host else {
            return Ok(());
        };
        let container = self
            .host
            .parent(node)?
            .ok_or(ReconcileError::Detached {
                component: id,
                node,
            })?;

        let next_state = inst.state.merged(&partial);
        let props = inst.props.clone();
        if !self.should_update(id, &props, &next_state) {
            tracing::debug!("component {} skipped state update", id);
            if let Some(inst) = self.instances.get_mut(&id) {
                inst.state = next_state;
            }
            return Ok(());
        }

        self.set_phase(id, LifecyclePhase::Updating);
        self.call_hook(id, |c, cx| c.component_will_update(cx, &props, &next_state))?;

        let Some(inst) = self.instances.get_mut(&id) else {
            return Ok(());
        };
        let prev_state = inst.state.clone();
        inst.state = inst.state.merged(&partial);
        let child = inst.child;
        let node = inst.host.unwrap_or(node);
        tracing::debug!("component {} re-rendering for state update", id);

        let Some(mut next) = self.render_instance(id) else {
            return Ok(());
        };
        next.set_owner(Some(self.root_of(id)));
        match child {
            Some(child) => self.diff_component(next, container, Some(node), Some(child), Some(id))?,
            None => self.diff(next, container, Some(node), Some(id))?,
        }

        self.set_phase(id, LifecyclePhase::Mounted);
        self.flush_pending(id)?;
        self.call_hook(id, |c, cx| c.component_did_update(cx, &props, &prev_state))
    }

    /// Current props of a component.
    pub fn props(&self, id: ComponentId) -> Option<&Props> {
        self.instances.get(&id).map(|inst| &inst.props)
    }

    /// Current state of a component.
    pub fn state(&self, id: ComponentId) -> Option<&State> {
        self.instances.get(&id).map(|inst| &inst.state)
    }

    /// Host node a component's chain is rendered at.
    pub fn host_node(&self, id: ComponentId) -> Option<NodeId> {
        self.instances.get(&id).and_then(|inst| inst.host)
    }

    /// Lifecycle phase of a component; `None` for ids this reconciler never
    /// issued.
    pub fn phase(&self, id: ComponentId) -> Option<LifecyclePhase> {
        match self.instances.get(&id) {
            Some(inst) => Some(inst.phase),
            None if id.raw() < self.next_component => Some(LifecyclePhase::Unmounted),
            None => None,
        }
    }

    /// Next component down a higher-order chain.
    pub fn child_of(&self, id: ComponentId) -> Option<ComponentId> {
        self.instances.get(&id).and_then(|inst| inst.child)
    }

    /// Component that rendered `id` directly.
    pub fn parent_of(&self, id: ComponentId) -> Option<ComponentId> {
        self.instances.get(&id).and_then(|inst| inst.parent)
    }

    /// Number of live component instances.
    pub fn component_count(&self) -> usize {
        self.instances.len()
    }

    /// Element last reconciled against `node`.
    pub fn element_at(&self, node: NodeId) -> Option<&VNode> {
        self.elements.get(&node)
    }

    pub(crate) fn alloc_instance(&mut self, instance: Instance) -> ComponentId {
        let id = ComponentId::from_raw(self.next_component);
        self.next_component += 1;
        self.instances.insert(id, instance);
        id
    }

    pub(crate) fn set_phase(&mut self, id: ComponentId, phase: LifecyclePhase) {
        if let Some(inst) = self.instances.get_mut(&id) {
            inst.phase = phase;
        }
    }

    /// Topmost component of the chain `id` belongs to.
    pub(crate) fn root_of(&self, mut id: ComponentId) -> ComponentId {
        while let Some(parent) = self.instances.get(&id).and_then(|inst| inst.parent) {
            id = parent;
        }
        id
    }

    /// Point every instance from `start` down the chain at `node`.
    pub(crate) fn set_chain_host(&mut self, start: ComponentId, node: NodeId) {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let Some(inst) = self.instances.get_mut(&id) else {
                break;
            };
            inst.host = Some(node);
            cursor = inst.child;
        }
    }

    /// Render a component from its current props and state.
    ///
    /// State merged before this point is part of the render, so any deferred
    /// update is settled.
    pub(crate) fn render_instance(&mut self, id: ComponentId) -> Option<VNode> {
        let inst = self.instances.get_mut(&id)?;
        inst.pending = false;
        Some(
            inst.component
                .render(&RenderContext::new(id, &inst.props, &inst.state)),
        )
    }

    /// Re-render `id` through the state path if state reached it after its
    /// render while it was mounting or updating.
    pub(crate) fn flush_pending(&mut self, id: ComponentId) -> Result<(), ReconcileError> {
        let pending = self
            .instances
            .get_mut(&id)
            .is_some_and(|inst| std::mem::take(&mut inst.pending));
        if !pending {
            return Ok(());
        }
        tracing::debug!("component {} re-rendering for state merged during its pass", id);
        self.set_state(id, State::new())
    }

    pub(crate) fn should_update(&self, id: ComponentId, next_props: &Props, next_state: &State) -> bool {
        self.instances.get(&id).is_some_and(|inst| {
            inst.component.should_component_update(
                &RenderContext::new(id, &inst.props, &inst.state),
                next_props,
                next_state,
            )
        })
    }

    /// Run a lifecycle hook that may request state updates, re-raising the
    /// first error any of those updates hit.
    pub(crate) fn call_hook(
        &mut self,
        id: ComponentId,
        hook: impl FnOnce(&dyn Component, &mut Context<'_>),
    ) -> Result<(), ReconcileError> {
        let Some(component) = self
            .instances
            .get(&id)
            .map(|inst| Rc::clone(&inst.component))
        else {
            return Ok(());
        };
        hook(&*component, &mut Context::new(id, self));
        match self.fault.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<H: HostTree + Default> Default for Reconciler<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: HostTree> Updater for Reconciler<H> {
    fn props(&self, id: ComponentId) -> Option<&Props> {
        Reconciler::props(self, id)
    }

    fn state(&self, id: ComponentId) -> Option<&State> {
        Reconciler::state(self, id)
    }

    fn host_node(&self, id: ComponentId) -> Option<NodeId> {
        Reconciler::host_node(self, id)
    }

    fn request_update(&mut self, id: ComponentId, partial: State) {
        if let Err(err) = self.set_state(id, partial) {
            tracing::debug!("state update of component {} failed: {}", id, err);
            self.fault.get_or_insert(err);
        }
    }
}
