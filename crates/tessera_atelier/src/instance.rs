//! Mounted component instances.

use std::rc::Rc;

use tessera_carton::NodeId;
use tessera_relief::{Component, ComponentId, ComponentType, Props, State};

/// Where a component instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// Built, state initialized, hooks not yet run
    Constructed,
    /// Inside `component_will_mount` or the first render
    WillMount,
    /// Attached and idle
    Mounted,
    /// Between `component_will_receive_props` and `component_did_update`
    Updating,
    /// Teardown started; hooks will not run again
    Unmounting,
    /// Removed from the reconciler
    Unmounted,
}

/// Engine-owned record of one component instance.
///
/// `child`/`parent` link the instances of a higher-order chain, where each
/// component renders the next one and only the last renders a host node.
pub(crate) struct Instance {
    pub component: Rc<dyn Component>,
    pub ty: ComponentType,
    pub props: Props,
    pub state: State,
    /// Host node the chain this instance belongs to is rendered at
    pub host: Option<NodeId>,
    pub child: Option<ComponentId>,
    pub parent: Option<ComponentId>,
    pub phase: LifecyclePhase,
    /// State was merged after the last render while the instance was busy
    pub pending: bool,
}

impl Instance {
    pub fn new(
        component: Rc<dyn Component>,
        ty: ComponentType,
        props: Props,
        state: State,
        parent: Option<ComponentId>,
    ) -> Self {
        Self {
            component,
            ty,
            props,
            state,
            host: None,
            child: None,
            parent,
            phase: LifecyclePhase::Constructed,
            pending: false,
        }
    }

    /// Whether a state update should re-render right away.
    pub fn accepts_render(&self) -> bool {
        self.phase == LifecyclePhase::Mounted && self.host.is_some()
    }

    /// Whether a state update that cannot render now must be replayed once
    /// the current pass over this instance finishes.
    pub fn defers_render(&self) -> bool {
        matches!(
            self.phase,
            LifecyclePhase::WillMount | LifecyclePhase::Updating
        )
    }
}
