//! The component contract implemented by application code.
//!
//! Components never own their props or state: the reconciler keeps both and
//! hands them back through [`RenderContext`] (read-only hooks) or
//! [`Context`] (hooks that may request state updates). Hooks take `&self`,
//! so a component re-rendered from inside one of its own hooks is never
//! borrowed twice; per-instance data that must change belongs in state, or in
//! interior mutability the component manages itself.

use std::any::{type_name, TypeId};
use std::fmt;
use std::rc::Rc;

use tessera_carton::NodeId;

use crate::props::{Props, State};
use crate::vnode::VNode;

/// Handle to a mounted component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl ComponentId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Engine side of [`Context`]: lookups and the synchronous state-update
/// entry point.
pub trait Updater {
    fn props(&self, id: ComponentId) -> Option<&Props>;

    fn state(&self, id: ComponentId) -> Option<&State>;

    /// Host node the component's rendered subtree is rooted at.
    fn host_node(&self, id: ComponentId) -> Option<NodeId>;

    /// Merge `partial` into the state of `id` and re-render it before
    /// returning.
    fn request_update(&mut self, id: ComponentId, partial: State);
}

/// Read-only view handed to `render` and `should_component_update`.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    id: ComponentId,
    props: &'a Props,
    state: &'a State,
}

impl<'a> RenderContext<'a> {
    pub fn new(id: ComponentId, props: &'a Props, state: &'a State) -> Self {
        Self { id, props, state }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn props(&self) -> &'a Props {
        self.props
    }

    pub fn state(&self) -> &'a State {
        self.state
    }
}

/// Handle passed to lifecycle hooks.
pub struct Context<'a> {
    id: ComponentId,
    updater: &'a mut dyn Updater,
    empty: Props,
}

impl<'a> Context<'a> {
    pub fn new(id: ComponentId, updater: &'a mut dyn Updater) -> Self {
        Self {
            id,
            updater,
            empty: Props::new(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Current props (empty once the instance is gone).
    pub fn props(&self) -> &Props {
        self.updater.props(self.id).unwrap_or(&self.empty)
    }

    /// Current state (empty once the instance is gone).
    pub fn state(&self) -> &State {
        self.updater.state(self.id).unwrap_or(&self.empty)
    }

    pub fn host_node(&self) -> Option<NodeId> {
        self.updater.host_node(self.id)
    }

    /// Merge `partial` into this component's state and re-render
    /// synchronously.
    pub fn set_state(&mut self, partial: State) {
        self.updater.request_update(self.id, partial);
    }

    /// Request a state update on another component.
    pub fn set_state_of(&mut self, id: ComponentId, partial: State) {
        self.updater.request_update(id, partial);
    }
}

/// A component: a render function plus optional lifecycle hooks.
///
/// Hook order for one instance:
///
/// ```text
/// mount:   initial_state → component_will_mount → render → (subtree attached) → component_did_mount
/// props:   component_will_receive_props → should_component_update → component_will_update
///          → props replaced → render → (subtree diffed) → component_did_update
/// state:   should_component_update → component_will_update → state replaced → render
///          → (subtree diffed) → component_did_update
/// unmount: (host children unmounted) → component_will_unmount
/// ```
///
/// `component_will_mount` deliberately runs before the first `render`, so
/// state set there is already part of that render.
///
/// State set on a component while it is mounting or updating, after its
/// render (typically by a child's `did_*` hook through
/// [`Context::set_state_of`]), triggers one more state pass on it right
/// before its own `component_did_mount`/`component_did_update`.
pub trait Component: 'static {
    /// State installed right after construction.
    fn initial_state(&self, _props: &Props) -> State {
        State::new()
    }

    fn render(&self, cx: &RenderContext<'_>) -> VNode;

    fn component_will_mount(&self, _cx: &mut Context<'_>) {}

    fn component_did_mount(&self, _cx: &mut Context<'_>) {}

    fn component_will_receive_props(&self, _cx: &mut Context<'_>, _next_props: &Props) {}

    fn should_component_update(
        &self,
        _cx: &RenderContext<'_>,
        _next_props: &Props,
        _next_state: &State,
    ) -> bool {
        true
    }

    fn component_will_update(&self, _cx: &mut Context<'_>, _next_props: &Props, _next_state: &State) {}

    fn component_did_update(&self, _cx: &mut Context<'_>, _prev_props: &Props, _prev_state: &State) {}

    fn component_will_unmount(&self, _cx: &mut Context<'_>) {}
}

type Factory = Rc<dyn Fn(&Props) -> Rc<dyn Component>>;

/// A constructible component type.
///
/// Two `ComponentType`s are equal when they construct the same Rust type,
/// regardless of which factory closure they wrap, so building the type anew
/// on every render keeps instance identity.
#[derive(Clone)]
pub struct ComponentType {
    type_id: TypeId,
    name: &'static str,
    factory: Factory,
}

impl ComponentType {
    /// Type whose instances start from `Default`.
    pub fn of<C: Component + Default>() -> Self {
        Self::new(|_| C::default())
    }

    /// Type whose instances are built from their initial props.
    pub fn new<C: Component>(factory: impl Fn(&Props) -> C + 'static) -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: type_name::<C>(),
            factory: Rc::new(move |props: &Props| Rc::new(factory(props)) as Rc<dyn Component>),
        }
    }

    pub fn construct(&self, props: &Props) -> Rc<dyn Component> {
        (self.factory)(props)
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Short type name, without the module path.
    pub fn name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        let start = base.rfind("::").map_or(0, |pos| pos + 2);
        &self.name[start..]
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentType({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{children, create_element, props};

    #[derive(Default)]
    struct Plain;

    impl Component for Plain {
        fn render(&self, _cx: &RenderContext<'_>) -> VNode {
            create_element("div", props! {}, children![])
        }
    }

    struct Labelled {
        label: String,
    }

    impl Component for Labelled {
        fn initial_state(&self, props: &Props) -> State {
            props! { "seen" => props.get_int("start").unwrap_or(0) }
        }

        fn render(&self, cx: &RenderContext<'_>) -> VNode {
            create_element("span", props! {}, children![self.label.as_str(), cx.state().get_int("seen")])
        }
    }

    #[test]
    fn test_type_identity() {
        assert_eq!(ComponentType::of::<Plain>(), ComponentType::of::<Plain>());
        let a = ComponentType::new(|_| Labelled { label: "a".into() });
        let b = ComponentType::new(|_| Labelled { label: "b".into() });
        assert_eq!(a, b);
        assert_ne!(a, ComponentType::of::<Plain>());
    }

    #[test]
    fn test_name() {
        assert_eq!(ComponentType::of::<Plain>().name(), "Plain");
    }

    #[test]
    fn test_construct_and_render() {
        let ty = ComponentType::new(|props: &Props| Labelled {
            label: props.get_str("label").unwrap_or_default().to_string(),
        });
        let props = props! { "label" => "count: ", "start" => 3 };
        let instance = ty.construct(&props);
        let state = instance.initial_state(&props);
        let out = instance.render(&RenderContext::new(ComponentId::from_raw(0), &props, &state));
        let texts: Vec<_> = out.children().iter().filter_map(VNode::text_content).collect();
        assert_eq!(texts, vec!["count: ", "3"]);
    }

    #[test]
    fn test_component_id_display() {
        assert_eq!(ComponentId::from_raw(4).to_string(), "#4");
    }
}
