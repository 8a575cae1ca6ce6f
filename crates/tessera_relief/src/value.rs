//! Property values carried by virtual elements and component state.

use std::fmt;
use std::rc::Rc;

use tessera_carton::{format_compact, CompactString, NodeId};

use crate::component::{ComponentId, ComponentType};
use crate::vnode::VNode;

/// An event delivered to a registered handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event name (`click`, `input`, ...)
    pub name: CompactString,
    /// Node the event was dispatched on
    pub target: NodeId,
    /// Optional payload supplied by the dispatcher
    pub detail: Option<CompactString>,
}

impl Event {
    /// Create a new event without payload.
    pub fn new(name: impl Into<CompactString>, target: NodeId) -> Self {
        Self {
            name: name.into(),
            target,
            detail: None,
        }
    }

    /// Attach a payload.
    pub fn with_detail(mut self, detail: impl Into<CompactString>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// An event handler. Handlers are compared by identity: cloning keeps the
/// identity, wrapping the same closure twice does not.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    /// Identity comparison.
    pub fn same(&self, other: &EventHandler) -> bool {
        same_rc(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// What a `ref` callback is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTarget {
    /// A host node (refs placed on host elements)
    Node(NodeId),
    /// A component instance (refs placed on component elements)
    Component(ComponentId),
}

/// A `ref` callback: receives its target on mount and `None` on unmount.
#[derive(Clone)]
pub struct RefCallback(Rc<dyn Fn(Option<RefTarget>)>);

impl RefCallback {
    pub fn new(f: impl Fn(Option<RefTarget>) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, target: Option<RefTarget>) {
        (self.0)(target)
    }

    /// Identity comparison.
    pub fn same(&self, other: &RefCallback) -> bool {
        same_rc(&self.0, &other.0)
    }
}

impl fmt::Debug for RefCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefCallback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

#[inline]
fn same_rc<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// A property value.
#[derive(Clone)]
pub enum PropValue {
    Str(CompactString),
    Int(i64),
    Float(f64),
    Bool(bool),
    Handler(EventHandler),
    Ref(RefCallback),
    Children(Rc<[VNode]>),
    Component(ComponentType),
}

impl PropValue {
    /// String form used when the value is reflected as a host attribute.
    ///
    /// Handlers, refs, child lists and component types have no attribute
    /// form.
    pub fn to_attribute_value(&self) -> Option<CompactString> {
        match self {
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Int(i) => Some(format_compact!("{}", i)),
            PropValue::Float(f) => Some(format_compact!("{}", f)),
            PropValue::Bool(b) => Some(CompactString::from(if *b { "true" } else { "false" })),
            PropValue::Handler(_)
            | PropValue::Ref(_)
            | PropValue::Children(_)
            | PropValue::Component(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            PropValue::Handler(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_ref_callback(&self) -> Option<&RefCallback> {
        match self {
            PropValue::Ref(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_children(&self) -> Option<&[VNode]> {
        match self {
            PropValue::Children(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&ComponentType> {
        match self {
            PropValue::Component(c) => Some(c),
            _ => None,
        }
    }

    /// JavaScript-style truthiness, used to decide whether a key is present.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Int(i) => *i != 0,
            PropValue::Float(f) => *f != 0.0 && !f.is_nan(),
            PropValue::Bool(b) => *b,
            _ => true,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Float(a), PropValue::Float(b)) => a == b,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Handler(a), PropValue::Handler(b)) => a.same(b),
            (PropValue::Ref(a), PropValue::Ref(b)) => a.same(b),
            (PropValue::Children(a), PropValue::Children(b)) => same_rc(a, b) || a[..] == b[..],
            (PropValue::Component(a), PropValue::Component(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) => write!(f, "{:?}", s),
            PropValue::Int(i) => write!(f, "{}", i),
            PropValue::Float(v) => write!(f, "{}", v),
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Handler(h) => fmt::Debug::fmt(h, f),
            PropValue::Ref(r) => fmt::Debug::fmt(r, f),
            PropValue::Children(c) => f.debug_list().entries(c.iter()).finish(),
            PropValue::Component(c) => fmt::Debug::fmt(c, f),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value.into())
    }
}

impl From<CompactString> for PropValue {
    fn from(value: CompactString) -> Self {
        PropValue::Str(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(value.into())
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Int(value.into())
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(value: EventHandler) -> Self {
        PropValue::Handler(value)
    }
}

impl From<RefCallback> for PropValue {
    fn from(value: RefCallback) -> Self {
        PropValue::Ref(value)
    }
}

impl From<ComponentType> for PropValue {
    fn from(value: ComponentType) -> Self {
        PropValue::Component(value)
    }
}

impl From<Vec<VNode>> for PropValue {
    fn from(value: Vec<VNode>) -> Self {
        PropValue::Children(value.into())
    }
}

impl From<Rc<[VNode]>> for PropValue {
    fn from(value: Rc<[VNode]>) -> Self {
        PropValue::Children(value)
    }
}
