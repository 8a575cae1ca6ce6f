//! Virtual element descriptors and the `create_element` builder.

use std::rc::Rc;

use tessera_carton::{format_compact, CompactString, CHILDREN, TEXT_CONTENT, TEXT_TAG};

use crate::component::{ComponentId, ComponentType};
use crate::props::Props;
use crate::value::PropValue;

/// What a virtual element renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum VNodeKind {
    /// Host element with the given tag name
    Element(CompactString),
    /// Text node with the given content
    Text(CompactString),
    /// Component instance produced by the given type
    Component(ComponentType),
}

/// The `type` argument of [`create_element`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Tag(CompactString),
    /// The `text` sentinel: content comes from the `textContent` prop
    Text,
    Component(ComponentType),
}

impl From<&str> for ElementType {
    fn from(value: &str) -> Self {
        if value == TEXT_TAG {
            ElementType::Text
        } else {
            ElementType::Tag(value.into())
        }
    }
}

impl From<CompactString> for ElementType {
    fn from(value: CompactString) -> Self {
        ElementType::from(value.as_str())
    }
}

impl From<String> for ElementType {
    fn from(value: String) -> Self {
        ElementType::from(value.as_str())
    }
}

impl From<ComponentType> for ElementType {
    fn from(value: ComponentType) -> Self {
        ElementType::Component(value)
    }
}

impl From<&ComponentType> for ElementType {
    fn from(value: &ComponentType) -> Self {
        ElementType::Component(value.clone())
    }
}

/// An immutable virtual element.
///
/// `owner` is the one field the reconciler writes: the root component of the
/// higher-order chain whose render produced this element. It is assigned
/// before the element is reconciled and ignored by equality.
#[derive(Debug, Clone)]
pub struct VNode {
    kind: VNodeKind,
    props: Props,
    children: Rc<[VNode]>,
    owner: Option<ComponentId>,
}

impl VNode {
    /// Create a text element.
    pub fn text(content: impl Into<CompactString>) -> Self {
        let content = content.into();
        let children: Rc<[VNode]> = Rc::from(Vec::new());
        let mut props = Props::with_capacity(2);
        props.insert(CHILDREN, PropValue::Children(children.clone()));
        props.insert(TEXT_CONTENT, content.clone());
        Self {
            kind: VNodeKind::Text(content),
            props,
            children,
            owner: None,
        }
    }

    pub fn kind(&self) -> &VNodeKind {
        &self.kind
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Flattened children to reconcile.
    pub fn children(&self) -> &[VNode] {
        &self.children
    }

    pub fn owner(&self) -> Option<ComponentId> {
        self.owner
    }

    /// Assign the owning component. Called by the reconciler only.
    pub fn set_owner(&mut self, owner: Option<ComponentId>) {
        self.owner = owner;
    }

    pub fn key(&self) -> Option<CompactString> {
        self.props.key()
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            VNodeKind::Element(tag) => Some(tag.as_str()),
            _ => None,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            VNodeKind::Text(content) => Some(content.as_str()),
            _ => None,
        }
    }

    pub fn component_type(&self) -> Option<&ComponentType> {
        match &self.kind {
            VNodeKind::Component(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self.kind, VNodeKind::Component(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, VNodeKind::Text(_))
    }

    /// Same tag, both text, or the same component type.
    pub fn same_type(&self, other: &VNode) -> bool {
        match (&self.kind, &other.kind) {
            (VNodeKind::Element(a), VNodeKind::Element(b)) => a == b,
            (VNodeKind::Text(_), VNodeKind::Text(_)) => true,
            (VNodeKind::Component(a), VNodeKind::Component(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for VNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.props == other.props && self.children == other.children
    }
}

/// A child leaf accepted by [`create_element`].
#[derive(Debug, Clone)]
pub enum Child {
    Element(VNode),
    Text(CompactString),
    List(Vec<Child>),
    Empty,
}

impl Child {
    fn flatten_into(self, out: &mut Vec<VNode>) {
        match self {
            Child::Element(node) => out.push(node),
            Child::Text(text) => out.push(VNode::text(text)),
            Child::List(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
            Child::Empty => {}
        }
    }
}

impl From<VNode> for Child {
    fn from(value: VNode) -> Self {
        Child::Element(value)
    }
}

impl From<&VNode> for Child {
    fn from(value: &VNode) -> Self {
        Child::Element(value.clone())
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Child::Text(value.into())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Child::Text(value.into())
    }
}

impl From<CompactString> for Child {
    fn from(value: CompactString) -> Self {
        Child::Text(value)
    }
}

macro_rules! number_child {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Child::Text(format_compact!("{}", value))
                }
            }
        )*
    };
}

number_child!(i32, i64, u32, u64, usize, f64);

/// `false` is dropped like any absent leaf; `true` carries nothing to render
/// and is dropped as well.
impl From<bool> for Child {
    fn from(_: bool) -> Self {
        Child::Empty
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Child::Empty, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(value: Vec<T>) -> Self {
        Child::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<&[VNode]> for Child {
    fn from(value: &[VNode]) -> Self {
        Child::List(value.iter().cloned().map(Child::Element).collect())
    }
}

impl From<Rc<[VNode]>> for Child {
    fn from(value: Rc<[VNode]>) -> Self {
        Child::from(&value[..])
    }
}

/// Build a virtual element.
///
/// `children` is flattened recursively; strings and numbers become `text`
/// elements and absent leaves are dropped. The resulting props hold the
/// flattened list under `children`, overlaid by `attributes` (caller entries
/// win, including a caller-supplied `children`).
pub fn create_element<I>(ty: impl Into<ElementType>, attributes: Props, children: I) -> VNode
where
    I: IntoIterator,
    I::Item: Into<Child>,
{
    let mut flat = Vec::new();
    for child in children {
        child.into().flatten_into(&mut flat);
    }
    let children: Rc<[VNode]> = Rc::from(flat);

    let mut props = Props::with_capacity(attributes.len() + 1);
    props.insert(CHILDREN, PropValue::Children(children.clone()));
    for (name, value) in attributes {
        props.insert(name, value);
    }

    let kind = match ty.into() {
        ElementType::Tag(tag) => VNodeKind::Element(tag),
        ElementType::Text => VNodeKind::Text(
            props
                .get(TEXT_CONTENT)
                .and_then(PropValue::to_attribute_value)
                .unwrap_or_default(),
        ),
        ElementType::Component(ty) => VNodeKind::Component(ty),
    };

    VNode {
        kind,
        props,
        children,
        owner: None,
    }
}

/// Build a `Vec<Child>` from heterogeneous leaves.
///
/// ```
/// use tessera_relief::{children, create_element, props};
///
/// let items = children!["a", 1, None::<&str>, vec!["b", "c"]];
/// let node = create_element("p", props! {}, items);
/// assert_eq!(node.children().len(), 4);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        ::std::vec::Vec::<$crate::Child>::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$($crate::Child::from($child)),+]
    };
}
