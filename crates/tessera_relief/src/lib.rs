//! Relief - virtual elements for Tessera.
//!
//! A relief is the raised surface a sculptor carves before anything is cast:
//! here it is the immutable description of what should be on screen. The
//! reconciler in `tessera_atelier` turns these descriptions into mutations of
//! a live host tree.
//!
//! # Example
//!
//! ```
//! use tessera_relief::{children, create_element, props, VNodeKind};
//!
//! let list = create_element(
//!     "ul",
//!     props! { "class" => "todo" },
//!     children![
//!         create_element("li", props! { "key" => "a" }, children!["first"]),
//!         None::<tessera_relief::VNode>,
//!         vec![create_element("li", props! { "key" => "b" }, children![2])],
//!     ],
//! );
//!
//! assert_eq!(list.children().len(), 2);
//! assert!(matches!(list.children()[0].children()[0].kind(), VNodeKind::Text(t) if t == "first"));
//! assert_eq!(list.children()[1].key().as_deref(), Some("b"));
//! ```

mod component;
mod props;
mod value;
mod vnode;

pub use component::{
    Component, ComponentId, ComponentType, Context, RenderContext, Updater,
};
pub use props::{PropMap, Props, State};
pub use value::{Event, EventHandler, PropValue, RefCallback, RefTarget};
pub use vnode::{create_element, Child, ElementType, VNode, VNodeKind};

pub use tessera_carton::NodeId;
