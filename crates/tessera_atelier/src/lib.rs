//! Atelier - the workshop where Tessera reconciles virtual elements onto a
//! host tree.
//!
//! [`Reconciler`] takes a virtual element tree built with
//! [`tessera_relief::create_element`] and a container node in a
//! [`tessera_canvas::HostTree`], and applies the structural and attribute
//! mutations needed to make the container match. Components are mounted,
//! updated and unmounted along the way, with their lifecycle hooks run in
//! order. State updates requested from inside a hook re-enter the reconciler
//! synchronously.
//!
//! # Example
//!
//! ```
//! use tessera_atelier::Reconciler;
//! use tessera_canvas::{Document, HostTree};
//! use tessera_relief::{
//!     children, create_element, props, Component, ComponentType, RenderContext, VNode,
//! };
//!
//! #[derive(Default)]
//! struct Counter;
//!
//! impl Component for Counter {
//!     fn initial_state(&self, _props: &tessera_relief::Props) -> tessera_relief::State {
//!         props! { "count" => 0 }
//!     }
//!
//!     fn render(&self, cx: &RenderContext<'_>) -> VNode {
//!         let count = cx.state().get_int("count").unwrap_or(0);
//!         create_element("span", props! {}, children![count])
//!     }
//! }
//!
//! let mut doc = Document::new();
//! let root = doc.create_element("div").unwrap();
//! let mut reconciler = Reconciler::new(doc);
//! reconciler
//!     .render(create_element(ComponentType::of::<Counter>(), props! {}, children![]), root)
//!     .unwrap();
//!
//! let id = tessera_relief::ComponentId::from_raw(0);
//! reconciler.set_state(id, props! { "count" => 1 }).unwrap();
//! assert_eq!(reconciler.host().inner_html(root).unwrap(), "<span>1</span>");
//! ```

mod diff;
mod errors;
mod host_props;
mod instance;
mod list;
mod mount;
mod options;
mod reconciler;
mod unmount;

pub use errors::ReconcileError;
pub use instance::LifecyclePhase;
pub use options::ReconcilerOptions;
pub use reconciler::Reconciler;
