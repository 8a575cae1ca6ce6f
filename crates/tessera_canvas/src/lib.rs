//! Canvas - the host tree Tessera reconciles against.
//!
//! The reconciler only ever talks to a host through the [`HostTree`] trait:
//! node creation, attribute and property mutation, listener registration and
//! structural edits. [`Document`] is the in-memory implementation shipped with
//! the engine; it keeps every node in an arena keyed by [`NodeId`], serializes
//! to HTML and records each mutation it receives so callers can check how much
//! work a reconciliation pass actually did.
//!
//! # Example
//!
//! ```
//! use tessera_canvas::{Document, HostTree};
//!
//! let mut doc = Document::new();
//! let root = doc.create_element("div").unwrap();
//! let text = doc.create_text("hello").unwrap();
//! doc.insert_before(root, text, None).unwrap();
//!
//! assert_eq!(doc.inner_html(root).unwrap(), "hello");
//! assert_eq!(doc.outer_html(root).unwrap(), "<div>hello</div>");
//! ```

mod document;
mod error;
mod host;
mod journal;
mod node;
mod serialize;

pub use document::{Document, TreeWalker};
pub use error::HostError;
pub use host::HostTree;
pub use journal::Mutation;
pub use node::{ElementData, HostNode, HostNodeKind};

pub use tessera_carton::NodeId;
