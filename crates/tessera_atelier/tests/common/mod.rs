//! Shared helpers for the reconciler integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tessera_atelier::Reconciler;
use tessera_canvas::{Document, HostTree};
use tessera_carton::NodeId;
use tessera_relief::{ComponentId, Props};

/// Shared call log standing in for spies.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == entry)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Slot a component writes its own id into.
#[derive(Clone, Default)]
pub struct Handle(Rc<Cell<Option<ComponentId>>>);

impl Handle {
    pub fn set(&self, id: ComponentId) {
        self.0.set(Some(id));
    }

    pub fn get(&self) -> ComponentId {
        self.0.get().expect("component handle not captured")
    }
}

/// A reconciler over a fresh document, plus the container to render into.
pub fn scratch() -> (Reconciler<Document>, NodeId) {
    init_tracing();
    let mut doc = Document::new();
    let container = doc.create_element("div").unwrap();
    (Reconciler::new(doc), container)
}

pub fn html(reconciler: &Reconciler<Document>, container: NodeId) -> String {
    reconciler.host().inner_html(container).unwrap()
}

/// Copy `props` without the entries the engine reserves for itself.
pub fn forward(props: &Props) -> Props {
    props
        .iter()
        .filter(|(name, _)| !matches!(*name, "children" | "key" | "ref"))
        .map(|(name, value)| (name, value.clone()))
        .collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
