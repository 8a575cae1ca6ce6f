//! Keyed and unkeyed child list reconciliation.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tessera_canvas::HostTree;
use tessera_carton::{CompactString, NodeId};
use tessera_relief::VNode;

use crate::errors::ReconcileError;
use crate::reconciler::Reconciler;

impl<H: HostTree> Reconciler<H> {
    /// Reconcile the children of `parent` against `children`.
    ///
    /// One left-to-right pass: each new child takes the existing node with the
    /// same key, or the next unkeyed node, moves it into position and diffs
    /// it. Children with nothing to reuse are mounted onto a placeholder
    /// inserted at their position. Nodes left over past the end are unmounted.
    pub(crate) fn diff_list(
        &mut self,
        children: &[VNode],
        parent: NodeId,
    ) -> Result<(), ReconcileError> {
        let existing: SmallVec<[NodeId; 8]> = self.host.children(parent)?.iter().copied().collect();

        let mut keyed: FxHashMap<CompactString, NodeId> = FxHashMap::default();
        let mut unkeyed: SmallVec<[NodeId; 8]> = SmallVec::new();
        for node in existing {
            match self.key_of(node) {
                // Duplicates stay unmatched and are removed at the end
                Some(key) => {
                    keyed.entry(key).or_insert(node);
                }
                None => unkeyed.push(node),
            }
        }

        let mut cursor = 0;
        for (index, child) in children.iter().enumerate() {
            let matched = match child.key() {
                Some(key) => keyed.remove(&key),
                None => {
                    let node = unkeyed.get(cursor).copied();
                    cursor += 1;
                    node
                }
            };

            let current = self.host.child_at(parent, index)?;
            match matched {
                Some(node) => {
                    if current != Some(node) {
                        tracing::debug!("moving node {} to position {}", node, index);
                        self.host.insert_before(parent, node, current)?;
                    }
                    self.diff(child.clone(), parent, Some(node), None)?;
                }
                None => {
                    let placeholder = self.host.create_element(&self.options.placeholder_tag)?;
                    self.host.insert_before(parent, placeholder, current)?;
                    self.mount_element(child.clone(), parent, Some(placeholder), None)?;
                }
            }
        }

        let leftovers: SmallVec<[NodeId; 8]> = self
            .host
            .children(parent)?
            .iter()
            .skip(children.len())
            .copied()
            .collect();
        for node in leftovers {
            self.unmount_node(node, false)?;
        }
        Ok(())
    }

    /// Key of the element at `node`: the owning component's key when a
    /// component rendered it, else the element's own.
    fn key_of(&self, node: NodeId) -> Option<CompactString> {
        let vnode = self.elements.get(&node)?;
        match vnode.owner().and_then(|owner| self.instances.get(&owner)) {
            Some(inst) => inst.props.key(),
            None => vnode.key(),
        }
    }
}
