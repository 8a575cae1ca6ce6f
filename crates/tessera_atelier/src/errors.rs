//! Reconciliation errors.

use tessera_canvas::HostError;
use tessera_carton::NodeId;
use tessera_relief::ComponentId;
use thiserror::Error;

/// Errors that abort a reconciliation pass.
///
/// Work committed before the failure stays in the host tree; the remaining
/// siblings of the failing node are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The host tree rejected an operation
    #[error(transparent)]
    Host(#[from] HostError),

    /// A state update found the component's host node outside any container
    #[error("Component {component} is rendered at node {node}, which has no parent")]
    Detached { component: ComponentId, node: NodeId },
}
