//! Reserved property names and the event-prop naming convention.

use compact_str::CompactString;

/// Reconciliation input; never forwarded to the host
pub const CHILDREN: &str = "children";
/// List identity; never forwarded to the host
pub const KEY: &str = "key";
/// Mount/unmount callback; never forwarded to the host
pub const REF: &str = "ref";
/// Content of a `text` element
pub const TEXT_CONTENT: &str = "textContent";
/// Sentinel type name of text elements
pub const TEXT_TAG: &str = "text";

/// Default prefix marking a prop as an event handler
pub const DEFAULT_EVENT_PREFIX: &str = "on";

/// Check whether a prop is handled by the engine itself and must never be
/// set, or removed, as a host attribute.
#[inline]
pub fn is_reserved_prop(name: &str) -> bool {
    matches!(name, CHILDREN | KEY | REF)
}

/// Check whether `name` denotes an event handler under `prefix`.
#[inline]
pub fn is_event_prop(prefix: &str, name: &str) -> bool {
    !prefix.is_empty() && name.len() > prefix.len() && name.starts_with(prefix)
}

/// Event name registered for an event prop: the remainder after `prefix`,
/// lower-cased (`onClick` becomes `click`).
pub fn event_name(prefix: &str, name: &str) -> Option<CompactString> {
    if !is_event_prop(prefix, name) {
        return None;
    }
    Some(CompactString::from(name[prefix.len()..].to_ascii_lowercase()))
}
