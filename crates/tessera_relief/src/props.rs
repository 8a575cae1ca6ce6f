//! Ordered property maps used for element props and component state.

use tessera_carton::{CompactString, SmallVec, CHILDREN, KEY, REF};

use crate::value::{PropValue, RefCallback};
use crate::vnode::VNode;

/// An insertion-ordered map from property name to value.
///
/// Maps are small (a handful of attributes), so lookups are linear and the
/// entries live inline until they outgrow four slots. Replacing an existing
/// name keeps its original position, which is what makes attribute order
/// stable across re-renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropMap {
    entries: SmallVec<[(CompactString, PropValue); 4]>,
}

/// Element and component props
pub type Props = PropMap;

/// Component state
pub type State = PropMap;

impl PropMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<CompactString>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Overlay `partial` on a copy of this map.
    pub fn merged(&self, partial: &PropMap) -> PropMap {
        let mut next = self.clone();
        for (name, value) in partial.iter() {
            next.insert(name, value.clone());
        }
        next
    }

    /// Reconciliation key, when one is present and truthy.
    pub fn key(&self) -> Option<CompactString> {
        self.get(KEY)
            .filter(|value| value.is_truthy())
            .and_then(PropValue::to_attribute_value)
    }

    /// The `children` entry, or an empty slice.
    pub fn children(&self) -> &[VNode] {
        self.get(CHILDREN)
            .and_then(PropValue::as_children)
            .unwrap_or(&[])
    }

    pub fn ref_callback(&self) -> Option<&RefCallback> {
        self.get(REF).and_then(PropValue::as_ref_callback)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(PropValue::as_int)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(PropValue::as_bool)
    }
}

impl IntoIterator for PropMap {
    type Item = (CompactString, PropValue);
    type IntoIter = smallvec::IntoIter<[(CompactString, PropValue); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<CompactString>, V: Into<PropValue>> FromIterator<(K, V)> for PropMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = PropMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Build a [`PropMap`] from `name => value` pairs.
///
/// ```
/// use tessera_relief::props;
///
/// let props = props! { "id" => "app", "tabindex" => 1 };
/// assert_eq!(props.get_str("id"), Some("app"));
/// assert_eq!(props.get_int("tabindex"), Some(1));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::PropMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::PropMap::new();
        $( map.insert($name, $value); )+
        map
    }};
}
