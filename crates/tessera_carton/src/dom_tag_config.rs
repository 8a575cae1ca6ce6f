//! Tag-name configuration shared by host trees and serializers.

use phf::phf_set;

/// Elements that never have children and serialize without a closing tag
pub static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr"
};

/// Check if element is void (self-closing)
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// Check whether `tag` is acceptable as an element name.
///
/// A name must start with an ASCII letter and may continue with ASCII
/// alphanumerics, `-`, `_`, `:` or `.`. This is deliberately narrower than
/// the XML `Name` production: custom elements and namespaced tags pass,
/// anything carrying whitespace or markup characters does not.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}
