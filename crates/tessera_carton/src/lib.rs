//! Carton - The artist's toolbox for Tessera.
//!
//! This crate holds the small foundational pieces every other Tessera crate
//! reaches for, much like a carton (artist's portfolio case) holds the
//! essential tools an artist carries between studios.
//!
//! # Modules
//!
//! - **dom_tag_config**: tag-name validation and void element lookup
//! - **prop_names**: reserved property names and event-prop conventions
//!
//! # Example
//!
//! ```
//! use tessera_carton::{event_name, is_void_tag, FxHashMap, String};
//!
//! assert_eq!(event_name("on", "onClick").as_deref(), Some("click"));
//! assert!(is_void_tag("input"));
//!
//! let mut seen: FxHashMap<String, usize> = FxHashMap::default();
//! seen.insert(String::from("div"), 1);
//! assert_eq!(seen.len(), 1);
//! ```

pub mod dom_tag_config;
pub mod prop_names;

// Re-export compact_str::CompactString for convenience
pub use compact_str::format_compact;
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export shared utilities
pub use dom_tag_config::*;
pub use prop_names::*;

/// Unique identifier of a node in a host tree.
pub type NodeId = u64;
