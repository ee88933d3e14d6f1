//! quickkit path resolver
//!
//! Resolves dot/bracket path expressions (`"a.b[2].c"`, `"list[0]"`) against
//! `serde_json::Value` structures, and batch-projects one data object into a
//! flat result map.
//!
//! Misses are never errors: absent keys, malformed paths, out-of-range indices
//! and non-container inputs all resolve to `None`. Optional fields are common,
//! so path failures stay off the error channel.

mod project;
mod resolve;

pub use project::{each, KeyMap};
pub use resolve::{get, mapping};
