//! JSON graph provider producing [`arbor_core::Graph`] values.
//!
//! Reads documents of the form
//!
//! ```json
//! { "nodes": [1, 2, 3], "edges": [[1, 2, 0.5], {"u": 2, "v": 3, "weight": 1.5}] }
//! ```
//!
//! `nodes` is optional; when it is absent the node set is inferred from the
//! edge endpoints. Each edge is either a three-element array or an object
//! with `u`, `v` and one of `w` or `weight`.

mod errors;
mod node;
mod parse;
mod provider;
#[cfg(test)]
mod tests;

pub use crate::{
    errors::{JsonGraphError, JsonGraphErrorCode},
    node::NodeId,
    provider::JsonGraphProvider,
};
