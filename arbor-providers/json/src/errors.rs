use arbor_core::define_error_codes;
use thiserror::Error;

/// Errors raised while loading a JSON graph document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonGraphError {
    /// The document root was not a JSON object.
    #[error("graph document must be a JSON object")]
    NotAnObject,
    /// `nodes` was present but not an array.
    #[error("`nodes` must be an array when present")]
    NodesNotArray,
    /// `edges` was present but not an array.
    #[error("`edges` must be an array when present")]
    EdgesNotArray,
    /// A node was neither an integer nor a string.
    #[error("unrecognised node `{value}`; expected an integer or a string")]
    UnrecognizedNode {
        /// Compact JSON rendering of the node.
        value: String,
    },
    /// An edge was neither a `[u, v, w]` triple nor an object with `u`, `v`
    /// and `w` or `weight`.
    #[error("unrecognised edge format at index {index}: `{value}`")]
    UnrecognizedEdgeFormat {
        /// Position of the edge in the `edges` array.
        index: usize,
        /// Compact JSON rendering of the edge.
        value: String,
    },
    /// An edge weight was not a number or numeric string.
    #[error("edge {index} has invalid weight `{value}`")]
    InvalidWeight {
        /// Position of the edge in the `edges` array.
        index: usize,
        /// Compact JSON rendering of the weight.
        value: String,
    },
    /// An edge weight parsed to NaN or an infinity.
    #[error("edge {index} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Position of the edge in the `edges` array.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// The document was not valid JSON.
    #[error("malformed JSON: {source}")]
    Parse {
        /// Underlying parser error.
        #[from]
        source: serde_json::Error,
    },
    /// The document could not be read.
    #[error("i/o error: {source}")]
    Io {
        /// Underlying operating system error.
        #[from]
        source: std::io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`JsonGraphError`] variants.
    enum JsonGraphErrorCode for JsonGraphError {
        /// The document root was not a JSON object.
        NotAnObject => NotAnObject => "JSON_GRAPH_NOT_AN_OBJECT",
        /// `nodes` was present but not an array.
        NodesNotArray => NodesNotArray => "JSON_GRAPH_NODES_NOT_ARRAY",
        /// `edges` was present but not an array.
        EdgesNotArray => EdgesNotArray => "JSON_GRAPH_EDGES_NOT_ARRAY",
        /// A node was neither an integer nor a string.
        UnrecognizedNode => UnrecognizedNode { .. } => "JSON_GRAPH_UNRECOGNIZED_NODE",
        /// An edge had an unrecognised shape.
        UnrecognizedEdgeFormat => UnrecognizedEdgeFormat { .. } => "JSON_GRAPH_UNRECOGNIZED_EDGE_FORMAT",
        /// An edge weight was not a number or numeric string.
        InvalidWeight => InvalidWeight { .. } => "JSON_GRAPH_INVALID_WEIGHT",
        /// An edge weight parsed to NaN or an infinity.
        NonFiniteWeight => NonFiniteWeight { .. } => "JSON_GRAPH_NON_FINITE_WEIGHT",
        /// The document was not valid JSON.
        Parse => Parse { .. } => "JSON_GRAPH_PARSE",
        /// The document could not be read.
        Io => Io { .. } => "JSON_GRAPH_IO",
    }
}
