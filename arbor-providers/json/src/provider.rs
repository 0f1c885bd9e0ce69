//! JSON graph provider.
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use arbor_core::Graph;
use serde_json::Value;

use crate::{errors::JsonGraphError, node::NodeId, parse::graph_from_value};

/// A named graph loaded from a JSON document.
#[derive(Clone, Debug)]
pub struct JsonGraphProvider {
    name: String,
    graph: Graph<NodeId>,
}

impl JsonGraphProvider {
    /// Parses a graph from an in-memory JSON string.
    ///
    /// # Errors
    /// Returns [`JsonGraphError`] when the text is not valid JSON or does not
    /// describe a graph.
    ///
    /// # Examples
    /// ```
    /// use arbor_providers_json::{JsonGraphProvider, NodeId};
    ///
    /// let provider = JsonGraphProvider::try_from_str(
    ///     "demo",
    ///     r#"{"edges": [[1, 2, 0.5], {"u": 2, "v": "c", "weight": "2"}]}"#,
    /// )?;
    /// assert_eq!(provider.graph().node_count(), 3);
    /// assert_eq!(provider.graph().nodes()[2], NodeId::from("c"));
    /// # Ok::<(), arbor_providers_json::JsonGraphError>(())
    /// ```
    pub fn try_from_str(name: impl Into<String>, text: &str) -> Result<Self, JsonGraphError> {
        let document: Value = serde_json::from_str(text)?;
        Self::try_from_value(name, &document)
    }

    /// Parses a graph from any reader producing a JSON document.
    ///
    /// # Errors
    /// Returns [`JsonGraphError::Io`] or [`JsonGraphError::Parse`] when the
    /// document cannot be read, and a shape error when it does not describe
    /// a graph.
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, JsonGraphError> {
        let document: Value = serde_json::from_reader(BufReader::new(reader))?;
        Self::try_from_value(name, &document)
    }

    /// Opens `path` and parses the graph it contains.
    ///
    /// # Errors
    /// Returns [`JsonGraphError::Io`] when the file cannot be opened and the
    /// same errors as [`Self::try_from_reader`] otherwise.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, JsonGraphError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, file)
    }

    /// Builds a graph from an already parsed JSON value.
    ///
    /// # Errors
    /// Returns a shape error when the value does not describe a graph.
    pub fn try_from_value(
        name: impl Into<String>,
        document: &Value,
    ) -> Result<Self, JsonGraphError> {
        let graph = graph_from_value(document)?;
        Ok(Self {
            name: name.into(),
            graph,
        })
    }

    /// Returns the provider's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph<NodeId> {
        &self.graph
    }

    /// Consumes the provider and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<NodeId> {
        self.graph
    }
}
