//! Unit tests for JSON graph parsing.
pub(crate) use super::{JsonGraphError, JsonGraphErrorCode, JsonGraphProvider, NodeId};


/// Parses `text`, panicking with context when parsing fails.
pub(crate) fn load(text: &str) -> JsonGraphProvider {
    JsonGraphProvider::try_from_str("test", text)
        .unwrap_or_else(|err| panic!("fixture {text} should parse: {err}"))
}

/// Parses `text`, panicking when parsing unexpectedly succeeds.
pub(crate) fn load_err(text: &str) -> JsonGraphError {
    match JsonGraphProvider::try_from_str("test", text) {
        Ok(provider) => panic!("fixture {text} should fail, got {:?}", provider.graph()),
        Err(err) => err,
    }
}
