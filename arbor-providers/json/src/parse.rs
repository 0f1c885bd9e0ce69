//! Conversion from a parsed JSON document into graph parts.
use arbor_core::{Edge, Graph};
use serde_json::{Map, Value};

use crate::{errors::JsonGraphError, node::NodeId};

/// Builds a graph from an already parsed JSON document.
pub(crate) fn graph_from_value(document: &Value) -> Result<Graph<NodeId>, JsonGraphError> {
    let root = document.as_object().ok_or(JsonGraphError::NotAnObject)?;
    let edges = parse_edges(root)?;
    let nodes = parse_nodes(root)?;
    Ok(Graph::new(nodes, edges))
}

fn parse_nodes(root: &Map<String, Value>) -> Result<Option<Vec<NodeId>>, JsonGraphError> {
    match root.get("nodes") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(parse_node)
            .collect::<Result<_, _>>()
            .map(Some),
        Some(_) => Err(JsonGraphError::NodesNotArray),
    }
}

fn parse_edges(root: &Map<String, Value>) -> Result<Vec<Edge<NodeId>>, JsonGraphError> {
    match root.get("edges") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_edge(index, item))
            .collect(),
        Some(_) => Err(JsonGraphError::EdgesNotArray),
    }
}

/// Accepts integers (including integral floats such as `2.0`) and strings.
pub(crate) fn parse_node(value: &Value) -> Result<NodeId, JsonGraphError> {
    match value {
        Value::String(text) => Ok(NodeId::Text(text.clone())),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral))
            .map(NodeId::Int)
            .ok_or_else(|| unrecognized_node(value)),
        _ => Err(unrecognized_node(value)),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is checked to be integral and within i64 range"
)]
fn integral(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value)).then_some(value as i64)
}

fn unrecognized_node(value: &Value) -> JsonGraphError {
    JsonGraphError::UnrecognizedNode {
        value: value.to_string(),
    }
}

fn parse_edge(index: usize, item: &Value) -> Result<Edge<NodeId>, JsonGraphError> {
    let (u, v, w) = edge_parts(item).ok_or_else(|| JsonGraphError::UnrecognizedEdgeFormat {
        index,
        value: item.to_string(),
    })?;
    let source = parse_node(u)?;
    let target = parse_node(v)?;
    let weight = parse_weight(index, w)?;
    Ok(Edge::new(source, target, weight))
}

/// Splits an edge into `(u, v, w)` when it has one of the accepted shapes.
///
/// Objects prefer `w` over `weight` when both are present.
fn edge_parts(item: &Value) -> Option<(&Value, &Value, &Value)> {
    match item {
        Value::Array(parts) => match parts.as_slice() {
            [u, v, w] => Some((u, v, w)),
            _ => None,
        },
        Value::Object(fields) => {
            let u = fields.get("u")?;
            let v = fields.get("v")?;
            let w = fields
                .get("w")
                .filter(|w| !w.is_null())
                .or_else(|| fields.get("weight").filter(|w| !w.is_null()))?;
            Some((u, v, w))
        }
        _ => None,
    }
}

fn parse_weight(index: usize, value: &Value) -> Result<f64, JsonGraphError> {
    let invalid = || JsonGraphError::InvalidWeight {
        index,
        value: value.to_string(),
    };
    let weight = match value {
        Value::Number(number) => number.as_f64().ok_or_else(invalid)?,
        Value::String(text) => text.trim().parse::<f64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(JsonGraphError::NonFiniteWeight { index, weight })
    }
}
