//! JSON interchange format.
//!
//! ```json
//! {"directed": true, "vertices": [{"id": "A"}], "edges": [{"source": "A", "target": "B", "weight": 2.0}]}
//! ```
//!
//! `vertices` may be omitted when every vertex appears on an edge. `weight` is omitted for
//! unweighted edges.

use super::{Graph, GraphOptions, Vertex};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<V> {
    pub directed: bool,
    #[serde(default = "Vec::new")]
    pub vertices: Vec<VertexEntry<V>>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeEntry<V>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexEntry<V> {
    pub id: V,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry<V> {
    pub source: V,
    pub target: V,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl<V: Vertex> Graph<V> {
    pub fn from_document(document: GraphDocument<V>) -> Self {
        let mut graph = Self::new(GraphOptions {
            directed: document.directed,
        });
        for entry in document.vertices {
            graph.add_vertex(entry.id);
        }
        for entry in document.edges {
            graph.set_edge(entry.source, entry.target, entry.weight);
        }
        graph
    }

    pub fn to_document(&self) -> GraphDocument<V> {
        GraphDocument {
            directed: self.is_directed(),
            vertices: self
                .vertices()
                .map(|v| VertexEntry { id: v.clone() })
                .collect(),
            edges: self
                .edges()
                .map(|edge| EdgeEntry {
                    source: edge.source().clone(),
                    target: edge.destination().clone(),
                    weight: edge.explicit_weight(),
                })
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self>
    where
        V: DeserializeOwned,
    {
        let document: GraphDocument<V> = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    pub fn to_json(&self) -> Result<String>
    where
        V: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}
