//! Node/link lists for the client-side force graph.

use expansa_common::{EntityType, RelationshipEdge};
use serde::Serialize;
use std::collections::HashSet;

pub fn color_for(entity_type: EntityType) -> &'static str {
    match entity_type {
        EntityType::Target     => "#0A1E4A",
        EntityType::Pathway    => "#A24DBE",
        EntityType::Indication => "#E04F8A",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub entity_type: EntityType,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl NetworkGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn count(&self, entity_type: EntityType) -> usize {
        self.nodes.iter().filter(|n| n.entity_type == entity_type).count()
    }
}

/// Build the graph. With `focus`, only the chain reaching that indication is
/// kept: its incoming pathway edges and the target edges feeding those
/// pathways. An unknown or unlinked focus yields an empty graph.
pub fn network_graph(edges: &[RelationshipEdge], focus: Option<&str>) -> NetworkGraph {
    let kept: Vec<&RelationshipEdge> = match focus {
        None => edges.iter().collect(),
        Some(name) => {
            let name = name.trim();
            let into: Vec<&RelationshipEdge> = edges
                .iter()
                .filter(|e| e.target_type == EntityType::Indication && e.target.eq_ignore_ascii_case(name))
                .collect();
            let pathways: HashSet<&str> = into.iter().map(|e| e.source.as_str()).collect();
            edges
                .iter()
                .filter(|e| e.target_type != EntityType::Indication && pathways.contains(e.target.as_str()))
                .chain(into)
                .collect()
        }
    };

    let mut graph = NetworkGraph::default();
    let mut seen: HashSet<&str> = HashSet::new();
    for e in &kept {
        for (id, entity_type) in [(&e.source, e.source_type), (&e.target, e.target_type)] {
            if seen.insert(id.as_str()) {
                graph.nodes.push(GraphNode {
                    id: id.clone(),
                    label: id.clone(),
                    entity_type,
                    color: color_for(entity_type),
                });
            }
        }
        graph.links.push(GraphLink { source: e.source.clone(), target: e.target.clone() });
    }
    graph
}
