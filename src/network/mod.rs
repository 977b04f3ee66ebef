//! Substation graph
//!
//! A [`Network`] is an undirected petgraph graph of [`Substation`] nodes and
//! [`Line`] edges plus a name index. It is a plain container: no electrical
//! quantities are computed from it.

pub mod builder;
pub mod payload;
pub mod resolver;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

use crate::domain::{Line, NetworkSource, Substation};
use crate::error::RowError;

pub use builder::{build_transpower, build_vector, BuildOptions, BuildReport};
pub use payload::{MapData, SubstationDetail};

#[derive(Debug, Clone)]
pub struct Network {
    pub source: NetworkSource,
    graph: UnGraph<Substation, Line>,
    index: HashMap<String, NodeIndex>,
    seen_lines: HashSet<(String, NodeIndex, NodeIndex)>,
}

impl Network {
    pub fn new(source: NetworkSource) -> Self {
        Self {
            source,
            graph: UnGraph::default(),
            index: HashMap::new(),
            seen_lines: HashSet::new(),
        }
    }

    /// Add a node. The first substation with a given name wins.
    pub fn add_substation(&mut self, substation: Substation) -> Result<NodeIndex, RowError> {
        if substation.name.trim().is_empty() {
            return Err(RowError::EmptyName);
        }
        if self.index.contains_key(&substation.name) {
            return Err(RowError::DuplicateSubstation(substation.name));
        }
        let name = substation.name.clone();
        let idx = self.graph.add_node(substation);
        self.index.insert(name, idx);
        Ok(idx)
    }

    /// Add an edge between two existing substations
    pub fn add_line(&mut self, from: &str, to: &str, line: Line) -> Result<EdgeIndex, RowError> {
        let a = self
            .node(from)
            .ok_or_else(|| RowError::MissingEndpoint(from.to_string()))?;
        let b = self
            .node(to)
            .ok_or_else(|| RowError::MissingEndpoint(to.to_string()))?;

        // Undirected: DOB-AHA repeats AHA-DOB
        let key = (line.name.clone(), a.min(b), a.max(b));
        if !self.seen_lines.insert(key) {
            return Err(RowError::DuplicateLine(line.name));
        }
        Ok(self.graph.add_edge(a, b, line))
    }

    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn substation(&self, name: &str) -> Option<&Substation> {
        self.node(name).map(|idx| &self.graph[idx])
    }

    pub fn substation_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn line_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Substations in insertion order
    pub fn substations(&self) -> impl Iterator<Item = &Substation> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Lines in insertion order as `(from, to, line)`
    pub fn lines(&self) -> impl Iterator<Item = (&Substation, &Substation, &Line)> {
        self.graph.edge_references().map(move |e| {
            (&self.graph[e.source()], &self.graph[e.target()], e.weight())
        })
    }

    /// Lines touching `name`, each paired with the substation at the far end
    pub fn connections(&self, name: &str) -> Vec<(&Line, &Substation)> {
        let Some(idx) = self.node(name) else {
            return Vec::new();
        };
        let mut out: Vec<(EdgeIndex, &Line, &Substation)> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (e.id(), e.weight(), &self.graph[other])
            })
            .collect();
        out.sort_by_key(|(id, _, _)| *id);
        out.into_iter().map(|(_, line, sub)| (line, sub)).collect()
    }
}
