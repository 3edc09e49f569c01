//! Type hierarchy graph.
//!
//! Uses `petgraph::DiGraph` with:
//! - Nodes: `TypeHash` of every class and interface
//! - Edges: derived -> supertype (base class, implemented or extended interface)
//!
//! "`A` is an ancestor of `B`" is reachability from `B` to `A`.

use dyncast_core::TypeHash;
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

/// Directed graph of inheritance and implementation edges.
#[derive(Debug, Default, Clone)]
pub struct TypeHierarchy {
    graph: DiGraph<TypeHash, ()>,
    nodes: FxHashMap<TypeHash, NodeIndex>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for a type.
    pub fn add_type(&mut self, hash: TypeHash) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(&hash) {
            return idx;
        }
        let idx = self.graph.add_node(hash);
        self.nodes.insert(hash, idx);
        idx
    }

    /// Record that `derived` extends or implements `supertype`.
    ///
    /// Returns `false` without adding the edge if it would close a cycle.
    pub fn add_edge(&mut self, derived: TypeHash, supertype: TypeHash) -> bool {
        if derived == supertype || self.is_ancestor(derived, supertype) {
            return false;
        }
        let from = self.add_type(derived);
        let to = self.add_type(supertype);
        self.graph.update_edge(from, to, ());
        true
    }

    /// Check if `ancestor` is a strict supertype of `descendant`.
    pub fn is_ancestor(&self, ancestor: TypeHash, descendant: TypeHash) -> bool {
        if ancestor == descendant {
            return false;
        }
        match (self.nodes.get(&descendant), self.nodes.get(&ancestor)) {
            (Some(&from), Some(&to)) => has_path_connecting(&self.graph, from, to, None),
            _ => false,
        }
    }

    /// Direct supertypes of a type.
    pub fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        match self.nodes.get(&hash) {
            Some(&idx) => self
                .graph
                .neighbors(idx)
                .map(|n| self.graph[n])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of types in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
