//! Undirected, unweighted simple graph over named vertices.
//!
//! Vertices live in an arena owned by the graph; adjacency and predecessor links are
//! arena indices, so walking a predecessor chain never touches ownership.

use std::collections::{BTreeSet, HashMap};

pub type VertexId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    pub(crate) distance: Option<u32>,
    pub(crate) predecessor: Option<VertexId>,
}

impl Vertex {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            distance: None,
            predecessor: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hops from the last traversal's source; `None` is infinite (unreached).
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Parallel edges are ignored; self loops are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<BTreeSet<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(name));
        self.adjacency.push(BTreeSet::new());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        if self.has_edge(from, to) {
            return;
        }
        let v = self.add_vertex(from);
        let w = self.add_vertex(to);
        self.adjacency[v].insert(w);
        self.adjacency[w].insert(v);
        self.edge_count += 1;
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&v), Some(&w)) => self.adjacency[v].contains(&w),
            _ => false,
        }
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn get_vertex(&self, name: &str) -> Option<&Vertex> {
        self.index.get(name).map(|&id| &self.vertices[id])
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Neighbors of `name`; empty if it is not in the graph.
    pub fn adjacent_to<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.index
            .get(name)
            .into_iter()
            .flat_map(move |&id| self.adjacency[id].iter().map(move |&n| &self.vertices[n]))
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn reset_annotations(&mut self) {
        for vertex in &mut self.vertices {
            vertex.distance = None;
            vertex.predecessor = None;
        }
    }

    // Disjoint borrows for traversal: annotations are written while adjacency is read.
    pub(crate) fn split_for_traversal(&mut self) -> (&mut [Vertex], &[BTreeSet<VertexId>]) {
        (self.vertices.as_mut_slice(), self.adjacency.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        let again = graph.add_vertex("A");
        assert_eq!(a, again);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.get_vertex("A").unwrap().distance(), None); // starts at infinity
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        assert!(graph.has_vertex("A"));
        assert!(graph.has_vertex("B"));
        assert!(graph.has_edge("A", "B"));
        assert!(graph.has_edge("B", "A")); // undirected
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edges_ignored() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "A");
        graph.add_edge("A", "B");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacent_to("A").count(), 1);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A");
        assert!(graph.has_edge("A", "A"));
        assert_eq!(graph.edge_count(), 1);
        let neighbors: Vec<&str> = graph.adjacent_to("A").map(Vertex::name).collect();
        assert_eq!(neighbors, vec!["A"]);
    }

    #[test]
    fn test_lookups_on_unknown_names() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        assert!(graph.get_vertex("Z").is_none());
        assert!(!graph.has_edge("A", "Z"));
        assert!(!graph.has_edge("Z", "Z"));
        assert_eq!(graph.adjacent_to("Z").count(), 0);
    }

    #[test]
    fn test_counts_match_contents() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_vertex("D");
        assert_eq!(graph.vertex_count(), graph.vertices().count());
        let degree_sum: usize = graph.vertices().map(|v| graph.adjacent_to(v.name()).count()).sum();
        assert_eq!(degree_sum, 2 * graph.edge_count());
    }
}
