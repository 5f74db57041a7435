use std::collections::VecDeque;

use tracing::debug;

use crate::graph::Graph;

/// Breadth-first search from `source`, writing distance and predecessor onto every vertex.
///
/// Annotations are cleared first; an unknown source leaves everything unreached.
pub fn traverse(graph: &mut Graph, source: &str) {
    graph.reset_annotations();
    let Some(start) = graph.vertex_id(source) else {
        debug!(source, "source not in graph, nothing reachable");
        return;
    };

    let (vertices, adjacency) = graph.split_for_traversal();
    let mut queue = VecDeque::new();
    vertices[start].distance = Some(0);
    queue.push_back(start);
    let mut reached = 1usize;

    while let Some(current) = queue.pop_front() {
        let next = vertices[current].distance.map(|d| d + 1);
        for &neighbor in &adjacency[current] {
            if vertices[neighbor].distance.is_none() {
                vertices[neighbor].distance = next;
                vertices[neighbor].predecessor = Some(current);
                queue.push_back(neighbor); // visited once its distance is set
                reached += 1;
            }
        }
    }

    debug!(source, reached, total = vertices.len(), "traversal finished");
}
