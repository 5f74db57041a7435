//! Degrees of separation on top of a traversed graph.
//!
//! Every distance reported here is in real-world links: raw BFS hops divided by the
//! scheme's path unit (floor division), so the frequency table, the chains and the
//! average all agree with each other.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::bfs;
use crate::builder::Scheme;
use crate::error::SeparationError;
use crate::frequency::{FrequencyTable, UNREACHABLE};
use crate::graph::{Graph, VertexId};
use crate::registry::Registry;

/// What joins the two ends of a [`ChainStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Link {
    /// Two actors who appeared in the same movie.
    CoStars,
    /// Two movies with an actor in common.
    SharedCast,
    /// An actor to a movie it was in.
    ActedIn,
    /// A movie to an actor in its cast.
    Featured,
}

/// One link of a chain, walked from the destination back towards the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainStep {
    pub from: String,
    /// Interstitial vertices (the shared movie or actor in the actor-movie scheme).
    pub via: Vec<String>,
    pub to: String,
    pub link: Link,
}

impl fmt::Display for ChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = (&self.from, &self.to);
        match (self.link, self.via.first()) {
            (Link::CoStars, Some(movie)) => write!(f, "{from} was in \"{movie}\" with {to}."),
            (Link::CoStars, None) => write!(f, "{from} was in a movie with {to}."),
            (Link::SharedCast, Some(actor)) => write!(f, "{from} and {to} share cast member {actor}."),
            (Link::SharedCast, None) => write!(f, "{from} and {to} share a cast member."),
            (Link::ActedIn, _) => write!(f, "{from} was in \"{to}\"."),
            (Link::Featured, _) => write!(f, "\"{from}\" featured {to}."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub scheme: Scheme,
    pub source: String,
    pub destination: String,
    /// `None` when the destination is unreachable.
    pub separation: Option<u32>,
    pub steps: Vec<ChainStep>,
}

impl Chain {
    pub fn is_reachable(&self) -> bool {
        self.separation.is_some()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {} have a distance of ", self.source, self.destination)?;
        let Some(separation) = self.separation else {
            return writeln!(f, "infinity.");
        };
        writeln!(f, "{separation}.")?;
        if !self.steps.is_empty() {
            writeln!(f)?;
        }
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        Ok(())
    }
}

/// Distance of a vertex in links, `None` if unreached.
fn separation_of(graph: &Graph, id: VertexId, unit: u32) -> Option<u32> {
    graph.vertex(id).and_then(|v| v.distance()).map(|d| d / unit)
}

/// Histogram of separations over the vertices the scheme reports on.
/// Unreached vertices land under [`UNREACHABLE`].
pub fn frequency_of(graph: &Graph, registry: &Registry, scheme: Scheme) -> FrequencyTable {
    let unit = scheme.path_unit();
    let mut table = FrequencyTable::new();
    for vertex in graph.vertices().filter(|v| scheme.counts_vertex(registry, v.name())) {
        match vertex.distance() {
            Some(d) => table.record(d / unit),
            None => table.record(UNREACHABLE),
        }
    }
    table
}

/// Mean separation over reachable vertices of interest; infinite when none are reachable.
pub fn average_separation(graph: &Graph, registry: &Registry, scheme: Scheme) -> f64 {
    let unit = scheme.path_unit();
    let (sum, reachable) = graph
        .vertices()
        .filter(|v| scheme.counts_vertex(registry, v.name()))
        .filter_map(|v| v.distance())
        .fold((0u64, 0u64), |(sum, n), d| (sum + u64::from(d / unit), n + 1));
    if reachable == 0 {
        return f64::INFINITY;
    }
    sum as f64 / reachable as f64
}

fn link_for(registry: &Registry, scheme: Scheme, from: &str, full_step: bool) -> Link {
    match scheme {
        Scheme::ActorActor => Link::CoStars,
        Scheme::MovieMovie => Link::SharedCast,
        Scheme::ActorMovie => match (registry.is_actor(from), full_step) {
            (true, true) => Link::CoStars,
            (false, true) => Link::SharedCast,
            (true, false) => Link::ActedIn,
            (false, false) => Link::Featured,
        },
    }
}

/// Walks predecessor links from `destination` back to `source`.
///
/// `graph` must have been traversed from `source`. `registry` tells actor and movie
/// vertices apart when wording the steps.
pub fn chain(
    graph: &Graph,
    registry: &Registry,
    scheme: Scheme,
    source: &str,
    destination: &str,
) -> Result<Chain, SeparationError> {
    let start = graph
        .vertex_id(source)
        .ok_or_else(|| SeparationError::UnknownSource(source.to_string()))?;
    let end = graph
        .vertex_id(destination)
        .ok_or_else(|| SeparationError::UnknownDestination(destination.to_string()))?;
    if separation_of(graph, start, 1) != Some(0) {
        return Err(SeparationError::StaleTraversal(source.to_string()));
    }

    let unit = scheme.path_unit();
    let mut result = Chain {
        scheme,
        source: source.to_string(),
        destination: destination.to_string(),
        separation: separation_of(graph, end, unit),
        steps: Vec::new(),
    };
    if result.separation.is_none() {
        return Ok(result);
    }

    let name = |id: VertexId| graph.vertex(id).map_or_else(String::new, |v| v.name().to_string());
    let mut current = end;
    while current != start {
        let from = name(current);
        let mut via = Vec::new();
        let mut hops = 0;
        while hops < unit {
            let predecessor = graph
                .vertex(current)
                .and_then(|v| v.predecessor())
                .ok_or_else(|| SeparationError::StaleTraversal(source.to_string()))?;
            current = predecessor;
            hops += 1;
            if current == start {
                break; // odd raw distance: the last step is short
            }
            if hops < unit {
                via.push(name(current));
            }
        }
        let link = link_for(registry, scheme, &from, hops == unit);
        result.steps.push(ChainStep {
            from,
            via,
            to: name(current),
            link,
        });
    }
    Ok(result)
}

#[derive(Debug, Clone, Serialize)]
pub struct SeparationSummary {
    pub scheme: Scheme,
    pub source: String,
    pub vertices: usize,
    pub edges: usize,
    /// `None` when nothing is reachable.
    pub average_separation: Option<f64>,
    pub frequencies: FrequencyTable,
}

/// One traversal session: a registry, the graph one scheme builds from it, and the
/// source the graph was last traversed from.
#[derive(Debug, Clone)]
pub struct SeparationEngine {
    registry: Registry,
    scheme: Scheme,
    graph: Graph,
    source: String,
}

impl SeparationEngine {
    pub fn new(registry: Registry, scheme: Scheme, source: impl Into<String>) -> Self {
        Self {
            registry,
            scheme,
            graph: Graph::new(),
            source: source.into(),
        }
    }

    pub fn create_graph(&mut self) {
        self.graph = self.scheme.build(&self.registry);
    }

    /// Re-annotates the graph from `source`; later chains start there.
    pub fn traverse_bfs(&mut self, source: &str) {
        self.source = source.to_string();
        bfs::traverse(&mut self.graph, source);
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn frequency_chart(&self) -> FrequencyTable {
        frequency_of(&self.graph, &self.registry, self.scheme)
    }

    pub fn average_separation(&self) -> f64 {
        average_separation(&self.graph, &self.registry, self.scheme)
    }

    pub fn chain(&self, destination: &str) -> Result<Chain, SeparationError> {
        let result = chain(&self.graph, &self.registry, self.scheme, &self.source, destination);
        if let Err(err) = &result {
            debug!(destination, %err, "chain lookup failed");
        }
        result
    }

    pub fn summary(&self) -> SeparationSummary {
        let average = self.average_separation();
        SeparationSummary {
            scheme: self.scheme,
            source: self.source.clone(),
            vertices: self.graph.vertex_count(),
            edges: self.graph.edge_count(),
            average_separation: average.is_finite().then_some(average),
            frequencies: self.frequency_chart(),
        }
    }
}
