//! The three ways of turning a registry into a graph.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

use crate::graph::Graph;
use crate::registry::Registry;

pub const DEFAULT_ACTOR: &str = "Bacon, Kevin";
pub const DEFAULT_MOVIE: &str = "X-Men: First Class";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// Actors and movies are both vertices; an actor links to each movie it was in.
    ActorMovie,
    /// Actors only; two actors link if they share a movie.
    ActorActor,
    /// Movies only; two movies link if they share an actor.
    MovieMovie,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::ActorMovie, Scheme::ActorActor, Scheme::MovieMovie];

    /// Graph edges per real-world link. Actor-movie paths alternate actor, movie, actor.
    pub fn path_unit(self) -> u32 {
        match self {
            Scheme::ActorMovie => 2,
            Scheme::ActorActor | Scheme::MovieMovie => 1,
        }
    }

    /// Whether a vertex named `name` is one of the entities this scheme reports on.
    pub fn counts_vertex(self, registry: &Registry, name: &str) -> bool {
        match self {
            Scheme::ActorMovie => registry.is_actor(name),
            Scheme::ActorActor | Scheme::MovieMovie => true,
        }
    }

    pub fn entity_label(self) -> &'static str {
        match self {
            Scheme::ActorMovie | Scheme::ActorActor => "actor/actress",
            Scheme::MovieMovie => "movie",
        }
    }

    pub fn default_source(self) -> &'static str {
        match self {
            Scheme::ActorMovie | Scheme::ActorActor => DEFAULT_ACTOR,
            Scheme::MovieMovie => DEFAULT_MOVIE,
        }
    }

    /// Builds a fresh graph from `registry`.
    pub fn build(self, registry: &Registry) -> Graph {
        let graph = match self {
            Scheme::ActorMovie => build_actor_movie(registry),
            Scheme::ActorActor => build_actor_actor(registry),
            Scheme::MovieMovie => build_movie_movie(registry),
        };
        debug!(
            scheme = %self,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        graph
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::ActorMovie => "actor-movie",
            Scheme::ActorActor => "actor-actor",
            Scheme::MovieMovie => "movie-movie",
        };
        f.write_str(name)
    }
}

fn build_actor_movie(registry: &Registry) -> Graph {
    let ambiguous = registry.ambiguous_names();
    if !ambiguous.is_empty() {
        warn!(
            count = ambiguous.len(),
            first = ambiguous[0],
            "names used for both an actor and a movie share one vertex"
        );
    }

    let mut graph = Graph::new();
    for actor in registry.actors() {
        graph.add_vertex(&actor.name);
        for movie_id in actor.movies() {
            if let Some(movie) = registry.movie(movie_id) {
                graph.add_edge(&actor.name, &movie.name);
            }
        }
    }
    for movie in registry.movies() {
        graph.add_vertex(&movie.name); // movies without a cast stay isolated
    }
    graph
}

fn build_actor_actor(registry: &Registry) -> Graph {
    let mut graph = Graph::new();
    for actor in registry.actors() {
        graph.add_vertex(&actor.name);
    }
    for movie in registry.movies() {
        // cast is a set, so each unordered pair is tried once
        let cast: Vec<&str> = movie
            .cast()
            .filter_map(|id| registry.actor(id))
            .map(|a| a.name.as_str())
            .collect();
        for (i, first) in cast.iter().enumerate() {
            for second in &cast[i + 1..] {
                graph.add_edge(first, second);
            }
        }
    }
    graph
}

fn build_movie_movie(registry: &Registry) -> Graph {
    let mut graph = Graph::new();
    for movie in registry.movies() {
        graph.add_vertex(&movie.name);
    }
    for actor in registry.actors() {
        // a pair shared by several actors is deduplicated by add_edge
        let filmography: Vec<&str> = actor
            .movies()
            .filter_map(|id| registry.movie(id))
            .map(|m| m.name.as_str())
            .collect();
        for (i, first) in filmography.iter().enumerate() {
            for second in &filmography[i + 1..] {
                graph.add_edge(first, second);
            }
        }
    }
    graph
}
