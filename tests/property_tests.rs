//! Property-based tests for graph structure, traversal and separation reporting.

use proptest::prelude::*;

use six_degrees::bfs;
use six_degrees::frequency::UNREACHABLE;
use six_degrees::separation::frequency_of;
use six_degrees::{Graph, Registry, Scheme};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-h]".prop_map(|s| s)
}

fn arb_edges() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_name(), arb_name()), 0..30)
}

/// Small casts over a small name pool so movies overlap often.
fn arb_credits() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        ("M[0-5]", prop::collection::vec("[a-j]", 0..5)),
        1..8,
    )
}

fn graph_from(edges: &[(String, String)]) -> Graph {
    let mut graph = Graph::new();
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}

fn registry_from(credits: &[(String, Vec<String>)]) -> Registry {
    let mut registry = Registry::new();
    for (movie, cast) in credits {
        registry.add_credits(movie, cast);
    }
    registry
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn edges_are_symmetric(edges in arb_edges(), a in arb_name(), b in arb_name()) {
        let graph = graph_from(&edges);
        prop_assert_eq!(graph.has_edge(&a, &b), graph.has_edge(&b, &a));
    }

    #[test]
    fn add_vertex_is_idempotent(edges in arb_edges(), name in arb_name()) {
        let mut graph = graph_from(&edges);
        let first = graph.add_vertex(&name);
        let count = graph.vertex_count();
        let second = graph.add_vertex(&name);
        prop_assert_eq!(first, second);
        prop_assert_eq!(count, graph.vertex_count());
    }

    #[test]
    fn edge_count_matches_adjacency(edges in arb_edges()) {
        let graph = graph_from(&edges);
        let mut loops = 0;
        let mut degree_sum = 0;
        for v in graph.vertices() {
            for w in graph.adjacent_to(v.name()) {
                degree_sum += 1;
                if w.name() == v.name() {
                    loops += 1;
                }
            }
        }
        // a self loop shows up once in its own adjacency set
        prop_assert_eq!(degree_sum + loops, 2 * graph.edge_count());
    }

    #[test]
    fn predecessor_is_one_hop_closer(edges in arb_edges(), source in arb_name()) {
        let mut graph = graph_from(&edges);
        bfs::traverse(&mut graph, &source);
        if let Some(s) = graph.get_vertex(&source) {
            prop_assert_eq!(s.distance(), Some(0));
            prop_assert_eq!(s.predecessor(), None);
        }
        for v in graph.vertices() {
            match (v.distance(), v.predecessor()) {
                (Some(0), None) => {
                    prop_assert_eq!(v.name(), source.as_str());
                }
                (Some(d), Some(p)) => {
                    let pred = graph.vertex(p).unwrap();
                    prop_assert_eq!(pred.distance(), Some(d - 1));
                    prop_assert!(graph.has_edge(v.name(), pred.name()));
                }
                (None, None) => {}
                other => {
                    prop_assert!(false, "inconsistent annotation {:?}", other);
                }
            }
        }
    }

    #[test]
    fn traversal_is_idempotent(edges in arb_edges(), source in arb_name()) {
        let mut graph = graph_from(&edges);
        bfs::traverse(&mut graph, &source);
        let first = graph.clone();
        bfs::traverse(&mut graph, &source);
        prop_assert_eq!(first, graph);
    }

    #[test]
    fn frequencies_cover_every_entity(credits in arb_credits(), pick in 0usize..100) {
        let registry = registry_from(&credits);
        for scheme in Scheme::ALL {
            let mut graph = scheme.build(&registry);
            let names: Vec<String> = graph.vertices().map(|v| v.name().to_string()).collect();
            if names.is_empty() {
                continue; // every cast was empty
            }
            let source = names[pick % names.len()].clone();
            bfs::traverse(&mut graph, &source);

            let table = frequency_of(&graph, &registry, scheme);
            let expected = match scheme {
                Scheme::MovieMovie => registry.movie_count(),
                Scheme::ActorActor | Scheme::ActorMovie => registry.actor_count(),
            };
            let finite = table.total(0, UNREACHABLE - 1);
            prop_assert_eq!(finite + table.count(UNREACHABLE), expected);
        }
    }

    #[test]
    fn actor_movie_halves_actor_actor(credits in arb_credits(), pick in 0usize..100) {
        let registry = registry_from(&credits);
        let actors: Vec<String> = registry.actors().map(|a| a.name.clone()).collect();
        prop_assume!(!actors.is_empty());
        prop_assume!(registry.ambiguous_names().is_empty());
        let source = &actors[pick % actors.len()];

        let mut bipartite = Scheme::ActorMovie.build(&registry);
        let mut direct = Scheme::ActorActor.build(&registry);
        bfs::traverse(&mut bipartite, source);
        bfs::traverse(&mut direct, source);
        prop_assert_eq!(
            frequency_of(&bipartite, &registry, Scheme::ActorMovie),
            frequency_of(&direct, &registry, Scheme::ActorActor)
        );
    }
}
