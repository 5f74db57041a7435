//! Actors and movies keyed by name, with symmetric membership links.

use std::collections::{BTreeSet, HashMap};

pub type ActorId = usize;
pub type MovieId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    movies: BTreeSet<MovieId>,
}

impl Actor {
    pub fn movies(&self) -> impl Iterator<Item = MovieId> + '_ {
        self.movies.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    cast: BTreeSet<ActorId>,
}

impl Movie {
    pub fn cast(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.cast.iter().copied()
    }

    pub fn cast_size(&self) -> usize {
        self.cast.len()
    }

    pub fn has_member(&self, actor: ActorId) -> bool {
        self.cast.contains(&actor)
    }
}

/// Entities are created on first reference and never removed.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_index: HashMap<String, ActorId>,
    movie_index: HashMap<String, MovieId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.actor_index.get(name) {
            return id;
        }
        let id = self.actors.len();
        self.actors.push(Actor { name: name.to_string(), movies: BTreeSet::new() });
        self.actor_index.insert(name.to_string(), id);
        id
    }

    pub fn add_movie(&mut self, name: &str) -> MovieId {
        if let Some(&id) = self.movie_index.get(name) {
            return id;
        }
        let id = self.movies.len();
        self.movies.push(Movie { name: name.to_string(), cast: BTreeSet::new() });
        self.movie_index.insert(name.to_string(), id);
        id
    }

    /// Links both sides at once so membership stays symmetric.
    pub fn link(&mut self, actor: ActorId, movie: MovieId) {
        if let (Some(a), Some(m)) = (self.actors.get_mut(actor), self.movies.get_mut(movie)) {
            a.movies.insert(movie);
            m.cast.insert(actor);
        }
    }

    /// Convenience for building a registry from one co-occurrence line.
    pub fn add_credits<S: AsRef<str>>(&mut self, movie: &str, cast: &[S]) -> MovieId {
        let movie_id = self.add_movie(movie);
        for name in cast {
            let actor_id = self.add_actor(name.as_ref());
            self.link(actor_id, movie_id);
        }
        movie_id
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn actor_named(&self, name: &str) -> Option<&Actor> {
        self.actor_index.get(name).and_then(|&id| self.actors.get(id))
    }

    pub fn movie_named(&self, name: &str) -> Option<&Movie> {
        self.movie_index.get(name).and_then(|&id| self.movies.get(id))
    }

    pub fn is_actor(&self, name: &str) -> bool {
        self.actor_index.contains_key(name)
    }

    pub fn is_movie(&self, name: &str) -> bool {
        self.movie_index.contains_key(name)
    }

    /// Actors in first-seen order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Movies in first-seen order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Every other actor that shared a movie with `name`, paired with the first such movie.
    pub fn co_stars(&self, name: &str) -> Vec<(&str, &str)> {
        let Some(&me) = self.actor_index.get(name) else {
            return Vec::new();
        };
        let mut seen: HashMap<ActorId, MovieId> = HashMap::new();
        let mut order = Vec::new();
        for movie_id in self.actors[me].movies() {
            for other in self.movies[movie_id].cast() {
                if other != me && !seen.contains_key(&other) {
                    seen.insert(other, movie_id);
                    order.push(other);
                }
            }
        }
        order
            .into_iter()
            .map(|a| (self.actors[a].name.as_str(), self.movies[seen[&a]].name.as_str()))
            .collect()
    }

    /// Names registered both as an actor and as a movie; these collapse into one vertex in
    /// the actor-movie graph.
    pub fn ambiguous_names(&self) -> Vec<&str> {
        self.actors
            .iter()
            .filter(|a| self.movie_index.contains_key(&a.name))
            .map(|a| a.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry.add_credits("Movie1", &["A", "B", "C"]);
        registry.add_credits("Movie2", &["C", "D"]);
        registry
    }

    #[test]
    fn test_membership_is_symmetric() {
        let registry = sample();
        for movie_id in 0..registry.movie_count() {
            let movie = registry.movie(movie_id).unwrap();
            for actor_id in movie.cast() {
                let actor = registry.actor(actor_id).unwrap();
                assert!(actor.movies().any(|m| m == movie_id));
            }
        }
        assert_eq!(registry.actor_named("C").unwrap().movies().count(), 2); // C is in both movies
    }

    #[test]
    fn test_repeated_names_reuse_entities() {
        let mut registry = sample();
        registry.add_credits("Movie1", &["A", "E"]);
        assert_eq!(registry.movie_count(), 2);
        assert_eq!(registry.actor_count(), 5);
        assert_eq!(registry.movie_named("Movie1").unwrap().cast_size(), 4);
    }

    #[test]
    fn test_co_stars() {
        let registry = sample();
        let co_stars = registry.co_stars("C");
        assert_eq!(co_stars, vec![("A", "Movie1"), ("B", "Movie1"), ("D", "Movie2")]);
        assert!(registry.co_stars("nobody").is_empty());
    }

    #[test]
    fn test_ambiguous_names() {
        let mut registry = sample();
        registry.add_credits("Heat", &["Heat"]);
        assert_eq!(registry.ambiguous_names(), vec!["Heat"]);
    }
}
