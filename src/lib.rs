//! Degrees of separation over actor/movie co-occurrence data.
//!
//! Load a [`Registry`], build a [`Graph`] under one [`Scheme`], traverse it breadth-first
//! from a source, then ask a [`SeparationEngine`] for frequencies, chains and averages.

pub mod bfs;
pub mod builder;
pub mod config;
pub mod data_cleaning;
pub mod error;
pub mod frequency;
pub mod graph;
pub mod registry;
pub mod report;
pub mod separation;

pub use builder::Scheme;
pub use error::{ConfigError, FrequencyError, LoadError, SeparationError};
pub use frequency::FrequencyTable;
pub use graph::{Graph, Vertex, VertexId};
pub use registry::Registry;
pub use separation::{Chain, ChainStep, Link, SeparationEngine, SeparationSummary};
