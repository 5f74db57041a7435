use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::registry::Registry;

/// Reads `movie<delim>actor<delim>actor...` lines from `path`.
pub fn load_registry(path: &Path, delimiter: u8) -> Result<Registry, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_registry(file, delimiter)
}

pub fn parse_registry<R: Read>(input: R, delimiter: u8) -> Result<Registry, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false) // every line is data
        .flexible(true) // cast sizes differ per movie
        .quoting(false)
        .from_reader(input);

    let mut registry = Registry::new();
    for record in reader.byte_records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if std::str::from_utf8(record.as_slice()).is_err() {
            warn!(line, "replacing invalid UTF-8 in line");
        }
        let fields: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).trim().to_string())
            .collect();
        let Some((title, cast)) = fields.split_first().filter(|(t, _)| !t.is_empty()) else {
            warn!(line, "skipping line without a movie title");
            continue;
        };
        let cast: Vec<&str> = cast
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty()) // drops stray delimiters
            .collect();
        registry.add_credits(title, &cast);
    }

    debug!(
        actors = registry.actor_count(),
        movies = registry.movie_count(),
        "registry loaded"
    );
    Ok(registry)
}
