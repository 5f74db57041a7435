use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use six_degrees::builder::{Scheme, DEFAULT_ACTOR, DEFAULT_MOVIE};
use six_degrees::config::Config;
use six_degrees::data_cleaning;
use six_degrees::report;
use six_degrees::{Registry, SeparationEngine};

#[derive(Parser)]
#[command(name = "six-degrees")]
#[command(about = "Degrees of separation between actors and movies")]
pub struct Cli {
    /// Co-occurrence file: one movie per line followed by its cast
    #[arg(long, short, global = true, default_value = "movies.txt")]
    pub input: PathBuf,

    /// Field delimiter (single byte, or \t)
    #[arg(long, short, global = true, default_value = "\\t")]
    pub delimiter: String,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Only log warnings
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Traverse from a source, then print chains for names read from stdin
    Play {
        #[arg(long, value_enum, default_value_t = Scheme::ActorMovie)]
        scheme: Scheme,
        #[arg(long)]
        source: Option<String>,
    },
    /// Build and traverse all three graph schemes side by side
    Compare {
        #[arg(long, default_value = DEFAULT_ACTOR)]
        actor: String,
        #[arg(long, default_value = DEFAULT_MOVIE)]
        movie: String,
    },
    /// One-shot frequency chart and separation number
    Stats {
        #[arg(long, value_enum, default_value_t = Scheme::ActorMovie)]
        scheme: Scheme,
        #[arg(long)]
        source: Option<String>,
        /// Group distances into bins of this size
        #[arg(long)]
        bin: Option<u32>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn config(&self, scheme: Scheme, source: Option<String>, bin: Option<u32>) -> Result<Config> {
        let config = Config::new(&self.input, scheme)
            .with_delimiter(&self.delimiter)?
            .with_source(source)
            .with_bin_size(bin);
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Play { scheme, source } => {
            let config = cli.config(*scheme, source.clone(), None)?;
            let mut engine = prepare(&config, load(&config)?);
            print!("{}", report::render_summary(&engine.summary(), None));
            play(&mut engine, io::stdin().lock(), io::stdout().lock())
        }
        Command::Compare { actor, movie } => {
            let config = cli.config(Scheme::ActorMovie, None, None)?;
            let registry = load(&config)?;
            for scheme in Scheme::ALL {
                let source = match scheme {
                    Scheme::MovieMovie => movie.clone(),
                    Scheme::ActorMovie | Scheme::ActorActor => actor.clone(),
                };
                let config = Config { scheme, source, ..config.clone() };
                println!("SYMBOL GRAPH IMPLEMENTATION: {scheme}\n");
                let engine = prepare(&config, registry.clone());
                print!("{}", report::render_summary(&engine.summary(), None));
                println!("------------------------------------\n");
            }
            Ok(())
        }
        Command::Stats { scheme, source, bin, json } => {
            let config = cli.config(*scheme, source.clone(), *bin)?;
            let engine = prepare(&config, load(&config)?);
            let summary = engine.summary();
            if *json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", report::render_summary(&summary, config.bin_size));
            }
            Ok(())
        }
    }
}

fn load(config: &Config) -> Result<Registry> {
    let started = Instant::now();
    let registry = data_cleaning::load_registry(&config.input, config.delimiter)
        .with_context(|| format!("reading {}", config.input.display()))?;
    info!(
        actors = registry.actor_count(),
        movies = registry.movie_count(),
        elapsed = ?started.elapsed(),
        "input loaded"
    );
    Ok(registry)
}

fn prepare(config: &Config, registry: Registry) -> SeparationEngine {
    let mut engine = SeparationEngine::new(registry, config.scheme, config.source.clone());

    let started = Instant::now();
    engine.create_graph();
    info!(scheme = %config.scheme, elapsed = ?started.elapsed(), "graph created");

    let started = Instant::now();
    engine.traverse_bfs(&config.source);
    info!(
        source = %config.source,
        vertices = engine.graph().vertex_count(),
        edges = engine.graph().edge_count(),
        elapsed = ?started.elapsed(),
        "graph traversed"
    );
    engine
}

/// Answers chain queries until `quit` or end of input.
pub fn play<R: BufRead, W: Write>(engine: &mut SeparationEngine, input: R, mut out: W) -> Result<()> {
    let label = engine.scheme().entity_label();
    let mut lines = input.lines();
    loop {
        write!(out, "Enter the destination {label} or type quit to finish: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let destination = line?;
        let destination = destination.trim();
        if destination.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        writeln!(out)?;
        match engine.chain(destination) {
            Ok(chain) => writeln!(out, "{chain}")?,
            Err(err) => writeln!(out, "{err}.\n")?,
        }
    }
}
