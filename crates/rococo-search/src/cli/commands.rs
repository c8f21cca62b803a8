//! # CLI Layer
//!
//! The **only** place that knows about terminal I/O:
//!
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Context Setup**: logging, layered config, entity catalog
//! 3. **Dispatch**: one search path, generic over entity type
//! 4. **Output**: JSON on stdout, logs on stderr

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rococo_specs::entities::{Artist, ImageMetadata, Museum, Painting};
use rococo_specs::store::memory::MemRepository;
use rococo_specs::{Catalog, EntitySpecs, QueryExecutor, Record, SpecsConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::render;
use super::setup::{artist_filter, image_filter, museum_filter, painting_filter, Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let config = SpecsConfig::load(Some(&config_dir)).context("failed to load configuration")?;
    // Misconfigured bindings stop the process here, before any search runs.
    let catalog = Catalog::new(&config).context("entity composers failed to build")?;

    let data = cli.command.data().data.as_deref();
    let explain = cli.explain;

    match &cli.command {
        Commands::Artists { query, .. } => {
            search::<Artist, _, _>(&catalog.artists, &artist_filter(query), data, explain)
        }
        Commands::Museums {
            query,
            country_id,
            city,
            ..
        } => search::<Museum, _, _>(
            &catalog.museums,
            &museum_filter(query, *country_id, city),
            data,
            explain,
        ),
        Commands::Paintings {
            query,
            artist_id,
            museum_id,
            ..
        } => search::<Painting, _, _>(
            &catalog.paintings,
            &painting_filter(query, *artist_id, *museum_id),
            data,
            explain,
        ),
        Commands::Images {
            entity_type,
            entity_ids,
            ..
        } => search::<ImageMetadata, _, _>(
            &catalog.images,
            &image_filter(*entity_type, entity_ids),
            data,
            explain,
        ),
    }
}

fn search<E, F, S>(specs: &S, filter: &F, data: Option<&Path>, explain: bool) -> Result<()>
where
    E: Record + Clone + Serialize + DeserializeOwned,
    S: EntitySpecs<F>,
{
    let spec = specs.find_by_criteria(filter);
    if explain {
        return render::print_json(&spec);
    }

    let Some(path) = data else {
        bail!("--data <FILE> is required unless --explain is given");
    };
    let repository: MemRepository<E> = MemRepository::load_json(path)
        .with_context(|| format!("failed to load records from {}", path.display()))?;

    let found = repository.find_all(&spec)?;
    info!(
        scanned = repository.len(),
        matched = found.len(),
        "search complete"
    );
    render::print_json(&found)
}

fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
