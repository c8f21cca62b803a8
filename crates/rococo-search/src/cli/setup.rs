use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rococo_specs::entities::{ArtistFilter, EntityType, ImageFilter, MuseumFilter, PaintingFilter};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "rococo-search",
    bin_name = "rococo-search",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Search artists, museums, paintings and images with sparse filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the composed specification instead of searching
    #[arg(long, global = true, help_heading = "Options")]
    pub explain: bool,

    /// Directory holding rococo-specs.toml (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// JSON array of stored records to search
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search artists by name
    Artists {
        #[command(flatten)]
        data: DataArgs,

        /// Substring of the artist name
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Search museums by title, country and city
    Museums {
        #[command(flatten)]
        data: DataArgs,

        /// Substring of the museum title
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        country_id: Option<Uuid>,

        /// Substring of the city
        #[arg(long)]
        city: Option<String>,
    },

    /// Search paintings by title, artist and museum
    Paintings {
        #[command(flatten)]
        data: DataArgs,

        /// Substring of the painting title
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        artist_id: Option<Uuid>,

        #[arg(long)]
        museum_id: Option<Uuid>,
    },

    /// Search image metadata by owning entity
    Images {
        #[command(flatten)]
        data: DataArgs,

        /// Owning entity type code (ARTIST, MUSEUM, PAINTING, USER)
        #[arg(long)]
        entity_type: Option<EntityType>,

        /// Owning entity id (repeatable)
        #[arg(long = "entity-id", value_name = "ID")]
        entity_ids: Vec<Uuid>,
    },
}

impl Commands {
    pub fn data(&self) -> &DataArgs {
        match self {
            Commands::Artists { data, .. }
            | Commands::Museums { data, .. }
            | Commands::Paintings { data, .. }
            | Commands::Images { data, .. } => data,
        }
    }
}

pub fn artist_filter(query: &Option<String>) -> ArtistFilter {
    ArtistFilter {
        query: query.clone(),
    }
}

pub fn museum_filter(
    query: &Option<String>,
    country_id: Option<Uuid>,
    city: &Option<String>,
) -> MuseumFilter {
    MuseumFilter {
        query: query.clone(),
        country_id,
        city: city.clone(),
    }
}

pub fn painting_filter(
    query: &Option<String>,
    artist_id: Option<Uuid>,
    museum_id: Option<Uuid>,
) -> PaintingFilter {
    PaintingFilter {
        query: query.clone(),
        artist_id,
        museum_id,
    }
}

/// No `--entity-id` flags means no id constraint, not "match nothing".
pub fn image_filter(entity_type: Option<EntityType>, entity_ids: &[Uuid]) -> ImageFilter {
    ImageFilter {
        entity_type,
        entity_ids: (!entity_ids.is_empty()).then(|| entity_ids.to_vec()),
        is_thumbnails: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_museum_flags() {
        let id = Uuid::new_v4();
        let id_arg = id.to_string();
        let cli = Cli::parse_from([
            "rococo-search",
            "museums",
            "--query",
            "louvre",
            "--country-id",
            id_arg.as_str(),
            "--explain",
        ]);

        assert!(cli.explain);
        let Commands::Museums {
            query,
            country_id,
            city,
            data,
        } = cli.command
        else {
            panic!("expected museums");
        };
        assert_eq!(query.as_deref(), Some("louvre"));
        assert_eq!(country_id, Some(id));
        assert_eq!(city, None);
        assert_eq!(data.data, None);
    }

    #[test]
    fn parses_repeated_entity_ids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let (a_arg, b_arg) = (a.to_string(), b.to_string());
        let cli = Cli::parse_from([
            "rococo-search",
            "images",
            "--entity-type",
            "PAINTING",
            "--entity-id",
            a_arg.as_str(),
            "--entity-id",
            b_arg.as_str(),
        ]);

        let Commands::Images {
            entity_type,
            entity_ids,
            ..
        } = cli.command
        else {
            panic!("expected images");
        };
        assert_eq!(entity_type, Some(EntityType::Painting));
        assert_eq!(entity_ids, vec![a, b]);
    }

    #[test]
    fn rejects_lowercase_entity_type() {
        let result = Cli::try_parse_from(["rococo-search", "images", "--entity-type", "painting"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["rococo-search", "-vv", "artists"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn image_filter_without_ids_is_unconstrained() {
        let filter = image_filter(None, &[]);
        assert_eq!(filter.entity_ids, None);
    }
}
