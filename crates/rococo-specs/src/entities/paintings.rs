use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::SpecComposer;
use crate::config::SpecsConfig;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::schema::{Attribute, Schema};
use crate::store::Record;
use crate::value::{Criterion, Value};

const PAINTING_ATTRIBUTES: &[Attribute] = &[
    Attribute::id("id", "id"),
    Attribute::text("title", "title"),
    Attribute::text("description", "description"),
    Attribute::id("artistId", "artist_id"),
    Attribute::id("museumId", "museum_id"),
];

pub static PAINTING_SCHEMA: Schema = Schema::new("painting", PAINTING_ATTRIBUTES);

/// Painting search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintingFilter {
    /// Substring of the painting title
    pub query: Option<String>,
    pub artist_id: Option<Uuid>,
    pub museum_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Painting {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub artist_id: Uuid,
    #[serde(default)]
    pub museum_id: Option<Uuid>,
}

impl Record for Painting {
    fn id(&self) -> Uuid {
        self.id
    }

    fn attr(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::Id(self.id)),
            "title" => Some(Value::text(self.title.as_str())),
            "description" => self.description.as_deref().map(Value::text),
            "artist_id" => Some(Value::Id(self.artist_id)),
            "museum_id" => self.museum_id.map(Value::Id),
            _ => None,
        }
    }
}

fn query(filter: &PaintingFilter) -> Criterion<'_> {
    Criterion::text(&filter.query)
}

fn artist(filter: &PaintingFilter) -> Criterion<'_> {
    Criterion::id(filter.artist_id)
}

fn museum(filter: &PaintingFilter) -> Criterion<'_> {
    Criterion::id(filter.museum_id)
}

pub fn specs(config: &SpecsConfig) -> Result<SpecComposer<PaintingFilter>> {
    SpecComposer::builder(&PAINTING_SCHEMA)
        .bind(Matcher::PartialText, "title", query)
        .bind(Matcher::EqualId, "artistId", artist)
        .bind(Matcher::EqualId, "museumId", museum)
        .distinct(config.distinct())
        .build()
}
