use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::SpecComposer;
use crate::config::SpecsConfig;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::schema::{Attribute, Schema};
use crate::store::Record;
use crate::value::{Criterion, Value};

const ARTIST_ATTRIBUTES: &[Attribute] = &[
    Attribute::id("id", "id"),
    Attribute::text("name", "name"),
    Attribute::text("biography", "biography"),
];

pub static ARTIST_SCHEMA: Schema = Schema::new("artist", ARTIST_ATTRIBUTES);

/// Artist search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFilter {
    /// Substring of the artist's name
    pub query: Option<String>,
}

impl ArtistFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
}

impl Record for Artist {
    fn id(&self) -> Uuid {
        self.id
    }

    fn attr(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::Id(self.id)),
            "name" => Some(Value::text(self.name.as_str())),
            "biography" => self.biography.as_deref().map(Value::text),
            _ => None,
        }
    }
}

fn query(filter: &ArtistFilter) -> Criterion<'_> {
    Criterion::text(&filter.query)
}

pub fn specs(config: &SpecsConfig) -> Result<SpecComposer<ArtistFilter>> {
    SpecComposer::builder(&ARTIST_SCHEMA)
        .bind(Matcher::PartialText, "name", query)
        .distinct(config.distinct())
        .build()
}
