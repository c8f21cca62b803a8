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

const MUSEUM_ATTRIBUTES: &[Attribute] = &[
    Attribute::id("id", "id"),
    Attribute::text("title", "title"),
    Attribute::text("description", "description"),
    Attribute::id("countryId", "country_id"),
    Attribute::text("city", "city"),
];

pub static MUSEUM_SCHEMA: Schema = Schema::new("museum", MUSEUM_ATTRIBUTES);

/// Museum search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumFilter {
    /// Substring of the museum title
    pub query: Option<String>,
    pub country_id: Option<Uuid>,
    /// Substring of the city name
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Museum {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub country_id: Option<Uuid>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
}

impl Record for Museum {
    fn id(&self) -> Uuid {
        self.id
    }

    fn attr(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::Id(self.id)),
            "title" => Some(Value::text(self.title.as_str())),
            "description" => self.description.as_deref().map(Value::text),
            "country_id" => self.country_id.map(Value::Id),
            "city" => self.city.as_deref().map(Value::text),
            _ => None,
        }
    }
}

fn query(filter: &MuseumFilter) -> Criterion<'_> {
    Criterion::text(&filter.query)
}

fn country(filter: &MuseumFilter) -> Criterion<'_> {
    Criterion::id(filter.country_id)
}

fn city(filter: &MuseumFilter) -> Criterion<'_> {
    Criterion::text(&filter.city)
}

pub fn specs(config: &SpecsConfig) -> Result<SpecComposer<MuseumFilter>> {
    SpecComposer::builder(&MUSEUM_SCHEMA)
        .bind(Matcher::PartialText, "title", query)
        .bind(Matcher::EqualId, "countryId", country)
        .bind(Matcher::PartialText, "city", city)
        .distinct(config.distinct())
        .build()
}
