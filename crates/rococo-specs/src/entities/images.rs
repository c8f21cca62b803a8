use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::SpecComposer;
use crate::config::SpecsConfig;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::schema::{Attribute, Schema};
use crate::store::Record;
use crate::value::{Criterion, Value};

/// Kind of entity an image belongs to.
///
/// Stored and compared by its canonical upper-case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Artist,
    Museum,
    Painting,
    User,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Artist,
        EntityType::Museum,
        EntityType::Painting,
        EntityType::User,
    ];

    pub fn code(self) -> &'static str {
        match self {
            EntityType::Artist => "ARTIST",
            EntityType::Museum => "MUSEUM",
            EntityType::Painting => "PAINTING",
            EntityType::User => "USER",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityType(pub String);

impl fmt::Display for UnknownEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity type '{}'", self.0)
    }
}

impl std::error::Error for UnknownEntityType {}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    /// Codes are canonical: `PAINTING` parses, `painting` does not.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownEntityType(s.to_string()))
    }
}

const IMAGE_ATTRIBUTES: &[Attribute] = &[
    Attribute::id("id", "id"),
    Attribute::enumeration("entityType", "entity_type"),
    Attribute::id("entityId", "entity_id"),
    Attribute::text("format", "format"),
];

pub static IMAGE_SCHEMA: Schema = Schema::new("image", IMAGE_ATTRIBUTES);

/// Image metadata search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFilter {
    pub entity_type: Option<EntityType>,
    pub entity_ids: Option<Vec<Uuid>>,
    /// Whether the caller wants thumbnails rather than full content.
    /// Selects the payload to load; never constrains which rows match.
    #[serde(default)]
    pub is_thumbnails: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub format: String,
    #[serde(default)]
    pub content_hash: Option<String>,
}

impl Record for ImageMetadata {
    fn id(&self) -> Uuid {
        self.id
    }

    fn attr(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::Id(self.id)),
            "entity_type" => Some(Value::enumeration(self.entity_type.code())),
            "entity_id" => Some(Value::Id(self.entity_id)),
            "format" => Some(Value::text(self.format.as_str())),
            _ => None,
        }
    }
}

fn entity_type(filter: &ImageFilter) -> Criterion<'_> {
    Criterion::code(filter.entity_type.map(EntityType::code))
}

fn entity_ids(filter: &ImageFilter) -> Criterion<'_> {
    Criterion::ids(&filter.entity_ids)
}

pub fn specs(config: &SpecsConfig) -> Result<SpecComposer<ImageFilter>> {
    SpecComposer::builder(&IMAGE_SCHEMA)
        .bind(Matcher::EqualEnum, "entityType", entity_type)
        .bind(Matcher::InIdSet, "entityId", entity_ids)
        .distinct(config.distinct())
        .build()
}
