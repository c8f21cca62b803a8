//! Literal values and raw criterion inputs.
//!
//! [`Value`] is what predicates carry and what stored records expose for an
//! attribute. [`Criterion`] is the borrowed, still-unvalidated view of a single
//! filter field that a matcher turns into zero or one predicate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::AttributeKind;

/// A literal attribute value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Free text (titles, names, cities)
    Text(String),

    /// Entity identifier, compared by value
    Id(Uuid),

    /// Canonical enum code (e.g. `PAINTING`), never case-folded
    Enum(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn enumeration(code: impl Into<String>) -> Self {
        Value::Enum(code.into())
    }

    /// The attribute kind this value belongs to.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Value::Text(_) => AttributeKind::Text,
            Value::Id(_) => AttributeKind::Id,
            Value::Enum(_) => AttributeKind::Enum,
        }
    }

    /// Get the string value if this is Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the identifier if this is an Id.
    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            Value::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the code if this is an Enum.
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Value::Enum(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Uuid> for Value {
    fn from(id: Uuid) -> Self {
        Value::Id(id)
    }
}

/// One filter field as seen by a matcher.
///
/// `None` always means "no constraint". Whether a present-but-blank value also
/// means "no constraint" is decided by the matcher, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<'a> {
    Text(Option<&'a str>),
    Id(Option<Uuid>),
    Enum(Option<&'a str>),
    Ids(Option<&'a [Uuid]>),
}

impl<'a> Criterion<'a> {
    pub fn text(value: &'a Option<String>) -> Self {
        Criterion::Text(value.as_deref())
    }

    pub fn id(value: Option<Uuid>) -> Self {
        Criterion::Id(value)
    }

    pub fn ids(value: &'a Option<Vec<Uuid>>) -> Self {
        Criterion::Ids(value.as_deref())
    }

    pub fn code(value: Option<&'a str>) -> Self {
        Criterion::Enum(value)
    }

    /// True when the caller supplied nothing at all for this field.
    pub fn is_absent(&self) -> bool {
        match self {
            Criterion::Text(v) | Criterion::Enum(v) => v.is_none(),
            Criterion::Id(v) => v.is_none(),
            Criterion::Ids(v) => v.is_none(),
        }
    }
}
