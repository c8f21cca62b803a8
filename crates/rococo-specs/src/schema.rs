//! Entity schemas.
//!
//! A [`Schema`] maps the logical field names a composer binds against to the
//! storage attribute each one addresses, and records what kind of value that
//! attribute holds. Schemas are `const` tables owned by each entity module;
//! they are resolved once when composers are built and never change afterwards.

use serde::{Deserialize, Serialize};

/// The kind of value an attribute holds.
///
/// Determines which matchers may be bound to the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Free text (e.g. `title`, `city`)
    Text,

    /// Identifier of this or another entity (e.g. `countryId`)
    Id,

    /// Canonical enum code (e.g. `entityType`)
    Enum,
}

/// One addressable attribute of a stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// The logical field name used in bindings (e.g. "countryId")
    pub field: &'static str,

    /// The storage attribute the field resolves to (e.g. "country_id")
    pub column: &'static str,

    /// The kind of value stored under `column`
    pub kind: AttributeKind,
}

impl Attribute {
    pub const fn new(field: &'static str, column: &'static str, kind: AttributeKind) -> Self {
        Self {
            field,
            column,
            kind,
        }
    }

    pub const fn text(field: &'static str, column: &'static str) -> Self {
        Self::new(field, column, AttributeKind::Text)
    }

    pub const fn id(field: &'static str, column: &'static str) -> Self {
        Self::new(field, column, AttributeKind::Id)
    }

    pub const fn enumeration(field: &'static str, column: &'static str) -> Self {
        Self::new(field, column, AttributeKind::Enum)
    }
}

/// Attribute registry for a single entity type.
#[derive(Debug)]
pub struct Schema {
    /// Entity name used in diagnostics (e.g. "museum")
    pub entity: &'static str,

    pub attributes: &'static [Attribute],
}

impl Schema {
    pub const fn new(entity: &'static str, attributes: &'static [Attribute]) -> Self {
        Self { entity, attributes }
    }

    /// Look up an attribute by its logical field name.
    pub fn resolve(&self, field: &str) -> Option<&'static Attribute> {
        self.attributes.iter().find(|attr| attr.field == field)
    }

    /// All logical field names, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> {
        self.attributes.iter().map(|attr| attr.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALLERY_ATTRIBUTES: &[Attribute] = &[
        Attribute::text("title", "title"),
        Attribute::id("ownerId", "owner_id"),
        Attribute::enumeration("kind", "kind"),
    ];

    static GALLERY: Schema = Schema::new("gallery", GALLERY_ATTRIBUTES);

    #[test]
    fn resolve_known_field() {
        let attr = GALLERY.resolve("ownerId").unwrap();
        assert_eq!(attr.field, "ownerId");
        assert_eq!(attr.column, "owner_id");
        assert_eq!(attr.kind, AttributeKind::Id);
    }

    #[test]
    fn resolve_uses_field_name_not_column() {
        assert!(GALLERY.resolve("owner_id").is_none());
    }

    #[test]
    fn unknown_field_returns_none() {
        assert!(GALLERY.resolve("nonexistent").is_none());
    }

    #[test]
    fn fields_keep_declaration_order() {
        let fields: Vec<_> = GALLERY.fields().collect();
        assert_eq!(fields, vec!["title", "ownerId", "kind"]);
    }
}
