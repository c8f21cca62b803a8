//! Value matchers.
//!
//! Each [`Matcher`] turns one filter field into zero or one [`Predicate`].
//! Matchers are total: absent, blank and empty inputs are "no constraint"
//! signals and simply yield `None`.
//!
//! | Matcher | Accepts | Produces |
//! |---------|---------|----------|
//! | `PartialText` | text | case-insensitive contains |
//! | `EqualText` | text | case-insensitive equality |
//! | `EqualId` | id | equality |
//! | `EqualEnum` | enum code | case-sensitive equality |
//! | `InIdSet` | id list | membership |

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::predicate::Predicate;
use crate::schema::{Attribute, AttributeKind};
use crate::value::{Criterion, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Matcher {
    PartialText,
    EqualText,
    EqualId,
    EqualEnum,
    InIdSet,
}

impl Matcher {
    /// The attribute kind this matcher can be bound to.
    pub fn target_kind(self) -> AttributeKind {
        match self {
            Matcher::PartialText | Matcher::EqualText => AttributeKind::Text,
            Matcher::EqualId | Matcher::InIdSet => AttributeKind::Id,
            Matcher::EqualEnum => AttributeKind::Enum,
        }
    }

    pub fn accepts(self, kind: AttributeKind) -> bool {
        self.target_kind() == kind
    }

    /// Evaluate one criterion against the attribute it is bound to.
    pub fn specify(self, attribute: &Attribute, criterion: Criterion<'_>) -> Option<Predicate> {
        let column = attribute.column;
        match (self, criterion) {
            (Matcher::PartialText, Criterion::Text(text)) => {
                present_text(text).map(|t| Predicate::contains_ignore_case(column, t.trim()))
            }
            (Matcher::EqualText, Criterion::Text(text)) => {
                present_text(text).map(|t| Predicate::equals_ignore_case(column, t))
            }
            (Matcher::EqualId, Criterion::Id(id)) => {
                id.map(|id| Predicate::equals(column, Value::Id(id)))
            }
            (Matcher::EqualEnum, Criterion::Enum(code)) => {
                present_text(code).map(|c| Predicate::equals(column, Value::enumeration(c)))
            }
            (Matcher::InIdSet, Criterion::Ids(ids)) => {
                let unique: BTreeSet<_> = ids?.iter().copied().collect();
                if unique.is_empty() {
                    return None;
                }
                Some(Predicate::is_in(
                    column,
                    unique.into_iter().map(Value::Id).collect(),
                ))
            }
            (matcher, criterion) => {
                debug!(
                    ?matcher,
                    ?criterion,
                    field = attribute.field,
                    "criterion shape does not fit matcher, ignoring"
                );
                None
            }
        }
    }
}

/// Present and not whitespace-only.
fn present_text(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Operator;
    use uuid::Uuid;

    const TITLE: Attribute = Attribute::text("title", "title");
    const COUNTRY: Attribute = Attribute::id("countryId", "country_id");
    const KIND: Attribute = Attribute::enumeration("entityType", "entity_type");

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn partial_text_trims_and_lowercases() {
        let q = text("  Rem ");
        let pred = Matcher::PartialText
            .specify(&TITLE, Criterion::text(&q))
            .unwrap();

        assert_eq!(pred.attribute, "title");
        assert_eq!(pred.op, Operator::ContainsIgnoreCase);
        assert_eq!(pred.values, vec![Value::text("rem")]);
    }

    #[test]
    fn partial_text_blank_is_absent() {
        for q in [None, text(""), text("   "), text("\t\n")] {
            assert!(
                Matcher::PartialText
                    .specify(&TITLE, Criterion::text(&q))
                    .is_none(),
                "{q:?} should not constrain"
            );
        }
    }

    #[test]
    fn equal_text_is_case_insensitive_equality() {
        let q = text("Louvre");
        let pred = Matcher::EqualText
            .specify(&TITLE, Criterion::text(&q))
            .unwrap();

        assert_eq!(pred.op, Operator::EqualsIgnoreCase);
        assert_eq!(pred.values, vec![Value::text("louvre")]);
    }

    #[test]
    fn equal_text_blank_is_absent() {
        for q in [None, text(""), text("  ")] {
            assert!(Matcher::EqualText
                .specify(&TITLE, Criterion::text(&q))
                .is_none());
        }
    }

    #[test]
    fn equal_id_uses_column() {
        let id = Uuid::new_v4();
        let pred = Matcher::EqualId
            .specify(&COUNTRY, Criterion::id(Some(id)))
            .unwrap();

        assert_eq!(pred, Predicate::equals("country_id", Value::Id(id)));
        assert!(Matcher::EqualId
            .specify(&COUNTRY, Criterion::id(None))
            .is_none());
    }

    #[test]
    fn nil_id_is_still_a_constraint() {
        let pred = Matcher::EqualId.specify(&COUNTRY, Criterion::id(Some(Uuid::nil())));
        assert!(pred.is_some());
    }

    #[test]
    fn equal_enum_keeps_case() {
        let pred = Matcher::EqualEnum
            .specify(&KIND, Criterion::code(Some("Painting")))
            .unwrap();

        assert_eq!(pred.op, Operator::Equals);
        assert_eq!(pred.values, vec![Value::enumeration("Painting")]);
    }

    #[test]
    fn equal_enum_blank_is_absent() {
        assert!(Matcher::EqualEnum
            .specify(&KIND, Criterion::code(None))
            .is_none());
        assert!(Matcher::EqualEnum
            .specify(&KIND, Criterion::code(Some(" ")))
            .is_none());
    }

    #[test]
    fn in_id_set_collapses_duplicates() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let ids = Some(vec![a, b, a]);

        let pred = Matcher::InIdSet
            .specify(&COUNTRY, Criterion::ids(&ids))
            .unwrap();

        assert_eq!(pred.op, Operator::In);
        assert_eq!(pred.values.len(), 2);
        assert!(pred.values.contains(&Value::Id(a)));
        assert!(pred.values.contains(&Value::Id(b)));
    }

    #[test]
    fn in_id_set_ignores_input_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let forward = Matcher::InIdSet.specify(&COUNTRY, Criterion::ids(&Some(vec![a, b])));
        let backward = Matcher::InIdSet.specify(&COUNTRY, Criterion::ids(&Some(vec![b, a])));
        assert_eq!(forward, backward);
    }

    #[test]
    fn in_id_set_empty_or_absent_is_none() {
        assert!(Matcher::InIdSet
            .specify(&COUNTRY, Criterion::ids(&Some(vec![])))
            .is_none());
        assert!(Matcher::InIdSet
            .specify(&COUNTRY, Criterion::ids(&None))
            .is_none());
    }

    #[test]
    fn mismatched_criterion_yields_none() {
        let q = text("abc");
        assert!(Matcher::EqualId
            .specify(&COUNTRY, Criterion::text(&q))
            .is_none());
        assert!(Matcher::PartialText
            .specify(&TITLE, Criterion::id(Some(Uuid::new_v4())))
            .is_none());
    }

    #[test]
    fn target_kinds() {
        assert!(Matcher::PartialText.accepts(AttributeKind::Text));
        assert!(Matcher::EqualText.accepts(AttributeKind::Text));
        assert!(Matcher::EqualId.accepts(AttributeKind::Id));
        assert!(Matcher::InIdSet.accepts(AttributeKind::Id));
        assert!(Matcher::EqualEnum.accepts(AttributeKind::Enum));
        assert!(!Matcher::EqualEnum.accepts(AttributeKind::Text));
        assert!(!Matcher::PartialText.accepts(AttributeKind::Id));
    }
}
