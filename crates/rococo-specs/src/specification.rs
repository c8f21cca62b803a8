//! Composed specifications.

use serde::{Deserialize, Serialize};

use crate::predicate::{Operator, Predicate};
use crate::store::Record;

/// The AND of zero or more predicates, plus a distinctness request.
///
/// A specification without predicates is the identity filter: it matches
/// every stored entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    predicates: Vec<Predicate>,
    distinct: bool,
}

impl Specification {
    /// The identity filter.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_predicates(predicates: Vec<Predicate>) -> Self {
        Self {
            predicates,
            distinct: false,
        }
    }

    /// AND another predicate onto this specification.
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Request (or stop requesting) deduplication by entity id.
    pub fn with_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn is_identity(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True if any predicate is a membership test.
    pub fn has_membership(&self) -> bool {
        self.predicates.iter().any(|p| p.op == Operator::In)
    }

    /// Check whether a record satisfies every predicate.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}
