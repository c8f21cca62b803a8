//! Predicates: single conditions over one stored attribute.
//!
//! A [`Predicate`] is a neutral, serializable node (attribute, operator,
//! literals). Matchers produce them; storage adapters interpret them. The
//! [`Predicate::matches`] evaluation here is the reference semantics used by the
//! in-memory adapter and by tests.

use serde::{Deserialize, Serialize};

use crate::store::Record;
use crate::value::Value;

/// Comparison operator for a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Exact equality (ids, enum codes).
    Equals,
    /// Lower-cased equality on text.
    EqualsIgnoreCase,
    /// Lower-cased substring match on text, anywhere in the value.
    ContainsIgnoreCase,
    /// Equality with any of the listed values.
    In,
}

/// A condition on one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    /// The storage attribute (schema column) this condition reads
    pub attribute: String,
    pub op: Operator,
    pub values: Vec<Value>,
}

impl Predicate {
    pub fn new(attribute: impl Into<String>, op: Operator, values: Vec<Value>) -> Self {
        Self {
            attribute: attribute.into(),
            op,
            values,
        }
    }

    pub fn equals(attribute: impl Into<String>, value: Value) -> Self {
        Self::new(attribute, Operator::Equals, vec![value])
    }

    pub fn equals_ignore_case(attribute: impl Into<String>, text: &str) -> Self {
        Self::new(
            attribute,
            Operator::EqualsIgnoreCase,
            vec![Value::Text(text.to_lowercase())],
        )
    }

    pub fn contains_ignore_case(attribute: impl Into<String>, text: &str) -> Self {
        Self::new(
            attribute,
            Operator::ContainsIgnoreCase,
            vec![Value::Text(text.to_lowercase())],
        )
    }

    pub fn is_in(attribute: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(attribute, Operator::In, values)
    }

    /// Check whether a stored record satisfies this predicate.
    ///
    /// A record without the attribute never matches. Text operators never
    /// match non-text values.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        let Some(stored) = record.attr(&self.attribute) else {
            return false;
        };

        match self.op {
            Operator::Equals => self.values.first() == Some(&stored),
            Operator::In => self.values.contains(&stored),
            Operator::EqualsIgnoreCase => self.text_matches(&stored, |s, needle| s == needle),
            Operator::ContainsIgnoreCase => {
                self.text_matches(&stored, |s, needle| s.contains(needle))
            }
        }
    }

    fn text_matches(&self, stored: &Value, cmp: impl Fn(&str, &str) -> bool) -> bool {
        let Some(stored) = stored.as_text() else {
            return false;
        };
        let Some(needle) = self.values.first().and_then(Value::as_text) else {
            return false;
        };
        cmp(&stored.to_lowercase(), &needle.to_lowercase())
    }
}
