//! # Query Execution
//!
//! The translation core stops at a [`Specification`]. Executing it belongs to a
//! storage adapter behind the [`QueryExecutor`] trait, so matcher and composer
//! code never depends on a particular query engine.
//!
//! ## Adapter Contract
//!
//! `find_all(spec)` must:
//! 1. Return only entities satisfying every predicate in `spec`.
//! 2. Apply no filtering beyond `spec`.
//! 3. Keep storage order (the core never sorts).
//! 4. Deduplicate by entity id when `spec.is_distinct()`.
//!
//! ## Implementations
//!
//! - [`memory::MemRepository`]: In-memory reference adapter, also used by the CLI
//!   over JSON fixtures.

use uuid::Uuid;

use crate::error::Result;
use crate::specification::Specification;
use crate::value::Value;

pub mod memory;

/// A stored entity as seen by predicates.
pub trait Record {
    /// Entity identity, used for distinctness.
    fn id(&self) -> Uuid;

    /// Read a storage attribute by column name.
    /// Returns `None` for unknown columns and for unset optional attributes.
    fn attr(&self, column: &str) -> Option<Value>;
}

/// Abstract interface for executing a composed specification.
pub trait QueryExecutor<E> {
    fn find_all(&self, spec: &Specification) -> Result<Vec<E>>;
}
