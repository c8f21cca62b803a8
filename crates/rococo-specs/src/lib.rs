//! # rococo-specs
//!
//! Entity search endpoints accept sparse criteria: every field is optional and
//! only the fields actually present may constrain the result. This crate
//! translates such a filter value into a storage-neutral [`Specification`]:
//! the AND of zero or more [`Predicate`]s plus a distinctness request.
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────┐   ┌─────────────────┐
//! │ MuseumFilter │──▶│ SpecComposer        │──▶│ Specification   │
//! │ (all Option) │   │  binding → Matcher  │   │ AND(predicates) │
//! └──────────────┘   │  binding → Matcher  │   │ + distinct      │
//!                    └─────────────────────┘   └────────┬────────┘
//!                                                       ▼
//!                                             ┌──────────────────┐
//!                                             │ QueryExecutor    │
//!                                             │ (storage adapter)│
//!                                             └──────────────────┘
//! ```
//!
//! ## Layers
//!
//! - [`schema`]: static field → storage attribute tables, one per entity.
//! - [`matcher`]: the five matching strategies; total, never fail.
//! - [`composer`]: per-entity binding lists, validated at construction.
//! - [`entities`] + [`catalog`]: the concrete artist/museum/painting/image
//!   composers and the startup factory that builds them all.
//! - [`store`]: the execution adapter contract and an in-memory adapter.
//!
//! ## Errors
//!
//! Filter content never produces an error: absent, blank and empty values mean
//! "no constraint". The only failure in the translation path is a
//! misconfigured binding, reported by [`Catalog::new`] at startup.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = Catalog::new(&SpecsConfig::load(None)?)?;
//! let spec = catalog.museums.find_by_criteria(&MuseumFilter {
//!     query: Some("museum".into()),
//!     ..Default::default()
//! });
//! let museums = repository.find_all(&spec)?;
//! ```

pub mod catalog;
pub mod composer;
pub mod config;
pub mod entities;
pub mod error;
pub mod matcher;
pub mod predicate;
pub mod schema;
pub mod specification;
pub mod store;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod value;

pub use catalog::Catalog;
pub use composer::{EntitySpecs, SpecComposer};
pub use config::{DistinctPolicy, SpecsConfig};
pub use error::{Result, SpecsError};
pub use matcher::Matcher;
pub use predicate::{Operator, Predicate};
pub use specification::Specification;
pub use store::{QueryExecutor, Record};
pub use value::{Criterion, Value};
