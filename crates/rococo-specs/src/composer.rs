//! # Specification Composer
//!
//! A [`SpecComposer`] owns the fixed list of bindings for one entity type and
//! turns a filter value into a [`Specification`]:
//!
//! 1. For each binding, extract the filter field and run the bound matcher.
//! 2. Keep the predicates that came back.
//! 3. AND them together. No predicates means the identity filter.
//! 4. Mark the result distinct according to the [`DistinctPolicy`].
//!
//! Bindings are validated once in [`SpecComposerBuilder::build`]. A field the
//! schema does not know, or a matcher that cannot operate on the attribute's
//! kind, fails construction; `find_by_criteria` itself cannot fail.
//!
//! Composers hold only `'static` schema references and function pointers, so
//! they are `Send + Sync` and can serve concurrent requests without locking.

use tracing::{error, trace};

use crate::config::DistinctPolicy;
use crate::error::{Result, SpecsError};
use crate::matcher::Matcher;
use crate::predicate::Predicate;
use crate::schema::{Attribute, Schema};
use crate::specification::Specification;
use crate::value::Criterion;

/// Reads one field out of a filter value.
pub type Extractor<F> = for<'a> fn(&'a F) -> Criterion<'a>;

/// Anything that can turn a filter value into a specification.
pub trait EntitySpecs<F> {
    fn find_by_criteria(&self, filter: &F) -> Specification;
}

struct Binding<F> {
    matcher: Matcher,
    attribute: &'static Attribute,
    extract: Extractor<F>,
}

pub struct SpecComposer<F> {
    schema: &'static Schema,
    bindings: Vec<Binding<F>>,
    distinct: DistinctPolicy,
}

impl<F> SpecComposer<F> {
    pub fn builder(schema: &'static Schema) -> SpecComposerBuilder<F> {
        SpecComposerBuilder {
            schema,
            pending: Vec::new(),
            distinct: DistinctPolicy::default(),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.schema.entity
    }

    /// Bound fields in evaluation order.
    pub fn bound_fields(&self) -> impl Iterator<Item = (Matcher, &'static str)> + '_ {
        self.bindings
            .iter()
            .map(|binding| (binding.matcher, binding.attribute.field))
    }

    pub fn find_by_criteria(&self, filter: &F) -> Specification {
        let predicates: Vec<Predicate> = self
            .bindings
            .iter()
            .filter_map(|binding| {
                binding
                    .matcher
                    .specify(binding.attribute, (binding.extract)(filter))
            })
            .collect();

        let spec = Specification::from_predicates(predicates);
        let distinct = self.distinct.requires_distinct(&spec);
        trace!(
            entity = self.schema.entity,
            predicates = spec.predicates().len(),
            distinct,
            "composed specification"
        );
        spec.with_distinct(distinct)
    }
}

impl<F> EntitySpecs<F> for SpecComposer<F> {
    fn find_by_criteria(&self, filter: &F) -> Specification {
        SpecComposer::find_by_criteria(self, filter)
    }
}

/// Collects bindings for a [`SpecComposer`] and validates them against the schema.
pub struct SpecComposerBuilder<F> {
    schema: &'static Schema,
    pending: Vec<(Matcher, &'static str, Extractor<F>)>,
    distinct: DistinctPolicy,
}

impl<F> SpecComposerBuilder<F> {
    /// Bind `matcher` to the schema field `field`, reading its criterion with `extract`.
    /// Bindings are evaluated in the order they are added.
    pub fn bind(mut self, matcher: Matcher, field: &'static str, extract: Extractor<F>) -> Self {
        self.pending.push((matcher, field, extract));
        self
    }

    pub fn distinct(mut self, policy: DistinctPolicy) -> Self {
        self.distinct = policy;
        self
    }

    pub fn build(self) -> Result<SpecComposer<F>> {
        let entity = self.schema.entity;
        let mut bindings = Vec::with_capacity(self.pending.len());

        for (matcher, field, extract) in self.pending {
            let Some(attribute) = self.schema.resolve(field) else {
                error!(entity, field, "binding references unknown field");
                return Err(SpecsError::configuration(
                    entity,
                    field,
                    format!(
                        "no such field (known: {})",
                        self.schema.fields().collect::<Vec<_>>().join(", ")
                    ),
                ));
            };

            if !matcher.accepts(attribute.kind) {
                error!(entity, field, ?matcher, kind = ?attribute.kind, "matcher cannot serve field");
                return Err(SpecsError::configuration(
                    entity,
                    field,
                    format!(
                        "{matcher:?} needs a {:?} attribute but the field is {:?}",
                        matcher.target_kind(),
                        attribute.kind
                    ),
                ));
            }

            bindings.push(Binding {
                matcher,
                attribute,
                extract,
            });
        }

        Ok(SpecComposer {
            schema: self.schema,
            bindings,
            distinct: self.distinct,
        })
    }
}
