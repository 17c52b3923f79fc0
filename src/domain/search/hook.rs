use crate::domain::errors::DomainResult;
use crate::domain::search::builder::build_segments;
use crate::domain::search::entity::{SearchFields, SearchSlugModel};
use crate::domain::search::schema::SearchSlugSchema;
use crate::domain::search::value_objects::SearchSlug;

pub const DEFAULT_MAX_SLUG_LENGTH: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSlugPolicy {
    /// Used when the schema does not declare its own limit.
    pub max_length: usize,
    /// Drop a stale truncation warning when a recompute fits.
    pub clear_warning_on_recompute: bool,
}

impl Default for SearchSlugPolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_SLUG_LENGTH,
            clear_warning_on_recompute: false,
        }
    }
}

/// Result of one slug computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedSlug {
    pub slug: SearchSlug,
    pub warning: Option<String>,
}

impl ComputedSlug {
    pub fn truncated(&self) -> bool {
        self.warning.is_some()
    }
}

/// Pre-save hook: computes the slug for a record and applies the length policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchSlugHook {
    policy: SearchSlugPolicy,
}

impl SearchSlugHook {
    pub fn new(policy: SearchSlugPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SearchSlugPolicy {
        self.policy
    }

    pub fn compute(
        &self,
        schema: &SearchSlugSchema,
        object: &dyn SearchFields,
    ) -> DomainResult<ComputedSlug> {
        let mut slug = build_segments(object, schema.segments())?;
        let max_length = schema.max_length().unwrap_or(self.policy.max_length);
        let natural_length = slug.char_len();
        if natural_length <= max_length {
            return Ok(ComputedSlug {
                slug,
                warning: None,
            });
        }

        slug.truncate_chars(max_length);
        tracing::warn!(
            model = schema.model(),
            natural_length,
            max_length,
            "search slug truncated"
        );
        Ok(ComputedSlug {
            slug,
            warning: Some(format!(
                "search slug for model {} is {natural_length} characters, \
                 truncated to {max_length}",
                schema.model()
            )),
        })
    }

    /// Assigns the computed slug to `record`. The truncation warning is set
    /// on overflow; otherwise an existing warning is kept unless the policy
    /// clears it. Nothing is written to storage.
    pub fn apply<M: SearchSlugModel>(
        &self,
        schema: &SearchSlugSchema,
        record: &mut M,
    ) -> DomainResult<ComputedSlug> {
        let computed = self.compute(schema, &*record)?;
        let state = record.search_slug_state_mut();
        state.slug = Some(computed.slug.to_string());
        match &computed.warning {
            Some(warning) => state.warning = Some(warning.clone()),
            None if self.policy.clear_warning_on_recompute => state.clear_warning(),
            None => {}
        }
        Ok(computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::entity::StoredRecord;

    fn schema() -> SearchSlugSchema {
        SearchSlugSchema::builder("note")
            .field("title")
            .tag("note")
            .build()
            .unwrap()
    }

    fn record(title: &str) -> StoredRecord {
        StoredRecord::new("note").with_value("title", title)
    }

    #[test]
    fn appends_tags_after_fields() {
        let hook = SearchSlugHook::default();
        let mut rec = record("Hello There");
        let computed = hook.apply(&schema(), &mut rec).unwrap();
        assert_eq!(computed.slug.as_str(), "hello-there|note");
        assert_eq!(rec.slug(), Some("hello-there|note"));
        assert!(rec.search_slug_warning().is_none());
    }

    #[test]
    fn slug_at_limit_is_not_truncated() {
        let hook = SearchSlugHook::default();
        // 245 + "|note" == 250
        let mut rec = record(&"x".repeat(245));
        let computed = hook.apply(&schema(), &mut rec).unwrap();
        assert_eq!(computed.slug.char_len(), DEFAULT_MAX_SLUG_LENGTH);
        assert!(!computed.truncated());
        assert!(rec.search_slug_warning().is_none());
    }

    #[test]
    fn slug_over_limit_is_truncated_with_warning() {
        let hook = SearchSlugHook::default();
        let mut rec = record(&"x".repeat(246));
        let computed = hook.apply(&schema(), &mut rec).unwrap();
        assert!(computed.truncated());
        assert_eq!(rec.slug().map(str::len), Some(DEFAULT_MAX_SLUG_LENGTH));
        assert!(rec.search_slug_warning().is_some());
    }

    #[test]
    fn schema_limit_overrides_policy() {
        let schema = SearchSlugSchema::builder("note")
            .field("title")
            .max_length(5)
            .build()
            .unwrap();
        let computed = SearchSlugHook::default()
            .compute(&schema, &record("abcdefgh"))
            .unwrap();
        assert_eq!(computed.slug.as_str(), "abcde");
        assert!(computed.truncated());
    }

    #[test]
    fn warning_is_sticky_by_default() {
        let hook = SearchSlugHook::default();
        let mut rec = record(&"x".repeat(300));
        hook.apply(&schema(), &mut rec).unwrap();
        assert!(rec.search_slug_warning().is_some());

        rec.set_value("title", "short");
        hook.apply(&schema(), &mut rec).unwrap();
        assert_eq!(rec.slug(), Some("short|note"));
        assert!(rec.search_slug_warning().is_some());
    }

    #[test]
    fn warning_is_cleared_when_policy_says_so() {
        let hook = SearchSlugHook::new(SearchSlugPolicy {
            clear_warning_on_recompute: true,
            ..SearchSlugPolicy::default()
        });
        let mut rec = record(&"x".repeat(300));
        hook.apply(&schema(), &mut rec).unwrap();
        assert!(rec.search_slug_warning().is_some());

        rec.set_value("title", "short");
        hook.apply(&schema(), &mut rec).unwrap();
        assert!(rec.search_slug_warning().is_none());
    }

    #[test]
    fn failed_lookup_leaves_record_untouched() {
        let hook = SearchSlugHook::default();
        // stored records have no relations to follow
        let schema = SearchSlugSchema::builder("note")
            .fields(["title", "owner.name"])
            .build()
            .unwrap();
        let mut rec = record("Budget");
        rec.search.slug = Some("previous".into());
        assert!(hook.apply(&schema, &mut rec).is_err());
        assert_eq!(rec.slug(), Some("previous"));
    }

    #[test]
    fn absent_value_is_an_empty_segment() {
        let schema = SearchSlugSchema::builder("note")
            .fields(["title", "author"])
            .tag("note")
            .build()
            .unwrap();
        let mut rec = record("Budget");
        SearchSlugHook::default().apply(&schema, &mut rec).unwrap();
        assert_eq!(rec.slug(), Some("budget||note"));
    }
}
