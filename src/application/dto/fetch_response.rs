use crate::report_generation::domain::{CreditSummary, ResultBundle, RunReference, SpaceSummary};

/// FetchResponse - Result of a completed bundle fetch
///
/// Carries the materialized bundle plus the parsed summaries so the
/// presentation layer never re-reads artifact files itself.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub run: RunReference,
    pub bundle: ResultBundle,
    pub credit_summary: CreditSummary,
    pub space_summary: SpaceSummary,
    /// True when the bundle came from the local cache without any
    /// network calls.
    pub from_cache: bool,
}

impl FetchResponse {
    pub fn new(
        run: RunReference,
        bundle: ResultBundle,
        credit_summary: CreditSummary,
        space_summary: SpaceSummary,
        from_cache: bool,
    ) -> Self {
        Self {
            run,
            bundle,
            credit_summary,
            space_summary,
            from_cache,
        }
    }
}
