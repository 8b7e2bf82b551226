use crate::report_generation::domain::DisplayMode;

/// FetchRequest - Internal request DTO for the bundle fetch use case
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// The Pollination run URL to fetch results for
    pub run_url: String,
    /// Display mode for the merged visualization
    pub display_mode: DisplayMode,
    /// Ignore any cached bundle and fetch everything again
    pub refresh: bool,
}

impl FetchRequest {
    pub fn new(run_url: impl Into<String>, display_mode: DisplayMode, refresh: bool) -> Self {
        Self {
            run_url: run_url.into(),
            display_mode,
            refresh,
        }
    }
}
