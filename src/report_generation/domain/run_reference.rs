use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::shared::error::ReportError;
use crate::shared::Result;

/// A run locator parsed from a Pollination app URL.
///
/// The canonical form is
/// `https://app.pollination.cloud/projects/<owner>/<project>/jobs/<job-id>/runs/<run-id>`.
/// The locator identifies the run to fetch; recipe information is only
/// known after the run metadata has been resolved through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLocator {
    pub owner: String,
    pub project: String,
    pub job_id: Uuid,
    pub run_id: Uuid,
}

impl RunLocator {
    /// Parses a run URL into its path segments.
    ///
    /// # Errors
    /// Returns `ReportError::InvalidRunUrl` when the URL cannot be parsed
    /// or does not follow the projects/jobs/runs layout.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| ReportError::InvalidRunUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        // projects/<owner>/<project>/jobs/<job-id>/runs/<run-id>
        match segments.as_slice() {
            ["projects", owner, project, "jobs", job, "runs", run] => {
                let job_id = Uuid::parse_str(job)
                    .map_err(|e| invalid(&format!("job id is not a UUID: {}", e)))?;
                let run_id = Uuid::parse_str(run)
                    .map_err(|e| invalid(&format!("run id is not a UUID: {}", e)))?;
                Ok(Self {
                    owner: (*owner).to_string(),
                    project: (*project).to_string(),
                    job_id,
                    run_id,
                })
            }
            _ => Err(invalid("URL path does not match projects/<owner>/<project>/jobs/<job-id>/runs/<run-id>").into()),
        }
    }
}

impl std::fmt::Display for RunLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} job {} run {}",
            self.owner, self.project, self.job_id, self.run_id
        )
    }
}

/// The recipe that produced a run: `owner/name` identity plus a dotted
/// version tag such as "0.3.1".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIdentity {
    pub owner: String,
    pub name: String,
    pub tag: String,
}

impl RecipeIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// The `owner/name` identity, without the version tag.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RecipeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}:{}", self.owner, self.name, self.tag)
    }
}

/// Metadata for a remote simulation run as returned by the query service.
/// Immutable once obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReference {
    pub locator: RunLocator,
    pub recipe: RecipeIdentity,
}

impl RunReference {
    pub fn new(locator: RunLocator, recipe: RecipeIdentity) -> Self {
        Self { locator, recipe }
    }

    pub fn job_id(&self) -> Uuid {
        self.locator.job_id
    }

    pub fn run_id(&self) -> Uuid {
        self.locator.run_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_URL: &str = "https://app.pollination.cloud/projects/chriswmackey/demo/jobs/0cd8f29b-71e1-44be-9ce2-7d4c6e4e5d13/runs/ec6bbd7e-1579-550c-9e89-2ba424cd2d04";

    #[test]
    fn test_parse_valid_run_url() {
        let locator = RunLocator::parse(RUN_URL).unwrap();
        assert_eq!(locator.owner, "chriswmackey");
        assert_eq!(locator.project, "demo");
        assert_eq!(
            locator.job_id.to_string(),
            "0cd8f29b-71e1-44be-9ce2-7d4c6e4e5d13"
        );
        assert_eq!(
            locator.run_id.to_string(),
            "ec6bbd7e-1579-550c-9e89-2ba424cd2d04"
        );
    }

    #[test]
    fn test_parse_trailing_slash() {
        let locator = RunLocator::parse(&format!("{}/", RUN_URL)).unwrap();
        assert_eq!(locator.project, "demo");
    }

    #[test]
    fn test_parse_rejects_non_url() {
        let result = RunLocator::parse("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_short_path() {
        let result = RunLocator::parse("https://app.pollination.cloud/projects/owner/demo");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Not a valid Pollination run URL"));
    }

    #[test]
    fn test_parse_rejects_bad_uuid() {
        let result = RunLocator::parse(
            "https://app.pollination.cloud/projects/o/p/jobs/not-a-uuid/runs/ec6bbd7e-1579-550c-9e89-2ba424cd2d04",
        );
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("job id is not a UUID"));
    }

    #[test]
    fn test_recipe_identity_full_name() {
        let recipe = RecipeIdentity::new("pollination", "leed-daylight-illuminance", "0.3.1");
        assert_eq!(recipe.full_name(), "pollination/leed-daylight-illuminance");
        assert_eq!(
            format!("{}", recipe),
            "pollination/leed-daylight-illuminance:0.3.1"
        );
    }

    #[test]
    fn test_same_url_parses_to_equal_locators() {
        let a = RunLocator::parse(RUN_URL).unwrap();
        let b = RunLocator::parse(RUN_URL).unwrap();
        assert_eq!(a, b);
    }
}
