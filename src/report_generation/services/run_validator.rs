use crate::report_generation::domain::RunReference;
use crate::report_generation::policies::{tag_key, MINIMUM_TAG, MINIMUM_TAG_KEY};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// The only recipe whose outputs this report understands.
pub const REQUIRED_RECIPE: &str = "pollination/leed-daylight-illuminance";

/// Confirms that a fetched run is compatible before any download work
/// proceeds. Pure validation, no side effects.
pub struct RunValidator;

impl RunValidator {
    /// Checks recipe identity first, then the minimum version.
    ///
    /// # Errors
    /// - `ReportError::WrongRecipe` when the run was produced by a
    ///   different `owner/name` than `REQUIRED_RECIPE`
    /// - `ReportError::OutdatedRecipe` when the version key is below the
    ///   supported minimum
    /// - `ReportError::InvalidRecipeTag` when the tag cannot be encoded
    pub fn validate(run: &RunReference) -> Result<()> {
        let identity = run.recipe.full_name();
        if identity != REQUIRED_RECIPE {
            return Err(ReportError::WrongRecipe {
                actual: identity,
                expected: REQUIRED_RECIPE.to_string(),
            }
            .into());
        }

        let key = tag_key(&run.recipe.tag)?;
        if key < MINIMUM_TAG_KEY {
            return Err(ReportError::OutdatedRecipe {
                tag: run.recipe.tag.clone(),
                minimum: MINIMUM_TAG.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
