use std::path::PathBuf;

use serde::Serialize;

use super::{CreditView, SpaceTableView};
use crate::application::dto::FetchResponse;

/// Which run the report describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunInfoView {
    pub owner: String,
    pub project: String,
    pub job_id: String,
    pub run_id: String,
    pub recipe: String,
}

/// The unified view every report formatter renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub run: RunInfoView,
    pub credit: CreditView,
    pub spaces: SpaceTableView,
    pub visualization_file: PathBuf,
    pub from_cache: bool,
}

impl ReportView {
    pub fn from_response(response: &FetchResponse) -> Self {
        let locator = &response.run.locator;
        Self {
            run: RunInfoView {
                owner: locator.owner.clone(),
                project: locator.project.clone(),
                job_id: locator.job_id.to_string(),
                run_id: locator.run_id.to_string(),
                recipe: response.run.recipe.to_string(),
            },
            credit: CreditView::from_summary(&response.credit_summary),
            spaces: SpaceTableView::from_summary(&response.space_summary),
            visualization_file: response.bundle.visualization_file(),
            from_cache: response.from_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_generation::domain::{
        CreditSummary, DisplayMode, RecipeIdentity, ResultBundle, RunLocator, RunReference,
        SpaceSummary,
    };
    use uuid::Uuid;

    #[test]
    fn test_view_from_response() {
        let locator = RunLocator {
            owner: "chriswmackey".to_string(),
            project: "demo".to_string(),
            job_id: Uuid::new_v4(),
            run_id: Uuid::new_v4(),
        };
        let run = RunReference::new(
            locator,
            RecipeIdentity::new("pollination", "leed-daylight-illuminance", "0.3.1"),
        );
        let bundle = ResultBundle::new("data/j/r".into(), DisplayMode::Wireframe, None);
        let response = FetchResponse::new(
            run,
            bundle,
            CreditSummary::from_json_bytes(br#"{"credits": 2, "percentage_passing": 80.0}"#)
                .unwrap(),
            SpaceSummary::parse(b"space,metric\nOffice,1\n").unwrap(),
            true,
        );

        let view = ReportView::from_response(&response);
        assert_eq!(view.run.owner, "chriswmackey");
        assert_eq!(
            view.run.recipe,
            "pollination/leed-daylight-illuminance:0.3.1"
        );
        assert_eq!(view.credit.points_label(), "2");
        assert_eq!(view.spaces.rows.len(), 1);
        assert!(view.from_cache);
        assert!(view.visualization_file.ends_with("model.vtkjs"));
    }
}
