use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shared::error::ReportError;
use crate::shared::Result;

/// Visual treatment for the credit badge. More than one credit earns the
/// pass treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditBadge {
    Pass,
    Fail,
}

/// Aggregated scoring document for a run.
///
/// `credits` and `percentage_passing` are required; any other fields in
/// the document are kept as opaque breakdown entries for display. The
/// map is ordered so the breakdown renders stably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    pub credits: f64,
    pub percentage_passing: f64,
    #[serde(flatten)]
    pub breakdown: BTreeMap<String, serde_json::Value>,
}

impl CreditSummary {
    /// Parses the downloaded credit-summary artifact.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let summary: CreditSummary =
            serde_json::from_slice(bytes).map_err(|e| ReportError::SummaryParse {
                artifact: "credit-summary".to_string(),
                details: e.to_string(),
            })?;
        if summary.credits < 0.0 {
            return Err(ReportError::SummaryParse {
                artifact: "credit-summary".to_string(),
                details: format!("credits must not be negative, got {}", summary.credits),
            }
            .into());
        }
        Ok(summary)
    }

    /// Reads a previously cached `credit_summary.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| ReportError::SummaryParse {
            artifact: "credit-summary".to_string(),
            details: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json_bytes(&bytes)
    }

    /// Badge treatment: more than 1 credit passes, 1 or fewer fails.
    pub fn badge(&self) -> CreditBadge {
        if self.credits > 1.0 {
            CreditBadge::Pass
        } else {
            CreditBadge::Fail
        }
    }

    /// Percentage of points passing, rounded to two decimals for display.
    pub fn percentage_rounded(&self) -> f64 {
        (self.percentage_passing * 100.0).round() / 100.0
    }
}
