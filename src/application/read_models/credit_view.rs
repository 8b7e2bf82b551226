use serde::Serialize;

use crate::report_generation::domain::{CreditBadge, CreditSummary};

/// One opaque breakdown entry from the credit summary, kept in document
/// order for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub name: String,
    pub value: serde_json::Value,
}

/// Presentation view of the credit summary: the badge treatment plus the
/// rounded numbers the report prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditView {
    pub points: f64,
    pub badge: CreditBadge,
    pub percentage_passing: f64,
    pub breakdown: Vec<BreakdownRow>,
}

impl CreditView {
    pub fn from_summary(summary: &CreditSummary) -> Self {
        let breakdown = summary
            .breakdown
            .iter()
            .map(|(name, value)| BreakdownRow {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        Self {
            points: summary.credits,
            badge: summary.badge(),
            percentage_passing: summary.percentage_rounded(),
            breakdown,
        }
    }

    /// Integer-like point counts print without a trailing ".0".
    pub fn points_label(&self) -> String {
        if self.points.fract() == 0.0 {
            format!("{}", self.points as i64)
        } else {
            format!("{}", self.points)
        }
    }
}
