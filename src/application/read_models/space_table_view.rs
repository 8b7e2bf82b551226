use serde::Serialize;

use crate::report_generation::domain::SpaceSummary;

/// Presentation view of the space-by-space breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceTableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SpaceTableView {
    pub fn from_summary(summary: &SpaceSummary) -> Self {
        Self {
            headers: summary.headers.clone(),
            rows: summary.rows.clone(),
        }
    }

    /// Width of each column: the longest cell (or header) in it. Used by
    /// the text formatter to align the table.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }
        widths
    }
}
