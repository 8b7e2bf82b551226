use std::path::Path;

use crate::shared::error::ReportError;
use crate::shared::Result;

/// Parsed view of the space-summary table (rows = spaces, columns =
/// metrics). The raw CSV bytes are always written to disk verbatim; this
/// view exists only so the report can render the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceSummary {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SpaceSummary {
    /// Parses comma-separated bytes with a header row of metric column
    /// names. Quoted fields are not supported; the upstream writer never
    /// emits them.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| ReportError::SummaryParse {
            artifact: "space-summary".to_string(),
            details: format!("not valid UTF-8: {}", e),
        })?;

        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let headers: Vec<String> = match lines.next() {
            Some(header) => header.split(',').map(|c| c.trim().to_string()).collect(),
            None => {
                return Err(ReportError::SummaryParse {
                    artifact: "space-summary".to_string(),
                    details: "table is empty".to_string(),
                }
                .into())
            }
        };

        let mut rows = Vec::new();
        for line in lines {
            let cells: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
            if cells.len() != headers.len() {
                return Err(ReportError::SummaryParse {
                    artifact: "space-summary".to_string(),
                    details: format!(
                        "row has {} column(s), header has {}",
                        cells.len(),
                        headers.len()
                    ),
                }
                .into());
            }
            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(ReportError::SummaryParse {
                artifact: "space-summary".to_string(),
                details: "table has a header but no space rows".to_string(),
            }
            .into());
        }

        Ok(Self { headers, rows })
    }

    /// Reads a previously cached `space_summary.csv`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| ReportError::SummaryParse {
            artifact: "space-summary".to_string(),
            details: format!("{}: {}", path.display(), e),
        })?;
        Self::parse(&bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
