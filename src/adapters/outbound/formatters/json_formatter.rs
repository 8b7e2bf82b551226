use crate::application::read_models::ReportView;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter for machine-readable report output.
///
/// Serializes the full report view, so scripted callers see exactly the
/// fields the text report prints (badge included).
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut output = serde_json::to_string_pretty(view)?;
        output.push('\n');
        Ok(output)
    }
}
