use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Encapsulates the mapping from the requested output format to a
/// formatter implementation, following the Factory Pattern. It belongs
/// in the application layer as it orchestrates the selection of
/// infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextReportFormatter::new()),
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Text => "📝 Rendering report...",
            ReportFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
