use crate::application::read_models::ReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering the fetched results
///
/// Formats the report view (credit badge, breakdown, space table,
/// artifact paths) for a given output style (plain text, JSON).
pub trait ReportFormatter {
    /// Formats the report view into its final textual form
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &ReportView) -> Result<String>;
}
