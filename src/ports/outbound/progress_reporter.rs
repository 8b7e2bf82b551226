/// ProgressReporter port for reporting progress during operations
///
/// Abstracts user feedback (e.g. to stderr) while archives download and
/// unpack, so the application core stays silent on its own.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress against a known total, e.g. metric 3 of 5
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
