use crate::shared::Result;

/// OutputPresenter port for delivering the formatted report
///
/// Implementations write to stdout or to a file chosen on the command
/// line; the formatter does not care which.
pub trait OutputPresenter {
    /// Presents the formatted report content
    ///
    /// # Errors
    /// Returns an error if the content cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
