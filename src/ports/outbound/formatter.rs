use crate::application::read_models::BuildReadModel;
use crate::shared::Result;

/// BuildFormatter port for rendering a build report
///
/// This port abstracts the output format (Markdown report, CSV export, JSON).
pub trait BuildFormatter {
    /// Formats the build report from the read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &BuildReadModel) -> Result<String>;
}
