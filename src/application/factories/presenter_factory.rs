use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Where a rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stdout,
    File(PathBuf),
}

impl ReportDestination {
    /// Destination for a report rendered in `format`
    ///
    /// A file name without an extension gets the one matching the format,
    /// so `-f csv -o build` writes `build.csv`. An explicit extension is
    /// kept as given.
    pub fn for_report(output: Option<&Path>, format: OutputFormat) -> Self {
        match output {
            None => ReportDestination::Stdout,
            Some(path) if path.extension().is_some() => ReportDestination::File(path.to_path_buf()),
            Some(path) => ReportDestination::File(path.with_extension(format.file_extension())),
        }
    }

    /// Destination for plain text written to exactly the given path
    pub fn verbatim(output: Option<&Path>) -> Self {
        match output {
            None => ReportDestination::Stdout,
            Some(path) => ReportDestination::File(path.to_path_buf()),
        }
    }
}

/// Picks the presenter adapter for a report destination
pub struct PresenterFactory;

impl PresenterFactory {
    /// # Examples
    /// ```
    /// use pc_builder::application::factories::{PresenterFactory, ReportDestination};
    ///
    /// let presenter = PresenterFactory::create(&ReportDestination::Stdout);
    /// ```
    pub fn create(destination: &ReportDestination) -> Box<dyn OutputPresenter> {
        match destination {
            ReportDestination::Stdout => Box::new(StdoutPresenter::new()),
            ReportDestination::File(path) => Box::new(FileSystemWriter::new(path.clone())),
        }
    }
}
