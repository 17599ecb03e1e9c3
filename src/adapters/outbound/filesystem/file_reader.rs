use crate::adapters::outbound::catalog::parse_catalog;
use crate::build_configuration::domain::Catalog;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::BuildError;
use crate::shared::security::{read_guarded, MAX_CATALOG_FILE_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemCatalogReader adapter for reading a JSON catalog from disk
///
/// Symlinks, non-regular files and files over the size limit are rejected.
pub struct FileSystemCatalogReader {
    path: PathBuf,
}

impl FileSystemCatalogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogReader for FileSystemCatalogReader {
    fn load_catalog(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(BuildError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: "Check the --catalog option or the 'catalog' entry of your config file, \
                             or omit both to use the bundled catalog."
                    .to_string(),
            }
            .into());
        }

        let content = read_guarded(&self.path, "catalog", MAX_CATALOG_FILE_SIZE)?;
        parse_catalog(&content, &self.path.display().to_string())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
