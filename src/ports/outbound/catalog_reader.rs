use crate::build_configuration::domain::Catalog;
use crate::shared::Result;

/// CatalogReader port for loading the component catalog
///
/// This port abstracts where the catalog comes from (a JSON file,
/// the bundled catalog, a test fixture).
pub trait CatalogReader {
    /// Loads the complete catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog source does not exist or cannot be read
    /// - The document is malformed or violates the catalog schema
    ///
    /// A catalog is never partially loaded.
    fn load_catalog(&self) -> Result<Catalog>;

    /// Human-readable description of the catalog source, for progress output
    fn describe(&self) -> String;
}
