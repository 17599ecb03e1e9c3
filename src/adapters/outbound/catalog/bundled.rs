use super::document::parse_document;
use crate::build_configuration::domain::Catalog;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::sync::OnceLock;

const BUNDLED_CATALOG_ORIGIN: &str = "bundled catalog";

/// Catalog document compiled into the binary
const BUNDLED_CATALOG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json"));

/// Parsed once per process, read-only afterwards
static PARSED: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();

/// Returns the process-wide bundled catalog, parsing it on first access
pub fn bundled_catalog() -> Result<&'static Catalog> {
    PARSED
        .get_or_init(|| parse_document(BUNDLED_CATALOG))
        .as_ref()
        .map_err(|details| {
            BuildError::CatalogLoadError {
                origin: BUNDLED_CATALOG_ORIGIN.to_string(),
                details: details.clone(),
            }
            .into()
        })
}

/// BundledCatalogReader adapter serving the catalog shipped with the binary
pub struct BundledCatalogReader;

impl BundledCatalogReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BundledCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for BundledCatalogReader {
    fn load_catalog(&self) -> Result<Catalog> {
        bundled_catalog().cloned()
    }

    fn describe(&self) -> String {
        BUNDLED_CATALOG_ORIGIN.to_string()
    }
}
