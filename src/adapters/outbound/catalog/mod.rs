/// Catalog document parsing and the bundled catalog
mod bundled;
mod document;

pub use bundled::{bundled_catalog, BundledCatalogReader};
pub use document::parse_catalog;
