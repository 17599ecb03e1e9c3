use pc_builder::prelude::*;
use pc_builder::shared::error::BuildError;

/// Mock CatalogReader for testing
///
/// Serves a catalog parsed from an inline JSON document, or fails with a
/// load error when constructed with `failing`.
pub struct MockCatalogReader {
    content: Option<String>,
}

impl MockCatalogReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    #[allow(dead_code)]
    pub fn from_fixture() -> Self {
        Self::new(include_str!("../../fixtures/catalog.json"))
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self { content: None }
    }
}

impl CatalogReader for MockCatalogReader {
    fn load_catalog(&self) -> Result<Catalog> {
        match &self.content {
            Some(content) => parse_catalog(content, &self.describe()),
            None => Err(BuildError::CatalogLoadError {
                origin: self.describe(),
                details: "mock catalog unavailable".to_string(),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        "mock catalog".to_string()
    }
}
