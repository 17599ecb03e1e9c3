/// Mock implementations for testing
mod mock_catalog_reader;
mod mock_listing_repository;
mod mock_progress_reporter;

pub use mock_catalog_reader::MockCatalogReader;
pub use mock_listing_repository::MockListingRepository;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
