//! pc-builder - PC build configurator
//!
//! Given a chosen graphics card, this library filters a component catalog to
//! the parts compatible with it, prices the resulting build new vs. used and
//! attaches marketplace listing suggestions, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_configuration`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_builder::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with the bundled catalog and mock marketplace
//! let use_case = ConfigureBuildUseCase::new(
//!     BundledCatalogReader::new(),
//!     MockMarketplaceRepository::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = BuildRequest::builder().gpu("NVIDIA GeForce RTX 4070").build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = BuildReadModelBuilder::build(&response, &PriceFormat::default());
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_configuration;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{
        bundled_catalog, parse_catalog, BundledCatalogReader,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemCatalogReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::marketplace::MockMarketplaceRepository;
    pub use crate::application::dto::{BuildRequest, BuildResponse, OutputFormat};
    pub use crate::application::read_models::{BuildReadModel, BuildReadModelBuilder};
    pub use crate::application::use_cases::ConfigureBuildUseCase;
    pub use crate::build_configuration::domain::{
        Case, Catalog, Category, CompatibleSet, Component, Cooler, CoolerType, Cpu, Gpu, Listing,
        Motherboard, PriceFormat, PriceKind, PriceRating, PricedListing, Psu, Ram, RamType,
        Selection,
    };
    pub use crate::build_configuration::policies::{CategoryClassifier, CompatibilityRules};
    pub use crate::build_configuration::services::{
        CompatibilityFilter, ListingSuggestionProvider, PriceAnalyzer, SelectionValidator,
    };
    pub use crate::ports::outbound::{
        BuildFormatter, CatalogReader, ListingRepository, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
