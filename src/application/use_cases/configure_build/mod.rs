use crate::application::dto::{
    BuildRequest, BuildResponse, CompatibilityResponse, ComponentSuggestions,
};
use crate::build_configuration::domain::{
    BuildMetadata, Catalog, Category, CompatibleSet, Component, Gpu, Selection,
};
use crate::build_configuration::policies::{CategoryClassifier, CompatibilityRules};
use crate::build_configuration::services::{
    CompatibilityFilter, ListingSuggestionProvider, PriceAnalyzer, SelectionValidator,
};
use crate::ports::outbound::{CatalogReader, ListingRepository, ProgressReporter};
use crate::shared::error::BuildError;
use crate::shared::Result;

const UNRECOGNIZED_COMPONENT: &str = "component type not recognized";

/// ConfigureBuildUseCase - Core use case for configuring a PC build
///
/// This use case orchestrates the build workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `LR` - ListingRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ConfigureBuildUseCase<CR, LR, PR> {
    catalog_reader: CR,
    listing_repository: LR,
    progress_reporter: PR,
}

impl<CR, LR, PR> ConfigureBuildUseCase<CR, LR, PR>
where
    CR: CatalogReader,
    LR: ListingRepository,
    PR: ProgressReporter,
{
    /// Creates a new ConfigureBuildUseCase with injected dependencies
    pub fn new(catalog_reader: CR, listing_repository: LR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            listing_repository,
            progress_reporter,
        }
    }

    /// Executes the full build workflow
    ///
    /// # Arguments
    /// * `request` - Requested components and options
    ///
    /// # Returns
    /// BuildResponse with the compatible set, the validated selection,
    /// its price summary and optional marketplace suggestions
    pub fn execute(&self, request: BuildRequest) -> Result<BuildResponse> {
        // Step 1: Load the catalog
        let catalog = self.load_and_report_catalog()?;

        // Step 2: Resolve the graphics card and filter the catalog
        let gpu = self.resolve_gpu(&catalog, &request)?;
        let compatible = self.filter_and_report(&gpu, &catalog);

        // Step 3: Resolve one component per category and re-validate
        let selection = self.resolve_selection(&catalog, &compatible, &request)?;
        SelectionValidator::validate(&selection, &compatible)?;
        self.warn_on_socket_mismatch(&selection);

        // Step 4: Price analysis
        let summary = PriceAnalyzer::summarize(&selection);

        // Step 5: Marketplace suggestions if requested
        let suggestions = if request.include_listings {
            Some(self.collect_suggestions(&selection))
        } else {
            None
        };

        self.progress_reporter
            .report_completion(&format!("Build configured around {}", gpu.name));

        Ok(BuildResponse {
            metadata: BuildMetadata::now(),
            catalog_origin: self.catalog_reader.describe(),
            compatible,
            selection,
            summary,
            suggestions,
        })
    }

    /// Computes the compatible options for the requested graphics card
    ///
    /// Component picks other than the graphics card are ignored, and an
    /// empty category is reported but never fails.
    pub fn find_compatible(&self, request: BuildRequest) -> Result<CompatibilityResponse> {
        let catalog = self.load_and_report_catalog()?;
        let gpu = self.resolve_gpu(&catalog, &request)?;
        let compatible = self.filter_and_report(&gpu, &catalog);

        self.progress_reporter
            .report_completion(&format!("Compatible options listed for {}", gpu.name));

        Ok(CompatibilityResponse {
            metadata: BuildMetadata::now(),
            catalog_origin: self.catalog_reader.describe(),
            compatible,
        })
    }

    /// Loads the catalog, reporting progress
    fn load_and_report_catalog(&self) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading component catalog from: {}",
            self.catalog_reader.describe()
        ));

        let catalog = self.catalog_reader.load_catalog()?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} component(s)", catalog.len()));

        Ok(catalog)
    }

    /// The requested graphics card, or the first one in the catalog
    fn resolve_gpu(&self, catalog: &Catalog, request: &BuildRequest) -> Result<Gpu> {
        let gpu = match request.gpu() {
            Some(name) => catalog
                .gpus()
                .iter()
                .find(|g| g.name.as_str() == name)
                .cloned()
                .ok_or_else(|| Self::not_found(catalog, Category::Gpu, name))?,
            None => catalog.gpus().first().cloned().ok_or_else(|| {
                BuildError::Validation {
                    message: "The catalog contains no graphics cards".to_string(),
                }
            })?,
        };

        self.progress_reporter.report(&format!(
            "🎮 Graphics card: {} ({} W, {} mm)",
            gpu.name, gpu.power, gpu.length
        ));

        Ok(gpu)
    }

    /// Filters the catalog for `gpu`, reporting counts and empty categories
    fn filter_and_report(&self, gpu: &Gpu, catalog: &Catalog) -> CompatibleSet {
        let compatible = CompatibilityFilter::filter_compatible(gpu, catalog);

        let counts: Vec<String> = Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Gpu)
            .map(|c| format!("{} {}", compatible.count(c), c.catalog_key()))
            .collect();
        self.progress_reporter.report(&format!(
            "🔍 Compatible options: {}",
            counts.join(", ")
        ));

        for category in compatible.empty_categories() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No compatible {} for graphics card \"{}\".",
                category.noun(),
                gpu.name
            ));
        }

        compatible
    }

    /// Resolves every non-GPU category from the request or the compatible set
    fn resolve_selection(
        &self,
        catalog: &Catalog,
        compatible: &CompatibleSet,
        request: &BuildRequest,
    ) -> Result<Selection> {
        let mut components = vec![Component::Gpu(compatible.gpu.clone())];

        for category in Category::ALL.into_iter().filter(|c| *c != Category::Gpu) {
            let component = match request.pick(category) {
                Some(name) => catalog
                    .find(category, name)
                    .ok_or_else(|| Self::not_found(catalog, category, name))?,
                None => compatible
                    .components(category)
                    .into_iter()
                    .next()
                    .ok_or_else(|| BuildError::NoCompatibleOption {
                        category: category.noun().to_string(),
                        gpu: compatible.gpu.name.to_string(),
                    })?,
            };
            components.push(component);
        }

        Selection::from_components(components)
    }

    /// Warns when the chosen processor and motherboard use different sockets
    ///
    /// Each part is compatible on its own, so the build still goes through.
    fn warn_on_socket_mismatch(&self, selection: &Selection) {
        let cpu = &selection.cpu;
        let board = &selection.motherboard;
        if !CompatibilityRules::check_cpu_motherboard_compatibility(&cpu.socket, &board.socket) {
            let mismatch = format!(
                "Processor \"{}\" (socket {}) does not fit motherboard \"{}\" (socket {}).",
                cpu.name, cpu.socket, board.name, board.socket
            );
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", mismatch));
        }
    }

    /// Collects suggestions for every selected component
    ///
    /// Unclassified components keep an empty group and produce a warning.
    fn collect_suggestions(&self, selection: &Selection) -> Vec<ComponentSuggestions> {
        self.progress_reporter
            .report("🛒 Looking up marketplace listings...");

        selection
            .components()
            .into_iter()
            .map(|component| {
                if CategoryClassifier::classify(&component).is_none() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: No marketplace listings for {} \"{}\": {}.",
                        component.category().noun(),
                        component.name(),
                        UNRECOGNIZED_COMPONENT
                    ));
                }

                let listings = ListingSuggestionProvider::suggestions(&component, |category| {
                    self.listing_repository.listings_for(category)
                });

                ComponentSuggestions {
                    category: component.category(),
                    component_name: component.name().to_string(),
                    listings,
                }
            })
            .collect()
    }

    fn not_found(catalog: &Catalog, category: Category, name: &str) -> anyhow::Error {
        let available = catalog.names(category);
        BuildError::ComponentNotFound {
            category: category.noun().to_string(),
            name: name.to_string(),
            available: if available.is_empty() {
                "(none)".to_string()
            } else {
                available.join(", ")
            },
        }
        .into()
    }
}
