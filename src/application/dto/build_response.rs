use crate::build_configuration::domain::{
    BuildMetadata, Category, CompatibleSet, PriceSummary, PricedListing, Selection,
};

/// Marketplace suggestions for one selected component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSuggestions {
    pub category: Category,
    pub component_name: String,
    pub listings: Vec<PricedListing>,
}

/// BuildResponse - Internal response DTO from the configure-build use case
#[derive(Debug, Clone)]
pub struct BuildResponse {
    pub metadata: BuildMetadata,
    /// Where the catalog was loaded from
    pub catalog_origin: String,
    pub compatible: CompatibleSet,
    pub selection: Selection,
    pub summary: PriceSummary,
    /// None when listings were not requested
    pub suggestions: Option<Vec<ComponentSuggestions>>,
}

/// CompatibilityResponse - compatible options for one graphics card, no selection
#[derive(Debug, Clone)]
pub struct CompatibilityResponse {
    pub metadata: BuildMetadata,
    pub catalog_origin: String,
    pub compatible: CompatibleSet,
}
