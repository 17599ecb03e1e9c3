//! Build read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! everything a formatter renders, with prices already formatted.

use super::listing_view::ListingView;
use crate::build_configuration::domain::Category;
use serde::Serialize;

/// Main read model for a configured build
///
/// Produced either from a full build (price rows, summary, suggestions)
/// or from a compatible-options query (compatible options only).
#[derive(Debug, Clone, Serialize)]
pub struct BuildReadModel {
    /// Report metadata
    pub metadata: BuildMetadataView,
    /// Where the catalog was loaded from
    pub catalog_origin: String,
    /// Name of the graphics card the build is keyed on
    pub gpu: String,
    /// Compatible options per category, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatible_options: Option<Vec<CompatibleOptionsView>>,
    /// One row per selected component in category order
    pub price_rows: Vec<PriceRowView>,
    /// Totals over the selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PriceSummaryView>,
    /// Marketplace suggestions per selected component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<SuggestionGroupView>>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct BuildMetadataView {
    /// Timestamp when the report was created
    pub timestamp: String,
    /// Name of the tool that generated the report
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
}

/// One component with raw and display prices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRowView {
    pub category: Category,
    /// Human label of the category, e.g. "Power Supply"
    pub label: String,
    pub name: String,
    pub price_new: f64,
    pub price_used: f64,
    pub price_new_display: String,
    pub price_used_display: String,
    /// Rating label, e.g. "Good price"
    pub rating: String,
}

/// Aggregate prices with display strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummaryView {
    pub total_new: f64,
    pub total_used: f64,
    pub savings: f64,
    pub total_new_display: String,
    pub total_used_display: String,
    pub savings_display: String,
}

/// Suggestions for one selected component, split by listing type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionGroupView {
    pub category: Category,
    pub label: String,
    pub component_name: String,
    pub auctions: Vec<ListingView>,
    pub buy_now: Vec<ListingView>,
}

impl SuggestionGroupView {
    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty() && self.buy_now.is_empty()
    }
}

/// Compatible options of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibleOptionsView {
    pub category: Category,
    pub label: String,
    pub options: Vec<PriceRowView>,
}
