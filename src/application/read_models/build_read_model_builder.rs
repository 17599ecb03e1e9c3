//! Builder for constructing BuildReadModel from use case responses
//!
//! Prices are formatted here once so every formatter renders the same strings.

use super::build_read_model::{
    BuildMetadataView, BuildReadModel, CompatibleOptionsView, PriceRowView, PriceSummaryView,
    SuggestionGroupView,
};
use super::listing_view::ListingView;
use crate::application::dto::{BuildResponse, CompatibilityResponse, ComponentSuggestions};
use crate::build_configuration::domain::{
    BuildMetadata, Category, Component, PriceFormat, PriceSummary,
};
use crate::build_configuration::services::PriceAnalyzer;

/// Builder for constructing BuildReadModel from use case responses
pub struct BuildReadModelBuilder;

impl BuildReadModelBuilder {
    /// Builds the read model of a full build
    pub fn build(response: &BuildResponse, format: &PriceFormat) -> BuildReadModel {
        let price_rows = response
            .selection
            .components()
            .iter()
            .map(|c| Self::price_row(c, format))
            .collect();

        BuildReadModel {
            metadata: Self::build_metadata(&response.metadata),
            catalog_origin: response.catalog_origin.clone(),
            gpu: response.selection.gpu.name.to_string(),
            compatible_options: None,
            price_rows,
            summary: Some(Self::build_summary(&response.summary, format)),
            suggestions: response
                .suggestions
                .as_ref()
                .map(|groups| Self::build_suggestions(groups, format)),
        }
    }

    /// Builds the read model of a compatible-options query
    ///
    /// Every non-GPU category is present, including empty ones.
    pub fn build_compatible(
        response: &CompatibilityResponse,
        format: &PriceFormat,
    ) -> BuildReadModel {
        let options = Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Gpu)
            .map(|category| CompatibleOptionsView {
                category,
                label: category.label().to_string(),
                options: response
                    .compatible
                    .components(category)
                    .iter()
                    .map(|c| Self::price_row(c, format))
                    .collect(),
            })
            .collect();

        BuildReadModel {
            metadata: Self::build_metadata(&response.metadata),
            catalog_origin: response.catalog_origin.clone(),
            gpu: response.compatible.gpu.name.to_string(),
            compatible_options: Some(options),
            price_rows: Vec::new(),
            summary: None,
            suggestions: None,
        }
    }

    fn build_metadata(metadata: &BuildMetadata) -> BuildMetadataView {
        BuildMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    fn price_row(component: &Component, format: &PriceFormat) -> PriceRowView {
        let category = component.category();
        let pricing = component.pricing();
        PriceRowView {
            category,
            label: category.label().to_string(),
            name: component.name().to_string(),
            price_new: pricing.new_price(),
            price_used: pricing.used_price(),
            price_new_display: PriceAnalyzer::format_price(pricing.new_price(), format),
            price_used_display: PriceAnalyzer::format_price(pricing.used_price(), format),
            rating: PriceAnalyzer::price_rating(pricing.new_price(), pricing.used_price())
                .label()
                .to_string(),
        }
    }

    fn build_summary(summary: &PriceSummary, format: &PriceFormat) -> PriceSummaryView {
        PriceSummaryView {
            total_new: summary.total_new,
            total_used: summary.total_used,
            savings: summary.savings,
            total_new_display: PriceAnalyzer::format_price(summary.total_new, format),
            total_used_display: PriceAnalyzer::format_price(summary.total_used, format),
            savings_display: PriceAnalyzer::format_price(summary.savings, format),
        }
    }

    fn build_suggestions(
        groups: &[ComponentSuggestions],
        format: &PriceFormat,
    ) -> Vec<SuggestionGroupView> {
        groups
            .iter()
            .map(|group| {
                let (auctions, buy_now): (Vec<ListingView>, Vec<ListingView>) = group
                    .listings
                    .iter()
                    .map(|l| ListingView::from_priced(l, format))
                    .partition(ListingView::is_auction);

                SuggestionGroupView {
                    category: group.category,
                    label: group.category.label().to_string(),
                    component_name: group.component_name.clone(),
                    auctions,
                    buy_now,
                }
            })
            .collect()
    }
}
