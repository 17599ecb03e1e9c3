//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a configured build for the formatters.

mod build_read_model;
mod build_read_model_builder;
mod listing_view;

pub use build_read_model::{
    BuildMetadataView, BuildReadModel, CompatibleOptionsView, PriceRowView, PriceSummaryView,
    SuggestionGroupView,
};
pub use build_read_model_builder::BuildReadModelBuilder;
pub use listing_view::ListingView;
