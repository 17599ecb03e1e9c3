mod compatibility_filter;
mod listing_suggestions;
mod price_analyzer;
mod selection_validator;

pub use compatibility_filter::CompatibilityFilter;
pub use listing_suggestions::ListingSuggestionProvider;
pub use price_analyzer::PriceAnalyzer;
pub use selection_validator::SelectionValidator;
