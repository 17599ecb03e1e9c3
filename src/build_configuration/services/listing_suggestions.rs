use crate::build_configuration::domain::{Category, Component, Listing, PricedListing};
use crate::build_configuration::policies::CategoryClassifier;

/// ListingSuggestionProvider service - marketplace suggestions for a component
///
/// The listing set is chosen by the component's structural category. An
/// unclassified component gets no suggestions. Price deltas are computed
/// fresh on every call against the component's new price.
pub struct ListingSuggestionProvider;

impl ListingSuggestionProvider {
    /// Returns the priced suggestions for `component`
    ///
    /// # Arguments
    /// * `component` - The selected component
    /// * `listings_for` - Source of the listing set for a category
    pub fn suggestions<F>(component: &Component, listings_for: F) -> Vec<PricedListing>
    where
        F: FnOnce(Category) -> Vec<Listing>,
    {
        match CategoryClassifier::classify(component) {
            Some(category) => Self::price_listings(component, listings_for(category)),
            None => Vec::new(),
        }
    }

    /// Annotates listings with price, price difference and savings percentage
    pub fn price_listings(component: &Component, listings: Vec<Listing>) -> Vec<PricedListing> {
        let price_new = component.pricing().new_price();

        listings
            .into_iter()
            .map(|listing| {
                let price = listing.asking_price();
                let price_difference = price_new - price;
                let savings_percentage = if price_difference > 0.0 {
                    price_difference * 100.0 / price_new
                } else {
                    0.0
                };
                PricedListing {
                    listing,
                    price,
                    price_difference,
                    savings_percentage,
                }
            })
            .collect()
    }
}
