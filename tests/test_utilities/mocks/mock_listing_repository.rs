use pc_builder::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ListingRepository for testing
///
/// Returns the listings registered per category and records every lookup.
#[derive(Default, Clone)]
pub struct MockListingRepository {
    listings: HashMap<Category, Vec<Listing>>,
    pub lookups: Arc<Mutex<Vec<Category>>>,
}

impl MockListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, category: Category, listing: Listing) -> Self {
        self.listings.entry(category).or_default().push(listing);
        self
    }

    #[allow(dead_code)]
    pub fn lookups(&self) -> Vec<Category> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ListingRepository for MockListingRepository {
    fn listings_for(&self, category: Category) -> Vec<Listing> {
        self.lookups.lock().unwrap().push(category);
        self.listings.get(&category).cloned().unwrap_or_default()
    }
}
