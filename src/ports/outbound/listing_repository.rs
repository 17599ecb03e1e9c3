use crate::build_configuration::domain::{Category, Listing};

/// ListingRepository port for marketplace listings
///
/// Implementations return a fresh copy of the listing set on every call;
/// callers may consume or annotate the returned listings freely.
pub trait ListingRepository {
    /// Returns the listings offered for a component category
    fn listings_for(&self, category: Category) -> Vec<Listing>;
}
