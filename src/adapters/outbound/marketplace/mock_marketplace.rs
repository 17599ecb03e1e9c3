use crate::build_configuration::domain::{Category, Listing};
use crate::ports::outbound::ListingRepository;

const CONDITION_USED: &str = "Used";
const CONDITION_NEW: &str = "New";

/// MockMarketplaceRepository adapter serving fixed marketplace listings
///
/// Stands in for a real marketplace integration: one auction and one
/// buy-now listing per category. Every call builds a fresh set.
pub struct MockMarketplaceRepository;

/// Fixed auction and buy-now terms for one category
struct Offer {
    product: &'static str,
    current_bid: f64,
    time_remaining: &'static str,
    num_bids: u32,
    fixed_price: f64,
}

const fn offer(
    product: &'static str,
    current_bid: f64,
    time_remaining: &'static str,
    num_bids: u32,
    fixed_price: f64,
) -> Offer {
    Offer {
        product,
        current_bid,
        time_remaining,
        num_bids,
        fixed_price,
    }
}

/// Offers in `Category` declaration order
static OFFERS: [Offer; 7] = [
    offer("NVIDIA GeForce RTX 4060", 3200.0, "3 days", 7, 3800.0),
    offer("ASUS ROG Strix B450-F", 1500.0, "1 day", 3, 1900.0),
    offer("Intel Core i7-9700K", 2200.0, "2 days", 5, 2800.0),
    offer("Corsair Vengeance LPX 16GB", 800.0, "4 hours", 8, 1200.0),
    offer("EVGA SuperNOVA 650 G3", 900.0, "6 hours", 4, 1300.0),
    offer("NZXT H510", 600.0, "1 day", 2, 900.0),
    offer("Cooler Master Hyper 212", 400.0, "8 hours", 3, 700.0),
];

impl MockMarketplaceRepository {
    pub fn new() -> Self {
        Self
    }

    fn offer_for(category: Category) -> &'static Offer {
        &OFFERS[category as usize]
    }
}

impl Default for MockMarketplaceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingRepository for MockMarketplaceRepository {
    fn listings_for(&self, category: Category) -> Vec<Listing> {
        let offer = Self::offer_for(category);
        let key = category.key();
        vec![
            Listing::auction(
                &format!("{} - Auction", offer.product),
                offer.current_bid,
                offer.time_remaining,
                offer.num_bids,
                CONDITION_USED,
                &format!("https://www.tradera.com/dummy-auction-{}-1", key),
            ),
            Listing::buy_now(
                &format!("{} - Buy Now", offer.product),
                offer.fixed_price,
                CONDITION_NEW,
                &format!("https://www.tradera.com/dummy-buy-now-{}-1", key),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_configuration::domain::ListingKind;

    #[test]
    fn test_every_category_has_auction_and_buy_now() {
        let repository = MockMarketplaceRepository::new();
        for category in Category::ALL {
            let listings = repository.listings_for(category);
            assert_eq!(listings.len(), 2);
            assert!(listings[0].is_auction());
            assert!(!listings[1].is_auction());
            assert!(listings[0].link.contains(category.key()));
        }
    }

    #[test]
    fn test_gpu_listings() {
        let listings = MockMarketplaceRepository::new().listings_for(Category::Gpu);
        assert_eq!(listings[0].title, "NVIDIA GeForce RTX 4060 - Auction");
        assert_eq!(
            listings[0].kind,
            ListingKind::Auction {
                current_bid: 3200.0,
                time_remaining: "3 days".to_string(),
                num_bids: 7,
            }
        );
        assert_eq!(listings[0].condition, "Used");
        assert_eq!(listings[1].kind, ListingKind::BuyNow { fixed_price: 3800.0 });
        assert_eq!(listings[1].link, "https://www.tradera.com/dummy-buy-now-gpu-1");
    }

    #[test]
    fn test_offers_follow_category_order() {
        let repository = MockMarketplaceRepository::new();
        let cooler = repository.listings_for(Category::Cooler);
        assert_eq!(cooler[0].title, "Cooler Master Hyper 212 - Auction");
        assert_eq!(cooler[1].kind, ListingKind::BuyNow { fixed_price: 700.0 });

        let ram = repository.listings_for(Category::Ram);
        assert_eq!(ram[0].title, "Corsair Vengeance LPX 16GB - Auction");
        assert_eq!(ram[0].link, "https://www.tradera.com/dummy-auction-ram-1");
    }

    #[test]
    fn test_listings_are_fresh_per_call() {
        let repository = MockMarketplaceRepository::new();
        let mut first = repository.listings_for(Category::Case);
        first[0].title.push_str(" (edited)");
        let second = repository.listings_for(Category::Case);
        assert_eq!(second[0].title, "NZXT H510 - Auction");
    }
}
