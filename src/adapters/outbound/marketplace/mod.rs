/// Marketplace adapters providing listing suggestions
mod mock_marketplace;

pub use mock_marketplace::MockMarketplaceRepository;
