use serde::Serialize;

/// How a marketplace listing is sold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "listing_type", rename_all = "snake_case")]
pub enum ListingKind {
    Auction {
        current_bid: f64,
        time_remaining: String,
        num_bids: u32,
    },
    BuyNow {
        fixed_price: f64,
    },
}

/// A marketplace entry offered for a component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub title: String,
    pub condition: String,
    #[serde(flatten)]
    pub kind: ListingKind,
    pub link: String,
}

impl Listing {
    pub fn auction(
        title: &str,
        current_bid: f64,
        time_remaining: &str,
        num_bids: u32,
        condition: &str,
        link: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            condition: condition.to_string(),
            kind: ListingKind::Auction {
                current_bid,
                time_remaining: time_remaining.to_string(),
                num_bids,
            },
            link: link.to_string(),
        }
    }

    pub fn buy_now(title: &str, fixed_price: f64, condition: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            condition: condition.to_string(),
            kind: ListingKind::BuyNow { fixed_price },
            link: link.to_string(),
        }
    }

    pub fn is_auction(&self) -> bool {
        matches!(self.kind, ListingKind::Auction { .. })
    }

    /// Fixed price for buy-now listings, current bid for auctions
    pub fn asking_price(&self) -> f64 {
        match &self.kind {
            ListingKind::BuyNow { fixed_price } => *fixed_price,
            ListingKind::Auction { current_bid, .. } => *current_bid,
        }
    }
}

/// A listing annotated with its price delta against a component's new price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub price: f64,
    pub price_difference: f64,
    pub savings_percentage: f64,
}
