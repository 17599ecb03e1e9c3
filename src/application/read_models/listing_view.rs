//! Listing view for read models

use crate::build_configuration::domain::{ListingKind, PriceFormat, PricedListing};
use crate::build_configuration::services::PriceAnalyzer;
use serde::Serialize;

/// View representation of a priced marketplace listing
///
/// Auction-only and buy-now-only fields are omitted from serialized
/// output when they do not apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub title: String,
    pub condition: String,
    /// "auction" or "buy_now"
    pub listing_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_bids: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f64>,
    pub link: String,
    pub price: f64,
    pub price_display: String,
    pub price_difference: f64,
    pub savings_percentage: f64,
}

impl ListingView {
    pub fn from_priced(priced: &PricedListing, format: &PriceFormat) -> Self {
        let listing = &priced.listing;
        let (listing_type, current_bid, time_remaining, num_bids, fixed_price) = match &listing.kind
        {
            ListingKind::Auction {
                current_bid,
                time_remaining,
                num_bids,
            } => (
                "auction",
                Some(*current_bid),
                Some(time_remaining.clone()),
                Some(*num_bids),
                None,
            ),
            ListingKind::BuyNow { fixed_price } => {
                ("buy_now", None, None, None, Some(*fixed_price))
            }
        };

        Self {
            title: listing.title.clone(),
            condition: listing.condition.clone(),
            listing_type: listing_type.to_string(),
            current_bid,
            time_remaining,
            num_bids,
            fixed_price,
            link: listing.link.clone(),
            price: priced.price,
            price_display: PriceAnalyzer::format_price(priced.price, format),
            price_difference: priced.price_difference,
            savings_percentage: priced.savings_percentage,
        }
    }

    pub fn is_auction(&self) -> bool {
        self.listing_type == "auction"
    }
}
