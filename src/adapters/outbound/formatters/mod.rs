/// Formatter adapters for the different build report formats
mod csv_formatter;
mod json_formatter;
mod markdown_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::application::read_models::{
        BuildMetadataView, BuildReadModel, CompatibleOptionsView, ListingView, PriceRowView,
        PriceSummaryView, SuggestionGroupView,
    };
    use crate::build_configuration::domain::Category;

    pub fn row(category: Category, name: &str, new: f64, used: f64, rating: &str) -> PriceRowView {
        PriceRowView {
            category,
            label: category.label().to_string(),
            name: name.to_string(),
            price_new: new,
            price_used: used,
            price_new_display: format!("{} kr", new as u64),
            price_used_display: format!("{} kr", used as u64),
            rating: rating.to_string(),
        }
    }

    fn metadata() -> BuildMetadataView {
        BuildMetadataView {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            tool_name: "pc-builder".to_string(),
            tool_version: "1.0.0".to_string(),
        }
    }

    pub fn auction(title: &str) -> ListingView {
        ListingView {
            title: title.to_string(),
            condition: "Used".to_string(),
            listing_type: "auction".to_string(),
            current_bid: Some(3200.0),
            time_remaining: Some("3 days".to_string()),
            num_bids: Some(7),
            fixed_price: None,
            link: "https://www.tradera.com/dummy-auction-gpu-1".to_string(),
            price: 3200.0,
            price_display: "3200 kr".to_string(),
            price_difference: 300.0,
            savings_percentage: 8.57,
        }
    }

    pub fn buy_now(title: &str) -> ListingView {
        ListingView {
            title: title.to_string(),
            condition: "New".to_string(),
            listing_type: "buy_now".to_string(),
            current_bid: None,
            time_remaining: None,
            num_bids: None,
            fixed_price: Some(3800.0),
            link: "https://www.tradera.com/dummy-buy-now-gpu-1".to_string(),
            price: 3800.0,
            price_display: "3800 kr".to_string(),
            price_difference: -300.0,
            savings_percentage: 0.0,
        }
    }

    pub fn build_model() -> BuildReadModel {
        BuildReadModel {
            metadata: metadata(),
            catalog_origin: "bundled catalog".to_string(),
            gpu: "RTX 4060".to_string(),
            compatible_options: None,
            price_rows: vec![
                row(Category::Gpu, "RTX 4060", 3500.0, 2700.0, "Good price"),
                row(Category::Psu, "Corsair RM850x, White", 1500.0, 800.0, "Great price"),
            ],
            summary: Some(PriceSummaryView {
                total_new: 5000.0,
                total_used: 3500.0,
                savings: 1500.0,
                total_new_display: "5000 kr".to_string(),
                total_used_display: "3500 kr".to_string(),
                savings_display: "1500 kr".to_string(),
            }),
            suggestions: Some(vec![
                SuggestionGroupView {
                    category: Category::Gpu,
                    label: Category::Gpu.label().to_string(),
                    component_name: "RTX 4060".to_string(),
                    auctions: vec![auction("RTX 4060 - Auction")],
                    buy_now: vec![buy_now("RTX 4060 - Buy Now")],
                },
                SuggestionGroupView {
                    category: Category::Psu,
                    label: Category::Psu.label().to_string(),
                    component_name: "Corsair RM850x, White".to_string(),
                    auctions: vec![],
                    buy_now: vec![],
                },
            ]),
        }
    }

    pub fn compatible_model() -> BuildReadModel {
        BuildReadModel {
            metadata: metadata(),
            catalog_origin: "bundled catalog".to_string(),
            gpu: "RTX 4090".to_string(),
            compatible_options: Some(vec![
                CompatibleOptionsView {
                    category: Category::Psu,
                    label: Category::Psu.label().to_string(),
                    options: vec![row(Category::Psu, "RM850x", 1500.0, 1000.0, "Good price")],
                },
                CompatibleOptionsView {
                    category: Category::Case,
                    label: Category::Case.label().to_string(),
                    options: vec![],
                },
            ]),
            price_rows: vec![],
            summary: None,
            suggestions: None,
        }
    }
}
