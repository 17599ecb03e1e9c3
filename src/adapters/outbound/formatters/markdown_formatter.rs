use crate::application::read_models::{
    BuildReadModel, CompatibleOptionsView, ListingView, PriceRowView, PriceSummaryView,
    SuggestionGroupView,
};
use crate::ports::outbound::BuildFormatter;
use crate::shared::Result;

/// Markdown table header for the price table
const PRICE_TABLE_HEADER: &str = "| Component | Name | New Price | Used Price | Rating |\n";

/// Markdown table separator line for the price table
const PRICE_TABLE_SEPARATOR: &str = "|-----------|------|-----------|------------|--------|\n";

/// Markdown table header for compatible options
const OPTIONS_TABLE_HEADER: &str = "| Name | New Price | Used Price | Rating |\n";

/// Markdown table separator line for compatible options
const OPTIONS_TABLE_SEPARATOR: &str = "|------|-----------|------------|--------|\n";

/// Markdown table header for auction listings
const AUCTION_TABLE_HEADER: &str =
    "| Item | Current Bid | Time Remaining | Bids | Condition | Link |\n";

/// Markdown table separator line for auction listings
const AUCTION_TABLE_SEPARATOR: &str =
    "|------|-------------|----------------|------|-----------|------|\n";

/// Markdown table header for buy-now listings
const BUY_NOW_TABLE_HEADER: &str = "| Item | Price | Condition | Link |\n";

/// Markdown table separator line for buy-now listings
const BUY_NOW_TABLE_SEPARATOR: &str = "|------|-------|-----------|------|\n";

/// Width in characters of the longest bar in the price chart
const CHART_WIDTH: usize = 30;

/// MarkdownFormatter adapter for human-readable build reports
///
/// Renders the price table, summary, a text bar chart of new vs. used
/// prices and the marketplace suggestions of each component.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn listing_link(url: &str) -> String {
        format!("[Open listing]({})", url.replace(' ', "%20"))
    }

    /// Length of the bar for `value` when `max` spans the full chart width
    fn bar_length(value: f64, max: f64) -> usize {
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        ((value / max) * CHART_WIDTH as f64).round() as usize
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    /// Renders the header section
    fn render_header(&self, output: &mut String, model: &BuildReadModel) {
        output.push_str("# 🖥️ PC Build Report\n\n");
        output.push_str(&format!(
            "**Graphics card:** {}  \n",
            Self::escape_markdown_table_cell(&model.gpu)
        ));
        output.push_str(&format!("**Catalog:** {}\n\n", model.catalog_origin));
    }

    /// Renders the compatible options of every category
    fn render_compatible_options(&self, output: &mut String, groups: &[CompatibleOptionsView]) {
        output.push_str("## Compatible Components\n\n");
        output.push_str("Every catalog option that works with the selected graphics card.\n\n");

        for group in groups {
            output.push_str(&format!("### {}\n\n", group.label));

            if group.options.is_empty() {
                output.push_str("*No compatible options*\n\n");
                continue;
            }

            output.push_str(OPTIONS_TABLE_HEADER);
            output.push_str(OPTIONS_TABLE_SEPARATOR);
            for option in &group.options {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&option.name),
                    option.price_new_display,
                    option.price_used_display,
                    option.rating
                ));
            }
            output.push('\n');
        }
    }

    /// Renders the price table of the selection
    fn render_price_table(&self, output: &mut String, rows: &[PriceRowView]) {
        output.push_str("## Price Analysis\n\n");
        output.push_str(PRICE_TABLE_HEADER);
        output.push_str(PRICE_TABLE_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                row.label,
                Self::escape_markdown_table_cell(&row.name),
                row.price_new_display,
                row.price_used_display,
                row.rating
            ));
        }
        output.push('\n');
    }

    /// Renders the totals
    fn render_summary(&self, output: &mut String, summary: &PriceSummaryView) {
        output.push_str(&format!(
            "- **Total new price:** {}\n",
            summary.total_new_display
        ));
        output.push_str(&format!(
            "- **Total used price:** {}\n",
            summary.total_used_display
        ));
        output.push_str(&format!(
            "- **Potential savings:** {}\n\n",
            summary.savings_display
        ));
    }

    /// Renders a grouped bar chart of new vs. used price per component
    fn render_chart(&self, output: &mut String, rows: &[PriceRowView]) {
        let max = rows
            .iter()
            .flat_map(|r| [r.price_new, r.price_used])
            .fold(0.0_f64, f64::max);
        let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

        output.push_str("## Price Comparison\n\n");
        output.push_str("```text\n");
        for row in rows {
            output.push_str(&format!(
                "{:<width$}  New  {} {}\n",
                row.label,
                "█".repeat(Self::bar_length(row.price_new, max)),
                row.price_new_display,
                width = label_width
            ));
            output.push_str(&format!(
                "{:<width$}  Used {} {}\n",
                "",
                "░".repeat(Self::bar_length(row.price_used, max)),
                row.price_used_display,
                width = label_width
            ));
        }
        output.push_str("```\n\n");
    }

    /// Renders the marketplace suggestions section
    fn render_suggestions(&self, output: &mut String, groups: &[SuggestionGroupView]) {
        output.push_str("## Marketplace Suggestions\n\n");

        for group in groups {
            output.push_str(&format!(
                "### {}: {}\n\n",
                group.label,
                Self::escape_markdown_table_cell(&group.component_name)
            ));

            if group.is_empty() {
                output.push_str("*No marketplace listings found for this component.*\n\n");
                continue;
            }

            if !group.auctions.is_empty() {
                self.render_auctions(output, &group.auctions);
            }
            if !group.buy_now.is_empty() {
                self.render_buy_now(output, &group.buy_now);
            }
        }
    }

    fn render_auctions(&self, output: &mut String, listings: &[ListingView]) {
        output.push_str("#### 🔨 Auctions\n\n");
        output.push_str(AUCTION_TABLE_HEADER);
        output.push_str(AUCTION_TABLE_SEPARATOR);

        for listing in listings {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&listing.title),
                listing.price_display,
                Self::escape_markdown_table_cell(listing.time_remaining.as_deref().unwrap_or("")),
                listing
                    .num_bids
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                Self::escape_markdown_table_cell(&listing.condition),
                Self::listing_link(&listing.link)
            ));
        }
        output.push('\n');
    }

    fn render_buy_now(&self, output: &mut String, listings: &[ListingView]) {
        output.push_str("#### 🛒 Buy Now\n\n");
        output.push_str(BUY_NOW_TABLE_HEADER);
        output.push_str(BUY_NOW_TABLE_SEPARATOR);

        for listing in listings {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&listing.title),
                listing.price_display,
                Self::escape_markdown_table_cell(&listing.condition),
                Self::listing_link(&listing.link)
            ));
        }
        output.push('\n');
    }

    /// Renders the footer
    fn render_footer(&self, output: &mut String, model: &BuildReadModel) {
        output.push_str("---\n\n");
        output.push_str(&format!(
            "*Generated by {} {} on {}*\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFormatter for MarkdownFormatter {
    fn format(&self, model: &BuildReadModel) -> Result<String> {
        let mut output = String::new();

        // Header section
        self.render_header(&mut output, model);

        // Compatible options (if present)
        if let Some(groups) = &model.compatible_options {
            self.render_compatible_options(&mut output, groups);
        }

        // Price sections (full build only)
        if !model.price_rows.is_empty() {
            self.render_price_table(&mut output, &model.price_rows);
            if let Some(summary) = &model.summary {
                self.render_summary(&mut output, summary);
            }
            self.render_chart(&mut output, &model.price_rows);
        }

        // Suggestions section (if present)
        if let Some(groups) = &model.suggestions {
            self.render_suggestions(&mut output, groups);
        }

        self.render_footer(&mut output, model);

        Ok(output)
    }
}
