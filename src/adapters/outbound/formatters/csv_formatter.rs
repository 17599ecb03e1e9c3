use crate::application::read_models::{BuildReadModel, PriceRowView};
use crate::ports::outbound::BuildFormatter;
use crate::shared::Result;

/// Header row of the price table export
const CSV_HEADER: [&str; 5] = ["Component", "Name", "New Price", "Used Price", "Rating"];

/// CsvFormatter adapter exporting the price table
///
/// A full build yields one row per selected component. A compatible-options
/// report yields one row per compatible option.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a field when it contains a comma, quote or line break (RFC 4180)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn push_record(output: &mut String, fields: &[&str]) {
        let line: Vec<String> = fields.iter().map(|f| Self::escape_field(f)).collect();
        output.push_str(&line.join(","));
        output.push('\n');
    }

    fn push_row(output: &mut String, row: &PriceRowView) {
        Self::push_record(
            output,
            &[
                row.label.as_str(),
                row.name.as_str(),
                row.price_new_display.as_str(),
                row.price_used_display.as_str(),
                row.rating.as_str(),
            ],
        );
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFormatter for CsvFormatter {
    fn format(&self, model: &BuildReadModel) -> Result<String> {
        let mut output = String::new();
        Self::push_record(&mut output, &CSV_HEADER);

        match &model.compatible_options {
            Some(groups) => {
                for row in groups.iter().flat_map(|g| g.options.iter()) {
                    Self::push_row(&mut output, row);
                }
            }
            None => {
                for row in &model.price_rows {
                    Self::push_row(&mut output, row);
                }
            }
        }

        Ok(output)
    }
}
