use crate::application::read_models::BuildReadModel;
use crate::ports::outbound::BuildFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable build reports
///
/// Serializes the read model as-is, with raw and display prices side by side.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFormatter for JsonFormatter {
    fn format(&self, model: &BuildReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}
