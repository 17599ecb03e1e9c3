use chrono::Utc;

/// BuildMetadata value object describing when and by what a report was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl BuildMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Metadata stamped with the current UTC time and this crate's name and version
    pub fn now() -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
