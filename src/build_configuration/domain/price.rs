use crate::shared::error::BuildError;
use crate::shared::Result;
use serde::Serialize;

/// Which of a component's two prices to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    New,
    Used,
}

/// Qualitative label for how much cheaper the used price is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceRating {
    Great,
    Good,
    Poor,
}

impl PriceRating {
    pub fn label(&self) -> &'static str {
        match self {
            PriceRating::Great => "Great price",
            PriceRating::Good => "Good price",
            PriceRating::Poor => "High price",
        }
    }
}

impl std::fmt::Display for PriceRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display settings for prices: integer amount, grouped digits, currency suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    thousands_separator: String,
    currency_suffix: String,
}

impl PriceFormat {
    pub fn new(
        thousands_separator: impl Into<String>,
        currency_suffix: impl Into<String>,
    ) -> Result<Self> {
        let currency_suffix = currency_suffix.into();
        if currency_suffix.trim().is_empty() {
            return Err(BuildError::Validation {
                message: "Currency suffix cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            thousands_separator: thousands_separator.into(),
            currency_suffix,
        })
    }

    pub fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    pub fn currency_suffix(&self) -> &str {
        &self.currency_suffix
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            thousands_separator: " ".to_string(),
            currency_suffix: "kr".to_string(),
        }
    }
}

/// Aggregate prices of a full selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    pub total_new: f64,
    pub total_used: f64,
    pub savings: f64,
}

impl PriceSummary {
    pub fn new(total_new: f64, total_used: f64) -> Self {
        Self {
            total_new,
            total_used,
            savings: total_new - total_used,
        }
    }
}
