mod category_classifier;
mod compatibility_rules;

pub use category_classifier::CategoryClassifier;
pub use compatibility_rules::CompatibilityRules;
