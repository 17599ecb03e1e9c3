use crate::build_configuration::domain::Category;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// BuildRequest - Internal request DTO for the configure-build use case
///
/// Every category left unset is filled with the first compatible option
/// (the first catalog GPU for the graphics card).
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    picks: BTreeMap<Category, String>,
    /// Whether to attach marketplace suggestions to the response
    pub include_listings: bool,
}

impl BuildRequest {
    pub fn builder() -> BuildRequestBuilder {
        BuildRequestBuilder::default()
    }

    /// The component name requested for `category`, if any
    pub fn pick(&self, category: Category) -> Option<&str> {
        self.picks.get(&category).map(String::as_str)
    }

    pub fn gpu(&self) -> Option<&str> {
        self.pick(Category::Gpu)
    }
}

/// Builder for [`BuildRequest`]
#[derive(Debug, Default)]
pub struct BuildRequestBuilder {
    picks: BTreeMap<Category, String>,
    include_listings: Option<bool>,
}

impl BuildRequestBuilder {
    pub fn gpu(self, name: impl Into<String>) -> Self {
        self.pick(Category::Gpu, name)
    }

    /// Requests a specific component; a later pick for the same category wins
    pub fn pick(mut self, category: Category, name: impl Into<String>) -> Self {
        self.picks.insert(category, name.into());
        self
    }

    /// Applies picks only for categories that are still unset
    pub fn defaults(mut self, picks: &BTreeMap<Category, String>) -> Self {
        for (category, name) in picks {
            self.picks.entry(*category).or_insert_with(|| name.clone());
        }
        self
    }

    pub fn include_listings(mut self, include: bool) -> Self {
        self.include_listings = Some(include);
        self
    }

    /// # Errors
    /// Returns a validation error if any requested name is blank
    pub fn build(self) -> Result<BuildRequest> {
        for (category, name) in &self.picks {
            if name.trim().is_empty() {
                return Err(BuildError::Validation {
                    message: format!("Requested {} name cannot be empty", category.noun()),
                }
                .into());
            }
        }

        Ok(BuildRequest {
            picks: self.picks,
            include_listings: self.include_listings.unwrap_or(true),
        })
    }
}
