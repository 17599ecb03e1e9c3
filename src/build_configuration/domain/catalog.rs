use super::component::{Case, Category, Component, Cooler, Cpu, Gpu, Motherboard, Psu, Ram};
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::HashSet;

/// Catalog aggregate - the full, immutable set of available components
///
/// Each category keeps its records in catalog input order. Names are unique
/// within a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    gpus: Vec<Gpu>,
    motherboards: Vec<Motherboard>,
    cpus: Vec<Cpu>,
    ram: Vec<Ram>,
    psus: Vec<Psu>,
    cases: Vec<Case>,
    coolers: Vec<Cooler>,
}

impl Catalog {
    pub fn new(
        gpus: Vec<Gpu>,
        motherboards: Vec<Motherboard>,
        cpus: Vec<Cpu>,
        ram: Vec<Ram>,
        psus: Vec<Psu>,
        cases: Vec<Case>,
        coolers: Vec<Cooler>,
    ) -> Result<Self> {
        let catalog = Self {
            gpus,
            motherboards,
            cpus,
            ram,
            psus,
            cases,
            coolers,
        };

        for category in Category::ALL {
            let mut seen = HashSet::new();
            for name in catalog.names(category) {
                if !seen.insert(name) {
                    return Err(BuildError::Validation {
                        message: format!(
                            "Duplicate {} name \"{}\" in catalog category '{}'",
                            category.noun(),
                            name,
                            category.catalog_key()
                        ),
                    }
                    .into());
                }
            }
        }

        Ok(catalog)
    }

    pub fn gpus(&self) -> &[Gpu] {
        &self.gpus
    }

    pub fn motherboards(&self) -> &[Motherboard] {
        &self.motherboards
    }

    pub fn cpus(&self) -> &[Cpu] {
        &self.cpus
    }

    pub fn ram(&self) -> &[Ram] {
        &self.ram
    }

    pub fn psus(&self) -> &[Psu] {
        &self.psus
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn coolers(&self) -> &[Cooler] {
        &self.coolers
    }

    /// Names of one category in catalog order
    pub fn names(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Gpu => self.gpus.iter().map(|c| c.name.as_str()).collect(),
            Category::Motherboard => self.motherboards.iter().map(|c| c.name.as_str()).collect(),
            Category::Cpu => self.cpus.iter().map(|c| c.name.as_str()).collect(),
            Category::Ram => self.ram.iter().map(|c| c.name.as_str()).collect(),
            Category::Psu => self.psus.iter().map(|c| c.name.as_str()).collect(),
            Category::Case => self.cases.iter().map(|c| c.name.as_str()).collect(),
            Category::Cooler => self.coolers.iter().map(|c| c.name.as_str()).collect(),
        }
    }

    /// Looks up a component by category and exact name
    pub fn find(&self, category: Category, name: &str) -> Option<Component> {
        fn pick<T: Clone + Into<Component>>(
            items: &[T],
            name: &str,
            name_of: impl Fn(&T) -> &str,
        ) -> Option<Component> {
            items.iter().find(|c| name_of(c) == name).cloned().map(Into::into)
        }

        match category {
            Category::Gpu => pick(&self.gpus, name, |c| c.name.as_str()),
            Category::Motherboard => pick(&self.motherboards, name, |c| c.name.as_str()),
            Category::Cpu => pick(&self.cpus, name, |c| c.name.as_str()),
            Category::Ram => pick(&self.ram, name, |c| c.name.as_str()),
            Category::Psu => pick(&self.psus, name, |c| c.name.as_str()),
            Category::Case => pick(&self.cases, name, |c| c.name.as_str()),
            Category::Cooler => pick(&self.coolers, name, |c| c.name.as_str()),
        }
    }

    /// Total number of records across all categories
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.names(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Subset of the catalog compatible with one selected graphics card
///
/// Recomputed on every GPU change; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibleSet {
    pub gpu: Gpu,
    pub motherboards: Vec<Motherboard>,
    pub cpus: Vec<Cpu>,
    pub ram: Vec<Ram>,
    pub psus: Vec<Psu>,
    pub cases: Vec<Case>,
    pub coolers: Vec<Cooler>,
}

impl CompatibleSet {
    /// Compatible components of one category, in filter output order.
    ///
    /// For `Category::Gpu` this is just the selected card.
    pub fn components(&self, category: Category) -> Vec<Component> {
        fn wrap<T: Clone + Into<Component>>(items: &[T]) -> Vec<Component> {
            items.iter().cloned().map(Into::into).collect()
        }

        match category {
            Category::Gpu => vec![Component::Gpu(self.gpu.clone())],
            Category::Motherboard => wrap(&self.motherboards),
            Category::Cpu => wrap(&self.cpus),
            Category::Ram => wrap(&self.ram),
            Category::Psu => wrap(&self.psus),
            Category::Case => wrap(&self.cases),
            Category::Cooler => wrap(&self.coolers),
        }
    }

    pub fn names(&self, category: Category) -> Vec<String> {
        self.components(category)
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.components(category)
            .iter()
            .any(|c| c.name().as_str() == name)
    }

    pub fn count(&self, category: Category) -> usize {
        self.components(category).len()
    }

    /// Categories for which nothing in the catalog is compatible
    pub fn empty_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.count(*c) == 0)
            .collect()
    }
}
