use super::component::{Case, Category, Component, Cooler, Cpu, Gpu, Motherboard, Psu, Ram};
use crate::shared::error::BuildError;
use crate::shared::Result;

/// Selection - exactly one chosen component per category
///
/// Transient: lives for one build request and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub gpu: Gpu,
    pub motherboard: Motherboard,
    pub cpu: Cpu,
    pub ram: Ram,
    pub psu: Psu,
    pub case: Case,
    pub cooler: Cooler,
}

impl Selection {
    /// Assembles a selection from one component of each category
    ///
    /// # Errors
    /// Returns an error if a category is missing or given more than once
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Result<Self> {
        let mut gpu = None;
        let mut motherboard = None;
        let mut cpu = None;
        let mut ram = None;
        let mut psu = None;
        let mut case = None;
        let mut cooler = None;

        for component in components {
            let category = component.category();
            let duplicate = match component {
                Component::Gpu(c) => gpu.replace(c).is_some(),
                Component::Motherboard(c) => motherboard.replace(c).is_some(),
                Component::Cpu(c) => cpu.replace(c).is_some(),
                Component::Ram(c) => ram.replace(c).is_some(),
                Component::Psu(c) => psu.replace(c).is_some(),
                Component::Case(c) => case.replace(c).is_some(),
                Component::Cooler(c) => cooler.replace(c).is_some(),
            };
            if duplicate {
                return Err(BuildError::Validation {
                    message: format!("Selection contains more than one {}", category.noun()),
                }
                .into());
            }
        }

        fn require<T>(slot: Option<T>, category: Category) -> Result<T> {
            slot.ok_or_else(|| {
                BuildError::Validation {
                    message: format!("Selection is missing a {}", category.noun()),
                }
                .into()
            })
        }

        Ok(Self {
            gpu: require(gpu, Category::Gpu)?,
            motherboard: require(motherboard, Category::Motherboard)?,
            cpu: require(cpu, Category::Cpu)?,
            ram: require(ram, Category::Ram)?,
            psu: require(psu, Category::Psu)?,
            case: require(case, Category::Case)?,
            cooler: require(cooler, Category::Cooler)?,
        })
    }

    pub fn get(&self, category: Category) -> Component {
        match category {
            Category::Gpu => self.gpu.clone().into(),
            Category::Motherboard => self.motherboard.clone().into(),
            Category::Cpu => self.cpu.clone().into(),
            Category::Ram => self.ram.clone().into(),
            Category::Psu => self.psu.clone().into(),
            Category::Case => self.case.clone().into(),
            Category::Cooler => self.cooler.clone().into(),
        }
    }

    /// All selected components in category display order
    pub fn components(&self) -> Vec<Component> {
        Category::ALL.into_iter().map(|c| self.get(c)).collect()
    }
}
