use crate::shared::error::BuildError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for component names (security limit)
const MAX_COMPONENT_NAME_LENGTH: usize = 255;

/// The seven fixed component categories, in build display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gpu,
    Motherboard,
    Cpu,
    Ram,
    Psu,
    Case,
    Cooler,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Gpu,
        Category::Motherboard,
        Category::Cpu,
        Category::Ram,
        Category::Psu,
        Category::Case,
        Category::Cooler,
    ];

    /// Short key used in config files (`gpu`, `motherboard`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            Category::Gpu => "gpu",
            Category::Motherboard => "motherboard",
            Category::Cpu => "cpu",
            Category::Ram => "ram",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Cooler => "cooler",
        }
    }

    /// Top-level key of this category in a catalog document
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Category::Gpu => "gpus",
            Category::Motherboard => "motherboards",
            Category::Cpu => "cpus",
            Category::Ram => "ram",
            Category::Psu => "psus",
            Category::Case => "cases",
            Category::Cooler => "coolers",
        }
    }

    /// Human-readable label used in reports and CSV export
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gpu => "Graphics Card",
            Category::Motherboard => "Motherboard",
            Category::Cpu => "Processor",
            Category::Ram => "Memory",
            Category::Psu => "Power Supply",
            Category::Case => "Case",
            Category::Cooler => "CPU Cooler",
        }
    }

    /// Lowercase noun used inside error messages
    pub fn noun(&self) -> &'static str {
        match self {
            Category::Gpu => "graphics card",
            Category::Motherboard => "motherboard",
            Category::Cpu => "processor",
            Category::Ram => "memory kit",
            Category::Psu => "power supply",
            Category::Case => "case",
            Category::Cooler => "CPU cooler",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == lowered || c.catalog_key() == lowered)
            .ok_or_else(|| {
                format!(
                    "Unknown component category: {}. Expected one of: {}",
                    s,
                    Category::ALL
                        .iter()
                        .map(|c| c.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// NewType wrapper for component name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BuildError::Validation {
                message: "Component name cannot be empty".to_string(),
            }
            .into());
        }

        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            return Err(BuildError::Validation {
                message: format!(
                    "Component name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_COMPONENT_NAME_LENGTH
                ),
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// New and used price of a component
///
/// `used` is not required to be lower than `new`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    new: f64,
    used: f64,
}

impl Pricing {
    pub fn new(new: f64, used: f64) -> Result<Self> {
        if !new.is_finite() || new <= 0.0 {
            return Err(BuildError::Validation {
                message: format!("price_new must be a positive number, got {}", new),
            }
            .into());
        }
        if !used.is_finite() || used < 0.0 {
            return Err(BuildError::Validation {
                message: format!("price_used must be a non-negative number, got {}", used),
            }
            .into());
        }
        Ok(Self { new, used })
    }

    pub fn new_price(&self) -> f64 {
        self.new
    }

    pub fn used_price(&self) -> f64 {
        self.used
    }
}

/// Memory generation of a RAM kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RamType {
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl RamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RamType::Ddr4 => "DDR4",
            RamType::Ddr5 => "DDR5",
        }
    }
}

/// Cooling technology of a CPU cooler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoolerType {
    Air,
    #[serde(rename = "AIO")]
    Aio,
}

impl CoolerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoolerType::Air => "Air",
            CoolerType::Aio => "AIO",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gpu {
    pub name: ComponentName,
    pub pricing: Pricing,
    /// Board power in watts
    pub power: u32,
    /// Card length in millimetres
    pub length: u32,
}

impl Gpu {
    pub fn new(
        name: &str,
        price_new: f64,
        price_used: f64,
        power: u32,
        length: u32,
    ) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            power,
            length,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cpu {
    pub name: ComponentName,
    pub pricing: Pricing,
    pub socket: String,
    /// Package power in watts
    pub power: u32,
}

impl Cpu {
    pub fn new(
        name: &str,
        price_new: f64,
        price_used: f64,
        socket: &str,
        power: u32,
    ) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            socket: socket.to_string(),
            power,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motherboard {
    pub name: ComponentName,
    pub pricing: Pricing,
    pub socket: String,
    pub form_factor: String,
}

impl Motherboard {
    pub fn new(
        name: &str,
        price_new: f64,
        price_used: f64,
        socket: &str,
        form_factor: &str,
    ) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            socket: socket.to_string(),
            form_factor: form_factor.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ram {
    pub name: ComponentName,
    pub pricing: Pricing,
    pub ram_type: RamType,
}

impl Ram {
    pub fn new(name: &str, price_new: f64, price_used: f64, ram_type: RamType) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            ram_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Psu {
    pub name: ComponentName,
    pub pricing: Pricing,
    pub watts: u32,
}

impl Psu {
    pub fn new(name: &str, price_new: f64, price_used: f64, watts: u32) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            watts,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub name: ComponentName,
    pub pricing: Pricing,
    /// Longest graphics card the case fits, in millimetres
    pub max_gpu_length: u32,
    pub supported_form_factors: Vec<String>,
}

impl Case {
    pub fn new(
        name: &str,
        price_new: f64,
        price_used: f64,
        max_gpu_length: u32,
        supported_form_factors: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            max_gpu_length,
            supported_form_factors: supported_form_factors
                .iter()
                .map(|f| f.to_string())
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cooler {
    pub name: ComponentName,
    pub pricing: Pricing,
    pub cooler_type: CoolerType,
}

impl Cooler {
    pub fn new(
        name: &str,
        price_new: f64,
        price_used: f64,
        cooler_type: CoolerType,
    ) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            pricing: Pricing::new(price_new, price_used)?,
            cooler_type,
        })
    }
}

/// Which attributes a component record carries
///
/// Mirrors the field set of the record as it appears in a catalog document,
/// so category inference can be done from structure alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentShape<'a> {
    pub has_power: bool,
    pub has_length: bool,
    pub has_socket: bool,
    pub has_form_factor: bool,
    pub has_watts: bool,
    pub has_max_gpu_length: bool,
    pub type_tag: Option<&'a str>,
}

/// A catalog record tagged with its category at load time
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Gpu(Gpu),
    Motherboard(Motherboard),
    Cpu(Cpu),
    Ram(Ram),
    Psu(Psu),
    Case(Case),
    Cooler(Cooler),
}

impl Component {
    pub fn category(&self) -> Category {
        match self {
            Component::Gpu(_) => Category::Gpu,
            Component::Motherboard(_) => Category::Motherboard,
            Component::Cpu(_) => Category::Cpu,
            Component::Ram(_) => Category::Ram,
            Component::Psu(_) => Category::Psu,
            Component::Case(_) => Category::Case,
            Component::Cooler(_) => Category::Cooler,
        }
    }

    pub fn name(&self) -> &ComponentName {
        match self {
            Component::Gpu(c) => &c.name,
            Component::Motherboard(c) => &c.name,
            Component::Cpu(c) => &c.name,
            Component::Ram(c) => &c.name,
            Component::Psu(c) => &c.name,
            Component::Case(c) => &c.name,
            Component::Cooler(c) => &c.name,
        }
    }

    pub fn pricing(&self) -> Pricing {
        match self {
            Component::Gpu(c) => c.pricing,
            Component::Motherboard(c) => c.pricing,
            Component::Cpu(c) => c.pricing,
            Component::Ram(c) => c.pricing,
            Component::Psu(c) => c.pricing,
            Component::Case(c) => c.pricing,
            Component::Cooler(c) => c.pricing,
        }
    }

    pub fn shape(&self) -> ComponentShape<'_> {
        match self {
            Component::Gpu(_) => ComponentShape {
                has_power: true,
                has_length: true,
                ..Default::default()
            },
            Component::Cpu(_) => ComponentShape {
                has_socket: true,
                has_power: true,
                ..Default::default()
            },
            Component::Motherboard(_) => ComponentShape {
                has_socket: true,
                has_form_factor: true,
                ..Default::default()
            },
            Component::Psu(_) => ComponentShape {
                has_watts: true,
                ..Default::default()
            },
            Component::Case(_) => ComponentShape {
                has_max_gpu_length: true,
                ..Default::default()
            },
            Component::Cooler(c) => ComponentShape {
                type_tag: Some(c.cooler_type.as_str()),
                ..Default::default()
            },
            Component::Ram(c) => ComponentShape {
                type_tag: Some(c.ram_type.as_str()),
                ..Default::default()
            },
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Component {
                fn from(record: $variant) -> Self {
                    Component::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(Gpu, Motherboard, Cpu, Ram, Psu, Case, Cooler);
