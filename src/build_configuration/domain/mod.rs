pub mod build_metadata;
pub mod catalog;
pub mod component;
pub mod listing;
pub mod price;
pub mod selection;

pub use build_metadata::BuildMetadata;
pub use catalog::{Catalog, CompatibleSet};
pub use component::{
    Case, Category, Component, ComponentName, ComponentShape, Cooler, CoolerType, Cpu, Gpu,
    Motherboard, Pricing, Psu, Ram, RamType,
};
pub use listing::{Listing, ListingKind, PricedListing};
pub use price::{PriceFormat, PriceKind, PriceRating, PriceSummary};
pub use selection::Selection;
