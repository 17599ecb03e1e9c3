//! JSON catalog document schema and conversion into the domain catalog.
//!
//! The document is keyed by category (`gpus`, `motherboards`, `cpus`, `ram`,
//! `psus`, `cases`, `coolers`). Every key is required. Unknown fields on a
//! record are ignored; missing or mistyped fields fail the whole load.

use crate::build_configuration::domain::{
    Case, Catalog, Cooler, CoolerType, Cpu, Gpu, Motherboard, Psu, Ram, RamType,
};
use crate::shared::error::BuildError;
use crate::shared::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    gpus: Vec<GpuEntry>,
    motherboards: Vec<MotherboardEntry>,
    cpus: Vec<CpuEntry>,
    ram: Vec<RamEntry>,
    psus: Vec<PsuEntry>,
    cases: Vec<CaseEntry>,
    coolers: Vec<CoolerEntry>,
}

#[derive(Debug, Deserialize)]
struct GpuEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    power: u32,
    length: u32,
}

#[derive(Debug, Deserialize)]
struct MotherboardEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    socket: String,
    form_factor: String,
}

#[derive(Debug, Deserialize)]
struct CpuEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    socket: String,
    power: u32,
}

#[derive(Debug, Deserialize)]
struct RamEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    #[serde(rename = "type")]
    ram_type: RamType,
}

#[derive(Debug, Deserialize)]
struct PsuEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    watts: u32,
}

#[derive(Debug, Deserialize)]
struct CaseEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    max_gpu_length: u32,
    supported_form_factors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CoolerEntry {
    name: String,
    price_new: f64,
    price_used: f64,
    #[serde(rename = "type")]
    cooler_type: CoolerType,
}

/// Parses a catalog document
///
/// # Arguments
/// * `content` - Raw JSON text
/// * `origin` - Where the text came from (file path or "bundled catalog"), for error messages
///
/// # Errors
/// Returns `BuildError::CatalogLoadError` on any syntax or schema violation
pub fn parse_catalog(content: &str, origin: &str) -> Result<Catalog> {
    parse_document(content).map_err(|details| {
        BuildError::CatalogLoadError {
            origin: origin.to_string(),
            details,
        }
        .into()
    })
}

/// Parses and converts a document, returning the failure details as text
pub(super) fn parse_document(content: &str) -> std::result::Result<Catalog, String> {
    let document: CatalogDocument = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let gpus = convert(document.gpus, "gpus", |e| {
        Gpu::new(&e.name, e.price_new, e.price_used, e.power, e.length)
    })?;
    let motherboards = convert(document.motherboards, "motherboards", |e| {
        Motherboard::new(&e.name, e.price_new, e.price_used, &e.socket, &e.form_factor)
    })?;
    let cpus = convert(document.cpus, "cpus", |e| {
        Cpu::new(&e.name, e.price_new, e.price_used, &e.socket, e.power)
    })?;
    let ram = convert(document.ram, "ram", |e| {
        Ram::new(&e.name, e.price_new, e.price_used, e.ram_type)
    })?;
    let psus = convert(document.psus, "psus", |e| {
        Psu::new(&e.name, e.price_new, e.price_used, e.watts)
    })?;
    let cases = convert(document.cases, "cases", |e| {
        let form_factors: Vec<&str> = e.supported_form_factors.iter().map(String::as_str).collect();
        Case::new(&e.name, e.price_new, e.price_used, e.max_gpu_length, &form_factors)
    })?;
    let coolers = convert(document.coolers, "coolers", |e| {
        Cooler::new(&e.name, e.price_new, e.price_used, e.cooler_type)
    })?;

    Catalog::new(gpus, motherboards, cpus, ram, psus, cases, coolers).map_err(|e| e.to_string())
}

/// Converts every entry of one category, naming the first failing index
fn convert<E, T>(
    entries: Vec<E>,
    key: &str,
    to_domain: impl Fn(E) -> Result<T>,
) -> std::result::Result<Vec<T>, String> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| to_domain(entry).map_err(|e| format!("{}[{}]: {}", key, i, e)))
        .collect()
}
