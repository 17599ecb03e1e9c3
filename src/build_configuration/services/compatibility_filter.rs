use crate::build_configuration::domain::{Catalog, CompatibleSet, Cpu, Gpu, Motherboard};
use crate::build_configuration::policies::CompatibilityRules;

/// CompatibilityFilter service - narrows the catalog down to one graphics card
///
/// - PSUs: rated output must cover the GPU draw with headroom
/// - Cases: must fit the card's length
/// - Motherboards/CPUs: kept when they share a socket with at least one
///   partner of the other kind
/// - RAM and coolers: passed through unfiltered
///
/// Pure and deterministic. An empty category is a valid result.
pub struct CompatibilityFilter;

impl CompatibilityFilter {
    pub fn filter_compatible(gpu: &Gpu, catalog: &Catalog) -> CompatibleSet {
        let psus = catalog
            .psus()
            .iter()
            .filter(|psu| CompatibilityRules::check_power_requirements(gpu.power, 0, psu.watts))
            .cloned()
            .collect();

        let cases = catalog
            .cases()
            .iter()
            .filter(|case| {
                CompatibilityRules::check_case_compatibility(gpu.length, case.max_gpu_length)
            })
            .cloned()
            .collect();

        let (motherboards, cpus) =
            Self::match_sockets(catalog.motherboards(), catalog.cpus());

        CompatibleSet {
            gpu: gpu.clone(),
            motherboards,
            cpus,
            ram: catalog.ram().to_vec(),
            psus,
            cases,
            coolers: catalog.coolers().to_vec(),
        }
    }

    /// Walks motherboards × CPUs and keeps both members of every pair with
    /// equal sockets, each at most once.
    ///
    /// Output order is discovery order: motherboards in catalog order, CPUs
    /// in the order they first match a motherboard.
    fn match_sockets(motherboards: &[Motherboard], cpus: &[Cpu]) -> (Vec<Motherboard>, Vec<Cpu>) {
        let mut matched_boards: Vec<Motherboard> = Vec::new();
        let mut matched_cpus: Vec<Cpu> = Vec::new();

        for board in motherboards {
            for cpu in cpus {
                if !CompatibilityRules::check_cpu_motherboard_compatibility(
                    &cpu.socket,
                    &board.socket,
                ) {
                    continue;
                }
                if !matched_boards.iter().any(|b| b.name == board.name) {
                    matched_boards.push(board.clone());
                }
                if !matched_cpus.iter().any(|c| c.name == cpu.name) {
                    matched_cpus.push(cpu.clone());
                }
            }
        }

        (matched_boards, matched_cpus)
    }
}
