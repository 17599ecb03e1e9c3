/// CompatibilityRules policy - hardware compatibility predicates
///
/// Power checks apply a fixed 50% headroom to cover the draw of
/// everything that is not the GPU or the CPU.
pub struct CompatibilityRules;

/// Multiplier applied to component power draw when sizing a PSU
pub const POWER_HEADROOM: f64 = 1.5;

impl CompatibilityRules {
    /// Minimum PSU wattage for a given draw, headroom included
    pub fn required_psu_watts(draw_watts: u32) -> f64 {
        f64::from(draw_watts) * POWER_HEADROOM
    }

    /// True iff the PSU covers GPU + CPU draw with headroom
    ///
    /// # Arguments
    /// * `gpu_power` - GPU board power in watts
    /// * `cpu_power` - CPU package power in watts
    /// * `psu_watts` - PSU rated output in watts
    pub fn check_power_requirements(gpu_power: u32, cpu_power: u32, psu_watts: u32) -> bool {
        f64::from(psu_watts) >= Self::required_psu_watts(gpu_power.saturating_add(cpu_power))
    }

    /// True iff the GPU fits in the case
    pub fn check_case_compatibility(gpu_length: u32, case_max_length: u32) -> bool {
        gpu_length <= case_max_length
    }

    /// True iff the sockets are identical (exact, case-sensitive)
    pub fn check_cpu_motherboard_compatibility(cpu_socket: &str, motherboard_socket: &str) -> bool {
        cpu_socket == motherboard_socket
    }

    /// True iff the case lists the motherboard's form factor
    pub fn check_motherboard_case_compatibility(
        form_factor: &str,
        supported_form_factors: &[String],
    ) -> bool {
        supported_form_factors.iter().any(|f| f == form_factor)
    }
}
