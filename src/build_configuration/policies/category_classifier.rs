use crate::build_configuration::domain::{Category, Component, ComponentShape};

/// CategoryClassifier policy - infers a component's category from its shape
///
/// Rules are evaluated in order and the first match wins:
/// 1. power and length → GPU
/// 2. socket and power → CPU
/// 3. socket and form_factor → Motherboard
/// 4. watts → PSU
/// 5. max_gpu_length → Case
/// 6. type is Air or AIO → Cooler
/// 7. type is DDR5 → RAM
///
/// A DDR4 memory kit matches none of the rules and stays unclassified.
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn classify(component: &Component) -> Option<Category> {
        Self::classify_shape(&component.shape())
    }

    pub fn classify_shape(shape: &ComponentShape<'_>) -> Option<Category> {
        if shape.has_power && shape.has_length {
            Some(Category::Gpu)
        } else if shape.has_socket && shape.has_power {
            Some(Category::Cpu)
        } else if shape.has_socket && shape.has_form_factor {
            Some(Category::Motherboard)
        } else if shape.has_watts {
            Some(Category::Psu)
        } else if shape.has_max_gpu_length {
            Some(Category::Case)
        } else if matches!(shape.type_tag, Some("Air") | Some("AIO")) {
            Some(Category::Cooler)
        } else if shape.type_tag == Some("DDR5") {
            Some(Category::Ram)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_configuration::domain::{
        Case, Cooler, CoolerType, Cpu, Gpu, Motherboard, Psu, Ram, RamType,
    };

    #[test]
    fn test_classifies_every_tagged_record() {
        let cases: Vec<(Component, Category)> = vec![
            (Gpu::new("RTX 4070", 6500.0, 5000.0, 200, 285).unwrap().into(), Category::Gpu),
            (Cpu::new("i5-13600K", 3500.0, 2600.0, "LGA1700", 125).unwrap().into(), Category::Cpu),
            (
                Motherboard::new("B760", 2200.0, 1500.0, "LGA1700", "ATX").unwrap().into(),
                Category::Motherboard,
            ),
            (Psu::new("RM850x", 1500.0, 1000.0, 850).unwrap().into(), Category::Psu),
            (Case::new("H510", 900.0, 600.0, 381, &["ATX"]).unwrap().into(), Category::Case),
            (
                Cooler::new("NH-D15", 1100.0, 750.0, CoolerType::Air).unwrap().into(),
                Category::Cooler,
            ),
            (
                Cooler::new("Kraken 240", 1500.0, 900.0, CoolerType::Aio).unwrap().into(),
                Category::Cooler,
            ),
            (Ram::new("Fury 32GB", 1200.0, 800.0, RamType::Ddr5).unwrap().into(), Category::Ram),
        ];

        for (component, expected) in cases {
            assert_eq!(CategoryClassifier::classify(&component), Some(expected));
        }
    }

    #[test]
    fn test_ddr4_memory_is_unclassified() {
        let ram: Component = Ram::new("Vengeance LPX 16GB", 800.0, 500.0, RamType::Ddr4)
            .unwrap()
            .into();
        assert_eq!(CategoryClassifier::classify(&ram), None);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // power + length + socket: GPU rule comes before CPU rule
        let shape = ComponentShape {
            has_power: true,
            has_length: true,
            has_socket: true,
            ..Default::default()
        };
        assert_eq!(CategoryClassifier::classify_shape(&shape), Some(Category::Gpu));

        // socket + power + form_factor: CPU rule comes before motherboard rule
        let shape = ComponentShape {
            has_socket: true,
            has_power: true,
            has_form_factor: true,
            ..Default::default()
        };
        assert_eq!(CategoryClassifier::classify_shape(&shape), Some(Category::Cpu));

        // watts wins over a cooler type tag
        let shape = ComponentShape {
            has_watts: true,
            type_tag: Some("Air"),
            ..Default::default()
        };
        assert_eq!(CategoryClassifier::classify_shape(&shape), Some(Category::Psu));
    }

    #[test]
    fn test_empty_shape_is_unclassified() {
        assert_eq!(CategoryClassifier::classify_shape(&ComponentShape::default()), None);
        let shape = ComponentShape {
            type_tag: Some("Liquid"),
            ..Default::default()
        };
        assert_eq!(CategoryClassifier::classify_shape(&shape), None);
    }
}
