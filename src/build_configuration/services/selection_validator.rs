use crate::build_configuration::domain::{Category, CompatibleSet, Selection};
use crate::shared::error::BuildError;
use crate::shared::Result;

/// SelectionValidator service - re-checks a selection against its compatible set
///
/// The compatible set only offers compatible options, but a selection can be
/// assembled by other means. Every chosen component must appear in the set
/// derived from the chosen graphics card.
pub struct SelectionValidator;

impl SelectionValidator {
    /// # Errors
    /// Returns `BuildError::InvalidSelection` for the first category whose
    /// component is not part of `compatible`
    pub fn validate(selection: &Selection, compatible: &CompatibleSet) -> Result<()> {
        if selection.gpu.name != compatible.gpu.name {
            return Err(BuildError::InvalidSelection {
                category: Category::Gpu.noun().to_string(),
                name: selection.gpu.name.to_string(),
                reason: format!(
                    "the compatible set was computed for \"{}\"",
                    compatible.gpu.name
                ),
            }
            .into());
        }

        for component in selection.components() {
            let category = component.category();
            if !compatible.contains(category, component.name().as_str()) {
                return Err(BuildError::InvalidSelection {
                    category: category.noun().to_string(),
                    name: component.name().to_string(),
                    reason: format!(
                        "not compatible with graphics card \"{}\"",
                        compatible.gpu.name
                    ),
                }
                .into());
            }
        }

        Ok(())
    }
}
