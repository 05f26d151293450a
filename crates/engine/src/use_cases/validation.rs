//! Export-readiness checks for a wizard document.
//!
//! Validation never fails: it returns the list of problems, and an empty list
//! means the document is ready to export. Whether to block an export on a
//! non-empty list is up to the caller.

use serde::Serialize;

use civmod_domain::WizardDocument;

/// One problem, addressed by its wire path (e.g. `units[2].unit_type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn required(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("{} is required", path);
        Self { path, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Report every missing required field in `document`.
///
/// Each rule is evaluated on its own, so one call lists all problems.
pub fn validate(document: &WizardDocument) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut require = |value: &str, path: String| {
        if value.trim().is_empty() {
            errors.push(FieldError::required(path));
        }
    };

    let civilization = document.civilization();
    require(
        &civilization.civilization_type,
        "civilization.civilization_type".to_string(),
    );
    require(
        civilization
            .primary_localization()
            .map(|l| l.name.as_str())
            .unwrap_or_default(),
        "civilization.localizations[0].name".to_string(),
    );

    for (i, unit) in document.units().iter().enumerate() {
        require(&unit.id, format!("units[{}].id", i));
        require(&unit.unit_type, format!("units[{}].unit_type", i));

        for (j, ability) in unit.abilities.iter().enumerate() {
            let path = format!("units[{}].unit_abilities[{}]", i, j);
            require(&ability.ability_id, format!("{}.ability_id", path));
            require(ability.ability_type.value(), format!("{}.ability_type", path));
            require(&ability.description, format!("{}.description", path));
            if ability.ability_type.is_custom() && ability.modifiers.is_empty() {
                require("", format!("{}.modifiers", path));
            }
        }
    }

    for (i, building) in document.constructibles().iter().enumerate() {
        require(&building.id, format!("constructibles[{}].id", i));
        require(
            &building.constructible_type,
            format!("constructibles[{}].constructible_type", i),
        );
    }

    for (i, modifier) in document.modifiers().iter().enumerate() {
        require(&modifier.id, format!("modifiers[{}].id", i));
        require(&modifier.effect, format!("modifiers[{}].modifier.effect", i));
        require(
            &modifier.collection,
            format!("modifiers[{}].modifier.collection", i),
        );
    }

    for (i, tradition) in document.traditions().iter().enumerate() {
        if !tradition.is_custom() {
            continue;
        }
        require(&tradition.id, format!("traditions[{}].id", i));
        require(
            &tradition.tradition_type,
            format!("traditions[{}].tradition_type", i),
        );
        require(&tradition.name, format!("traditions[{}].localizations[0].name", i));
    }

    errors
}
