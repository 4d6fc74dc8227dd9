//! Option registry: the fixed, ordered list of models the selector offers

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Models offered when no registry is configured, in display order.
pub const AVAILABLE_MODELS: &[(&str, &str)] = &[
    ("claude-sonnet-4-5", "Sonnet 4.5"),
    ("claude-opus-4-5", "Opus 4.5"),
];

/// A single selectable model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    /// Stable identifier reported to the owner on selection
    pub id: String,

    /// Text shown in the trigger and overlay rows
    pub label: String,
}

impl ModelOption {
    /// Create a new option
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Errors raised when building a registry from untrusted configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry has no options, so there is nothing to fall back to
    #[error("model registry must contain at least one option")]
    Empty,

    /// Two options share the same id
    #[error("duplicate model id: {0}")]
    DuplicateId(String),
}

/// Ordered, non-empty list of options with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ModelOption>", into = "Vec<ModelOption>")]
pub struct Registry {
    options: Vec<ModelOption>,
}

impl Registry {
    /// Build a registry, rejecting empty lists and duplicate ids
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] for an empty list and
    /// [`RegistryError::DuplicateId`] for the first repeated id.
    pub fn new(options: Vec<ModelOption>) -> Result<Self, RegistryError> {
        if options.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id.as_str()) {
                return Err(RegistryError::DuplicateId(option.id.clone()));
            }
        }

        Ok(Self { options })
    }

    /// The built-in model table
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            options: AVAILABLE_MODELS
                .iter()
                .map(|&(id, label)| ModelOption::new(id, label))
                .collect(),
        }
    }

    /// All options, in registry order
    #[must_use]
    pub fn options(&self) -> &[ModelOption] {
        &self.options
    }

    /// Iterate options in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, ModelOption> {
        self.options.iter()
    }

    /// Number of options (never zero)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`; a registry cannot be empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up an option by exact id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModelOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// First option in registry order
    #[must_use]
    pub fn first(&self) -> &ModelOption {
        // Non-empty by construction.
        &self.options[0]
    }

    /// The option to display for `selected_id`, falling back to the first entry
    #[must_use]
    pub fn current(&self, selected_id: &str) -> &ModelOption {
        self.get(selected_id).unwrap_or_else(|| self.first())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<ModelOption>> for Registry {
    type Error = RegistryError;

    fn try_from(options: Vec<ModelOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl From<Registry> for Vec<ModelOption> {
    fn from(registry: Registry) -> Self {
        registry.options
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ModelOption;
    type IntoIter = std::slice::Iter<'a, ModelOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn alpha_beta() -> Result<Registry, RegistryError> {
        Registry::new(vec![
            ModelOption::new("a", "Alpha"),
            ModelOption::new("b", "Beta"),
        ])
    }

    #[test]
    fn test_builtin_matches_table() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), AVAILABLE_MODELS.len());
        assert_eq!(registry.first().id, "claude-sonnet-4-5");
        assert_eq!(registry.first().label, "Sonnet 4.5");
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let ids: Vec<ModelOption> = Registry::builtin().into();
        assert!(Registry::new(ids).is_ok());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Registry::new(Vec::new()), Err(RegistryError::Empty));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Registry::new(vec![
            ModelOption::new("a", "Alpha"),
            ModelOption::new("a", "Also Alpha"),
        ]);
        assert_eq!(result, Err(RegistryError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_get_exact_match() -> Result<(), RegistryError> {
        let registry = alpha_beta()?;
        assert_eq!(registry.get("b").map(|o| o.label.as_str()), Some("Beta"));
        assert!(registry.get("B").is_none());
        Ok(())
    }

    #[test]
    fn test_current_falls_back_to_first() -> Result<(), RegistryError> {
        let registry = alpha_beta()?;
        assert_eq!(registry.current("b").label, "Beta");
        assert_eq!(registry.current("missing").label, "Alpha");
        assert_eq!(registry.current("").label, "Alpha");
        Ok(())
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Registry, _> =
            serde_json::from_str(r#"[{"id":"a","label":"Alpha"},{"id":"b","label":"Beta"}]"#);
        assert!(ok.is_ok());

        let empty: Result<Registry, _> = serde_json::from_str("[]");
        assert!(empty.is_err());

        let dup: Result<Registry, _> =
            serde_json::from_str(r#"[{"id":"a","label":"A"},{"id":"a","label":"B"}]"#);
        assert!(dup.is_err());
    }

    #[test]
    fn test_serialize_is_plain_list() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&alpha_beta()?)?;
        assert_eq!(
            json,
            r#"[{"id":"a","label":"Alpha"},{"id":"b","label":"Beta"}]"#
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_unmatched_id_shows_first_label(
            labels in proptest::collection::vec("[A-Za-z ]{1,12}", 1..6),
            selected in "[a-z]{0,8}",
        ) {
            let options: Vec<ModelOption> = labels
                .iter()
                .enumerate()
                .map(|(i, label)| ModelOption::new(format!("id-{i}"), label.clone()))
                .collect();
            let first_label = options[0].label.clone();
            let registry = Registry::new(options).map_err(|e| TestCaseError::fail(e.to_string()))?;

            // Generated ids never contain a dash, so they can't match "id-N".
            prop_assert_eq!(&registry.current(&selected).label, &first_label);
        }
    }
}
