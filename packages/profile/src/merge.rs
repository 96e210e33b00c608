//! # Record Merging
//!
//! Layers session overrides on top of a base profile. The base is never
//! touched; every call produces a fresh copy.

use crate::{Profile, ScalarField};
use std::collections::HashMap;
use tracing::debug;

/// Field name → replacement value
pub type OverrideMap = HashMap<String, String>;

/// Produce a copy of `base` with every known scalar field present in
/// `overrides` replaced. Unknown keys are ignored. Empty values are
/// legal overrides.
pub fn merge(base: &Profile, overrides: &OverrideMap) -> Profile {
    let mut merged = base.clone();
    if overrides.is_empty() {
        return merged;
    }

    for field in ScalarField::ALL {
        if let Some(value) = overrides.get(field.name()) {
            field.set(&mut merged, value.clone());
        }
    }

    for key in overrides.keys() {
        if ScalarField::from_name(key).is_none() {
            debug!(field = %key, "ignoring override for non-overridable field");
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Experience;

    fn base() -> Profile {
        Profile {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            skills: vec!["rust".to_string()],
            experience: vec![Experience {
                company: "Initech".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_overrides_returns_equal_copy() {
        let base = base();
        let merged = merge(&base, &OverrideMap::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_override_replaces_only_named_field() {
        let base = base();
        let overrides = OverrideMap::from([("Name".to_string(), "X".to_string())]);

        let merged = merge(&base, &overrides);

        assert_eq!(merged.name, "X");
        assert_eq!(merged.email, base.email);
        assert_eq!(merged.experience, base.experience);
        // Base untouched
        assert_eq!(base.name, "Alice");
    }

    #[test]
    fn test_unknown_override_is_ignored() {
        let base = base();
        let overrides = OverrideMap::from([("UnknownField".to_string(), "X".to_string())]);
        assert_eq!(merge(&base, &overrides), base);
    }

    #[test]
    fn test_list_fields_are_not_overridable() {
        let base = base();
        let overrides = OverrideMap::from([
            ("Skills".to_string(), "none".to_string()),
            ("Experience".to_string(), "none".to_string()),
        ]);
        assert_eq!(merge(&base, &overrides), base);
    }

    #[test]
    fn test_empty_string_is_a_legal_override() {
        let base = base();
        let overrides = OverrideMap::from([("Email".to_string(), String::new())]);
        let merged = merge(&base, &overrides);
        assert_eq!(merged.email, "");
    }

    #[test]
    fn test_all_scalar_fields_overridable() {
        let base = base();
        let overrides: OverrideMap = ScalarField::ALL
            .iter()
            .map(|f| (f.name().to_string(), format!("{}!", f.name())))
            .collect();

        let merged = merge(&base, &overrides);
        for field in ScalarField::ALL {
            assert_eq!(field.get(&merged), format!("{}!", field.name()));
        }
    }
}
