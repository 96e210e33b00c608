//! Session-scoped field overrides
//!
//! Values typed into the field sidebar. They only live as long as the
//! editing session and are layered over the base profile at render time.

use covlet_profile::OverrideMap;
use serde::Serialize;

/// One row of the override sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    values: OverrideMap,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Remove a single override, returning its previous value
    pub fn clear(&mut self, field: &str) -> Option<String> {
        self.values.remove(field)
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn value_or_blank(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn as_map(&self) -> &OverrideMap {
        &self.values
    }

    /// Sidebar rows for the given fields, in the given order
    pub fn entries_for(&self, fields: &[String]) -> Vec<FieldEntry> {
        fields
            .iter()
            .map(|name| FieldEntry {
                name: name.clone(),
                value: self.value_or_blank(name).to_string(),
            })
            .collect()
    }
}

impl From<OverrideMap> for OverrideStore {
    fn from(values: OverrideMap) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut store = OverrideStore::new();
        assert!(store.is_empty());

        store.set("Name", "Bob");
        assert_eq!(store.get("Name"), Some("Bob"));
        assert_eq!(store.len(), 1);

        assert_eq!(store.clear("Name").as_deref(), Some("Bob"));
        assert_eq!(store.get("Name"), None);
        assert_eq!(store.clear("Name"), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut store = OverrideStore::new();
        store.set("Name", "Bob");
        store.set("Name", "Carol");
        assert_eq!(store.get("Name"), Some("Carol"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let mut store = OverrideStore::new();
        store.set("Name", "Bob");
        store.set("Email", "bob@example.com");
        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_entries_default_to_blank() {
        let mut store = OverrideStore::new();
        store.set("CompanyToApplyTo", "Acme");
        store.set("Unused", "kept");

        let fields = vec!["Name".to_string(), "CompanyToApplyTo".to_string()];
        let entries = store.entries_for(&fields);

        assert_eq!(
            entries,
            vec![
                FieldEntry { name: "Name".to_string(), value: String::new() },
                FieldEntry { name: "CompanyToApplyTo".to_string(), value: "Acme".to_string() },
            ]
        );
        // Overrides for fields not currently shown are kept
        assert_eq!(store.get("Unused"), Some("kept"));
    }
}
