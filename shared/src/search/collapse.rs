//! Persisted group collapse state
//!
//! Each navigation list remembers which of its groups the user collapsed,
//! under its own storage key, so the searches and dashboards panels never
//! share state.

use std::collections::HashMap;

use crate::store::{load, save, SharedStore, StoreError};

/// Storage key for the collapse state of a logical list
pub fn storage_key(list_name: &str) -> String {
    format!("collapsedGroups-{}", list_name)
}

/// Group collapse state of one navigation list
pub struct CollapseState {
    store: SharedStore,
    key: String,
    collapsed: HashMap<String, bool>,
}

impl CollapseState {
    /// Load the state of `list_name` from the store
    pub fn load(store: SharedStore, list_name: &str) -> Self {
        let key = storage_key(list_name);
        let collapsed = load::<HashMap<String, bool>>(store.as_ref(), &key).unwrap_or_default();
        Self {
            store,
            key,
            collapsed,
        }
    }

    /// Whether the user collapsed `group`; groups never toggled are expanded
    pub fn is_collapsed(&self, group: &str) -> bool {
        self.collapsed.get(group).copied().unwrap_or(false)
    }

    /// Whether `group` should be shown expanded
    ///
    /// An active search forces every group open without touching the stored
    /// state, so clearing the search restores the previous layout.
    pub fn is_expanded(&self, group: &str, query_active: bool) -> bool {
        query_active || !self.is_collapsed(group)
    }

    /// Flip `group` and persist the whole map, returning the new collapsed value
    pub fn toggle(&mut self, group: &str) -> Result<bool, StoreError> {
        let collapsed = !self.is_collapsed(group);
        self.collapsed.insert(group.to_string(), collapsed);
        save(self.store.as_ref(), &self.key, &self.collapsed)?;
        Ok(collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};
    use serde_json::json;

    #[test]
    fn test_groups_default_to_expanded() {
        let state = CollapseState::load(MemoryStore::shared(), "saved-searches");

        assert!(!state.is_collapsed("prod"));
        assert!(state.is_expanded("prod", false));
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let store = MemoryStore::shared();

        let mut state = CollapseState::load(store.clone(), "saved-searches");
        assert!(state.toggle("prod").unwrap());

        let reloaded = CollapseState::load(store.clone(), "saved-searches");
        assert!(reloaded.is_collapsed("prod"));
        assert!(!reloaded.is_collapsed("staging"));
        assert_eq!(
            store.get("collapsedGroups-saved-searches"),
            Some(json!({"prod": true}))
        );
    }

    #[test]
    fn test_lists_do_not_share_state() {
        let store = MemoryStore::shared();

        let mut searches = CollapseState::load(store.clone(), "saved-searches");
        searches.toggle("prod").unwrap();

        let mut dashboards = CollapseState::load(store.clone(), "dashboards");
        assert!(!dashboards.is_collapsed("prod"));
        dashboards.toggle("infra").unwrap();

        let searches = CollapseState::load(store, "saved-searches");
        assert!(searches.is_collapsed("prod"));
        assert!(!searches.is_collapsed("infra"));
    }

    #[test]
    fn test_active_query_forces_expanded_without_mutation() {
        let store = MemoryStore::shared();
        let mut state = CollapseState::load(store.clone(), "dashboards");
        state.toggle("infra").unwrap();

        assert!(state.is_expanded("infra", true));
        assert!(state.is_collapsed("infra"));
        assert!(!state.is_expanded("infra", false));
        assert_eq!(
            store.get("collapsedGroups-dashboards"),
            Some(json!({"infra": true}))
        );
    }

    #[test]
    fn test_toggle_twice_expands_again() {
        let mut state = CollapseState::load(MemoryStore::shared(), "dashboards");

        assert!(state.toggle("infra").unwrap());
        assert!(!state.toggle("infra").unwrap());
        assert!(state.is_expanded("infra", false));
    }
}
