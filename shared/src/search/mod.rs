//! Grouped Search Index
//!
//! Powers the saved searches and saved dashboards panels of the side
//! navigation:
//! - fuzzy filtering of entities by display name
//! - fan-out of the filtered list into one group per tag
//! - per-group collapse state, overridden while a search is active
//!
//! Everything here is a pure function of the entity list, the query and the
//! collapse state, so views can re-derive it on every render.

pub mod collapse;
pub mod fuzzy;

pub use collapse::CollapseState;
pub use fuzzy::{FuzzyMatch, FuzzyMatcher, DEFAULT_THRESHOLD};

use indexmap::IndexMap;

use crate::entities::NamedEntity;

/// Label of the group holding entities without tags
pub const DEFAULT_UNTAGGED_GROUP: &str = "Other";

/// Entities sharing one tag, in filtered-list order
#[derive(Debug)]
pub struct SearchGroup<'a, T> {
    pub name: String,
    pub items: Vec<&'a T>,
}

/// A group ready for display
#[derive(Debug)]
pub struct GroupView<'a, T> {
    pub name: String,
    pub items: Vec<&'a T>,
    pub expanded: bool,
}

/// What a list shows instead of (or besides) its groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAffordance {
    /// The list has results to show
    Items,
    /// The source list itself is empty
    NoItems,
    /// The source list has entities but none matched the query
    NoResults(String),
}

/// Fully derived state of one navigation list
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub groups: Vec<GroupView<'a, T>>,
    pub match_count: usize,
    pub affordance: ListAffordance,
}

/// Searchable, tag-partitioned view over a list of named entities
pub struct GroupedSearchIndex<'a, T> {
    items: &'a [T],
    matcher: FuzzyMatcher,
    untagged_label: String,
}

impl<'a, T: NamedEntity> GroupedSearchIndex<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            matcher: FuzzyMatcher::default(),
            untagged_label: DEFAULT_UNTAGGED_GROUP.to_string(),
        }
    }

    pub fn with_untagged_label(mut self, label: impl Into<String>) -> Self {
        self.untagged_label = label.into();
        self
    }

    pub fn with_matcher(mut self, matcher: FuzzyMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn untagged_label(&self) -> &str {
        &self.untagged_label
    }

    /// Only lists with more than one entity offer a search box
    pub fn is_searchable(&self) -> bool {
        self.items.len() > 1
    }

    /// Entities whose name matches `query`
    ///
    /// An empty query returns every entity in source order; otherwise results
    /// come back in relevance order.
    pub fn filter(&self, query: &str) -> Vec<&'a T> {
        if query.is_empty() {
            return self.items.iter().collect();
        }

        let items = self.items;
        self.matcher
            .rank(query, items.iter().map(|item| item.name()))
            .into_iter()
            .map(|m| &items[m.index])
            .collect()
    }

    /// Partition `filtered` by tag
    ///
    /// An entity appears once in the group of each distinct tag it carries.
    /// Tag groups come in first-seen order; untagged entities go to a single
    /// trailing group that only exists when it has members.
    pub fn group(&self, filtered: &[&'a T]) -> Vec<SearchGroup<'a, T>> {
        let mut groups: IndexMap<&str, Vec<&'a T>> = IndexMap::new();
        let mut untagged: Vec<&'a T> = Vec::new();

        for &item in filtered {
            let tags = item.tags();
            if tags.is_empty() {
                untagged.push(item);
                continue;
            }
            for (position, tag) in tags.iter().enumerate() {
                if tags[..position].contains(tag) {
                    continue;
                }
                groups.entry(tag.as_str()).or_default().push(item);
            }
        }

        if !untagged.is_empty() {
            groups
                .entry(self.untagged_label.as_str())
                .or_default()
                .extend(untagged);
        }

        groups
            .into_iter()
            .map(|(name, items)| SearchGroup {
                name: name.to_string(),
                items,
            })
            .collect()
    }

    /// Filter, group and resolve collapse state in one pass
    pub fn view(&self, query: &str, collapse: &CollapseState) -> ListView<'a, T> {
        let filtered = self.filter(query);
        let query_active = !query.is_empty();

        let affordance = if self.items.is_empty() {
            ListAffordance::NoItems
        } else if query_active && filtered.is_empty() {
            ListAffordance::NoResults(query.to_string())
        } else {
            ListAffordance::Items
        };

        let groups = self
            .group(&filtered)
            .into_iter()
            .map(|group| GroupView {
                expanded: collapse.is_expanded(&group.name, query_active),
                name: group.name,
                items: group.items,
            })
            .collect();

        ListView {
            groups,
            match_count: filtered.len(),
            affordance,
        }
    }
}
