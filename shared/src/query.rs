//! Shareable URL state
//!
//! The alerts tag filter and the search page's text and time range live in
//! the query string so views can be shared by link. Values are read leniently: anything missing or
//! unreadable reads as empty.

use url::form_urlencoded;

/// Alerts tag filter parameter (repeated once per tag)
pub const TAGS_PARAM: &str = "tags";

/// Ordered query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse `location.search`, with or without the leading `?`
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(search.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value of `key`, empty when missing
    pub fn get_str(&self, key: &str) -> String {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Every non-empty value of `key`
    pub fn get_array(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, value)| k == key && !value.is_empty())
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Replace `key` with a single value; an empty value removes it
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.remove(key);
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Replace `key` with one entry per value
    pub fn set_array(&mut self, key: &str, values: &[String]) {
        self.remove(key);
        self.pairs.extend(
            values
                .iter()
                .filter(|value| !value.is_empty())
                .map(|value| (key.to_string(), value.clone())),
        );
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Time range of the current search view, when both bounds are set
    pub fn time_range(&self) -> Option<TimeRange> {
        let from = self.get_str("from").parse::<i64>().ok().filter(|v| *v != -1)?;
        let to = self.get_str("to").parse::<i64>().ok().filter(|v| *v != -1)?;
        Some(TimeRange {
            from,
            to,
            input: self.get_str("tq"),
        })
    }
}

/// Selected time range of the search page, carried onto saved search links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// Start, epoch milliseconds
    pub from: i64,
    /// End, epoch milliseconds
    pub to: i64,
    /// Time range as typed by the user
    pub input: String,
}

/// Link to a saved search, keeping the active time range
pub fn saved_search_href(id: &str, time_range: Option<&TimeRange>) -> String {
    let mut params = QueryParams::default();
    if let Some(range) = time_range {
        params.set_str("from", &range.from.to_string());
        params.set_str("to", &range.to.to_string());
        params.pairs.push(("tq".to_string(), range.input.clone()));
    }
    format!("/search/{}?{}", id, params.to_query_string())
}

/// Link to a saved dashboard
pub fn dashboard_href(id: &str) -> String {
    format!("/dashboards/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_read_as_empty() {
        let params = QueryParams::parse("");

        assert_eq!(params.get_str("q"), "");
        assert!(params.get_array(TAGS_PARAM).is_empty());
    }

    #[test]
    fn test_parse_repeated_tags() {
        let params = QueryParams::parse("?tags=prod&tags=web%20tier&tags=&q=level%3Aerr");

        assert_eq!(params.get_array(TAGS_PARAM), vec!["prod", "web tier"]);
        assert_eq!(params.get_str("q"), "level:err");
    }

    #[test]
    fn test_set_and_encode() {
        let mut params = QueryParams::parse("q=old&from=1");
        params.set_array(TAGS_PARAM, &["a b".to_string(), "c".to_string()]);
        params.set_str("q", "");

        assert_eq!(params.to_query_string(), "from=1&tags=a+b&tags=c");

        let reparsed = QueryParams::parse(&params.to_query_string());
        assert_eq!(reparsed.get_array(TAGS_PARAM), vec!["a b", "c"]);
        assert_eq!(reparsed.get_str("q"), "");
    }

    #[test]
    fn test_time_range_requires_both_bounds() {
        assert_eq!(QueryParams::parse("from=10").time_range(), None);
        assert_eq!(QueryParams::parse("from=-1&to=20").time_range(), None);
        assert_eq!(QueryParams::parse("from=abc&to=20").time_range(), None);

        let range = QueryParams::parse("from=10&to=20&tq=Past%201h").time_range();
        assert_eq!(
            range,
            Some(TimeRange {
                from: 10,
                to: 20,
                input: "Past 1h".to_string()
            })
        );
    }

    #[test]
    fn test_saved_search_href() {
        assert_eq!(saved_search_href("s1", None), "/search/s1?");

        let range = TimeRange {
            from: 10,
            to: 20,
            input: "Past 1h".to_string(),
        };
        assert_eq!(
            saved_search_href("s1", Some(&range)),
            "/search/s1?from=10&to=20&tq=Past+1h"
        );
        assert_eq!(dashboard_href("d1"), "/dashboards/d1");
    }
}
