//! Request parameters.
//!
//! A [`Params`] value holds everything one call sends in the query string:
//! caller options, the identifiers resource wrappers merge in, and any
//! number of field filters. Keys the client does not recognize pass
//! through to the API untouched, which is how endpoint-specific options
//! such as `resultsperpage` or `semailaddress` are expressed.

use std::collections::BTreeMap;

/// Query parameters for a single API call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, String>,
    filters: Vec<Filter>,
}

/// One field filter, sent as an indexed
/// `filter[field][i]` / `filter[operator][i]` / `filter[value][i]` triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one parameter, replacing any previous value for the key
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries.insert(key.into(), value.to_string());
        self
    }

    /// Add a field filter, e.g.
    /// `filter("datesubmitted", ">=", "2024-01-01")`.
    ///
    /// Filters keep their insertion order on the wire.
    pub fn filter(
        mut self,
        field: impl ToString,
        operator: impl ToString,
        value: impl ToString,
    ) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Look up a plain parameter by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.filters.is_empty()
    }

    /// Filters added so far, in insertion order
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// All query pairs: plain entries in key order, then the encoded
    /// filter triples.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (i, filter) in self.filters.iter().enumerate() {
            pairs.push((format!("filter[field][{i}]"), filter.field.clone()));
            pairs.push((format!("filter[operator][{i}]"), filter.operator.clone()));
            pairs.push((format!("filter[value][{i}]"), filter.value.clone()));
        }
        pairs
    }
}
