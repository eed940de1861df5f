//! Event query builder.

use chrono::{DateTime, Utc};

use crate::filter::Filter;

/// Largest page the events API serves.
pub const MAX_LIMIT: u32 = 300;

/// Parameters for one events API query.
///
/// # Examples
///
/// ```
/// use mailgun_events_client::{EventQuery, Filter};
///
/// let query = EventQuery::new()
///     .ascending(true)
///     .filter(Filter::Tags("summer-sale-2018".into()))
///     .filter(Filter::Event("delivered".into()));
///
/// let params = query.to_params();
/// assert_eq!(params[0], ("limit".to_string(), "300".to_string()));
/// assert_eq!(params[1], ("ascending".to_string(), "true".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    begin: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    ascending: Option<bool>,
    limit: u32,
    filters: Vec<Filter>,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            begin: None,
            end: None,
            ascending: None,
            limit: MAX_LIMIT,
            filters: Vec::new(),
        }
    }
}

impl EventQuery {
    /// Creates an unfiltered query with the maximum page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only events at or after `begin`.
    pub fn begin(mut self, begin: DateTime<Utc>) -> Self {
        self.begin = Some(begin);
        self
    }

    /// Only events before `end`.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Sort order of the results.
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = Some(ascending);
        self
    }

    /// Page size, clamped to `1..=300`.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    /// Adds a filter. Adding the same field twice sends it twice.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds several filters.
    pub fn filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = Filter>,
    {
        self.filters.extend(filters);
        self
    }

    /// The filters added so far.
    pub fn filter_list(&self) -> &[Filter] {
        &self.filters
    }

    /// The page size.
    pub fn page_limit(&self) -> u32 {
        self.limit
    }

    /// Query string pairs: limit, begin, end, ascending, then filters.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("limit".to_string(), self.limit.to_string())];
        if let Some(begin) = &self.begin {
            params.push(("begin".to_string(), format_rfc1123(begin)));
        }
        if let Some(end) = &self.end {
            params.push(("end".to_string(), format_rfc1123(end)));
        }
        if let Some(ascending) = self.ascending {
            params.push(("ascending".to_string(), ascending.to_string()));
        }
        params.extend(
            self.filters
                .iter()
                .map(|f| (f.name().to_string(), f.value().to_string())),
        );
        params
    }
}

/// Formats a time as RFC 1123, e.g. `Thu, 22 Aug 2013 22:40:56 UTC`.
pub fn format_rfc1123(time: &DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}
