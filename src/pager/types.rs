//! Pager types and the fetch-capability trait
//!
//! Defines the query, page, and fetcher abstractions the generic pager
//! is built on.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

/// A list request: immutable base filters plus the mutable cursor slot
/// the pager advances between fetches.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// Filter parameters, set at construction and never touched by the pager
    pub params: HashMap<String, String>,
    /// Requested page size; service-defined default when unset
    pub limit: Option<u32>,
    /// Position of the next page; unset before the first fetch
    pub cursor: Option<String>,
}

impl PageQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validate the base query
    ///
    /// An explicitly-set limit of zero is rejected; the cursor slot is
    /// expected to be unset at construction time.
    pub fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(Error::invalid_argument("limit must be a positive integer"));
        }
        Ok(())
    }

    /// Render the query as wire parameter pairs
    ///
    /// Filter parameters come first in sorted order (deterministic request
    /// shape), followed by the limit and cursor under the given parameter
    /// names when set.
    pub fn to_pairs(&self, limit_param: &str, cursor_param: &str) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort();
        if let Some(limit) = self.limit {
            pairs.push((limit_param.to_string(), limit.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push((cursor_param.to_string(), cursor.clone()));
        }
        pairs
    }
}

/// One batch of items returned by a single fetch call
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in service-defined order
    pub items: Vec<T>,
    /// Cursor for the following page; `None` (or empty) means this was
    /// the last page
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Create a page with a continuation cursor
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Create a final page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }

    /// Check whether a further page is advertised
    pub fn has_more(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// The list-endpoint capability a pager drives
///
/// Implementations translate a [`PageQuery`] into one request against a
/// list endpoint and map the response envelope back into a [`Page`].
/// Errors are opaque to the pager and surfaced to the caller unmodified.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch a single page for the given query
    async fn fetch(&self, query: &PageQuery) -> Result<Page<T>>;
}

/// Extract the next cursor from a pagination href link
///
/// The service advertises the next page as a `next.href` URL carrying the
/// cursor in a query parameter. A missing href, an unparsable href, or an
/// absent parameter all yield `None`, which the pager treats as
/// end-of-pagination so a drifting wire format can never loop forever.
pub fn next_cursor_from_href(href: Option<&str>, param: &str) -> Option<String> {
    let href = href?;
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
