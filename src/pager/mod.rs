//! Generic cursor-based pager
//!
//! Supports: incremental page retrieval, bulk retrieval, stream adaptation
//!
//! # Overview
//!
//! The pager module hides page-boundary mechanics behind a single generic
//! type. A [`Pager`] owns an immutable base query and drives a
//! caller-supplied [`PageFetcher`] through the cursor sequence the service
//! hands back, one fetch per page, until no next cursor is advertised.
//!
//! The per-resource modules in this crate all instantiate the same pager;
//! only the item type and the fetcher differ.

mod types;

pub use types::{next_cursor_from_href, Page, PageFetcher, PageQuery};

use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use std::sync::Arc;
use tracing::debug;

/// Drives cursor-based pagination over a list endpoint
///
/// A pager is created from a base query and a fetch capability, mutated
/// in place by each page fetch, and discarded once exhausted. It holds no
/// resources requiring release. The fetching operations take `&mut self`,
/// so one logical flow drives a pager at a time; independent pagers over
/// the same collection may run concurrently.
pub struct Pager<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    base: PageQuery,
    cursor: Option<String>,
    started: bool,
    finished: bool,
}

impl<T> Pager<T> {
    /// Create a pager over a base query
    ///
    /// Fails with `InvalidArgument` if the base query is malformed.
    pub fn new(fetcher: Arc<dyn PageFetcher<T>>, base: PageQuery) -> Result<Self> {
        base.validate()?;
        Ok(Self {
            fetcher,
            base,
            cursor: None,
            started: false,
            finished: false,
        })
    }

    /// Check whether a further page can be requested
    ///
    /// True on a fresh pager even though no fetch has occurred; false once
    /// a fetch yields no next cursor. Pure query, no side effect.
    pub fn has_next(&self) -> bool {
        !self.started || !self.finished
    }

    /// Fetch the next page of items
    ///
    /// Performs exactly one fetch. On success the returned next cursor
    /// (absent or empty meaning exhausted) becomes the new cursor state.
    /// On failure no state is mutated, so calling again re-issues the
    /// identical request; the fetch error is propagated unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidState` if called when `has_next()` is false.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        if !self.has_next() {
            return Err(Error::invalid_state(
                "no more pages; has_next() must be checked before get_next()",
            ));
        }

        let mut query = self.base.clone();
        query.cursor = self.cursor.clone();

        let page = self.fetcher.fetch(&query).await?;

        self.started = true;
        if page.has_more() {
            self.cursor = page.next_cursor;
        } else {
            self.cursor = None;
            self.finished = true;
        }

        debug!(
            items = page.items.len(),
            finished = self.finished,
            "fetched page"
        );
        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the items in fetch order
    ///
    /// Iterates a fresh cursor sequence from the base query, independent of
    /// any prior `get_next` calls on this instance. Fetches are sequential;
    /// the next cursor depends on the previous response. On any fetch error
    /// the partial accumulation is discarded and the error returned. An
    /// empty collection yields an empty vector, not an error.
    pub async fn get_all(&mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_count = 0u32;

        loop {
            let mut query = self.base.clone();
            query.cursor = cursor;

            let page = self.fetcher.fetch(&query).await?;
            page_count += 1;

            let more = page.has_more();
            let next_cursor = page.next_cursor;
            all_items.extend(page.items);

            if !more {
                break;
            }
            cursor = next_cursor;
        }

        // The instance is consumed: later has_next() reports false.
        self.started = true;
        self.finished = true;
        self.cursor = None;

        debug!(items = all_items.len(), pages = page_count, "fetched all pages");
        Ok(all_items)
    }

    /// Adapt the pager into a stream of pages
    ///
    /// Yields one `Vec<T>` per page and terminates after the last page or
    /// the first error.
    pub fn pages(self) -> impl Stream<Item = Result<Vec<T>>> {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((items, pager)))
        })
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("base", &self.base)
            .field("cursor", &self.cursor)
            .field("started", &self.started)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
