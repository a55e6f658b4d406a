//! Access groups list endpoint
//!
//! `GET /v2/groups` — all access groups of an account, with the filters
//! the service accepts, paged through the generic [`Pager`].

mod types;

pub use types::{Group, GroupsPage};

use crate::client::ServiceClient;
use crate::error::Result;
use crate::pager::{next_cursor_from_href, Page, PageFetcher, PageQuery, Pager};
use crate::types::{HrefLink, LIMIT_PARAM, OFFSET_PARAM};
use async_trait::async_trait;
use std::sync::Arc;

const GROUPS_PATH: &str = "/v2/groups";

/// Query builder for listing an account's access groups
#[derive(Debug, Clone)]
pub struct ListGroupsQuery {
    query: PageQuery,
}

impl ListGroupsQuery {
    /// List the access groups of an account
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            query: PageQuery::new().param("account_id", account_id),
        }
    }

    /// Only groups the given IAM identity is a member of
    #[must_use]
    pub fn iam_id(mut self, iam_id: impl Into<String>) -> Self {
        self.query = self.query.param("iam_id", iam_id);
        self
    }

    /// Filter groups by name or description
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.query = self.query.param("search", search);
        self
    }

    /// Membership type filter (`static`, `dynamic` or `all`)
    #[must_use]
    pub fn membership_type(mut self, membership_type: impl Into<String>) -> Self {
        self.query = self.query.param("membership_type", membership_type);
        self
    }

    /// Omit the account's Public Access group from the results
    #[must_use]
    pub fn hide_public_access(mut self, hide: bool) -> Self {
        self.query = self.query.param("hide_public_access", hide.to_string());
        self
    }

    /// Sort attribute (`name`, `description`, ...)
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.query = self.query.param("sort", sort);
        self
    }

    /// Page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.query = self.query.limit(limit);
        self
    }

    /// Render into the pager's base query
    pub fn into_page_query(self) -> PageQuery {
        self.query
    }
}

/// Fetch capability for the access groups list endpoint
pub struct GroupsFetcher {
    client: Arc<ServiceClient>,
}

impl GroupsFetcher {
    /// Create a fetcher over a service client
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher<Group> for GroupsFetcher {
    async fn fetch(&self, query: &PageQuery) -> Result<Page<Group>> {
        let page: GroupsPage = self
            .client
            .get_json(GROUPS_PATH, &query.to_pairs(LIMIT_PARAM, OFFSET_PARAM))
            .await?;
        let next = next_cursor_from_href(
            page.next.as_ref().and_then(HrefLink::href),
            OFFSET_PARAM,
        );
        Ok(Page::new(page.groups, next))
    }
}

/// Create a pager over an account's access groups
pub fn pager(client: Arc<ServiceClient>, query: ListGroupsQuery) -> Result<Pager<Group>> {
    Pager::new(
        Arc::new(GroupsFetcher::new(client)),
        query.into_page_query(),
    )
}

#[cfg(test)]
mod tests;
