//! Access group members list endpoint
//!
//! `GET /v2/groups/{access_group_id}/members` — the memberships of one
//! group. The group id is a path element, so it lives on the fetcher
//! rather than in the query parameters.

mod types;

pub use types::{GroupMember, GroupMembersPage};

use crate::client::ServiceClient;
use crate::error::Result;
use crate::pager::{next_cursor_from_href, Page, PageFetcher, PageQuery, Pager};
use crate::types::{HrefLink, LIMIT_PARAM, OFFSET_PARAM};
use async_trait::async_trait;
use std::sync::Arc;

/// Query builder for listing the members of an access group
#[derive(Debug, Clone)]
pub struct ListGroupMembersQuery {
    access_group_id: String,
    query: PageQuery,
}

impl ListGroupMembersQuery {
    /// List the members of the given access group
    pub fn new(access_group_id: impl Into<String>) -> Self {
        Self {
            access_group_id: access_group_id.into(),
            query: PageQuery::new(),
        }
    }

    /// Membership type filter (`static`, `dynamic` or `all`)
    #[must_use]
    pub fn membership_type(mut self, membership_type: impl Into<String>) -> Self {
        self.query = self.query.param("membership_type", membership_type);
        self
    }

    /// Return name, email and description for each member
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.query = self.query.param("verbose", verbose.to_string());
        self
    }

    /// Page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.query = self.query.limit(limit);
        self
    }
}

/// Fetch capability for the group members list endpoint
pub struct GroupMembersFetcher {
    client: Arc<ServiceClient>,
    access_group_id: String,
}

impl GroupMembersFetcher {
    /// Create a fetcher for one group's member list
    pub fn new(client: Arc<ServiceClient>, access_group_id: impl Into<String>) -> Self {
        Self {
            client,
            access_group_id: access_group_id.into(),
        }
    }

    fn path(&self) -> String {
        format!("/v2/groups/{}/members", self.access_group_id)
    }
}

#[async_trait]
impl PageFetcher<GroupMember> for GroupMembersFetcher {
    async fn fetch(&self, query: &PageQuery) -> Result<Page<GroupMember>> {
        let page: GroupMembersPage = self
            .client
            .get_json(&self.path(), &query.to_pairs(LIMIT_PARAM, OFFSET_PARAM))
            .await?;
        let next = next_cursor_from_href(
            page.next.as_ref().and_then(HrefLink::href),
            OFFSET_PARAM,
        );
        Ok(Page::new(page.members, next))
    }
}

/// Create a pager over an access group's members
pub fn pager(
    client: Arc<ServiceClient>,
    query: ListGroupMembersQuery,
) -> Result<Pager<GroupMember>> {
    let ListGroupMembersQuery {
        access_group_id,
        query,
    } = query;
    Pager::new(
        Arc::new(GroupMembersFetcher::new(client, access_group_id)),
        query,
    )
}
