//! Group templates and template versions list endpoints
//!
//! `GET /v1/group_templates` — the templates of an account.
//! `GET /v1/group_templates/{template_id}/versions` — the versions of one
//! template. Both page the same way as the groups endpoints.

mod types;

pub use types::{GroupTemplate, TemplatesPage, TemplateVersion, TemplateVersionsPage};

use crate::client::ServiceClient;
use crate::error::Result;
use crate::pager::{next_cursor_from_href, Page, PageFetcher, PageQuery, Pager};
use crate::types::{HrefLink, LIMIT_PARAM, OFFSET_PARAM};
use async_trait::async_trait;
use std::sync::Arc;

const TEMPLATES_PATH: &str = "/v1/group_templates";

/// Query builder for listing an account's group templates
#[derive(Debug, Clone)]
pub struct ListTemplatesQuery {
    query: PageQuery,
}

impl ListTemplatesQuery {
    /// List the group templates of an account
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            query: PageQuery::new().param("account_id", account_id),
        }
    }

    /// Include the full template body in each item
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

    /// Render into the pager's base query
    pub fn into_page_query(self) -> PageQuery {
        self.query
    }
}

/// Query builder for listing the versions of a group template
#[derive(Debug, Clone)]
pub struct ListTemplateVersionsQuery {
    template_id: String,
    query: PageQuery,
}

impl ListTemplateVersionsQuery {
    /// List the versions of the given template
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            query: PageQuery::new(),
        }
    }

    /// Page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.query = self.query.limit(limit);
        self
    }
}

/// Fetch capability for the templates list endpoint
pub struct TemplatesFetcher {
    client: Arc<ServiceClient>,
}

impl TemplatesFetcher {
    /// Create a fetcher over a service client
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher<GroupTemplate> for TemplatesFetcher {
    async fn fetch(&self, query: &PageQuery) -> Result<Page<GroupTemplate>> {
        let page: TemplatesPage = self
            .client
            .get_json(TEMPLATES_PATH, &query.to_pairs(LIMIT_PARAM, OFFSET_PARAM))
            .await?;
        let next = next_cursor_from_href(
            page.next.as_ref().and_then(HrefLink::href),
            OFFSET_PARAM,
        );
        Ok(Page::new(page.group_templates, next))
    }
}

/// Fetch capability for the template versions list endpoint
pub struct TemplateVersionsFetcher {
    client: Arc<ServiceClient>,
    template_id: String,
}

impl TemplateVersionsFetcher {
    /// Create a fetcher for one template's version list
    pub fn new(client: Arc<ServiceClient>, template_id: impl Into<String>) -> Self {
        Self {
            client,
            template_id: template_id.into(),
        }
    }

    fn path(&self) -> String {
        format!("{TEMPLATES_PATH}/{}/versions", self.template_id)
    }
}

#[async_trait]
impl PageFetcher<TemplateVersion> for TemplateVersionsFetcher {
    async fn fetch(&self, query: &PageQuery) -> Result<Page<TemplateVersion>> {
        let page: TemplateVersionsPage = self
            .client
            .get_json(&self.path(), &query.to_pairs(LIMIT_PARAM, OFFSET_PARAM))
            .await?;
        let next = next_cursor_from_href(
            page.next.as_ref().and_then(HrefLink::href),
            OFFSET_PARAM,
        );
        Ok(Page::new(page.group_template_versions, next))
    }
}

/// Create a pager over an account's group templates
pub fn pager(client: Arc<ServiceClient>, query: ListTemplatesQuery) -> Result<Pager<GroupTemplate>> {
    Pager::new(
        Arc::new(TemplatesFetcher::new(client)),
        query.into_page_query(),
    )
}

/// Create a pager over a template's versions
pub fn versions_pager(
    client: Arc<ServiceClient>,
    query: ListTemplateVersionsQuery,
) -> Result<Pager<TemplateVersion>> {
    let ListTemplateVersionsQuery { template_id, query } = query;
    Pager::new(
        Arc::new(TemplateVersionsFetcher::new(client, template_id)),
        query,
    )
}

#[cfg(test)]
mod tests;
