//! Group template wire models

use crate::types::HrefLink;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An access group template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTemplate {
    /// Unique identifier of the template
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Account the template belongs to
    pub account_id: Option<String>,
    /// Latest version of the template
    pub version: Option<String>,
    /// Whether the latest version is committed
    pub committed: Option<bool>,
    pub href: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by_id: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
    pub last_modified_by_id: Option<String>,
}

/// One version of an access group template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVersion {
    /// Identifier of the owning template
    pub id: Option<String>,
    /// Display name at this version
    pub name: Option<String>,
    pub description: Option<String>,
    pub account_id: Option<String>,
    /// Version number, rendered as a string on the wire
    pub version: Option<String>,
    /// A committed version can be assigned but no longer edited
    pub committed: Option<bool>,
    pub href: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by_id: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
    pub last_modified_by_id: Option<String>,
}

/// One page of the templates list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesPage {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_count: Option<u32>,
    pub first: Option<HrefLink>,
    pub previous: Option<HrefLink>,
    pub last: Option<HrefLink>,
    pub next: Option<HrefLink>,
    #[serde(default)]
    pub group_templates: Vec<GroupTemplate>,
}

/// One page of the template versions list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateVersionsPage {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_count: Option<u32>,
    pub first: Option<HrefLink>,
    pub next: Option<HrefLink>,
    #[serde(default)]
    pub group_template_versions: Vec<TemplateVersion>,
}
