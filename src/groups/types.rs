//! Access group wire models

use crate::types::HrefLink;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An access group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier of the group
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Account the group belongs to
    pub account_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by_id: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
    pub last_modified_by_id: Option<String>,
    /// URL of this group resource
    pub href: Option<String>,
    /// Whether the group came from a federation rule
    pub is_federated: Option<bool>,
}

/// One page of the access groups list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GroupsPage {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_count: Option<u32>,
    pub first: Option<HrefLink>,
    pub previous: Option<HrefLink>,
    pub last: Option<HrefLink>,
    pub next: Option<HrefLink>,
    #[serde(default)]
    pub groups: Vec<Group>,
}
