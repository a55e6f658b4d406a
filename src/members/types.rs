//! Access group member wire models

use crate::types::HrefLink;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of an access group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    /// IAM identity of the member
    pub iam_id: String,
    /// Member kind (`user`, `service` or `profile`)
    #[serde(rename = "type")]
    pub member_type: Option<String>,
    /// How the member joined (`static`, `dynamic`)
    pub membership_type: Option<String>,
    /// Display name, present in verbose listings
    pub name: Option<String>,
    /// Email, present for users in verbose listings
    pub email: Option<String>,
    /// Description, present for services in verbose listings
    pub description: Option<String>,
    pub href: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by_id: Option<String>,
}

/// One page of the group members list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMembersPage {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_count: Option<u32>,
    pub first: Option<HrefLink>,
    pub next: Option<HrefLink>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}
