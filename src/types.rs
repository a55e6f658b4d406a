//! Shared wire types
//!
//! Types common to every list-endpoint envelope of the service.

use serde::{Deserialize, Serialize};

/// Query parameter carrying the cursor on every list endpoint
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter carrying the page size on every list endpoint
pub const LIMIT_PARAM: &str = "limit";

/// A pagination link in a list response (`first`, `next`, `previous`, `last`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrefLink {
    /// Full URL of the linked page
    pub href: Option<String>,
}

impl HrefLink {
    /// The link's href, if present
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}
