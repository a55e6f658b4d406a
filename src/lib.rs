//! # IAM Access Groups client
//!
//! A client for the IAM Access Groups service built around a single
//! generic cursor-based pager. The service's four list endpoints all
//! paginate the same way — an offset cursor advertised through a
//! `next.href` link — so one [`pager::Pager`] parameterized by a
//! [`pager::PageFetcher`] capability replaces the per-resource pager
//! classes of the generated SDKs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iam_access_groups::{groups, ClientConfig, Result, ServiceClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(ServiceClient::with_config(
//!         ClientConfig::builder().bearer_token("...").build(),
//!     )?);
//!
//!     let mut pager = groups::pager(
//!         client,
//!         groups::ListGroupsQuery::new("accountid-123")
//!             .hide_public_access(true)
//!             .limit(50),
//!     )?;
//!
//!     while pager.has_next() {
//!         for group in pager.get_next().await? {
//!             println!("{} {}", group.id, group.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Pager<T>                           │
//! │   has_next()    get_next() → Vec<T>    get_all() → Vec<T> │
//! └───────────────────────────┬───────────────────────────────┘
//!                             │ PageFetcher<T>
//! ┌──────────────┬────────────┴───┬──────────────┬────────────┐
//! │    groups    │    members     │  templates   │  versions  │
//! ├──────────────┴────────────────┴──────────────┴────────────┤
//! │              ServiceClient (reqwest, JSON GET)            │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Retry policy, credential management and token refresh are the
//! caller's concern; this crate issues each request once and surfaces
//! failures unmodified.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the wire model fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Shared wire types
pub mod types;

/// Generic cursor-based pager and the fetch-capability trait
pub mod pager;

/// Thin HTTP client for the service
pub mod client;

/// Access groups list endpoint
pub mod groups;

/// Access group members list endpoint
pub mod members;

/// Group templates and template versions list endpoints
pub mod templates;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ClientConfig, ServiceClient, DEFAULT_SERVICE_URL};
pub use error::{Error, Result};
pub use pager::{Page, PageFetcher, PageQuery, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
