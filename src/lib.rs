//! # hal-pager
//!
//! Typed client for paginated HAL/HATEOAS collections.
//!
//! A [`PagedCollection`] holds one page of a collection resource together
//! with its page counters and its `self`/`next`/`prev`/`first`/`last` links.
//! Navigation methods issue a GET against the relevant link and return a new
//! collection; the receiver is left untouched.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hal_pager::{ClientConfig, HalContext, PagedCollection, Result, Sort};
//!
//! #[derive(serde::Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::load("client.yaml")?;
//!     let context = HalContext::from_config(&config)?;
//!
//!     let users: PagedCollection<User> =
//!         PagedCollection::fetch(context, "http://backend:8080/api/users").await?;
//!
//!     let by_name = users.sort_elements([Sort::asc("name")]).await?;
//!     let second_page = by_name.next().await?;
//!     println!("{} of {}", second_page.len(), second_page.total_elements);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     PagedCollection<T>                       │
//! │  next() prev() first() last() page(n) size(n) sort_elements()│
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬───────────────────┐
//! │  HalContext  │     HAL documents        │     Transport     │
//! ├──────────────┼──────────────────────────┼───────────────────┤
//! │ Proxy rule   │ _embedded / _links /     │ HttpClient        │
//! │ Headers      │ page → collection        │ Retry, Rate Limit │
//! └──────────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request authentication
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// HAL document model and collection instantiation
pub mod hal;

/// Paged collections and their navigation
pub mod collection;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Direction, Sort, SortOrder};

pub use collection::{HalContext, PagedCollection};
pub use config::ClientConfig;
pub use hal::{ProxyRule, Resource};
pub use http::{HttpClient, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
