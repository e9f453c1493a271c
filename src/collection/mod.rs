//! Paged collection module
//!
//! A [`PagedCollection`] is one page of a HAL collection resource together
//! with the links needed to move to neighbouring pages. Every navigation call
//! returns a brand new collection; the receiver is never modified.
//!
//! # Example
//!
//! ```rust,ignore
//! use hal_pager::{HalContext, PagedCollection, Sort};
//!
//! let context = HalContext::from_config(&config)?;
//! let users: PagedCollection<User> =
//!     PagedCollection::fetch(context, "http://localhost:8080/api/users").await?;
//!
//! let sorted = users.sort_elements([Sort::desc("createdAt")]).await?;
//! if sorted.has_next() {
//!     let second = sorted.next().await?;
//! }
//! ```

mod context;
mod paged;

pub use context::{HalContext, HAL_JSON};
pub use paged::PagedCollection;
