//! HAL document support
//!
//! Models the Spring Data REST flavour of HAL (`_embedded`, `_links`, `page`)
//! and the helpers that turn such a document into a [`PagedCollection`].
//!
//! [`PagedCollection`]: crate::collection::PagedCollection

mod document;
mod helper;
mod proxy;

pub use document::{strip_template, HalDocument, Link, LinkEntry, Links, PageMetadata, Resource};
pub use helper::{create_empty_result, instantiate_collection};
pub use proxy::ProxyRule;
