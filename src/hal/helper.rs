//! Building collections from HAL documents

use super::document::HalDocument;
use crate::collection::{HalContext, PagedCollection};
use crate::error::Result;
use crate::types::{Direction, JsonValue};
use serde::de::DeserializeOwned;
use tracing::debug;

/// An empty collection bound to `context`
pub fn create_empty_result<T>(context: HalContext) -> PagedCollection<T> {
    PagedCollection::new(context)
}

/// Fill `collection` from a HAL `document`.
///
/// Items are appended to the existing result. Sections missing from the
/// document leave the corresponding fields untouched.
pub fn instantiate_collection<T: DeserializeOwned>(
    document: &JsonValue,
    collection: &mut PagedCollection<T>,
) -> Result<()> {
    let document: HalDocument = serde_json::from_value(document.clone())?;

    for item in document.embedded_items() {
        collection.push(serde_json::from_value(item)?);
    }

    if let Some(page) = document.page {
        if let Some(total) = page.total_elements {
            collection.total_elements = total;
        }
        if let Some(pages) = page.total_pages {
            collection.total_pages = pages;
        }
        if let Some(number) = page.number {
            collection.page_number = number;
        }
        if page.size.is_some() {
            collection.page_size = page.size;
        }
    }

    for direction in [
        Direction::SelfLink,
        Direction::Next,
        Direction::Prev,
        Direction::First,
        Direction::Last,
    ] {
        if let Some(href) = document.links.href(direction.rel()) {
            collection.set_link(direction, href);
        }
    }

    debug!(
        items = collection.len(),
        page = collection.page_number,
        total_pages = collection.total_pages,
        "Instantiated collection"
    );
    Ok(())
}
