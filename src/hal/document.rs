//! HAL document model

use crate::types::{JsonObject, JsonValue, OptionStringExt};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// RFC 6570 expressions such as `{?page,size,sort}`
static URI_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Remove URI template expressions from an href
pub fn strip_template(href: &str) -> String {
    URI_TEMPLATE.replace_all(href, "").into_owned()
}

/// A single HAL link object
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

impl Link {
    /// Create a plain link
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: false,
        }
    }

    /// Href with template expressions removed
    pub fn resolved_href(&self) -> String {
        if self.templated {
            strip_template(&self.href)
        } else {
            self.href.clone()
        }
    }
}

/// A relation may hold one link or an array of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEntry {
    One(Link),
    Many(Vec<Link>),
}

impl LinkEntry {
    /// First link of the relation
    pub fn first(&self) -> Option<&Link> {
        match self {
            LinkEntry::One(link) => Some(link),
            LinkEntry::Many(links) => links.first(),
        }
    }
}

/// The `_links` section, keyed by relation name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(pub BTreeMap<String, LinkEntry>);

impl Links {
    /// Resolved href for `rel`, if present and non-empty
    pub fn href(&self, rel: &str) -> Option<String> {
        self.0
            .get(rel)
            .and_then(LinkEntry::first)
            .map(Link::resolved_href)
            .none_if_empty()
    }

    /// Insert a plain link
    pub fn insert(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        self.0.insert(rel.into(), LinkEntry::One(Link::new(href)));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The `page` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
}

/// A paged HAL collection response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HalDocument {
    #[serde(rename = "_embedded", default, deserialize_with = "null_as_default")]
    pub embedded: JsonObject,
    #[serde(rename = "_links", default, deserialize_with = "null_as_default")]
    pub links: Links,
    #[serde(default)]
    pub page: Option<PageMetadata>,
}

/// Treat an explicit `null` like a missing section
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl HalDocument {
    /// Every embedded item, relations in key order, items in document order.
    ///
    /// A relation holding a single object counts as one item.
    pub fn embedded_items(&self) -> Vec<JsonValue> {
        let mut items = Vec::new();
        for value in self.embedded.values() {
            match value {
                JsonValue::Array(values) => items.extend(values.iter().cloned()),
                JsonValue::Null => {}
                other => items.push(other.clone()),
            }
        }
        items
    }
}

/// An embedded item together with its own `_links`.
///
/// Use as the element type of a collection when item links matter:
/// `PagedCollection<Resource<User>>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Links::is_empty"
    )]
    pub links: Links,
}

impl<T> Resource<T> {
    /// The item's `self` href
    pub fn self_href(&self) -> Option<String> {
        self.links.href("self")
    }
}
