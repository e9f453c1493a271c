//! The paged collection value object and its navigation operations

use super::context::HalContext;
use crate::error::{Error, Result};
use crate::hal;
use crate::types::{Direction, JsonValue, Sort};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};
use url::Url;

/// One page of a HAL collection.
///
/// Counters default to an empty single page: `total_elements = 0`,
/// `total_pages = 1`, `page_number = 1` and no page size.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedCollection<T> {
    #[serde(skip)]
    context: HalContext,

    /// Items of this page, in document order
    pub result: Vec<T>,
    /// Sort criteria this page was requested with
    pub sort_info: Vec<Sort>,

    pub total_elements: u64,
    pub total_pages: u32,
    pub page_number: u32,
    pub page_size: Option<u32>,

    pub self_uri: Option<String>,
    pub next_uri: Option<String>,
    pub prev_uri: Option<String>,
    pub first_uri: Option<String>,
    pub last_uri: Option<String>,
}

impl<T> PagedCollection<T> {
    /// Create an empty collection bound to `context`
    pub fn new(context: HalContext) -> Self {
        Self {
            context,
            result: Vec::new(),
            sort_info: Vec::new(),
            total_elements: 0,
            total_pages: 1,
            page_number: 1,
            page_size: None,
            self_uri: None,
            next_uri: None,
            prev_uri: None,
            first_uri: None,
            last_uri: None,
        }
    }

    /// Append an item
    pub fn push(&mut self, el: T) {
        self.result.push(el);
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.result.iter()
    }

    pub fn context(&self) -> &HalContext {
        &self.context
    }

    /// URL stored for a navigation relation
    pub fn link(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::SelfLink => self.self_uri.as_deref(),
            Direction::Next => self.next_uri.as_deref(),
            Direction::Prev => self.prev_uri.as_deref(),
            Direction::First => self.first_uri.as_deref(),
            Direction::Last => self.last_uri.as_deref(),
        }
    }

    /// Store the URL of a navigation relation
    pub fn set_link(&mut self, direction: Direction, href: impl Into<String>) {
        let href = Some(href.into());
        match direction {
            Direction::SelfLink => self.self_uri = href,
            Direction::Next => self.next_uri = href,
            Direction::Prev => self.prev_uri = href,
            Direction::First => self.first_uri = href,
            Direction::Last => self.last_uri = href,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_uri.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev_uri.is_some()
    }

    pub fn has_first(&self) -> bool {
        self.first_uri.is_some()
    }

    pub fn has_last(&self) -> bool {
        self.last_uri.is_some()
    }

    /// Proxy-resolved URL for `direction`, or the "no <direction> defined" error
    fn resolved_link(&self, direction: Direction) -> Result<String> {
        self.link(direction)
            .map(|uri| self.context.resolve(uri))
            .ok_or_else(|| Error::missing_link(direction))
    }

    /// Self link with `size`, `page` and `sort` parameters.
    ///
    /// Any query already present on the self link is replaced.
    fn query_url(&self, size: Option<u32>, page: Option<u32>, sort: &[Sort]) -> Result<String> {
        let mut url = Url::parse(&self.resolved_link(Direction::SelfLink)?)?;
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            if let Some(size) = size {
                query.append_pair("size", &size.to_string());
            }
            if let Some(page) = page {
                query.append_pair("page", &page.to_string());
            }
            for item in sort {
                query.append_pair("sort", &item.query_value());
            }
        }
        Ok(url.into())
    }
}

impl<T: DeserializeOwned> PagedCollection<T> {
    /// Build a collection from a HAL document
    pub fn init(context: HalContext, document: &JsonValue, sort_info: Vec<Sort>) -> Result<Self> {
        let mut result = hal::create_empty_result(context);
        result.sort_info = sort_info;
        hal::instantiate_collection(document, &mut result)?;
        Ok(result)
    }

    /// Load the collection found at `url`
    pub async fn fetch(context: HalContext, url: &str) -> Result<Self> {
        let url = context.resolve(url);
        Self::load(&context, &url, Vec::new()).await
    }

    async fn load(context: &HalContext, url: &str, sort_info: Vec<Sort>) -> Result<Self> {
        debug!(url, "Loading collection page");
        let document = context
            .transport()
            .get_json(url, context.headers())
            .await?;
        Self::init(context.clone(), &document, sort_info)
    }

    async fn follow(&self, direction: Direction) -> Result<Self> {
        let url = self.resolved_link(direction)?;
        Self::load(&self.context, &url, self.sort_info.clone()).await
    }

    /// Load the next page
    pub async fn next(&self) -> Result<Self> {
        self.follow(Direction::Next).await
    }

    /// Load the previous page
    pub async fn prev(&self) -> Result<Self> {
        self.follow(Direction::Prev).await
    }

    /// Load the first page
    pub async fn first(&self) -> Result<Self> {
        self.follow(Direction::First).await
    }

    /// Load the last page
    pub async fn last(&self) -> Result<Self> {
        self.follow(Direction::Last).await
    }

    /// Load page `id` keeping the current size and sort
    pub async fn page(&self, id: u32) -> Result<Self> {
        let url = self.query_url(self.page_size, Some(id), &self.sort_info)?;
        Self::load(&self.context, &url, self.sort_info.clone()).await
    }

    /// Reload the current page sorted by `sort`
    pub async fn sort_elements(&self, sort: impl IntoIterator<Item = Sort>) -> Result<Self> {
        let sort: Vec<Sort> = sort.into_iter().collect();
        let url = self.query_url(self.page_size, Some(self.page_number), &sort)?;
        Self::load(&self.context, &url, sort).await
    }

    /// Reload with `size` items per page keeping the current sort
    pub async fn size(&self, size: u32) -> Result<Self> {
        let url = self.query_url(Some(size), None, &self.sort_info)?;
        Self::load(&self.context, &url, self.sort_info.clone()).await
    }

    /// Stream this page followed by every page reachable through `next` links.
    ///
    /// Pages are fetched lazily as the stream is polled. A failed fetch is
    /// yielded as the last item. The walk ends at a `next` link that was
    /// already followed, so cyclic links terminate.
    pub fn into_pages(self) -> impl Stream<Item = Result<Self>> {
        let state = (Walk::Start(self), HashSet::new());
        stream::unfold(state, |(walk, mut visited)| async move {
            let page = match walk {
                Walk::Start(page) => page,
                Walk::Follow {
                    context,
                    url,
                    sort_info,
                } => match Self::load(&context, &url, sort_info).await {
                    Ok(page) => page,
                    Err(e) => return Some((Err(e), (Walk::Done, visited))),
                },
                Walk::Done => return None,
            };
            let walk = match page.resolved_link(Direction::Next) {
                Ok(url) if visited.insert(url.clone()) => Walk::Follow {
                    context: page.context.clone(),
                    url,
                    sort_info: page.sort_info.clone(),
                },
                Ok(url) => {
                    warn!(url = %url, "Next link already visited, stopping walk");
                    Walk::Done
                }
                Err(_) => Walk::Done,
            };
            Some((Ok(page), (walk, visited)))
        })
    }
}

enum Walk<T> {
    Start(PagedCollection<T>),
    Follow {
        context: HalContext,
        url: String,
        sort_info: Vec<Sort>,
    },
    Done,
}

impl<T> IntoIterator for PagedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.result.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.result.iter()
    }
}
