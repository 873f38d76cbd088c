//! Paging types shared by the list endpoints of the YouTube Data API.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll, ready};
use tokio_stream::Stream;

/// One page of a list endpoint's results.
#[derive(Debug)]
pub struct Page<T> {
    pub items: VecDeque<T>,
    pub next_page_token: Option<String>,
}

type PendingPage<'a, T, F> = Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + Send + 'a>>;

enum PageState<'a, T, F> {
    Fetching(PendingPage<'a, T, F>),
    Exhausted,
}

/// A forward-only stream over every item of a paginated list endpoint.
///
/// The fetcher is called with `None` for the first page and with the previous page's
/// `nextPageToken` afterwards. The next page is only requested once the buffered items of the
/// current page have all been yielded. The first error ends the stream.
pub struct PagedStream<'a, T, F> {
    buffered: VecDeque<T>,
    state: PageState<'a, T, F>,
}

impl<'a, T, F, Fut> PagedStream<'a, T, F>
where
    T: Send + 'a,
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    pub fn new(fetcher: F) -> Self {
        Self {
            buffered: VecDeque::new(),
            state: PageState::Fetching(Self::fetch(fetcher, None)),
        }
    }

    fn fetch(fetcher: F, page_token: Option<String>) -> PendingPage<'a, T, F> {
        Box::pin(async move {
            let page = fetcher(page_token).await?;
            Ok((fetcher, page))
        })
    }
}

impl<'a, T, F, Fut> Stream for PagedStream<'a, T, F>
where
    T: Send + Unpin + 'a,
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            let PageState::Fetching(pending) = &mut self.state else {
                return Poll::Ready(None);
            };

            let (fetcher, page) = match ready!(pending.as_mut().poll(cx)) {
                Ok(fetched) => fetched,
                Err(e) => {
                    self.state = PageState::Exhausted;
                    return Poll::Ready(Some(Err(e)));
                }
            };

            self.buffered.extend(page.items);
            self.state = match page.next_page_token {
                Some(token) => PageState::Fetching(Self::fetch(fetcher, Some(token))),
                None => PageState::Exhausted,
            };
        }
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// Envelope shared by every `*.list` response.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list#response>
#[derive(Debug, serde::Deserialize)]
pub struct ListResponse<T> {
    /// A list of resources that match the request criteria.
    pub items: VecDeque<T>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token for the `pageToken` parameter to retrieve the next page.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl<T> ListResponse<T> {
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.items,
            next_page_token: self.next_page_token,
        }
    }
}
