//! HTTP client for the YouTube Data API v3, authenticated with an API key.

use crate::api::Api;
use crate::config::{Config, MAX_PAGE_SIZE};
use crate::url_parser::{ChannelRef, PlaylistId, VideoId};
use crate::youtube_api::{
    channels::Channel,
    playlists::{Playlist, PlaylistItem},
    types::{ListResponse, PagedStream},
    videos::Video,
};
use eyre::Context;
use http::Method;
use jiff::{SignedDuration, Timestamp};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_stream::{Stream, StreamExt};
use tracing::instrument;

const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";

/// How far `synced_at` is set back from the moment a fetch started.
///
/// Videos can show up in `playlistItems` a little after their publication time, and the local
/// clock may run ahead of YouTube's. Anything inside the overlap is fetched twice, and the
/// synchronizer drops the duplicates when merging.
pub const SYNC_OVERLAP: SignedDuration = SignedDuration::from_mins(5);

/// How the items of a playlist are ordered, which decides what "new" means for an item and when
/// a walk over it may stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemOrder {
    /// Uploads playlists list the most recently published video first.
    NewestFirst,
    /// User-curated playlists can be in any order, and hold videos published long before they
    /// were added.
    Unordered,
}

impl ItemOrder {
    fn parts(self) -> &'static str {
        match self {
            ItemOrder::NewestFirst => "contentDetails",
            ItemOrder::Unordered => "snippet,contentDetails",
        }
    }

    fn is_new(self, item: &PlaylistItem, synced_at: Option<Timestamp>) -> bool {
        match self {
            ItemOrder::NewestFirst => item.published_after(synced_at),
            ItemOrder::Unordered => item.added_after(synced_at),
        }
    }
}

/// Client for the public, read-only parts of the YouTube Data API v3.
///
/// Every request carries the configured API key in the `key` query parameter. The client is
/// cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    api_key: Arc<str>,
    base_url: Arc<str>,
    page_size: u32,
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client with its own HTTP connection pool.
    ///
    /// # Arguments
    ///
    /// * `config` - API key, base URL, and page size to use for every request
    ///
    /// # Returns
    ///
    /// The new client, or an error if the underlying [`reqwest::Client`] cannot be built (for
    /// example when no TLS backend is available).
    pub fn new(config: &Config) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("build HTTP client")?;
        Ok(Self::with_http_client(config, client))
    }

    /// Creates a client that sends its requests through an existing HTTP client.
    ///
    /// A trailing `/` on the configured base URL is ignored.
    ///
    /// # Arguments
    ///
    /// * `config` - API key, base URL, and page size to use for every request
    /// * `client` - Shared HTTP client for making API requests
    pub fn with_http_client(config: &Config, client: reqwest::Client) -> Self {
        Self {
            api_key: Arc::from(config.api_key.as_str()),
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            page_size: config.page_size,
            client,
        }
    }

    /// Makes a request to the YouTube API with the API key attached.
    ///
    /// Fails with the status code and the response body when the API does not answer with a
    /// success status, so quota and permission errors reach the caller verbatim.
    #[instrument(skip(self), ret, level = tracing::Level::TRACE)]
    async fn request(
        &self,
        method: Method,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .request(method.clone(), &url)
            .query(query_params)
            .query(&[("key", &*self.api_key)])
            .send()
            .await
            .with_context(|| format!("send {} request to YouTube API: {}", method, url))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API {} {} request failed with status {}: {}",
                method,
                resource,
                status_code,
                error_text
            ));
        }

        Ok(response)
    }

    /// Calls a `*.list` endpoint and parses the response envelope.
    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<ListResponse<T>> {
        let response = self.request(Method::GET, resource, query_params).await?;
        response
            .json()
            .await
            .with_context(|| format!("parse YouTube {resource} API response as JSON"))
    }

    /// Returns a paginated stream over every item of a playlist.
    #[instrument(skip(self))]
    fn list_playlist_items(
        &self,
        playlist_id: String,
        parts: &'static str,
    ) -> impl Stream<Item = eyre::Result<PlaylistItem>> + Send + use<'_> {
        PagedStream::new(move |page_token| {
            let playlist_id = playlist_id.clone();
            async move {
                let response = self
                    .list_playlist_items_internal(&playlist_id, parts, page_token)
                    .await?;
                Ok(response.into_page())
            }
        })
    }

    async fn list_playlist_items_internal(
        &self,
        playlist_id: &str,
        parts: &str,
        page_token: Option<String>,
    ) -> eyre::Result<ListResponse<PlaylistItem>> {
        let max_results = self.page_size.to_string();
        let mut query_params = vec![
            ("part", parts),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];

        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let items: ListResponse<PlaylistItem> = self.list("playlistItems", &query_params).await?;

        tracing::debug!(
            playlist_id,
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// Collects the ids of the videos that are new to a playlist since `synced_at`.
    ///
    /// In [`ItemOrder::NewestFirst`] playlists an item is new when its video was published after
    /// `synced_at`, and the walk stops at the first dated item that is not, so later pages are
    /// never requested. In [`ItemOrder::Unordered`] playlists an item is new when it was added
    /// after `synced_at`, and every page is walked.
    async fn new_video_ids(
        &self,
        playlist_id: String,
        synced_at: Option<Timestamp>,
        order: ItemOrder,
    ) -> eyre::Result<Vec<VideoId>> {
        let items = self.list_playlist_items(playlist_id, order.parts());
        let mut items = std::pin::pin!(items);

        let mut ids = Vec::new();
        while let Some(item) = items.next().await {
            let item = item.context("fetch playlist item")?;
            if order.is_new(&item, synced_at) {
                ids.push(VideoId::new(item.content_details.video_id)?);
            } else if order == ItemOrder::NewestFirst
                && item.content_details.video_published_at.is_some()
            {
                break;
            }
        }

        Ok(ids)
    }
}

impl Api for YouTubeClient {
    /// Fetches a single video with `videos.list`.
    ///
    /// # Arguments
    ///
    /// * `id` - The id of the video to fetch
    ///
    /// # Returns
    ///
    /// The [`Video`] with its snippet, content details, and statistics, or an error if YouTube
    /// does not return it.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    async fn video(&self, id: &VideoId) -> eyre::Result<Video> {
        let videos: ListResponse<Video> = self
            .list("videos", &[("part", VIDEO_PARTS), ("id", id.as_str())])
            .await?;

        tracing::debug!(
            video_id = %id,
            returned_items = videos.items.len(),
            "fetched video"
        );

        videos
            .items
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("video not found: {}", id))
    }

    /// Fetches many videos with `videos.list`, at most 50 ids per request.
    ///
    /// Videos come back in the order their ids were given. Ids that YouTube does not know (or
    /// will not show) are left out of the result rather than failing the whole batch.
    ///
    /// # Arguments
    ///
    /// * `ids` - The videos to fetch; no request is made when this is empty
    ///
    /// # Returns
    ///
    /// The videos that were found, or the first request error.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    async fn videos(&self, ids: &[VideoId]) -> eyre::Result<Vec<Video>> {
        let mut videos = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_PAGE_SIZE as usize) {
            let joined = chunk
                .iter()
                .map(VideoId::as_str)
                .collect::<Vec<_>>()
                .join(",");
            let response: ListResponse<Video> = self
                .list("videos", &[("part", VIDEO_PARTS), ("id", &joined)])
                .await?;

            if response.items.len() < chunk.len() {
                tracing::debug!(
                    requested = chunk.len(),
                    returned_items = response.items.len(),
                    "some requested videos were not returned"
                );
            }

            let by_id: HashMap<String, Video> = response
                .items
                .into_iter()
                .map(|video| (video.id.clone(), video))
                .collect();
            videos.extend(chunk.iter().filter_map(|id| by_id.get(id.as_str()).cloned()));
        }

        Ok(videos)
    }

    /// Fetches a channel with `channels.list`, then the uploads published after `synced_at`.
    ///
    /// # Arguments
    ///
    /// * `channel` - The channel id, legacy username, or handle to look up
    /// * `synced_at` - When the channel was last synced; `None` fetches every upload
    ///
    /// # Returns
    ///
    /// The [`Channel`] with its new uploads newest first and `synced_at` set to the start of
    /// this fetch minus [`SYNC_OVERLAP`]. Fails if the channel does not exist or has no uploads
    /// playlist.
    ///
    /// # API Reference
    ///
    /// * <https://developers.google.com/youtube/v3/docs/channels/list>
    /// * <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn channel(
        &self,
        channel: &ChannelRef,
        synced_at: Option<Timestamp>,
    ) -> eyre::Result<Channel> {
        let started_at = Timestamp::now();

        let lookup = match channel {
            ChannelRef::Id(id) => ("id", id.as_str()),
            ChannelRef::Username(name) => ("forUsername", name.as_str()),
            ChannelRef::Handle(handle) => ("forHandle", handle.as_str()),
        };
        let channels: ListResponse<Channel> = self
            .list("channels", &[("part", "snippet,contentDetails"), lookup])
            .await?;

        let Some(mut found) = channels.items.into_iter().next() else {
            eyre::bail!("channel not found: {}", channel);
        };
        let Some(uploads) = found.uploads_playlist_id().map(str::to_string) else {
            eyre::bail!("channel {} has no uploads playlist", found.id);
        };

        let ids = self
            .new_video_ids(uploads, synced_at, ItemOrder::NewestFirst)
            .await
            .with_context(|| format!("list uploads of channel {}", found.id))?;
        found.videos = self.videos(&ids).await?;
        found.synced_at = Some(started_at - SYNC_OVERLAP);

        tracing::debug!(
            channel_id = found.id,
            new_videos = found.videos.len(),
            "fetched channel"
        );

        Ok(found)
    }

    /// Fetches a playlist with `playlists.list`, then the videos added to it after `synced_at`.
    ///
    /// # Arguments
    ///
    /// * `playlist` - The id of the playlist to fetch
    /// * `synced_at` - When the playlist was last synced; `None` fetches every item
    ///
    /// # Returns
    ///
    /// The [`Playlist`] with its new videos in playlist order and `synced_at` set to the start
    /// of this fetch minus [`SYNC_OVERLAP`]. Fails if the playlist does not exist.
    ///
    /// # API Reference
    ///
    /// * <https://developers.google.com/youtube/v3/docs/playlists/list>
    /// * <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn playlist(
        &self,
        playlist: &PlaylistId,
        synced_at: Option<Timestamp>,
    ) -> eyre::Result<Playlist> {
        let started_at = Timestamp::now();

        let playlists: ListResponse<Playlist> = self
            .list("playlists", &[("part", "snippet"), ("id", playlist.as_str())])
            .await?;

        let Some(mut found) = playlists.items.into_iter().next() else {
            eyre::bail!("playlist not found: {}", playlist);
        };

        let ids = self
            .new_video_ids(playlist.to_string(), synced_at, ItemOrder::Unordered)
            .await
            .with_context(|| format!("list items of playlist {}", playlist))?;
        found.videos = self.videos(&ids).await?;
        found.synced_at = Some(started_at - SYNC_OVERLAP);

        tracing::debug!(
            playlist_id = found.id,
            new_videos = found.videos.len(),
            "fetched playlist"
        );

        Ok(found)
    }
}
