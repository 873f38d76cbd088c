//! YouTube Playlists and PlaylistItems API types.

use crate::youtube_api::videos::Video;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A `playlist` resource together with the videos fetched from its items.
///
/// Like [`Channel`](crate::youtube_api::Channel), `videos` and `synced_at` are filled in by the
/// client rather than returned by `playlists.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#resource>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub snippet: PlaylistSnippet,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(rename = "syncedAt", default)]
    pub synced_at: Option<Timestamp>,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlists#snippet>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSnippet {
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: Option<String>,
}

/// A `playlistItem` resource identifies a video included in a playlist.
///
/// `contentDetails` says which video the item points at and when that video was published.
/// `snippet` is only requested for curated playlists, where the time the item was added is what
/// tells new items apart from old ones.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<PlaylistItemSnippet>,
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    /// When the item was added to the playlist.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemContentDetails {
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// Missing for private or deleted videos.
    #[serde(rename = "videoPublishedAt", default)]
    pub video_published_at: Option<Timestamp>,
}

impl PlaylistItem {
    /// Whether this item's video was published strictly after `synced_at`.
    ///
    /// Everything is new when there is no previous sync. Items without a publication date are
    /// never new once a sync has happened, since there is nothing to compare.
    pub fn published_after(&self, synced_at: Option<Timestamp>) -> bool {
        match (synced_at, self.content_details.video_published_at) {
            (None, _) => true,
            (Some(since), Some(published)) => published > since,
            (Some(_), None) => false,
        }
    }

    /// Whether this item was added to the playlist strictly after `synced_at`.
    ///
    /// Needs the `snippet` part. Without it the item counts as new only when there is no
    /// previous sync.
    pub fn added_after(&self, synced_at: Option<Timestamp>) -> bool {
        match (synced_at, &self.snippet) {
            (None, _) => true,
            (Some(since), Some(snippet)) => snippet.published_at > since,
            (Some(_), None) => false,
        }
    }
}
