//! YouTube Channels API types.

use crate::youtube_api::videos::Video;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A `channel` resource together with the videos fetched from its uploads playlist.
///
/// `id`, `snippet`, and `contentDetails` come straight from `channels.list`. `videos` and
/// `synced_at` are filled in by the client: `videos` holds the uploads published after the
/// `synced_at` that was passed in (newest first), and `synced_at` is the moment the fetch began,
/// ready to be handed back for the next incremental fetch.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(
        rename = "contentDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_details: Option<ChannelContentDetails>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(rename = "syncedAt", default)]
    pub synced_at: Option<Timestamp>,
}

impl Channel {
    /// The id of the playlist holding every video uploaded to this channel.
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|details| details.related_playlists.uploads.as_deref())
    }
}

/// The snippet object contains basic details about the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The channel's custom URL, usually its handle (e.g. `@rickastleyyt`).
    #[serde(rename = "customUrl", default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    /// The date and time that the channel was created.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist of the channel's uploaded videos.
    #[serde(default)]
    pub uploads: Option<String>,
}
