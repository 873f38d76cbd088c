//! Recording stand-ins for the [`Api`] and [`Synchronizer`] collaborators.
//!
//! Both record every call they receive so tests can assert on exactly what was delegated, and
//! both can be told to fail to check that errors travel back untouched.

use crate::api::{Api, Synchronizer};
use crate::resource::Resource;
use crate::url_parser::{ChannelRef, PlaylistId, VideoId};
use crate::youtube_api::{Channel, ChannelSnippet, Playlist, PlaylistSnippet, Video};
use jiff::Timestamp;
use std::sync::Mutex;

/// The `synced_at` stamped on every channel and playlist the mock api hands out.
pub(crate) const FETCHED_AT: &str = "2024-06-01T00:00:00Z";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    Video(VideoId),
    Videos(Vec<VideoId>),
    Channel(ChannelRef, Option<Timestamp>),
    Playlist(PlaylistId, Option<Timestamp>),
}

pub(crate) fn video(id: &str) -> Video {
    Video {
        id: id.to_string(),
        snippet: None,
        content_details: None,
        statistics: None,
    }
}

pub(crate) fn channel(id: &str, videos: &[&str], synced_at: Option<&str>) -> Channel {
    Channel {
        id: id.to_string(),
        snippet: ChannelSnippet {
            title: format!("channel {id}"),
            description: None,
            custom_url: None,
            published_at: Timestamp::UNIX_EPOCH,
        },
        content_details: None,
        videos: videos.iter().map(|id| video(id)).collect(),
        synced_at: synced_at.map(|ts| ts.parse().unwrap()),
    }
}

pub(crate) fn playlist(id: &str, videos: &[&str], synced_at: Option<&str>) -> Playlist {
    Playlist {
        id: id.to_string(),
        snippet: PlaylistSnippet {
            published_at: Timestamp::UNIX_EPOCH,
            channel_id: "UCuAXFkgsw1L7xaCfnd5JJOw".to_string(),
            title: format!("playlist {id}"),
            description: String::new(),
            channel_title: None,
        },
        videos: videos.iter().map(|id| video(id)).collect(),
        synced_at: synced_at.map(|ts| ts.parse().unwrap()),
    }
}

/// An [`Api`] that answers from memory.
///
/// Channels and playlists come back with the configured `fresh_videos` and [`FETCHED_AT`].
#[derive(Debug, Default)]
pub(crate) struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    fresh_videos: Vec<&'static str>,
    failing: bool,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_fresh_videos(fresh_videos: &[&'static str]) -> Self {
        Self {
            fresh_videos: fresh_videos.to_vec(),
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) -> eyre::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            eyre::bail!("api unavailable");
        }
        Ok(())
    }
}

impl Api for RecordingApi {
    async fn video(&self, id: &VideoId) -> eyre::Result<Video> {
        self.record(ApiCall::Video(id.clone()))?;
        Ok(video(id.as_str()))
    }

    async fn videos(&self, ids: &[VideoId]) -> eyre::Result<Vec<Video>> {
        self.record(ApiCall::Videos(ids.to_vec()))?;
        Ok(ids.iter().map(|id| video(id.as_str())).collect())
    }

    async fn channel(
        &self,
        channel_ref: &ChannelRef,
        synced_at: Option<Timestamp>,
    ) -> eyre::Result<Channel> {
        self.record(ApiCall::Channel(channel_ref.clone(), synced_at))?;
        Ok(channel(
            &channel_ref.to_string(),
            &self.fresh_videos,
            Some(FETCHED_AT),
        ))
    }

    async fn playlist(
        &self,
        playlist_id: &PlaylistId,
        synced_at: Option<Timestamp>,
    ) -> eyre::Result<Playlist> {
        self.record(ApiCall::Playlist(playlist_id.clone(), synced_at))?;
        Ok(playlist(
            playlist_id.as_str(),
            &self.fresh_videos,
            Some(FETCHED_AT),
        ))
    }
}

/// A [`Synchronizer`] that records what it is given and always answers with `reply`.
#[derive(Debug)]
pub(crate) struct RecordingSynchronizer {
    calls: Mutex<Vec<Resource>>,
    reply: Option<Resource>,
}

impl RecordingSynchronizer {
    pub(crate) fn replying(reply: Resource) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Some(reply),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: None,
        }
    }

    pub(crate) fn calls(&self) -> Vec<Resource> {
        self.calls.lock().unwrap().clone()
    }
}

impl Synchronizer for RecordingSynchronizer {
    async fn sync(&self, resource: Resource) -> eyre::Result<Resource> {
        self.calls.lock().unwrap().push(resource);
        self.reply
            .clone()
            .ok_or_else(|| eyre::eyre!("storage unavailable"))
    }
}
