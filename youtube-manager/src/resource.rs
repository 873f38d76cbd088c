//! Resources that can be handed to a [`Synchronizer`](crate::api::Synchronizer).

use crate::youtube_api::{Channel, Playlist, Video};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A previously fetched resource.
///
/// Serialized with a `kind` tag so a resource written to disk can be read back and synced later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource {
    Channel(Channel),
    Playlist(Playlist),
    Video(Video),
}

/// Which variant a [`Resource`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Channel,
    Playlist,
    Video,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Channel => "channel",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Video => "video",
        })
    }
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Channel(_) => ResourceKind::Channel,
            Resource::Playlist(_) => ResourceKind::Playlist,
            Resource::Video(_) => ResourceKind::Video,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Resource::Channel(channel) => &channel.id,
            Resource::Playlist(playlist) => &playlist.id,
            Resource::Video(video) => &video.id,
        }
    }

    /// When this resource was last fetched. Videos are always fetched whole, so they have none.
    pub fn synced_at(&self) -> Option<Timestamp> {
        match self {
            Resource::Channel(channel) => channel.synced_at,
            Resource::Playlist(playlist) => playlist.synced_at,
            Resource::Video(_) => None,
        }
    }
}

impl From<Channel> for Resource {
    fn from(channel: Channel) -> Self {
        Resource::Channel(channel)
    }
}

impl From<Playlist> for Resource {
    fn from(playlist: Playlist) -> Self {
        Resource::Playlist(playlist)
    }
}

impl From<Video> for Resource {
    fn from(video: Video) -> Self {
        Resource::Video(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_and_accessors() {
        let json = r#"
        {
          "kind": "channel",
          "id": "UCuAXFkgsw1L7xaCfnd5JJOw",
          "snippet": {"title": "Rick Astley", "publishedAt": "2015-02-01T16:32:14Z"},
          "videos": [{"id": "dQw4w9WgXcQ"}],
          "syncedAt": "2024-05-01T12:00:00Z"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();

        assert_eq!(resource.kind(), ResourceKind::Channel);
        assert_eq!(resource.kind().to_string(), "channel");
        assert_eq!(resource.id(), "UCuAXFkgsw1L7xaCfnd5JJOw");
        assert_eq!(
            resource.synced_at(),
            Some("2024-05-01T12:00:00Z".parse().unwrap())
        );
    }

    #[test]
    fn video_has_no_sync_point() {
        let resource = Resource::from(Video {
            id: "dQw4w9WgXcQ".to_string(),
            snippet: None,
            content_details: None,
            statistics: None,
        });
        assert_eq!(resource.kind(), ResourceKind::Video);
        assert_eq!(resource.synced_at(), None);

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["kind"], "video");
        let back: Resource = serde_json::from_value(json).unwrap();
        assert_eq!(back, resource);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{"kind": "comment", "id": "x"}"#;
        assert!(serde_json::from_str::<Resource>(json).is_err());
    }
}
