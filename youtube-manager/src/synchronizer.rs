//! A [`Synchronizer`] that refreshes resources through an [`Api`].

use crate::api::{Api, Synchronizer};
use crate::resource::Resource;
use crate::url_parser::{ChannelRef, PlaylistId, VideoId};
use crate::youtube_api::{Channel, Playlist, Video};
use eyre::Context;
use std::collections::HashSet;
use tracing::instrument;

/// Brings stored resources up to date by re-fetching them.
///
/// Videos are fetched again whole. Channels and playlists are fetched incrementally from their
/// `synced_at`, and the newly published videos are merged in front of the ones already stored.
/// Storing the returned resource is left to the caller.
#[derive(Debug, Clone)]
pub struct ApiSynchronizer<A> {
    api: A,
}

impl<A> ApiSynchronizer<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

impl<A: Api + Sync> Synchronizer for ApiSynchronizer<A> {
    #[instrument(skip_all, fields(kind = %resource.kind(), id = resource.id()))]
    async fn sync(&self, resource: Resource) -> eyre::Result<Resource> {
        let synced = match resource {
            Resource::Video(stored) => {
                let id = VideoId::new(stored.id).context("stored video has an unusable id")?;
                Resource::Video(self.api.video(&id).await?)
            }
            Resource::Channel(stored) => {
                let lookup = ChannelRef::Id(stored.id.clone());
                let fresh = self.api.channel(&lookup, stored.synced_at).await?;
                Resource::Channel(merge_channel(stored, fresh))
            }
            Resource::Playlist(stored) => {
                let id = PlaylistId::new(stored.id.clone())
                    .context("stored playlist has an unusable id")?;
                let fresh = self.api.playlist(&id, stored.synced_at).await?;
                Resource::Playlist(merge_playlist(stored, fresh))
            }
        };

        tracing::debug!(synced_at = ?synced.synced_at(), "synced resource");
        Ok(synced)
    }
}

fn merge_channel(stored: Channel, fresh: Channel) -> Channel {
    Channel {
        videos: merge_videos(fresh.videos, stored.videos),
        synced_at: fresh.synced_at.or(stored.synced_at),
        ..fresh
    }
}

fn merge_playlist(stored: Playlist, fresh: Playlist) -> Playlist {
    Playlist {
        videos: merge_videos(fresh.videos, stored.videos),
        synced_at: fresh.synced_at.or(stored.synced_at),
        ..fresh
    }
}

/// Fresh videos first, then every stored video that was not fetched again.
fn merge_videos(fresh: Vec<Video>, stored: Vec<Video>) -> Vec<Video> {
    let fresh_ids: HashSet<String> = fresh.iter().map(|video| video.id.clone()).collect();
    let mut merged = fresh;
    merged.extend(
        stored
            .into_iter()
            .filter(|video| !fresh_ids.contains(&video.id)),
    );
    merged
}
