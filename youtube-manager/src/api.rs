//! The two collaborators a [`Manager`](crate::Manager) delegates to.
//!
//! [`YouTubeClient`](crate::youtube_api::YouTubeClient) and
//! [`ApiSynchronizer`](crate::synchronizer::ApiSynchronizer) are the implementations shipped
//! with this crate.

use crate::resource::Resource;
use crate::url_parser::{ChannelRef, PlaylistId, VideoId};
use crate::youtube_api::{Channel, Playlist, Video};
use jiff::Timestamp;
use std::future::Future;

/// Fetches videos, channels, and playlists by identifier.
pub trait Api {
    /// Fetches a single video.
    ///
    /// # Returns
    ///
    /// The [`Video`], or an error if it does not exist or the request fails.
    fn video(&self, id: &VideoId) -> impl Future<Output = eyre::Result<Video>> + Send;

    /// Fetches a batch of videos in one logical call.
    ///
    /// # Returns
    ///
    /// The videos in the order their ids were given. Videos that could not be found are left
    /// out; a failed request fails the whole batch.
    fn videos(&self, ids: &[VideoId]) -> impl Future<Output = eyre::Result<Vec<Video>>> + Send;

    /// Fetches a channel along with the videos uploaded to it after `synced_at`.
    ///
    /// With no `synced_at`, every upload is fetched.
    ///
    /// # Returns
    ///
    /// The [`Channel`] holding only the new uploads, with `synced_at` set to a point the next
    /// call can pick up from. Fails if the channel cannot be found.
    fn channel(
        &self,
        channel: &ChannelRef,
        synced_at: Option<Timestamp>,
    ) -> impl Future<Output = eyre::Result<Channel>> + Send;

    /// Fetches a playlist along with the videos added to it after `synced_at`.
    ///
    /// # Returns
    ///
    /// The [`Playlist`] holding only the new videos, with `synced_at` set to a point the next
    /// call can pick up from. Fails if the playlist cannot be found.
    fn playlist(
        &self,
        playlist: &PlaylistId,
        synced_at: Option<Timestamp>,
    ) -> impl Future<Output = eyre::Result<Playlist>> + Send;
}

/// Brings a previously fetched resource up to date and hands back the updated resource.
pub trait Synchronizer {
    /// # Returns
    ///
    /// The updated resource, of the same kind as `resource`, or the error that kept it from
    /// being updated.
    fn sync(&self, resource: Resource) -> impl Future<Output = eyre::Result<Resource>> + Send;
}

impl<T: Api + ?Sized> Api for &T {
    fn video(&self, id: &VideoId) -> impl Future<Output = eyre::Result<Video>> + Send {
        (**self).video(id)
    }

    fn videos(&self, ids: &[VideoId]) -> impl Future<Output = eyre::Result<Vec<Video>>> + Send {
        (**self).videos(ids)
    }

    fn channel(
        &self,
        channel: &ChannelRef,
        synced_at: Option<Timestamp>,
    ) -> impl Future<Output = eyre::Result<Channel>> + Send {
        (**self).channel(channel, synced_at)
    }

    fn playlist(
        &self,
        playlist: &PlaylistId,
        synced_at: Option<Timestamp>,
    ) -> impl Future<Output = eyre::Result<Playlist>> + Send {
        (**self).playlist(playlist, synced_at)
    }
}

impl<T: Synchronizer + ?Sized> Synchronizer for &T {
    fn sync(&self, resource: Resource) -> impl Future<Output = eyre::Result<Resource>> + Send {
        (**self).sync(resource)
    }
}
