//! The facade that turns raw user input into calls on an [`Api`] and a [`Synchronizer`].

use crate::api::{Api, Synchronizer};
use crate::resource::Resource;
use crate::url_parser;
use crate::youtube_api::{Channel, Playlist, Video};
use jiff::Timestamp;
use tracing::instrument;

/// Entry point for fetching and syncing YouTube resources by URL.
///
/// The manager holds no state besides its two collaborators. Every operation parses its input,
/// makes exactly one call on a collaborator, and hands back that collaborator's result as is;
/// errors from parsing or from the collaborators are returned unchanged.
#[derive(Debug, Clone)]
pub struct Manager<A, S> {
    api: A,
    synchronizer: S,
}

impl<A: Api, S: Synchronizer> Manager<A, S> {
    pub fn new(api: A, synchronizer: S) -> Self {
        Self { api, synchronizer }
    }

    /// Fetches the video behind a single watch, share, embed, shorts, or live URL.
    #[instrument(skip(self))]
    pub async fn fetch_video(&self, url: &str) -> eyre::Result<Video> {
        let id = url_parser::parse_id(url)?;
        tracing::debug!(video_id = %id, "fetching video");
        self.api.video(&id).await
    }

    /// Fetches the videos behind several URLs with a single batch call.
    ///
    /// Ids are parsed in order, one per URL. If any URL cannot be parsed nothing is fetched.
    #[instrument(skip_all, fields(urls = urls.len()))]
    pub async fn fetch_videos<U: AsRef<str>>(&self, urls: &[U]) -> eyre::Result<Vec<Video>> {
        let ids = urls
            .iter()
            .map(|url| url_parser::parse_id(url.as_ref()))
            .collect::<eyre::Result<Vec<_>>>()?;
        self.api.videos(&ids).await
    }

    /// Fetches a channel by URL along with its videos uploaded after `synced_at`.
    #[instrument(skip(self))]
    pub async fn videos_for_channel(
        &self,
        url: &str,
        synced_at: Option<Timestamp>,
    ) -> eyre::Result<Channel> {
        let channel = url_parser::parse_channel_url(url)?;
        tracing::debug!(%channel, "fetching channel");
        self.api.channel(&channel, synced_at).await
    }

    /// Fetches a playlist by URL along with its videos published after `synced_at`.
    #[instrument(skip(self))]
    pub async fn videos_for_playlist(
        &self,
        url: &str,
        synced_at: Option<Timestamp>,
    ) -> eyre::Result<Playlist> {
        let playlist = url_parser::parse_playlist_url(url)?;
        tracing::debug!(%playlist, "fetching playlist");
        self.api.playlist(&playlist, synced_at).await
    }

    /// Hands a resource to the synchronizer and returns what it produced.
    ///
    /// Returns `Ok(None)` without touching the synchronizer when there is no resource to sync.
    #[instrument(skip_all, fields(kind = ?resource.as_ref().map(Resource::kind)))]
    pub async fn sync(&self, resource: Option<Resource>) -> eyre::Result<Option<Resource>> {
        let Some(resource) = resource else {
            tracing::debug!("nothing to sync");
            return Ok(None);
        };
        self.synchronizer.sync(resource).await.map(Some)
    }

    /// Adds `http://` to `url` unless it already starts with `http://` or `https://`.
    ///
    /// See [`url_parser::prepare_url`].
    pub fn prepare_url(&self, url: &str) -> String {
        url_parser::prepare_url(url)
    }

    /// Fetching a video by a bare id is not supported yet and always fails.
    ///
    /// Use [`Manager::fetch_video`] with a video URL instead.
    pub async fn video(&self, id: &str) -> eyre::Result<Video> {
        tracing::warn!(id, "fetching a video by bare id was requested");
        eyre::bail!("fetching a video by bare id ({id}) is not implemented");
    }
}
