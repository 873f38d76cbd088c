//! Fetch and sync YouTube videos, channels, and playlists by URL.
//!
//! [`Manager`] is the entry point: it turns a URL into an identifier with [`url_parser`], asks an
//! [`Api`](api::Api) for the resource, and can hand previously fetched resources to a
//! [`Synchronizer`](api::Synchronizer) to bring them up to date. [`setup_manager`] wires it up
//! against the real YouTube Data API.

use crate::config::Config;
use crate::synchronizer::ApiSynchronizer;
use crate::youtube_api::YouTubeClient;
use eyre::Context;

pub mod api;
pub mod config;
pub mod manager;
pub mod resource;
pub mod synchronizer;
pub mod url_parser;
pub mod youtube_api;

#[cfg(test)]
mod mock;

pub use manager::Manager;
pub use resource::{Resource, ResourceKind};

/// A [`Manager`] talking to the YouTube Data API, syncing through the same API.
pub type YouTubeManager = Manager<YouTubeClient, ApiSynchronizer<YouTubeClient>>;

/// Builds a [`YouTubeManager`] whose API client and synchronizer share one connection pool.
pub fn setup_manager(config: &Config) -> eyre::Result<YouTubeManager> {
    let client = YouTubeClient::new(config).context("create YouTube API client")?;
    tracing::debug!(
        base_url = %config.base_url,
        page_size = config.page_size,
        "created YouTube API client"
    );
    Ok(Manager::new(client.clone(), ApiSynchronizer::new(client)))
}
