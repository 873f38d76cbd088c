//! YouTube Data API v3 client and resource types.
//!
//! Only the read-only endpoints needed to follow videos, channels, and playlists are covered:
//!
//! * `videos.list` for single videos and batches of up to 50 ids
//! * `channels.list` to resolve a channel id, legacy username, or handle
//! * `playlists.list` and `playlistItems.list` to walk a channel's uploads or any playlist
//!
//! # Incremental fetches
//!
//! [`Channel`] and [`Playlist`] carry the videos fetched along with them and a `synced_at`
//! timestamp. Passing that timestamp back on the next fetch limits the result to videos
//! published since, which is how [`ApiSynchronizer`](crate::synchronizer::ApiSynchronizer)
//! keeps a stored resource current without re-listing everything.
//!
//! ```rust,no_run
//! use youtube_manager::api::Api;
//! use youtube_manager::config::Config;
//! use youtube_manager::url_parser::ChannelRef;
//! use youtube_manager::youtube_api::YouTubeClient;
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new(&Config::from_env()?)?;
//! let channel = client
//!     .channel(&ChannelRef::Handle("RickAstleyYT".into()), None)
//!     .await?;
//! println!("{}: {} videos", channel.snippet.title, channel.videos.len());
//!
//! let newer = client
//!     .channel(&ChannelRef::Id(channel.id.clone()), channel.synced_at)
//!     .await?;
//! println!("{} new since last time", newer.videos.len());
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlists;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use types::{Page, PageInfo, PagedStream};

pub use channels::{Channel, ChannelContentDetails, ChannelSnippet, RelatedPlaylists};
pub use playlists::{
    Playlist, PlaylistItem, PlaylistItemContentDetails, PlaylistItemSnippet, PlaylistSnippet,
};
pub use videos::{Thumbnail, Video, VideoContentDetails, VideoSnippet, VideoStatistics};
