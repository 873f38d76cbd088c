use clap::{Parser, Subcommand};
use eyre::Context;
use jiff::Timestamp;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_manager::config::Config;
use youtube_manager::{Resource, YouTubeManager, setup_manager, url_parser};

#[derive(Debug, Parser)]
#[command(author, version, about = "Fetch and sync YouTube videos, channels, and playlists")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the video behind a URL
    Video { url: String },
    /// Fetch the videos behind several URLs in one batch
    Videos {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Fetch a channel and its uploads
    Channel {
        url: String,
        #[arg(long)]
        /// Only include videos published after this time (e.g. 2024-01-01T00:00:00Z)
        since: Option<Timestamp>,
        #[arg(long)]
        /// Save the channel to this file so it can be synced later
        save: Option<PathBuf>,
    },
    /// Fetch a playlist and its videos
    Playlist {
        url: String,
        #[arg(long)]
        /// Only include videos published after this time
        since: Option<Timestamp>,
        #[arg(long)]
        /// Save the playlist to this file so it can be synced later
        save: Option<PathBuf>,
    },
    /// Bring a saved resource up to date and write it back to the same file
    Sync { path: PathBuf },
    /// Print a URL with `http://` added when it has no scheme
    PrepareUrl { url: String },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match Args::parse().command {
        Command::Video { url } => print_json(&manager()?.fetch_video(&url).await?),
        Command::Videos { urls } => print_json(&manager()?.fetch_videos(&urls).await?),
        Command::Channel { url, since, save } => {
            let channel = manager()?.videos_for_channel(&url, since).await?;
            emit(Resource::Channel(channel), save.as_deref()).await
        }
        Command::Playlist { url, since, save } => {
            let playlist = manager()?.videos_for_playlist(&url, since).await?;
            emit(Resource::Playlist(playlist), save.as_deref()).await
        }
        Command::Sync { path } => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("read {}", path.display()))?;
            // a file holding `null` is a resource that was never fetched
            let stored: Option<Resource> = serde_json::from_str(&raw)
                .with_context(|| format!("parse {} as a saved resource", path.display()))?;

            match manager()?.sync(stored).await? {
                Some(synced) => {
                    tracing::info!(
                        kind = %synced.kind(),
                        id = synced.id(),
                        path = %path.display(),
                        "synced resource"
                    );
                    emit(synced, Some(path.as_path())).await
                }
                None => {
                    tracing::warn!(path = %path.display(), "nothing to sync");
                    Ok(())
                }
            }
        }
        Command::PrepareUrl { url } => {
            println!("{}", url_parser::prepare_url(&url));
            Ok(())
        }
    }
}

fn manager() -> eyre::Result<YouTubeManager> {
    let config = Config::from_env().context("load configuration")?;
    setup_manager(&config)
}

fn print_json(value: &impl Serialize) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize result as JSON")?;
    println!("{json}");
    Ok(())
}

/// Prints the resource, and also writes it to `save` when given.
async fn emit(resource: Resource, save: Option<&Path>) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(&resource).context("serialize resource as JSON")?;
    if let Some(path) = save {
        tokio::fs::write(path, &json)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved resource");
    }
    println!("{json}");
    Ok(())
}
