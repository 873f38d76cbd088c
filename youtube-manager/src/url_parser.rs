//! Extraction of video, channel, and playlist identifiers from user-supplied YouTube URLs.
//!
//! All functions here are pure. Each one first runs the input through [`prepare_url`], so
//! `youtube.com/watch?v=…` and `https://youtube.com/watch?v=…` are treated the same way.

use eyre::Context;
use percent_encoding::percent_decode_str;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosts that serve YouTube pages we know how to take apart.
const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtube-nocookie.com",
    "www.youtube-nocookie.com",
    "youtu.be",
];

/// First path segments that name a YouTube page rather than a legacy vanity channel URL.
const RESERVED_PATHS: &[&str] = &[
    "watch", "playlist", "embed", "v", "shorts", "live", "results", "feed", "channel", "user",
    "c",
];

/// The ID that YouTube uses to uniquely identify a video.
///
/// Always 11 characters drawn from `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> eyre::Result<Self> {
        let id = id.into();
        let well_formed = id.len() == 11
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !well_formed {
            eyre::bail!("'{id}' is not a valid YouTube video id");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to a channel as it appears in a channel URL.
///
/// YouTube exposes three lookup keys for channels on `channels.list`, one per variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ChannelRef {
    /// A channel id (`UC…`), from `/channel/<id>`.
    Id(String),
    /// A legacy username or custom name, from `/user/<name>`, `/c/<name>`, or `/<name>`.
    Username(String),
    /// A handle without its leading `@`, from `/@<handle>`.
    Handle(String),
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelRef::Id(id) => f.write_str(id),
            ChannelRef::Username(name) => f.write_str(name),
            ChannelRef::Handle(handle) => write!(f, "@{handle}"),
        }
    }
}

/// The ID that YouTube uses to uniquely identify a playlist (the `list` query parameter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn new(id: impl Into<String>) -> eyre::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            eyre::bail!("playlist id cannot be empty");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Adds `http://` to the url if it does not already start with `http://` or `https://`.
///
/// The scheme check ignores case. Nothing else about the input is touched: no trimming, no
/// host validation.
pub fn prepare_url(url: &str) -> String {
    let has_scheme = ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if has_scheme {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Extracts the video id from a watch, share, embed, shorts, or live URL.
pub fn parse_id(url: &str) -> eyre::Result<VideoId> {
    let parsed = parse_youtube_url(url)?;
    let segments = path_segments(&parsed);
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    let candidate = if parsed.host_str() == Some("youtu.be") {
        segments.first().map(|id| id.to_string())
    } else {
        match segments.as_slice() {
            ["watch", ..] => query_param(&parsed, "v"),
            ["embed" | "v" | "shorts" | "live", id, ..] => Some(id.to_string()),
            _ => None,
        }
    };

    let Some(candidate) = candidate else {
        eyre::bail!("no video id found in '{url}'");
    };
    VideoId::new(candidate).with_context(|| format!("parse video url '{url}'"))
}

/// Extracts the channel id, username, or handle from a channel URL.
pub fn parse_channel_url(url: &str) -> eyre::Result<ChannelRef> {
    let parsed = parse_youtube_url(url)?;
    if parsed.host_str() == Some("youtu.be") {
        eyre::bail!("'{url}' is a video share link, not a channel url");
    }

    let segments = path_segments(&parsed);
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let channel = match segments.as_slice() {
        ["channel", id, ..] => ChannelRef::Id(id.to_string()),
        ["user" | "c", name, ..] => ChannelRef::Username(name.to_string()),
        [handle, ..] if handle.len() > 1 && handle.starts_with('@') => {
            ChannelRef::Handle(handle[1..].to_string())
        }
        [name] if !name.starts_with('@') && !RESERVED_PATHS.contains(name) => {
            ChannelRef::Username(name.to_string())
        }
        _ => eyre::bail!("no channel id or name found in '{url}'"),
    };

    Ok(channel)
}

/// Extracts the playlist id (the `list` query parameter) from any YouTube URL that carries one.
pub fn parse_playlist_url(url: &str) -> eyre::Result<PlaylistId> {
    let parsed = parse_youtube_url(url)?;
    let Some(list) = query_param(&parsed, "list").filter(|list| !list.is_empty()) else {
        eyre::bail!("no playlist id found in '{url}'");
    };
    PlaylistId::new(list)
}

fn parse_youtube_url(url: &str) -> eyre::Result<Url> {
    let parsed = Url::parse(&prepare_url(url)).with_context(|| format!("parse '{url}' as a url"))?;

    // the url crate lowercases hosts of http(s) urls
    match parsed.host_str() {
        Some(host) if YOUTUBE_HOSTS.contains(&host) => Ok(parsed),
        Some(host) => eyre::bail!("'{url}' points at {host}, which is not a YouTube host"),
        None => eyre::bail!("'{url}' has no host"),
    }
}

/// The non-empty path segments of `url`, percent-decoded.
fn path_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}

fn query_param(url: &Url, key: &str) -> Option<String> {
    form_urlencoded::parse(url.query().unwrap_or("").as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
