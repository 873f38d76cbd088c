//! Runtime configuration, read from the environment.

use eyre::Context;
use std::fmt;

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
/// Environment variable overriding the page size used for list endpoints.
pub const PAGE_SIZE_VAR: &str = "YOUTUBE_PAGE_SIZE";

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// The YouTube Data API never returns more than 50 items per page, nor accepts more than 50 ids
/// in a single `id` filter.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// `maxResults` for paginated list calls, between 1 and [`MAX_PAGE_SIZE`].
    pub page_size: u32,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let Some(api_key) = lookup(API_KEY_VAR) else {
            eyre::bail!("{API_KEY_VAR} must be set to a YouTube Data API key");
        };

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let page_size = match lookup(PAGE_SIZE_VAR) {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("parse {PAGE_SIZE_VAR}={raw:?} as a number"))?,
            None => MAX_PAGE_SIZE,
        };
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            eyre::bail!("{PAGE_SIZE_VAR} must be between 1 and {MAX_PAGE_SIZE}, got {page_size}");
        }

        Ok(Self {
            api_key,
            base_url,
            page_size,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}
