//! Access to the video-hosting API.
//!
//! This module defines the operations the plugin needs from the archive
//! backend as a trait, so listings and routing can be driven by any
//! implementation. [`GronkhApi`] is the HTTP implementation used at runtime.
mod gronkh;
mod gronkh_types;

pub use gronkh::GronkhApi;

use crate::models::{Chapter, VideoSummary};
use thiserror::Error;

/// Maximum number of results the paginated search endpoint returns per request.
pub const PAGE_SIZE: u32 = 25;

/// Errors that can occur while talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built or the request could not be sent
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The API answered with a non-success status
    #[error("HTTP {status} for {url}")]
    StatusError { status: u16, url: String },

    /// Failed to parse the API's JSON response
    #[error("Failed to parse API response from {url}: {reason}")]
    ParseError { url: String, reason: String },
}

/// Operations offered by the archive backend.
///
/// Every call issues exactly one blocking request and fully consumes the
/// response before returning.
pub trait VideoApi {
    /// Curated list of the most recent streams.
    fn recent(&self) -> Result<Vec<VideoSummary>, ApiError>;

    /// Curated list of the most viewed streams.
    fn most_viewed(&self) -> Result<Vec<VideoSummary>, ApiError>;

    /// One page of the whole archive, newest first.
    ///
    /// # Arguments
    ///
    /// * `offset` - Number of entries to skip
    /// * `first` - Page size, clamped to [`PAGE_SIZE`]
    fn page(&self, offset: u64, first: u32) -> Result<Vec<VideoSummary>, ApiError>;

    /// Free-text search over titles.
    fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError>;

    /// Resolves an episode to the URL of its `.m3u8` stream manifest.
    fn playlist_url(&self, episode: u64) -> Result<String, ApiError>;

    /// Chapter markers of an episode.
    fn chapters(&self, episode: u64) -> Result<Vec<Chapter>, ApiError>;
}
