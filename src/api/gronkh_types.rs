/// gronkh.tv API response types for deserialization.
///
/// These structures mirror the JSON response format of the v1 API.
use serde::Deserialize;

/// Response of the `video/discovery/*` endpoints.
#[derive(Debug, Deserialize)]
pub(super) struct DiscoveryResponse {
    pub discovery: Vec<GronkhVideo>,
}

/// Response of the `search` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    pub results: SearchResults,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResults {
    #[serde(default)]
    pub videos: Vec<GronkhVideo>,
}

/// A video entry as it appears in discovery and search results.
#[derive(Debug, Deserialize)]
pub(super) struct GronkhVideo {
    pub id: u64,
    pub title: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    pub episode: u64,
    pub preview_url: String,
    /// Duration in seconds
    pub video_length: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub tags: Vec<GronkhTag>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GronkhTag {
    pub id: u64,
    pub title: String,
}

/// Response of the `video/playlist` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct PlaylistResponse {
    pub playlist_url: String,
}

/// Response of the `video/info` endpoint; only the chapters are used.
#[derive(Debug, Deserialize)]
pub(super) struct InfoResponse {
    #[serde(default)]
    pub chapters: Vec<GronkhChapter>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GronkhChapter {
    /// May be null for untitled chapters
    pub title: Option<String>,
    pub offset: u64,
}
