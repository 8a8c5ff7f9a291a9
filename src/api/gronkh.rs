/// gronkh.tv API provider implementation.
use super::gronkh_types::{
    DiscoveryResponse, GronkhChapter, GronkhVideo, InfoResponse, PlaylistResponse, SearchResponse,
};
use super::{ApiError, PAGE_SIZE, VideoApi};
use crate::config::Config;
use crate::models::{Chapter, Tag, VideoSummary};
use reqwest::header::{ACCEPT_CHARSET, ACCEPT_ENCODING, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the gronkh.tv v1 REST API.
///
/// All endpoints are unauthenticated GET requests returning JSON. The client
/// sends the same browser-like headers on every request.
pub struct GronkhApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl GronkhApi {
    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8"));

        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a GET request to `path` and decodes the JSON body.
    fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?query, "requesting");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::StatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        response.json().map_err(|e| ApiError::ParseError {
            url,
            reason: e.to_string(),
        })
    }

    fn convert_video(video: GronkhVideo) -> VideoSummary {
        VideoSummary {
            id: video.id,
            title: video.title,
            created_at: video.created_at,
            episode: video.episode,
            preview_url: video.preview_url,
            video_length: video.video_length,
            views: video.views,
            tags: video
                .tags
                .into_iter()
                .map(|t| Tag {
                    id: t.id,
                    title: t.title,
                })
                .collect(),
        }
    }

    fn convert_chapter(chapter: GronkhChapter) -> Chapter {
        Chapter {
            title: chapter.title.unwrap_or_default(),
            offset: chapter.offset,
        }
    }

    fn convert_videos(videos: Vec<GronkhVideo>) -> Vec<VideoSummary> {
        videos.into_iter().map(Self::convert_video).collect()
    }
}

/// Keeps a requested page size inside what the API accepts.
pub(crate) fn clamp_page_size(first: u32) -> u32 {
    first.clamp(1, PAGE_SIZE)
}

impl VideoApi for GronkhApi {
    fn recent(&self) -> Result<Vec<VideoSummary>, ApiError> {
        let response: DiscoveryResponse = self.get_json("video/discovery/recent", &[])?;
        Ok(Self::convert_videos(response.discovery))
    }

    fn most_viewed(&self) -> Result<Vec<VideoSummary>, ApiError> {
        let response: DiscoveryResponse = self.get_json("video/discovery/views", &[])?;
        Ok(Self::convert_videos(response.discovery))
    }

    fn page(&self, offset: u64, first: u32) -> Result<Vec<VideoSummary>, ApiError> {
        let response: SearchResponse = self.get_json(
            "search",
            &[
                ("sort", "date".to_string()),
                ("offset", offset.to_string()),
                ("first", clamp_page_size(first).to_string()),
            ],
        )?;
        Ok(Self::convert_videos(response.results.videos))
    }

    fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError> {
        let response: SearchResponse = self.get_json("search", &[("query", query.to_string())])?;
        Ok(Self::convert_videos(response.results.videos))
    }

    fn playlist_url(&self, episode: u64) -> Result<String, ApiError> {
        let response: PlaylistResponse =
            self.get_json("video/playlist", &[("episode", episode.to_string())])?;
        Ok(response.playlist_url)
    }

    fn chapters(&self, episode: u64) -> Result<Vec<Chapter>, ApiError> {
        let response: InfoResponse =
            self.get_json("video/info", &[("episode", episode.to_string())])?;
        Ok(response
            .chapters
            .into_iter()
            .map(Self::convert_chapter)
            .collect())
    }
}
