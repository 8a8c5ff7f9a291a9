//! Domain types shared by the API client and the listing builders.
//!
//! Everything here is request-scoped: values are built from one API response
//! and dropped when the invocation ends.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format of the `created_at` field delivered by the API.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The four fixed top-level sections of the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Recently published streams (discovery feed)
    Recent,
    /// Most viewed streams (discovery feed)
    Views,
    /// The whole archive, newest first, paginated
    All,
    /// Free-text search
    Search,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 4] = [
        Category::Recent,
        Category::Views,
        Category::All,
        Category::Search,
    ];

    /// Stable identifier used in plugin URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Recent => "recent",
            Category::Views => "views",
            Category::All => "all",
            Category::Search => "search",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a category slug is not one of the known sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A tag attached to a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub title: String,
}

/// Summary of a single archived stream as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    /// API identifier of the video
    pub id: u64,
    /// Display title
    pub title: String,
    /// Creation time as `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    /// Episode number, the key for playback and chapter lookups
    pub episode: u64,
    /// Thumbnail URL
    pub preview_url: String,
    /// Duration in seconds
    pub video_length: u64,
    /// View count
    pub views: u64,
    /// Tags attached to the video
    pub tags: Vec<Tag>,
}

impl VideoSummary {
    /// Parses `created_at`, returning `None` if the API sent something unexpected.
    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT).ok()
    }

    /// Date part of `created_at` (`YYYY-MM-DD`), falling back to the raw value.
    pub fn created_date(&self) -> String {
        self.created_at_parsed()
            .map(|dt| dt.date().format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.created_at.clone())
    }
}

/// A chapter marker inside a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    /// Offset from the start of the video in seconds
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(created_at: &str) -> VideoSummary {
        VideoSummary {
            id: 1,
            title: "Test".to_string(),
            created_at: created_at.to_string(),
            episode: 42,
            preview_url: String::new(),
            video_length: 60,
            views: 0,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "movies".parse::<Category>(),
            Err(UnknownCategory("movies".to_string()))
        );
    }

    #[test]
    fn test_created_date() {
        assert_eq!(video("2022-02-20 18:30:00").created_date(), "2022-02-20");
        assert_eq!(video("yesterday").created_date(), "yesterday");
    }
}
