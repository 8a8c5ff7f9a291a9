//! Directory listings handed to the host.
//!
//! A listing is the complete content of one navigation level: the items, the
//! section name and the sort methods the host should offer. Builders in this
//! module are pure apart from the per-video chapter lookup.

use crate::api::{ApiError, PAGE_SIZE, VideoApi};
use crate::chapters::{self, ContextMenuEntry};
use crate::models::{Category, VideoSummary};
use crate::routing::PluginUrl;
use crate::strings::{GENRE, ROOT_CATEGORY, Strings};
use serde::Serialize;

/// Content type announced for every listing.
pub const CONTENT_VIDEOS: &str = "videos";

/// Sort methods the host may offer for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    /// Keep the order of the listing
    None,
    /// Sort by the date the video was added
    DateAdded,
}

/// Images shown for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Art {
    pub thumb: String,
    pub icon: String,
    pub fanart: String,
}

impl Art {
    /// Uses the same image for every slot.
    pub fn uniform(url: &str) -> Self {
        Self {
            thumb: url.to_string(),
            icon: url.to_string(),
            fanart: url.to_string(),
        }
    }
}

/// Video metadata attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoInfo {
    pub title: String,
    pub genre: String,
    pub mediatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premiered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl VideoInfo {
    /// Minimal info for folders and placeholders.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: GENRE.to_string(),
            mediatype: "video".to_string(),
            episode: None,
            duration: None,
            date_added: None,
            premiered: None,
            first_aired: None,
            plot: None,
            views: None,
            tags: Vec::new(),
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub label: String,
    /// Plugin URL invoked when the item is selected
    pub url: String,
    /// Opens a sub-listing instead of playing
    pub is_folder: bool,
    /// Must be set for anything the host should hand to its player
    pub is_playable: bool,
    pub info: VideoInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art: Option<Art>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context_menu: Vec<ContextMenuEntry>,
}

impl ListItem {
    fn folder(label: impl Into<String>, url: String, info: VideoInfo) -> Self {
        Self {
            label: label.into(),
            url,
            is_folder: true,
            is_playable: false,
            info,
            art: None,
            context_menu: Vec::new(),
        }
    }
}

/// The complete content of one navigation level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryListing {
    /// Section name, shown by some skins
    pub category: String,
    pub content: String,
    pub items: Vec<ListItem>,
    pub sort_methods: Vec<SortMethod>,
}

impl DirectoryListing {
    fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: CONTENT_VIDEOS.to_string(),
            items: Vec::new(),
            sort_methods: Vec::new(),
        }
    }
}

/// A batch of videos fetched for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoPage {
    pub category: Category,
    /// Offset the batch was requested at
    pub offset: u64,
    pub videos: Vec<VideoSummary>,
    /// The query sent, for search listings; `None` if no search was issued
    pub query: Option<String>,
}

/// Whether a page of the archive should link to the next one.
///
/// Only full pages of the paginated category qualify, and a page ending at
/// episode 1 has reached the oldest stream.
pub fn has_more(category: Category, videos: &[VideoSummary]) -> bool {
    category == Category::All
        && videos.len() == PAGE_SIZE as usize
        && videos.last().is_some_and(|v| v.episode != 1)
}

/// Builds the top-level listing of categories.
pub fn category_listing(urls: &PluginUrl, strings: &Strings) -> DirectoryListing {
    let mut listing = DirectoryListing::new(ROOT_CATEGORY);

    for category in Category::ALL {
        let label = strings.category(category);
        listing.items.push(ListItem::folder(
            label,
            urls.listing(category, None),
            VideoInfo::titled(label),
        ));
    }

    listing.sort_methods.push(SortMethod::None);
    listing
}

/// Builds a playable item for one video, looking up its chapters.
pub fn video_item<A>(api: &A, urls: &PluginUrl, video: &VideoSummary) -> Result<ListItem, ApiError>
where
    A: VideoApi + ?Sized,
{
    let chapter_list = api.chapters(video.episode)?;

    let date = video.created_date();
    let info = VideoInfo {
        episode: Some(video.episode),
        duration: Some(video.video_length),
        date_added: Some(video.created_at.clone()),
        premiered: Some(date.clone()),
        first_aired: Some(date),
        plot: Some(chapters::plot(&chapter_list)),
        views: Some(video.views),
        tags: video.tags.iter().map(|t| t.title.clone()).collect(),
        ..VideoInfo::titled(video.title.clone())
    };

    Ok(ListItem {
        label: video.title.clone(),
        url: urls.play(video.episode),
        is_folder: false,
        is_playable: true,
        info,
        art: Some(Art::uniform(&video.preview_url)),
        context_menu: chapters::context_menu(&chapter_list, video.video_length),
    })
}

/// Builds the listing for a fetched page of videos.
///
/// Adds the "more" entry for unfinished archive pages and the "no results"
/// placeholder for empty searches.
pub fn video_listing<A>(
    api: &A,
    urls: &PluginUrl,
    strings: &Strings,
    page: &VideoPage,
) -> Result<DirectoryListing, ApiError>
where
    A: VideoApi + ?Sized,
{
    let mut listing = DirectoryListing::new(strings.category(page.category));

    for video in &page.videos {
        listing.items.push(video_item(api, urls, video)?);
    }

    let next_offset = page.offset.checked_add(PAGE_SIZE as u64);
    if let Some(next_offset) = next_offset.filter(|_| has_more(page.category, &page.videos)) {
        listing.items.push(ListItem::folder(
            strings.category(page.category),
            urls.listing(page.category, Some(next_offset)),
            VideoInfo::titled(strings.more()),
        ));
    }

    if let (Category::Search, Some(query)) = (page.category, page.query.as_deref()) {
        if page.videos.is_empty() {
            tracing::info!(%query, "search found no videos");
            listing.items.push(ListItem::folder(
                strings.no_results_label(query),
                urls.listing(Category::Search, None),
                VideoInfo::titled(strings.no_results_title(query)),
            ));
        } else {
            listing.sort_methods.push(SortMethod::DateAdded);
        }
    }

    listing.sort_methods.push(SortMethod::None);
    Ok(listing)
}
