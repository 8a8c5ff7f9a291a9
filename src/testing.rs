//! Test doubles for the API and the host.

use crate::api::{ApiError, VideoApi};
use crate::host::{Host, HostError};
use crate::listing::DirectoryListing;
use crate::models::{Chapter, Tag, VideoSummary};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// A video with predictable fields derived from its episode number.
pub(crate) fn video(episode: u64) -> VideoSummary {
    VideoSummary {
        id: episode + 1000,
        title: format!("Stream {}", episode),
        created_at: "2022-02-20 18:30:00".to_string(),
        episode,
        preview_url: format!("https://example.org/{}.jpg", episode),
        video_length: 3600,
        views: 10 * episode,
        tags: vec![Tag {
            id: 1,
            title: "Let's Play".to_string(),
        }],
    }
}

/// In-memory [`VideoApi`] recording every call.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub recent: Vec<VideoSummary>,
    pub most_viewed: Vec<VideoSummary>,
    /// The whole archive, newest first
    pub archive: Vec<VideoSummary>,
    pub search_results: HashMap<String, Vec<VideoSummary>>,
    pub chapters: HashMap<u64, Vec<Chapter>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_chapters(mut self, episode: u64, chapters: Vec<Chapter>) -> Self {
        self.chapters.insert(episode, chapters);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl VideoApi for FakeApi {
    fn recent(&self) -> Result<Vec<VideoSummary>, ApiError> {
        self.record("recent()".to_string());
        Ok(self.recent.clone())
    }

    fn most_viewed(&self) -> Result<Vec<VideoSummary>, ApiError> {
        self.record("most_viewed()".to_string());
        Ok(self.most_viewed.clone())
    }

    fn page(&self, offset: u64, first: u32) -> Result<Vec<VideoSummary>, ApiError> {
        self.record(format!("page({}, {})", offset, first));
        Ok(self
            .archive
            .iter()
            .skip(offset as usize)
            .take(first as usize)
            .cloned()
            .collect())
    }

    fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError> {
        self.record(format!("search({})", query));
        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }

    fn playlist_url(&self, episode: u64) -> Result<String, ApiError> {
        self.record(format!("playlist_url({})", episode));
        if episode == 0 {
            return Err(ApiError::StatusError {
                status: 404,
                url: "video/playlist?episode=0".to_string(),
            });
        }
        Ok(format!("https://cdn.example.org/{}/playlist.m3u8", episode))
    }

    fn chapters(&self, episode: u64) -> Result<Vec<Chapter>, ApiError> {
        self.record(format!("chapters({})", episode));
        Ok(self.chapters.get(&episode).cloned().unwrap_or_default())
    }
}

/// [`Host`] answering prompts from a script and collecting its output.
#[derive(Default)]
pub(crate) struct ScriptedHost {
    /// Answers for successive input dialogs; `None` cancels
    pub inputs: VecDeque<Option<String>>,
    pub prompts: usize,
    pub messages: Vec<String>,
    pub listings: Vec<DirectoryListing>,
    pub resolved: Vec<String>,
}

impl ScriptedHost {
    pub fn answering(inputs: &[Option<&str>]) -> Self {
        Self {
            inputs: inputs.iter().map(|i| i.map(str::to_string)).collect(),
            ..Self::default()
        }
    }
}

impl Host for ScriptedHost {
    fn input(&mut self, _heading: &str) -> Result<Option<String>, HostError> {
        self.prompts += 1;
        Ok(self.inputs.pop_front().flatten())
    }

    fn ok_dialog(&mut self, _heading: &str, message: &str) -> Result<(), HostError> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn end_of_directory(&mut self, listing: &DirectoryListing) -> Result<(), HostError> {
        self.listings.push(listing.clone());
        Ok(())
    }

    fn set_resolved_url(&mut self, url: &str) -> Result<(), HostError> {
        self.resolved.push(url.to_string());
        Ok(())
    }
}
