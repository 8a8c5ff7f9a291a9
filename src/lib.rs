//! gronkh_tv - Browse and play the gronkh.tv stream archive
//!
//! This library maps navigation actions of a media-player host to calls of the
//! gronkh.tv API and turns the responses into directory listings and playable
//! stream URLs. The host itself stays behind the [`Host`] trait.

mod api;
mod chapters;
mod config;
mod host;
mod listing;
pub mod logging;
mod models;
mod routing;
mod search;
mod strings;
mod timestamp;

#[cfg(test)]
mod testing;

use tracing::{debug, info};

// Re-export error types
pub use api::ApiError;
pub use config::ConfigError;
pub use host::HostError;
pub use models::UnknownCategory;
pub use routing::RouteError;

pub use api::{GronkhApi, PAGE_SIZE, VideoApi};
pub use chapters::{ContextMenuEntry, context_menu, plot, seek_percentage};
pub use config::{Config, default_config_path};
pub use host::{Host, OutputFormat, TerminalHost};
pub use listing::{Art, DirectoryListing, ListItem, SortMethod, VideoInfo, VideoPage, has_more};
pub use models::{Category, Chapter, Tag, VideoSummary};
pub use routing::{Action, PluginUrl, parse_params};
pub use search::{MIN_QUERY_LEN, query_is_valid};
pub use strings::{Language, Strings};
pub use timestamp::seconds_to_time;

use thiserror::Error;

/// Top-level error type for plugin invocations
#[derive(Debug, Error)]
pub enum PluginError {
    /// The invocation parameters could not be routed
    #[error("Routing error: {0}")]
    Route(#[from] RouteError),

    /// The API request failed
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The host failed to display something
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// The configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// One plugin invocation: an API backend, a host and the invocation URL.
pub struct Plugin<A, H> {
    api: A,
    host: H,
    urls: PluginUrl,
    strings: Strings,
}

impl<A, H> Plugin<A, H>
where
    A: VideoApi,
    H: Host,
{
    /// Creates a plugin for an invocation with base URL `base_url`.
    pub fn new(api: A, host: H, base_url: &str, language: Language) -> Self {
        Self {
            api,
            host,
            urls: PluginUrl::new(base_url),
            strings: Strings::new(language),
        }
    }

    /// Consumes the plugin and returns the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Dispatches an invocation to the matching handler.
    ///
    /// # Arguments
    ///
    /// * `paramstring` - URL-encoded parameters of the invocation, with or
    ///   without the leading `?`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gronkh_tv::{Config, GronkhApi, OutputFormat, Plugin, TerminalHost};
    ///
    /// let config = Config::default();
    /// let api = GronkhApi::from_config(&config).unwrap();
    /// let host = TerminalHost::new(std::io::stdout(), 1, OutputFormat::Text);
    /// let mut plugin = Plugin::new(api, host, "plugin://plugin.video.gronkh.tv/", config.language);
    ///
    /// // Second page of the archive
    /// plugin.router("?action=listing&category=all&offset=25").unwrap();
    /// ```
    pub fn router(&mut self, paramstring: &str) -> Result<(), PluginError> {
        let action = parse_params(paramstring)?;
        debug!(?action, "routing");

        match action {
            Action::Root => self.list_categories(),
            Action::Listing {
                category,
                offset,
                search_str,
            } => self.list_videos(category, offset, &search_str),
            Action::Play { video } => self.play_video(video),
        }
    }

    /// Shows the top-level categories.
    pub fn list_categories(&mut self) -> Result<(), PluginError> {
        let listing = listing::category_listing(&self.urls, &self.strings);
        self.host.end_of_directory(&listing)?;
        Ok(())
    }

    /// Shows the videos of `category`.
    ///
    /// For searches, `search_str` is used as the query if present; otherwise
    /// the user is asked for one.
    pub fn list_videos(
        &mut self,
        category: Category,
        offset: u64,
        search_str: &str,
    ) -> Result<(), PluginError> {
        let page = self.fetch_page(category, offset, search_str)?;
        let listing = listing::video_listing(&self.api, &self.urls, &self.strings, &page)?;
        self.host.end_of_directory(&listing)?;
        Ok(())
    }

    /// Resolves `episode` to its stream and hands it to the player.
    pub fn play_video(&mut self, episode: u64) -> Result<(), PluginError> {
        let url = self.api.playlist_url(episode)?;
        info!(episode, %url, "resolved stream");
        self.host.set_resolved_url(&url)?;
        Ok(())
    }

    fn fetch_page(
        &mut self,
        category: Category,
        offset: u64,
        search_str: &str,
    ) -> Result<VideoPage, PluginError> {
        let mut query = None;

        let videos = match category {
            Category::Recent => self.api.recent()?,
            Category::Views => self.api.most_viewed()?,
            Category::All => self.api.page(offset, PAGE_SIZE)?,
            Category::Search => {
                match search::resolve_query(search_str, &mut self.host, &self.strings)? {
                    Some(q) => {
                        let videos = self.api.search(&q)?;
                        query = Some(q);
                        videos
                    }
                    None => Vec::new(),
                }
            }
        };

        debug!(%category, offset, count = videos.len(), "fetched videos");

        Ok(VideoPage {
            category,
            offset,
            videos,
            query,
        })
    }
}
