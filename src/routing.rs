//! Plugin URLs and invocation parameters.
//!
//! The host re-invokes the plugin with `{base}?{params}` for every navigation
//! step. [`PluginUrl`] builds those URLs; [`parse_params`] turns the query part
//! of an invocation back into an [`Action`].

use crate::models::{Category, UnknownCategory};
use std::collections::HashMap;
use thiserror::Error;
use url::form_urlencoded;

/// Errors raised for invocation parameters the plugin does not understand
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Missing or unsupported `action`
    #[error("Invalid paramstring: {0}!")]
    InvalidParams(String),

    /// A parameter required by the action is absent
    #[error("Missing parameter '{param}' in paramstring: {params}")]
    MissingParam { param: &'static str, params: String },

    /// A parameter has a value of the wrong shape
    #[error("Invalid value '{value}' for parameter '{param}'")]
    InvalidValue { param: &'static str, value: String },

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

/// What an invocation asks the plugin to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the top-level categories
    Root,
    /// Show the videos of a category
    Listing {
        category: Category,
        offset: u64,
        search_str: String,
    },
    /// Resolve an episode for playback
    Play { video: u64 },
}

/// Base URL the plugin was invoked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginUrl {
    base: String,
}

impl PluginUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Creates a URL for calling the plugin recursively with the given parameters.
    pub fn with_params(&self, params: &[(&str, &str)]) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        format!("{}?{}", self.base, query)
    }

    /// URL listing `category`, optionally at a page offset.
    pub fn listing(&self, category: Category, offset: Option<u64>) -> String {
        let offset = offset.map(|o| o.to_string());
        let mut params = vec![("action", "listing"), ("category", category.slug())];
        if let Some(offset) = offset.as_deref() {
            params.push(("offset", offset));
        }
        self.with_params(&params)
    }

    /// URL playing `episode`.
    pub fn play(&self, episode: u64) -> String {
        let episode = episode.to_string();
        self.with_params(&[("action", "play"), ("video", &episode)])
    }
}

/// Parses a URL-encoded parameter string into an [`Action`].
///
/// A leading `?` is ignored. An empty string selects [`Action::Root`];
/// anything with an unknown or missing `action` is rejected.
pub fn parse_params(paramstring: &str) -> Result<Action, RouteError> {
    let raw = paramstring.strip_prefix('?').unwrap_or(paramstring);
    let params: HashMap<String, String> = form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect();

    if params.is_empty() {
        return Ok(Action::Root);
    }

    let require = |param: &'static str| {
        params
            .get(param)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RouteError::MissingParam {
                param,
                params: raw.to_string(),
            })
    };

    match params.get("action").map(String::as_str) {
        Some("listing") => {
            let category = require("category")?.parse::<Category>()?;
            let offset = match params.get("offset").filter(|v| !v.is_empty()) {
                Some(value) => value.parse::<u64>().map_err(|_| RouteError::InvalidValue {
                    param: "offset",
                    value: value.clone(),
                })?,
                None => 0,
            };
            let search_str = params.get("search_str").cloned().unwrap_or_default();
            Ok(Action::Listing {
                category,
                offset,
                search_str,
            })
        }
        Some("play") => {
            let value = require("video")?;
            let video = value.parse::<u64>().map_err(|_| RouteError::InvalidValue {
                param: "video",
                value: value.clone(),
            })?;
            Ok(Action::Play { video })
        }
        _ => Err(RouteError::InvalidParams(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "plugin://plugin.video.gronkh.tv/";

    #[test]
    fn test_empty_params_is_root() {
        assert_eq!(parse_params(""), Ok(Action::Root));
        assert_eq!(parse_params("?"), Ok(Action::Root));
    }

    #[test]
    fn test_parse_listing() {
        assert_eq!(
            parse_params("?action=listing&category=all&offset=50"),
            Ok(Action::Listing {
                category: Category::All,
                offset: 50,
                search_str: String::new(),
            })
        );
        assert_eq!(
            parse_params("action=listing&category=search&search_str=lets+play%21"),
            Ok(Action::Listing {
                category: Category::Search,
                offset: 0,
                search_str: "lets play!".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_play() {
        assert_eq!(
            parse_params("action=play&video=612"),
            Ok(Action::Play { video: 612 })
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert_eq!(
            parse_params("action=delete&video=1"),
            Err(RouteError::InvalidParams("action=delete&video=1".to_string()))
        );
        assert_eq!(
            parse_params("category=all"),
            Err(RouteError::InvalidParams("category=all".to_string()))
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            parse_params("action=listing"),
            Err(RouteError::MissingParam {
                param: "category",
                ..
            })
        ));
        assert!(matches!(
            parse_params("action=listing&category=all&offset=-25"),
            Err(RouteError::InvalidValue { param: "offset", .. })
        ));
        assert!(matches!(
            parse_params("action=play&video=abc"),
            Err(RouteError::InvalidValue { param: "video", .. })
        ));
        assert!(matches!(
            parse_params("action=listing&category=movies"),
            Err(RouteError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_built_urls_parse_back() {
        let urls = PluginUrl::new(BASE);

        let more = urls.listing(Category::All, Some(25));
        assert_eq!(more, format!("{}?action=listing&category=all&offset=25", BASE));

        let search = urls.with_params(&[
            ("action", "listing"),
            ("category", "search"),
            ("search_str", "mit Herz & Seele"),
        ]);
        let query = search.strip_prefix(BASE).unwrap();
        assert_eq!(
            parse_params(query),
            Ok(Action::Listing {
                category: Category::Search,
                offset: 0,
                search_str: "mit Herz & Seele".to_string(),
            })
        );

        let play = urls.play(612);
        assert_eq!(play, format!("{}?action=play&video=612", BASE));
    }
}
