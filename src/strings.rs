//! Localized labels and messages.

use crate::models::Category;
use serde::{Deserialize, Serialize};

/// Display name of the plugin, used as dialog heading.
pub const PLUGIN_NAME: &str = "gronkh.tv";

/// Genre assigned to every list item.
pub const GENRE: &str = "Streams und Let's Plays";

/// Section name shown on the root listing.
pub const ROOT_CATEGORY: &str = "Streams und Let's Plays (mit Herz)";

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

/// Label lookup for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    language: Language,
}

impl Strings {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Menu label of a top-level category.
    pub fn category(&self, category: Category) -> &'static str {
        match (self.language, category) {
            (Language::De, Category::Recent) => "Neueste Streams",
            (Language::De, Category::Views) => "Meistgesehen",
            (Language::De, Category::All) => "Alle Streams",
            (Language::De, Category::Search) => "Suche",
            (Language::En, Category::Recent) => "Recent streams",
            (Language::En, Category::Views) => "Most viewed",
            (Language::En, Category::All) => "All streams",
            (Language::En, Category::Search) => "Search",
        }
    }

    /// Heading of the search input dialog.
    pub fn search_heading(&self) -> &'static str {
        match self.language {
            Language::De => "Suche",
            Language::En => "Search",
        }
    }

    /// Warning shown when a search query is too short.
    pub fn query_too_short(&self) -> &'static str {
        match self.language {
            Language::De => "Der Suchbegriff muss mindestens 3 Zeichen lang sein.",
            Language::En => "The search term must be at least 3 characters long.",
        }
    }

    /// Title of the pagination entry.
    pub fn more(&self) -> &'static str {
        match self.language {
            Language::De => "... mehr",
            Language::En => "... more",
        }
    }

    /// Label of the placeholder shown for an empty search result.
    pub fn no_results_label(&self, query: &str) -> String {
        match self.language {
            Language::De => format!("Kein Titel unter \"{}\" gefunden", query),
            Language::En => format!("No title found for \"{}\"", query),
        }
    }

    /// Info title of the placeholder shown for an empty search result.
    pub fn no_results_title(&self, query: &str) -> String {
        match self.language {
            Language::De => format!("Kein Titel bei der Suche nach \"{}\" gefunden", query),
            Language::En => format!("Searching for \"{}\" found no title", query),
        }
    }
}
