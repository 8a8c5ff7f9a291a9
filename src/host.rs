//! The media-player host the plugin runs inside.
//!
//! The host owns all UI: it renders listings, shows dialogs and plays the
//! resolved stream. The plugin only talks to it through [`Host`].
//! [`TerminalHost`] stands in for a media player on the command line.

use crate::listing::{DirectoryListing, SortMethod};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Errors reported by a host implementation
#[derive(Debug, Error)]
pub enum HostError {
    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serializing a listing failed
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An interactive prompt failed
    #[error("Dialog failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// UI operations the plugin needs from its host.
pub trait Host {
    /// Asks the user for a line of text.
    ///
    /// Returns `None` if the user cancelled the dialog. Implementations
    /// report only failures they cannot map to a cancel as errors.
    fn input(&mut self, heading: &str) -> Result<Option<String>, HostError>;

    /// Shows a message the user has to acknowledge.
    fn ok_dialog(&mut self, heading: &str, message: &str) -> Result<(), HostError>;

    /// Displays a finished directory listing.
    fn end_of_directory(&mut self, listing: &DirectoryListing) -> Result<(), HostError>;

    /// Hands the stream URL to the player.
    fn set_resolved_url(&mut self, url: &str) -> Result<(), HostError>;
}

/// How [`TerminalHost`] renders its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per invocation
    Json,
}

#[derive(Serialize)]
struct JsonListing<'a> {
    handle: i32,
    #[serde(flatten)]
    listing: &'a DirectoryListing,
}

#[derive(Serialize)]
struct JsonResolved<'a> {
    handle: i32,
    succeeded: bool,
    path: &'a str,
}

/// Host implementation for the terminal.
///
/// Prompts interactively and writes listings to `out`.
pub struct TerminalHost<W: Write> {
    out: W,
    handle: i32,
    format: OutputFormat,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W, handle: i32, format: OutputFormat) -> Self {
        Self {
            out,
            handle,
            format,
        }
    }

    /// Consumes the host and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_text_listing(&mut self, listing: &DirectoryListing) -> io::Result<()> {
        writeln!(self.out, "=== {} ===", listing.category)?;

        for (index, item) in listing.items.iter().enumerate() {
            let marker = if item.is_folder { "+" } else { ">" };
            writeln!(self.out, "[{}] {} {}", index + 1, marker, item.label)?;

            if let Some(duration) = item.info.duration {
                writeln!(
                    self.out,
                    "    Episode {} | {} | {} views",
                    item.info.episode.unwrap_or_default(),
                    crate::timestamp::seconds_to_time(duration),
                    item.info.views.unwrap_or_default()
                )?;
            }
            if let Some(date) = &item.info.date_added {
                writeln!(self.out, "    Added: {}", date)?;
            }
            if !item.info.tags.is_empty() {
                writeln!(self.out, "    Tags: {}", item.info.tags.join(", "))?;
            }
            for line in item.info.plot.iter().flat_map(|p| p.lines()) {
                writeln!(self.out, "    {}", line)?;
            }
            writeln!(self.out, "    {}", item.url)?;
        }

        if listing.sort_methods.contains(&SortMethod::DateAdded) {
            writeln!(self.out, "(sortable by date added)")?;
        }
        Ok(())
    }
}

/// Treats an interrupted prompt (Ctrl-C) as a cancelled dialog.
fn cancelled_as_none(result: Result<String, dialoguer::Error>) -> Result<Option<String>, HostError> {
    match result {
        Ok(text) => Ok(Some(text)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl<W: Write> Host for TerminalHost<W> {
    fn input(&mut self, heading: &str) -> Result<Option<String>, HostError> {
        let result = dialoguer::Input::<String>::new()
            .with_prompt(heading)
            .allow_empty(true)
            .interact_text();
        cancelled_as_none(result)
    }

    fn ok_dialog(&mut self, heading: &str, message: &str) -> Result<(), HostError> {
        eprintln!("{}: {}", heading, message);
        Ok(())
    }

    fn end_of_directory(&mut self, listing: &DirectoryListing) -> Result<(), HostError> {
        match self.format {
            OutputFormat::Text => self.write_text_listing(listing)?,
            OutputFormat::Json => {
                let doc = JsonListing {
                    handle: self.handle,
                    listing,
                };
                serde_json::to_writer_pretty(&mut self.out, &doc)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn set_resolved_url(&mut self, url: &str) -> Result<(), HostError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", url)?,
            OutputFormat::Json => {
                let doc = JsonResolved {
                    handle: self.handle,
                    succeeded: true,
                    path: url,
                };
                serde_json::to_writer_pretty(&mut self.out, &doc)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
