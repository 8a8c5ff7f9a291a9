//! Chapter markers as player actions and plot text.

use crate::models::Chapter;
use crate::timestamp::seconds_to_time;
use serde::Serialize;

/// An entry of a list item's context menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextMenuEntry {
    /// Text shown in the menu
    pub label: String,
    /// Built-in host command executed when the entry is chosen
    pub command: String,
}

/// Position of `offset` within a video of `video_length` seconds, in percent.
///
/// A video without a known length maps every chapter to 0.
pub fn seek_percentage(offset: u64, video_length: u64) -> f64 {
    if video_length == 0 {
        return 0.0;
    }
    offset as f64 / video_length as f64 * 100.0
}

/// Builds one "jump to" context menu entry per chapter.
pub fn context_menu(chapters: &[Chapter], video_length: u64) -> Vec<ContextMenuEntry> {
    chapters
        .iter()
        .map(|c| ContextMenuEntry {
            label: format!("jump to [{}]: {}", seconds_to_time(c.offset), c.title),
            command: format!(
                "PlayerControl(SeekPercentage({:?}))",
                seek_percentage(c.offset, video_length)
            ),
        })
        .collect()
}

/// Joins the chapters into a plot text, one `[H:MM:SS]: title` line each.
pub fn plot(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .map(|c| format!("[{}]: {}", seconds_to_time(c.offset), c.title))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters() -> Vec<Chapter> {
        vec![
            Chapter {
                title: "Intro".to_string(),
                offset: 0,
            },
            Chapter {
                title: "Minecraft".to_string(),
                offset: 1800,
            },
            Chapter {
                title: "Outro".to_string(),
                offset: 3661,
            },
        ]
    }

    #[test]
    fn test_seek_percentage() {
        assert_eq!(seek_percentage(0, 3600), 0.0);
        assert_eq!(seek_percentage(1800, 3600), 50.0);
        assert_eq!(seek_percentage(3600, 3600), 100.0);
        assert_eq!(seek_percentage(10, 0), 0.0);
    }

    #[test]
    fn test_context_menu() {
        let menu = context_menu(&chapters(), 7200);
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[1].label, "jump to [0:30:00]: Minecraft");
        assert_eq!(menu[1].command, "PlayerControl(SeekPercentage(25.0))");
        assert_eq!(menu[0].command, "PlayerControl(SeekPercentage(0.0))");
    }

    #[test]
    fn test_plot() {
        assert_eq!(
            plot(&chapters()),
            "[0:00:00]: Intro\n[0:30:00]: Minecraft\n[1:01:01]: Outro"
        );
        assert_eq!(plot(&[]), "");
    }
}
