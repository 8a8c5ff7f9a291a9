//! Search query gating.

use crate::host::{Host, HostError};
use crate::strings::{PLUGIN_NAME, Strings};
use tracing::warn;

/// Shortest query the search endpoint is asked for.
pub const MIN_QUERY_LEN: usize = 3;

/// Whether `query` is long enough to be sent.
pub fn query_is_valid(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Determines the query for a search listing.
///
/// A non-empty `preset` (from the invocation URL) is used as is when valid.
/// Otherwise the user is prompted until they enter a valid query or give up
/// with an empty or cancelled input, in which case `None` is returned and no
/// search must be issued.
pub fn resolve_query<H>(preset: &str, host: &mut H, strings: &Strings) -> Result<Option<String>, HostError>
where
    H: Host + ?Sized,
{
    let mut query = if preset.is_empty() {
        prompt(host, strings)?
    } else {
        preset.trim().to_string()
    };

    loop {
        if query.is_empty() {
            return Ok(None);
        }
        if query_is_valid(&query) {
            return Ok(Some(query));
        }

        warn!(%query, "search query too short");
        host.ok_dialog(PLUGIN_NAME, strings.query_too_short())?;
        query = prompt(host, strings)?;
    }
}

fn prompt<H>(host: &mut H, strings: &Strings) -> Result<String, HostError>
where
    H: Host + ?Sized,
{
    Ok(host
        .input(strings.search_heading())?
        .map(|q| q.trim().to_string())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::Language;
    use crate::testing::ScriptedHost;

    fn strings() -> Strings {
        Strings::new(Language::De)
    }

    #[test]
    fn test_query_is_valid() {
        assert!(!query_is_valid(""));
        assert!(!query_is_valid("ab"));
        assert!(query_is_valid("abc"));
        assert!(!query_is_valid("äö"));
        assert!(query_is_valid("äöü"));
    }

    #[test]
    fn test_preset_skips_prompt() {
        let mut host = ScriptedHost::default();
        let query = resolve_query("minecraft", &mut host, &strings()).unwrap();
        assert_eq!(query.as_deref(), Some("minecraft"));
        assert_eq!(host.prompts, 0);
    }

    #[test]
    fn test_empty_input_aborts() {
        let mut host = ScriptedHost::answering(&[Some("")]);
        assert_eq!(resolve_query("", &mut host, &strings()).unwrap(), None);
        assert_eq!(host.prompts, 1);
        assert!(host.messages.is_empty());
    }

    #[test]
    fn test_cancelled_input_aborts() {
        let mut host = ScriptedHost::answering(&[None]);
        assert_eq!(resolve_query("", &mut host, &strings()).unwrap(), None);
    }

    #[test]
    fn test_short_input_reprompts() {
        let mut host = ScriptedHost::answering(&[Some("ab"), Some("x"), Some("abc")]);
        let query = resolve_query("", &mut host, &strings()).unwrap();

        assert_eq!(query.as_deref(), Some("abc"));
        assert_eq!(host.prompts, 3);
        assert_eq!(host.messages.len(), 2);
        assert_eq!(host.messages[0], strings().query_too_short());
    }

    #[test]
    fn test_short_preset_prompts_once_then_aborts() {
        let mut host = ScriptedHost::answering(&[Some("")]);
        assert_eq!(resolve_query("ab", &mut host, &strings()).unwrap(), None);
        assert_eq!(host.messages.len(), 1);
        assert_eq!(host.prompts, 1);
    }
}
