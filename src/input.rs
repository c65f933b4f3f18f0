//! Parsing of the user's comma-separated URL list.
//!
//! The first line of input names every URL for the run. Splitting is
//! deliberately forgiving about whitespace around commas but does not
//! validate or filter the segments themselves: an empty segment between two
//! commas survives as an empty string and will surface as a per-URL fetch
//! error later, rather than being silently dropped.

/// Split one line of input into trimmed URL strings.
///
/// Returns `None` if the line is blank or whitespace-only, which the caller
/// treats as "no input, exit". Otherwise every comma-separated segment is
/// kept in order, so the result always has `count(',') + 1` entries.
pub fn parse_url_list(line: &str) -> Option<Vec<String>> {
    if line.trim().is_empty() {
        return None;
    }
    Some(line.split(',').map(|u| u.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_none() {
        assert_eq!(parse_url_list(""), None);
        assert_eq!(parse_url_list("   \t  "), None);
        assert_eq!(parse_url_list("\n"), None);
    }

    #[test]
    fn test_single_url() {
        assert_eq!(
            parse_url_list("https://example.com"),
            Some(vec!["https://example.com".to_string()])
        );
    }

    #[test]
    fn test_trims_and_preserves_order() {
        let urls = parse_url_list(" https://a.test , https://b.test ,https://c.test").unwrap();
        assert_eq!(urls, vec!["https://a.test", "https://b.test", "https://c.test"]);
    }

    #[test]
    fn test_entry_count_is_commas_plus_one() {
        let line = "a,b,c,d";
        let urls = parse_url_list(line).unwrap();
        assert_eq!(urls.len(), line.matches(',').count() + 1);
    }

    #[test]
    fn test_empty_segment_passes_through() {
        // "a,,b" keeps the empty middle segment; it fails at fetch time.
        let urls = parse_url_list("https://a.test,,https://b.test").unwrap();
        assert_eq!(urls, vec!["https://a.test", "", "https://b.test"]);
    }
}
