//! Bare domain-name extraction for rating lookups.

/// Extracts the bare host name from a URL.
///
/// An optional leading `http://` or `https://` and an optional leading
/// `www.` are stripped; the rest of the network location is kept as-is,
/// including an explicit port and the original casing. The authority runs
/// up to the first `/`, `?`, or `#`. Inputs with no host portion produce
/// the empty string.
///
/// Lookups into the ratings index are therefore insensitive to
/// http/https/www variation but sensitive to any other host difference.
pub fn domain_name(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.strip_prefix("www.").unwrap_or(authority);

    // A colon is only valid when it introduces a port; anything else is a
    // scheme remnant like "mailto:x" with no network location.
    match host.rsplit_once(':') {
        Some((_, tail)) if tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) => String::new(),
        _ => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.example.com/a", "example.com")]
    #[case("http://www.example.com/a/b?q=1", "example.com")]
    #[case("https://example.com/a", "example.com")]
    #[case("example.com/a", "example.com")]
    #[case("www.example.com/a", "example.com")]
    #[case("https://news.example.co.uk/story", "news.example.co.uk")]
    fn test_strips_scheme_and_www(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(domain_name(input), expected);
    }

    #[test]
    fn test_port_is_retained() {
        assert_eq!(domain_name("https://example.com:8080/a"), "example.com:8080");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(domain_name("https://Example.Org/a"), "Example.Org");
    }

    #[test]
    fn test_empty_host_is_empty_string() {
        assert_eq!(domain_name(""), "");
        assert_eq!(domain_name("https:///a"), "");
        assert_eq!(domain_name("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_query_without_path() {
        assert_eq!(domain_name("example.com?q=1"), "example.com");
    }
}
