//! Inline citation formatting for synopsis text.
//!
//! Synopsis fields arrive with parenthesized citation groups like `(1, 2, 3)`
//! referring to claim numbers. Each group is rewritten into a highlighted run
//! of anchor links targeting the numbered claim rows in the same document.

use regex::Regex;

/// Highlight color shared by citation links and claim-row anchors.
pub const HIGHLIGHT_COLOR: &str = "#FF3399";

/// Rewrites parenthesized citation groups into anchored links.
///
/// Every `(…)` group of digits, commas, and spaces becomes a single
/// `<font color=#FF3399>[…]</font>` span holding one `<a href="#N">N</a>`
/// per number, comma-joined. Upstream generation sometimes nests commas
/// irregularly (e.g. `(1,2, 3)`); every digit run still becomes its own
/// link. Text outside the groups passes through unchanged, except that
/// newlines become `<br/>`.
pub fn format_citations(text: &str) -> String {
    let group_re = Regex::new(r"\(([\d, ]+)\)").unwrap();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in group_re.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        out.push_str(&text[last..whole.start()]);

        let links: Vec<String> = caps[1]
            .split([',', ' '])
            .filter(|token| !token.is_empty())
            .map(|num| format!("<a href=\"#{num}\">{num}</a>"))
            .collect();
        out.push_str(&format!("<font color={HIGHLIGHT_COLOR}>[{}]</font>", links.join(", ")));

        last = whole.end();
    }
    out.push_str(&text[last..]);

    out.replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_group() {
        let result = format_citations("claim (1, 2)");
        assert!(result.starts_with("claim "));
        assert!(result.contains(r##"<a href="#1">1</a>"##));
        assert!(result.contains(r##"<a href="#2">2</a>"##));
        assert_eq!(result.matches("<font").count(), 1);
    }

    #[test]
    fn test_full_replacement_shape() {
        assert_eq!(
            format_citations("x (1, 2) y"),
            r##"x <font color=#FF3399>[<a href="#1">1</a>, <a href="#2">2</a>]</font> y"##
        );
    }

    #[test]
    fn test_irregular_comma_nesting() {
        // No number may be dropped or merged.
        let result = format_citations("(1,2, 3)");
        for n in ["1", "2", "3"] {
            assert!(result.contains(&format!(r##"<a href="#{n}">{n}</a>"##)));
        }
        assert_eq!(result.matches("<a ").count(), 3);
    }

    #[test]
    fn test_multiple_groups() {
        let result = format_citations("a (1) b (2, 3) c");
        assert_eq!(result.matches("<font").count(), 2);
        assert_eq!(result.matches("<a ").count(), 3);
        assert!(result.contains(" b "));
    }

    #[test]
    fn test_no_groups_passthrough() {
        assert_eq!(format_citations("no citations here"), "no citations here");
    }

    #[test]
    fn test_non_numeric_parens_untouched() {
        assert_eq!(format_citations("as noted (see above)"), "as noted (see above)");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(format_citations("line one\nline two"), "line one<br/>line two");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_citations(""), "");
    }
}
