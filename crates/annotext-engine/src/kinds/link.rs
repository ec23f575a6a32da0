/// Link annotation type: recognition pattern and presentation rules.
///
/// Full-width punctuation (U+3000–U+303F, U+FF00–U+FFEF) is excluded from the
/// URL body so that `。` or `，` trailing a URL in Korean or Japanese text
/// stays in the surrounding text.
pub struct Link;

impl Link {
    /// Pattern for link candidates. Only the prefix is case-insensitive, and
    /// only under ASCII folding: `ſ` must not stand in for `s`.
    pub const PATTERN: &'static str =
        r#"(?i-u:https?://|www\.)[^\s<>"\x{3000}-\x{303F}\x{FF00}-\x{FFEF}]+"#;

    /// Schemes stripped from the display text.
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];

    /// Scheme-less prefix that still counts as a link.
    pub const WWW: &'static str = "www.";

    /// Scheme prepended to scheme-less links.
    pub const DEFAULT_SCHEME: &'static str = "https://";

    /// Display texts longer than this many characters are truncated.
    pub const MAX_DISPLAY_CHARS: usize = 40;

    /// Appended to truncated display texts.
    pub const ELLIPSIS: &'static str = "...";

    /// Path previews of this many characters or fewer collapse to `/...`.
    pub const MIN_PATH_PREVIEW: usize = 5;
}

/// Resolves the navigable href for a matched link.
///
/// `www.example.com` becomes `https://www.example.com`; anything carrying a
/// scheme is returned verbatim.
pub fn normalize_href(matched: &str) -> String {
    if starts_with_ignore_case(matched, Link::WWW) {
        format!("{}{matched}", Link::DEFAULT_SCHEME)
    } else {
        matched.to_string()
    }
}

/// Produces the human-readable label for a matched link.
///
/// Matches of at most [`Link::MAX_DISPLAY_CHARS`] characters are shown as-is.
/// Longer ones lose their scheme and, if still too long, are shortened while
/// keeping the whole domain visible.
pub fn display_text(matched: &str) -> String {
    let max = Link::MAX_DISPLAY_CHARS;
    if char_len(matched) <= max {
        return matched.to_string();
    }

    let stripped = strip_scheme(matched);
    if char_len(stripped) <= max {
        return stripped.to_string();
    }

    let Some(slash) = stripped.find('/') else {
        return format!("{}{}", take_chars(stripped, max), Link::ELLIPSIS);
    };

    // `path` keeps its leading slash
    let (domain, path) = stripped.split_at(slash);
    match max.checked_sub(char_len(domain) + Link::ELLIPSIS.len()) {
        Some(available) if available > Link::MIN_PATH_PREVIEW => {
            format!("{domain}{}{}", take_chars(path, available), Link::ELLIPSIS)
        }
        _ => format!("{domain}/{}", Link::ELLIPSIS),
    }
}

/// Removes a leading `http://` or `https://`, ignoring ASCII case.
pub fn strip_scheme(url: &str) -> &str {
    Link::SCHEMES
        .iter()
        .find(|scheme| starts_with_ignore_case(url, scheme))
        .map_or(url, |scheme| &url[scheme.len()..])
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn take_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(idx, _)| &s[..idx])
}
