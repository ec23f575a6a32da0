//! Mention completion for the post composer.
//!
//! While a user types `@ki`, the composer asks [`active_mention`] what is
//! being typed, offers matching handles, and splices the chosen one back in
//! with [`complete_mention`].

use crate::{kinds::Mention, scan::scan_links, span::Span};

/// A partially typed mention around the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionQuery {
    /// From the `@` to the end of the handle run the caret sits in.
    pub span: Span,
    /// Handle characters typed before the caret, without `@`. May be empty.
    pub query: String,
}

/// Text after a completion and where the caret belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Byte offset just past the inserted mention and its trailing space.
    pub caret: usize,
}

/// Finds the mention being typed at byte offset `caret`.
///
/// Returns `None` when the caret is not directly after `@` plus zero or more
/// handle characters, when the `@` sits inside a link, or when `caret` is out
/// of bounds or not on a character boundary.
pub fn active_mention(text: &str, caret: usize) -> Option<MentionQuery> {
    if !text.is_char_boundary(caret) {
        return None;
    }

    let bytes = text.as_bytes();
    let handle_start = bytes[..caret]
        .iter()
        .rposition(|&b| !Mention::is_handle_byte(b))
        .map_or(0, |idx| idx + 1);
    let sigil = handle_start.checked_sub(1)?;
    if bytes[sigil] != Mention::SIGIL {
        return None;
    }

    if scan_links(text).iter().any(|link| link.span.contains(sigil)) {
        return None;
    }

    let handle_end = bytes[caret..]
        .iter()
        .position(|&b| !Mention::is_handle_byte(b))
        .map_or(text.len(), |idx| caret + idx);

    Some(MentionQuery {
        span: Span::new(sigil, handle_end),
        query: text[handle_start..caret].to_string(),
    })
}

/// Replaces `query` in `text` with `@handle` followed by a space.
///
/// An existing space after the query is reused rather than doubled.
/// Returns `None` if `query` does not fit `text`.
pub fn complete_mention(text: &str, query: &MentionQuery, handle: &str) -> Option<Completion> {
    let before = text.get(..query.span.start)?;
    let after = text.get(query.span.end..)?;

    let mut out = String::with_capacity(text.len() + handle.len() + 2);
    out.push_str(before);
    out.push(char::from(Mention::SIGIL));
    out.push_str(handle);

    let rest = after.strip_prefix(' ').unwrap_or(after);
    out.push(' ');
    let caret = out.len();
    out.push_str(rest);

    Some(Completion { text: out, caret })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn query(text: &str, caret: usize) -> Option<(usize, usize, String)> {
        active_mention(text, caret).map(|q| (q.span.start, q.span.end, q.query))
    }

    #[rstest]
    #[case("hi @ki", 6, Some((3, 6, "ki")))]
    #[case("hi @", 4, Some((3, 4, "")))]
    #[case("@kim", 2, Some((0, 4, "k")))]
    #[case("hi @kim there", 7, Some((3, 7, "kim")))]
    #[case("a@b", 3, Some((1, 3, "b")))]
    fn finds_active_query(
        #[case] text: &str,
        #[case] caret: usize,
        #[case] expected: Option<(usize, usize, &str)>,
    ) {
        let expected = expected.map(|(s, e, q)| (s, e, q.to_string()));
        assert_eq!(query(text, caret), expected);
    }

    #[rstest]
    #[case("hello", 5)]
    #[case("hi @kim there", 10)]
    #[case("kim", 3)]
    #[case("", 0)]
    #[case("@kim", 99)]
    #[case("한@", 1)]
    #[case("see https://x.io/@ab", 20)]
    fn no_active_query(#[case] text: &str, #[case] caret: usize) {
        assert_eq!(query(text, caret), None);
    }

    #[test]
    fn caret_right_after_non_ascii_then_sigil() {
        assert_eq!(query("한@k", 5), Some((3, 5, "k".to_string())));
    }

    #[test]
    fn completes_and_places_caret() {
        let text = "hi @ki";
        let q = active_mention(text, 6).unwrap();
        let done = complete_mention(text, &q, "kim_lee").unwrap();
        assert_eq!(done.text, "hi @kim_lee ");
        assert_eq!(done.caret, done.text.len());
    }

    #[test]
    fn completes_mid_text_reusing_space() {
        let text = "hi @k there";
        let q = active_mention(text, 5).unwrap();
        let done = complete_mention(text, &q, "kim").unwrap();
        assert_eq!(done.text, "hi @kim there");
        assert_eq!(&done.text[done.caret..], "there");
    }

    #[test]
    fn completion_replaces_whole_handle_run() {
        let text = "@alx!";
        let q = active_mention(text, 2).unwrap();
        let done = complete_mention(text, &q, "alex").unwrap();
        assert_eq!(done.text, "@alex !");
        assert_eq!(done.caret, 6);
    }

    #[test]
    fn stale_query_is_rejected() {
        let q = active_mention("hello @someone", 14).unwrap();
        assert_eq!(complete_mention("hi", &q, "x"), None);
    }
}
