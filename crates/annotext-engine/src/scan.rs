use std::sync::OnceLock;

use regex::Regex;

use crate::{
    cursor::Cursor,
    kinds::{Link, Mention},
    span::Span,
};

/// A recognized but not yet resolved annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Full span of the match, including `@` for mentions.
    pub span: Span,
    pub kind: CandidateKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Link,
    /// `handle` excludes the sigil.
    Mention { handle: Span },
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

/// Finds all link candidates, in ascending and non-overlapping order.
pub fn scan_links(text: &str) -> Vec<Candidate> {
    link_regex()
        .find_iter(text)
        .map(|m| Candidate {
            span: Span::new(m.start(), m.end()),
            kind: CandidateKind::Link,
        })
        .collect()
}

/// Finds all mention candidates that do not start inside one of `links`.
///
/// Links are raw zones for mentions: `https://example.com/@user` is one link,
/// never a link followed by a mention. A mention that starts before a link
/// and runs into it is kept here and settled by overlap resolution.
///
/// `links` must be sorted and non-overlapping, as returned by [`scan_links`].
pub fn scan_mentions(text: &str, links: &[Candidate]) -> Vec<Candidate> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(candidate) = try_scan_mention(&mut cur) {
            if starts_inside_link(links, candidate.span.start) {
                log::trace!("mention at {} suppressed inside link", candidate.span.start);
            } else {
                out.push(candidate);
            }
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to scan `@handle` at the current position.
///
/// Returns `None` if not at `@` or if no handle character follows.
/// On failure, cursor position is unchanged.
fn try_scan_mention(cur: &mut Cursor<'_>) -> Option<Candidate> {
    if cur.peek() != Some(Mention::SIGIL) {
        return None;
    }

    let start = cur.pos();
    let mut probe = cur.clone();
    probe.bump(); // @
    let handle = probe.eat_while(Mention::is_handle_byte);
    if handle.is_empty() {
        return None;
    }

    *cur = probe;
    Some(Candidate {
        span: Span::new(start, cur.pos()),
        kind: CandidateKind::Mention { handle },
    })
}

fn starts_inside_link(links: &[Candidate], offset: usize) -> bool {
    let idx = links.partition_point(|link| link.span.end <= offset);
    links.get(idx).is_some_and(|link| link.span.contains(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link_spans(text: &str) -> Vec<(usize, usize)> {
        scan_links(text)
            .iter()
            .map(|c| (c.span.start, c.span.end))
            .collect()
    }

    fn handles(text: &str) -> Vec<&str> {
        let links = scan_links(text);
        scan_mentions(text, &links)
            .into_iter()
            .map(|c| match c.kind {
                CandidateKind::Mention { handle } => &text[handle.start..handle.end],
                CandidateKind::Link => panic!("expected mention"),
            })
            .collect()
    }

    #[test]
    fn links_with_each_prefix() {
        assert_eq!(link_spans("a http://x.io b"), vec![(2, 13)]);
        assert_eq!(link_spans("https://x.io"), vec![(0, 12)]);
        assert_eq!(link_spans("go www.x.io now"), vec![(3, 11)]);
    }

    #[test]
    fn link_prefix_is_case_insensitive() {
        assert_eq!(link_spans("HTTPS://X.IO"), vec![(0, 12)]);
        assert_eq!(link_spans("WwW.x.io"), vec![(0, 8)]);
    }

    #[test]
    fn prefix_folding_is_ascii_only() {
        // U+017F folds to `s` under Unicode rules
        assert!(scan_links("httpſ://x.io").is_empty());
        assert!(scan_links("ＨＴＴＰＳ://x.io").is_empty());
        assert_eq!(link_spans("ſee https://x.io"), vec![(5, 17)]);
    }

    #[test]
    fn bare_prefix_is_not_a_link() {
        assert!(scan_links("https:// and www. alone").is_empty());
        assert!(scan_links("example.com").is_empty());
    }

    #[test]
    fn link_stops_at_excluded_characters() {
        assert_eq!(link_spans("<https://x.io>"), vec![(1, 13)]);
        assert_eq!(link_spans("\"https://x.io\""), vec![(1, 13)]);
        assert_eq!(link_spans("https://x.io\nnext"), vec![(0, 12)]);
    }

    #[test]
    fn link_stops_at_full_width_punctuation() {
        let text = "여기 https://x.io/글。다음";
        let links = scan_links(text);
        assert_eq!(links.len(), 1);
        assert_eq!(&text[links[0].span.start..links[0].span.end], "https://x.io/글");

        let text = "https://x.io，next";
        let links = scan_links(text);
        assert_eq!(&text[links[0].span.start..links[0].span.end], "https://x.io");
    }

    #[test]
    fn link_keeps_ascii_trailing_punctuation() {
        assert_eq!(link_spans("see https://x.io."), vec![(4, 17)]);
    }

    #[test]
    fn mention_basic_and_edges() {
        assert_eq!(handles("hi @alice and @bob-2!"), vec!["alice", "bob-2"]);
        assert_eq!(handles("@"), Vec::<&str>::new());
        assert_eq!(handles("@ alice"), Vec::<&str>::new());
        assert_eq!(handles("@@alice"), vec!["alice"]);
        assert_eq!(handles("a@b@c"), vec!["b", "c"]);
    }

    #[test]
    fn mention_handle_is_ascii_only() {
        assert_eq!(handles("@jöhn"), vec!["j"]);
        assert_eq!(handles("@한글"), Vec::<&str>::new());
    }

    #[test]
    fn mentions_inside_links_are_suppressed() {
        assert_eq!(handles("visit https://example.com/@notauser"), Vec::<&str>::new());
        assert_eq!(handles("@a https://x.io/?u=@b @c"), vec!["a", "c"]);
    }

    #[test]
    fn mention_touching_link_end_is_kept() {
        // `@` cannot be part of the link body here because of the space
        assert_eq!(handles("https://x.io @me"), vec!["me"]);
    }
}
