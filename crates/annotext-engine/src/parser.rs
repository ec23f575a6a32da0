use crate::{
    kinds::link,
    resolve::resolve,
    scan::{Candidate, CandidateKind, scan_links, scan_mentions},
    span::Span,
    types::{AnnotatedSpan, AnnotatedText, SpanKind},
};

/// Annotates mentions and links in `text`.
///
/// # Passes
/// 1. Link candidates are collected first.
/// 2. Mention candidates are collected, skipping any that start inside a link.
/// 3. Candidates are merged by start offset, dropping overlaps.
/// 4. Spans are emitted with a single cursor, filling gaps with text.
///
/// # Returns
/// Spans covering the entire input. Text between annotations is emitted as
/// [`SpanKind::Text`]; empty input yields no spans.
pub fn annotate(text: &str) -> AnnotatedText {
    let links = scan_links(text);
    let mentions = scan_mentions(text, &links);
    let kept = resolve(links, mentions);

    let mut out = Vec::with_capacity(kept.len() * 2 + 1);
    let mut text_start = 0;

    // Helper to flush accumulated text as a Text span
    fn flush_text(out: &mut Vec<AnnotatedSpan>, start: usize, end: usize) {
        if end > start {
            out.push(AnnotatedSpan {
                span: Span::new(start, end),
                kind: SpanKind::Text,
            });
        }
    }

    for candidate in kept {
        flush_text(&mut out, text_start, candidate.span.start);
        text_start = candidate.span.end;
        out.push(to_annotated(text, candidate));
    }

    flush_text(&mut out, text_start, text.len());
    AnnotatedText::new(out)
}

fn to_annotated(text: &str, candidate: Candidate) -> AnnotatedSpan {
    let Candidate { span, kind } = candidate;
    let kind = match kind {
        CandidateKind::Mention { handle } => SpanKind::Mention {
            handle: text[handle.start..handle.end].to_string(),
        },
        CandidateKind::Link => {
            let matched = &text[span.start..span.end];
            SpanKind::Link {
                href: link::normalize_href(matched),
                display_text: link::display_text(matched),
            }
        }
    };
    AnnotatedSpan { span, kind }
}
