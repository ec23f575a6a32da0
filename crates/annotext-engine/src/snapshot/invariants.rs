use crate::{
    kinds::link,
    types::{AnnotatedText, SpanKind},
};

/// Panics if `annotated` is not a valid partition of `source`.
pub fn check(source: &str, annotated: &AnnotatedText) {
    let mut expected_start = 0;

    for s in annotated {
        let sp = s.span;
        assert!(
            sp.start == expected_start,
            "span {:?} does not start where the previous one ended ({})",
            sp,
            expected_start
        );
        assert!(!sp.is_empty(), "empty span emitted: {:?}", sp);
        let Some(raw) = sp.slice(source) else {
            panic!(
                "span out of bounds or off a char boundary: {:?} (source len: {})",
                sp,
                source.len()
            );
        };

        match &s.kind {
            SpanKind::Text => {}
            SpanKind::Mention { handle } => {
                assert_eq!(
                    raw.strip_prefix('@'),
                    Some(handle.as_str()),
                    "mention handle disagrees with source at {:?}",
                    sp
                );
            }
            SpanKind::Link { href, display_text } => {
                assert_eq!(
                    href,
                    &link::normalize_href(raw),
                    "link href disagrees with source at {:?}",
                    sp
                );
                assert!(!display_text.is_empty(), "empty display text at {:?}", sp);
            }
        }

        expected_start = sp.end;
    }

    assert_eq!(
        expected_start,
        source.len(),
        "spans do not cover the whole source"
    );
}
