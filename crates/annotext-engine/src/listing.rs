//! Line-per-span listing of annotated text.
//!
//! Each span becomes `Kind start..end "text" key="value"...`, with the text
//! shortened to 60 characters. The CLI prints it for `--spans` and the
//! fixture tests snapshot it.

use std::{collections::BTreeMap, fmt};

use crate::types::{AnnotatedText, SpanKind};

pub struct Listing {
    pub rows: Vec<ListingRow>,
}

pub struct ListingRow {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub parts: BTreeMap<String, String>,
}

pub fn listing(source: &str, annotated: &AnnotatedText) -> Listing {
    let rows = annotated
        .iter()
        .map(|s| {
            let mut parts = BTreeMap::new();
            let kind = match &s.kind {
                SpanKind::Text => "Text",
                SpanKind::Mention { handle } => {
                    parts.insert("handle".into(), handle.clone());
                    "Mention"
                }
                SpanKind::Link { href, display_text } => {
                    parts.insert("href".into(), href.clone());
                    parts.insert("display".into(), display_text.clone());
                    "Link"
                }
            };
            ListingRow {
                kind: kind.into(),
                span: (s.span.start, s.span.end),
                text: preview(s.text(source), 60),
                parts,
            }
        })
        .collect();

    Listing { rows }
}

/// Truncates to `max` characters with a "..." suffix.
fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "{} {}..{} {:?}", row.kind, row.span.0, row.span.1, row.text)?;
            for (key, value) in &row.parts {
                write!(f, " {key}={value:?}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_lists_spans_with_parts() {
        let source = "hey @jo www.x.io";
        let out = listing(source, &annotate(source));
        assert_eq!(
            out.to_string(),
            concat!(
                "Text 0..4 \"hey \"\n",
                "Mention 4..7 \"@jo\" handle=\"jo\"\n",
                "Text 7..8 \" \"\n",
                "Link 8..16 \"www.x.io\" display=\"www.x.io\" href=\"https://www.x.io\"\n",
            )
        );
    }

    #[test]
    fn empty_source_lists_nothing() {
        assert_eq!(listing("", &annotate("")).to_string(), "");
    }

    #[test]
    fn long_text_is_previewed() {
        let source = "x".repeat(70);
        let out = listing(&source, &annotate(&source));
        assert_eq!(out.rows[0].text, format!("{}...", "x".repeat(60)));
        assert_eq!(out.rows[0].span, (0, 70));
    }

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("hello", 5), "hello");
        assert_eq!(preview("가나다", 1), "가...");
    }
}
