use serde::Serialize;

use crate::span::Span;

/// What an [`AnnotatedSpan`] renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanKind {
    /// Plain text; the source slice is the content.
    Text,
    /// An `@handle` reference to a user profile.
    Mention {
        /// The identifier without the leading `@`.
        handle: String,
    },
    /// A navigable URL.
    Link {
        /// Absolute URL to open.
        href: String,
        /// Possibly truncated label shown to the reader.
        display_text: String,
    },
}

/// A typed slice of the annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSpan {
    pub span: Span,
    #[serde(flatten)]
    pub kind: SpanKind,
}

impl AnnotatedSpan {
    /// Returns the raw source text this span covers.
    ///
    /// `source` must be the string that was annotated; an unrelated string
    /// yields `""` rather than panicking.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source).unwrap_or_default()
    }
}

/// The result of [`annotate`](crate::annotate): spans that partition the input.
///
/// Consecutive spans are contiguous and together cover every byte of the
/// source exactly once. Empty input produces no spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotatedText {
    spans: Vec<AnnotatedSpan>,
}

impl AnnotatedText {
    pub(crate) fn new(spans: Vec<AnnotatedSpan>) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[AnnotatedSpan] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<AnnotatedSpan> {
        self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedSpan> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Distinct mentioned handles in order of first appearance.
    pub fn mentions(&self) -> Vec<&str> {
        let mut handles: Vec<&str> = Vec::new();
        for span in &self.spans {
            if let SpanKind::Mention { handle } = &span.kind
                && !handles.contains(&handle.as_str())
            {
                handles.push(handle);
            }
        }
        handles
    }

    /// `(href, display_text)` of every link, in order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.spans.iter().filter_map(|span| match &span.kind {
            SpanKind::Link { href, display_text } => Some((href.as_str(), display_text.as_str())),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a AnnotatedText {
    type Item = &'a AnnotatedSpan;
    type IntoIter = std::slice::Iter<'a, AnnotatedSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
