//! UniFFI bindings for annotext mobile apps
//!
//! Exposes the annotation engine to the Kotlin and Swift clients so post
//! bodies render the same way on every platform.
//!
//! Offsets crossing the boundary are UTF-16 code units, matching how both
//! host languages index their strings.

use annotext_engine::{RenderOptions, SpanKind, annotate};

uniffi::setup_scaffolding!();

// ============ DTOs ============

/// What a span renders as.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum SpanKindDto {
    Text,
    Mention {
        handle: String,
    },
    Link {
        href: String,
        display_text: String,
    },
}

/// A typed slice of the input text.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SpanRecord {
    /// Inclusive start, in UTF-16 code units
    pub start: u32,
    /// Exclusive end, in UTF-16 code units
    pub end: u32,
    /// The raw text the span covers
    pub text: String,
    pub kind: SpanKindDto,
}

impl SpanKindDto {
    fn from_engine(kind: SpanKind) -> Self {
        match kind {
            SpanKind::Text => Self::Text,
            SpanKind::Mention { handle } => Self::Mention { handle },
            SpanKind::Link { href, display_text } => Self::Link { href, display_text },
        }
    }
}

// ============ Standalone Functions ============

/// Split text into plain, mention and link spans covering all of it.
#[uniffi::export]
pub fn annotate_text(text: String) -> Vec<SpanRecord> {
    annotate(&text)
        .into_spans()
        .into_iter()
        .map(|s| {
            let (start, end) = s.span.to_utf16(&text);
            SpanRecord {
                start: saturating_u32(start),
                end: saturating_u32(end),
                text: s.text(&text).to_string(),
                kind: SpanKindDto::from_engine(s.kind),
            }
        })
        .collect()
}

/// Render text as an HTML fragment with mention and link anchors.
#[uniffi::export]
pub fn render_html(text: String, profile_prefix: String, open_links_in_new_tab: bool) -> String {
    let options = RenderOptions {
        profile_prefix,
        open_links_in_new_tab,
    };
    annotext_engine::render_html(&text, &annotate(&text), &options)
}

/// Distinct handles mentioned in the text, in order of first appearance.
#[uniffi::export]
pub fn mentioned_handles(text: String) -> Vec<String> {
    annotate(&text)
        .mentions()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
