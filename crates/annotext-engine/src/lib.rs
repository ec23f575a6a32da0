//! # Text Annotation
//!
//! Turns a post or comment body into spans of plain text, `@handle` mentions
//! and links, ready for a rendering layer to map onto profile links and
//! anchors.
//!
//! ## Architecture
//!
//! Annotation runs in passes over the source string:
//! - Links are found first and act as raw zones for mentions
//! - Mentions are found with a byte cursor, skipping any that start in a link
//! - Overlapping candidates are resolved by start offset, first come wins
//! - Spans are emitted with a single cursor, filling gaps with text
//!
//! ## Modules
//!
//! - **`span`**: `Span`, a byte range `[start, end)` into the source
//! - **`types`**: `AnnotatedText`, `AnnotatedSpan`, `SpanKind`
//! - **`kinds`**: `Link` and `Mention` with their owned syntax rules
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`scan`** / **`resolve`**: candidate detection and overlap resolution
//! - **`parser`**: `annotate()` main entry point
//! - **`render`**: HTML fragment rendering
//! - **`listing`**: line-per-span text listing
//! - **`compose`**: mention completion helpers for the composer
//! - **`snapshot`**: invariant checks for tests
//!
//! Spans always cover the entire input, so concatenating every span's source
//! slice reproduces it exactly.

pub mod compose;
pub mod cursor;
pub mod kinds;
pub mod listing;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod snapshot;
pub mod span;
pub mod types;

// Re-export key types for easier usage
pub use compose::{Completion, MentionQuery, active_mention, complete_mention};
pub use kinds::link::{display_text, normalize_href};
pub use listing::{Listing, listing};
pub use parser::annotate;
pub use render::{RenderOptions, render_html};
pub use span::Span;
pub use types::{AnnotatedSpan, AnnotatedText, SpanKind};
