//! # Annotation Kinds
//!
//! Types that own the syntax knowledge for each annotation.
//!
//! ## Types
//!
//! - **`Link`**: scheme and `www.` prefixes, the excluded character set, href
//!   normalization and display-text truncation
//! - **`Mention`**: `SIGIL = b'@'` and the handle character class
//!
//! ## Design Principle
//!
//! Prefixes, thresholds and character classes live here, not scattered in
//! scanner code.

pub mod link;
pub mod mention;

pub use link::Link;
pub use mention::Mention;
