//! # Snapshot Testing Support
//!
//! Runtime checks used by the fixture tests alongside the
//! [`listing`](crate::listing) snapshots.
//!
//! ## Modules
//!
//! - **`invariants`**: Checks for annotator correctness (spans in bounds,
//!   contiguous, covering the input, payloads agreeing with the source)

pub mod invariants;

pub use invariants::check as invariants;
