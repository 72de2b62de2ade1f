//! Text extraction
//!
//! This module provides the extraction layer for pulling per-page text out
//! of source documents before any sectioning logic runs.
//!
//! ## Architecture
//!
//! ```text
//! Document (PDF)
//!     ↓
//! [Backend-specific TextExtractor]
//!     ↓
//! Vec<String> (ordered page texts)
//!     ↓
//! [DocumentProcessor]
//!     ↓
//! DocumentResult
//! ```
//!
//! Everything after this point works with plain page text and is
//! format-agnostic.

pub mod traits;

#[cfg(feature = "lopdf-backend")]
pub mod lopdf_backend;

// Re-export main types
pub use traits::{ExtractError, TextExtractor};

#[cfg(feature = "lopdf-backend")]
pub use lopdf_backend::LopdfExtractor;
