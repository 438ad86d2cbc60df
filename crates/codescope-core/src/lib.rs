//! # CodeScope Core
//!
//! Core analysis engine for CodeScope:
//! - Language classification from extensions and content heuristics
//! - Structural line metrics and coarse declaration counts
//! - Per-line quality scanning with a flat linear score
//! - Syntax-tree symbol extraction for grammar-backed languages
//! - Project-wide aggregation tolerant of per-file failure
//!
//! The surrounding service layers (HTTP, persistence, repository
//! management) are external collaborators; this crate only consumes file
//! paths or content and returns structured analysis records.

pub mod analysis;
pub mod engine;

// Re-export commonly used types
pub use codescope_shared::*;

pub use analysis::{FileAnalyzer, ProjectAnalyzer, detect_from_content};
pub use engine::AnalysisEngine;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
