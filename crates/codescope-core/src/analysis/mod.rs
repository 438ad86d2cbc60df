//! Code Analysis
//!
//! This module provides the CodeScope analysis pipeline:
//! - Language classification (extension table and content heuristics)
//! - Structural line metrics
//! - Per-line quality scanning and scoring
//! - Grammar-backed syntax-tree symbol extraction
//! - Project-wide aggregation

pub mod analyzer;
pub mod language;
pub mod project;
pub mod quality;
pub mod registry;
pub mod structure;
pub mod syntax;

// Re-export main types
pub use analyzer::FileAnalyzer;
pub use language::detect_from_content;
pub use project::ProjectAnalyzer;
pub use quality::QualityInspector;
pub use registry::{LanguageProfile, LanguageRegistry};
pub use structure::StructuralScanner;
pub use syntax::SyntaxAnalyzer;
