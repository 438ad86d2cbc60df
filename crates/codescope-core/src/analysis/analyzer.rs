//! File-level analysis composer
//!
//! Orchestrates language detection, structural metrics, syntax analysis
//! and the quality scan for one source unit. Only total unreadability of
//! the input fails a call; sub-step failures degrade to error fields
//! inside the relevant report section.

use crate::analysis::language::detect_from_content;
use crate::analysis::quality::QualityInspector;
use crate::analysis::structure::StructuralScanner;
use crate::analysis::syntax::SyntaxAnalyzer;
use codescope_shared::{FileAnalysis, Language, Result, ScopeError, SourceUnit};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Analyzer for individual files and snippets.
#[derive(Debug, Default)]
pub struct FileAnalyzer;

impl FileAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a file by path, the strict entry point.
    ///
    /// The language is taken from the extension alone; an unknown
    /// extension fails with [`ScopeError::UnsupportedFileType`]. When
    /// `content` is not supplied it is read from disk, and an I/O or
    /// decode failure fails the call.
    #[instrument(skip(self, content))]
    pub async fn analyze_file(&self, path: &Path, content: Option<&str>) -> Result<FileAnalysis> {
        let Some(language) = Language::from_path(path) else {
            return Err(ScopeError::UnsupportedFileType {
                path: path.display().to_string(),
            });
        };

        let content = match content {
            Some(text) => text.to_string(),
            None => tokio::fs::read_to_string(path).await?,
        };

        Ok(self.compose(SourceUnit {
            path: path.to_path_buf(),
            content,
            language,
        }))
    }

    /// Analyze a snippet, the content-fallback entry point.
    ///
    /// Never fails: when the optional name carries no known extension the
    /// language is inferred from the content, bottoming out at `text`.
    pub fn analyze_snippet(&self, name: Option<&str>, content: &str) -> FileAnalysis {
        let language = detect_from_content(content, name);
        self.compose(SourceUnit {
            path: PathBuf::from(name.unwrap_or("<snippet>")),
            content: content.to_string(),
            language,
        })
    }

    fn compose(&self, source: SourceUnit) -> FileAnalysis {
        debug!(
            path = %source.path.display(),
            language = %source.language,
            "analyzing source unit"
        );

        let structure = StructuralScanner::scan(&source.content, source.language);
        let syntax = SyntaxAnalyzer::analyze(&source.content, source.language);
        let quality = QualityInspector::inspect(&source.content, source.language);

        FileAnalysis {
            source,
            structure,
            syntax,
            quality,
        }
    }
}
