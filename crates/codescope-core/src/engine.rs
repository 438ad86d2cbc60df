//! Engine facade coordinating the analysis components

use crate::analysis::{FileAnalyzer, ProjectAnalyzer};
use codescope_shared::{FileAnalysis, ProjectAnalysis, Result, ScopeConfig};
use std::path::Path;
use tracing::{info, instrument};

/// Main entry point for CodeScope analysis.
///
/// Owns the configuration and the per-file and project analyzers. The
/// configuration is fixed at construction; the engine holds no other
/// state, so every call is independent and repeatable.
pub struct AnalysisEngine {
    config: ScopeConfig,
    file_analyzer: FileAnalyzer,
    project_analyzer: ProjectAnalyzer,
}

impl AnalysisEngine {
    /// Create an engine with auto-discovered configuration.
    #[instrument]
    pub fn new() -> Result<Self> {
        let config = ScopeConfig::load_with_env()?;
        Self::with_config(config)
    }

    /// Create an engine with the provided configuration.
    #[instrument(skip(config))]
    pub fn with_config(config: ScopeConfig) -> Result<Self> {
        config.validate()?;
        info!("Initializing CodeScope engine");

        let project_analyzer = ProjectAnalyzer::new(config.analysis.clone());

        Ok(Self {
            config,
            file_analyzer: FileAnalyzer::new(),
            project_analyzer,
        })
    }

    /// Analyze a single file; see [`FileAnalyzer::analyze_file`].
    pub async fn analyze_file(
        &self,
        path: &Path,
        content: Option<&str>,
    ) -> Result<FileAnalysis> {
        self.file_analyzer.analyze_file(path, content).await
    }

    /// Analyze a snippet; see [`FileAnalyzer::analyze_snippet`].
    pub fn analyze_snippet(&self, name: Option<&str>, content: &str) -> FileAnalysis {
        self.file_analyzer.analyze_snippet(name, content)
    }

    /// Analyze a project tree; see [`ProjectAnalyzer::analyze_project`].
    pub async fn analyze_project(&self, root: &Path) -> Result<ProjectAnalysis> {
        self.project_analyzer.analyze_project(root).await
    }

    /// The effective configuration.
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }
}
