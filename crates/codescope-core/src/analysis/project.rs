//! Project-level analysis and aggregation
//!
//! Walks a root directory, analyzes every code file it keeps, and folds
//! the per-file results into project statistics and an aggregate score.
//! One file's failure never aborts the walk: it is logged and skipped.

use crate::analysis::FileAnalyzer;
use codescope_shared::{
    AnalysisConfig, ProjectAnalysis, ProjectScore, ProjectStats, Result, ScopeError,
};
use futures::stream::StreamExt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory names pruned from every walk, in addition to hidden entries.
const IGNORED_DIRS: &[&str] = &["node_modules", "__pycache__", "venv", "env", ".git"];

/// Extensions considered code files during a project walk.
const CODE_FILE_EXTENSIONS: &[&str] = &[
    "py", "js", "ts", "jsx", "tsx", "java", "cpp", "c", "cs", "php", "rb", "go", "rs", "swift",
    "kt", "scala", "html", "css", "scss", "less", "sql", "sh", "bash",
];

/// Analyzer for whole project trees.
pub struct ProjectAnalyzer {
    analyzer: FileAnalyzer,
    config: AnalysisConfig,
}

impl ProjectAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            analyzer: FileAnalyzer::new(),
            config,
        }
    }

    /// Analyze every code file under `root`.
    ///
    /// Fatal only when the root itself is not a readable directory.
    /// Files are analyzed with bounded concurrency; statistics are folded
    /// in a single consumer, so the aggregate is independent of
    /// completion order.
    #[instrument(skip(self))]
    pub async fn analyze_project(&self, root: &Path) -> Result<ProjectAnalysis> {
        if !root.is_dir() {
            return Err(ScopeError::ProjectRoot {
                path: root.display().to_string(),
            });
        }

        info!("Starting project analysis for: {}", root.display());

        let files = self.collect_files(root);
        debug!("Collected {} candidate files", files.len());

        let analyzer = &self.analyzer;
        let mut results = futures::stream::iter(files)
            .map(|path| async move {
                let result = analyzer.analyze_file(&path, None).await;
                (path, result)
            })
            .buffer_unordered(self.config.concurrency.max(1));

        let mut stats = ProjectStats::default();
        let mut analyses = Vec::new();
        let mut score_sum = 0.0f64;

        while let Some((path, result)) = results.next().await {
            match result {
                Ok(analysis) => {
                    stats.total_files += 1;
                    stats.total_lines += analysis.structure.total_lines;
                    *stats.languages.entry(analysis.source.language).or_insert(0) += 1;
                    stats.issue_count += analysis.quality.issues.len();
                    score_sum += f64::from(analysis.quality.score);
                    analyses.push(analysis);
                }
                Err(e) => {
                    warn!("Failed to analyze {}: {}", path.display(), e);
                }
            }
        }

        let overall_score = if stats.total_files > 0 {
            round2(score_sum / stats.total_files as f64)
        } else {
            0.0
        };

        let score = ProjectScore {
            overall_score,
            total_files_analyzed: stats.total_files,
            total_issues: stats.issue_count,
        };

        info!(
            files = stats.total_files,
            issues = stats.issue_count,
            score = score.overall_score,
            "Project analysis completed for: {}",
            root.display()
        );

        Ok(ProjectAnalysis {
            root: root.to_path_buf(),
            stats,
            score,
            files: analyses,
        })
    }

    fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_pruned(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable entries get the same treatment as failed
                    // files: logged, skipped, walk continues.
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !Self::is_code_file(entry.path()) {
                continue;
            }

            if let Some(limit) = self.config.max_file_size {
                let too_large = entry.metadata().map(|m| m.len() > limit).unwrap_or(false);
                if too_large {
                    warn!("Skipping oversized file: {}", entry.path().display());
                    continue;
                }
            }

            files.push(entry.into_path());
        }

        files
    }

    fn is_pruned(entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || IGNORED_DIRS.contains(&name.as_ref())
    }

    fn is_code_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| CODE_FILE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use codescope_shared::Language;
    use std::fs;
    use tempfile::TempDir;

    fn analyzer() -> ProjectAnalyzer {
        ProjectAnalyzer::new(AnalysisConfig {
            concurrency: 4,
            follow_links: false,
            max_file_size: None,
        })
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let analysis = analyzer().analyze_project(dir.path()).await.unwrap();

        assert_eq!(analysis.score.overall_score, 0.0);
        assert_eq!(analysis.score.total_files_analyzed, 0);
        assert_eq!(analysis.stats.total_files, 0);
        assert!(analysis.files.is_empty());
    }

    #[tokio::test]
    async fn test_missing_root_is_fatal() {
        let result = analyzer().analyze_project(Path::new("/no/such/root")).await;
        assert!(matches!(result, Err(ScopeError::ProjectRoot { .. })));
    }

    #[tokio::test]
    async fn test_ignored_directories_are_pruned() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules/dep.js"), "var x = 1;\n").unwrap();
        fs::write(dir.path().join("main.py"), "def main():\n    pass\n").unwrap();

        let analysis = analyzer().analyze_project(dir.path()).await.unwrap();

        assert_eq!(analysis.stats.total_files, 1);
        assert_eq!(analysis.files.len(), 1);
        assert_eq!(analysis.files[0].source.language, Language::Python);
    }

    #[tokio::test]
    async fn test_hidden_entries_are_pruned() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/gen.py"), "def g():\n    pass\n").unwrap();
        fs::write(dir.path().join(".hidden.py"), "def h():\n    pass\n").unwrap();
        fs::write(dir.path().join("app.py"), "def a():\n    pass\n").unwrap();

        let analysis = analyzer().analyze_project(dir.path()).await.unwrap();
        assert_eq!(analysis.stats.total_files, 1);
    }

    #[tokio::test]
    async fn test_non_code_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# readme\n").unwrap();
        fs::write(dir.path().join("data.json"), "{}\n").unwrap();
        fs::write(dir.path().join("app.py"), "def a():\n    pass\n").unwrap();

        let analysis = analyzer().analyze_project(dir.path()).await.unwrap();
        assert_eq!(analysis.stats.total_files, 1);
    }

    #[tokio::test]
    async fn test_stats_accumulation() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("clean.py"), "def a():\n    pass\n").unwrap();
        // One var_declaration warning: score 98.
        fs::write(dir.path().join("app.js"), "var x = 1;\n").unwrap();

        let analysis = analyzer().analyze_project(dir.path()).await.unwrap();

        assert_eq!(analysis.stats.total_files, 2);
        assert_eq!(analysis.stats.total_lines, 3);
        assert_eq!(analysis.stats.issue_count, 1);
        assert_eq!(analysis.stats.languages.get(&Language::Python), Some(&1));
        assert_eq!(analysis.stats.languages.get(&Language::JavaScript), Some(&1));

        // Histogram values sum to the number of successful analyses.
        let histogram_total: usize = analysis.stats.languages.values().sum();
        assert_eq!(histogram_total, analysis.stats.total_files);

        // Mean of 100 and 98.
        assert_eq!(analysis.score.overall_score, 99.0);
        assert_eq!(analysis.score.total_issues, 1);
    }

    #[tokio::test]
    async fn test_oversized_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("big.py"), "x = 1\n".repeat(100)).unwrap();
        fs::write(dir.path().join("small.py"), "x = 1\n").unwrap();

        let project = ProjectAnalyzer::new(AnalysisConfig {
            concurrency: 2,
            follow_links: false,
            max_file_size: Some(64),
        });
        let analysis = project.analyze_project(dir.path()).await.unwrap();
        assert_eq!(analysis.stats.total_files, 1);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round2(98.666666), 98.67);
        assert_eq!(round2(100.0), 100.0);
        assert_eq!(round2(0.004), 0.0);
    }
}
