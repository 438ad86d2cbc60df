//! Core types used throughout CodeScope

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Languages recognized by CodeScope.
///
/// Every tag carries a [`LanguageKind`] grouping and a fixed extension table.
/// Only a subset has declaration patterns, quality rules, or a grammar
/// registered; the rest still get line metrics and universal quality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    CSharp,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Scala,
    Html,
    Markdown,
    Xml,
    Css,
    Scss,
    Less,
    Sql,
    Shell,
    Json,
    Yaml,
    Toml,
    Ini,
    Text,
}

/// Coarse grouping of languages by what kind of file they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Programming,
    Markup,
    Stylesheet,
    Query,
    Script,
    Data,
    Config,
    Text,
}

impl Language {
    /// Canonical lowercase tag for this language.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::Html => "html",
            Language::Markdown => "markdown",
            Language::Xml => "xml",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Less => "less",
            Language::Sql => "sql",
            Language::Shell => "shell",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Toml => "toml",
            Language::Ini => "ini",
            Language::Text => "text",
        }
    }

    /// Grouping used for reporting and for the extension table layout.
    pub fn kind(self) -> LanguageKind {
        match self {
            Language::Python
            | Language::JavaScript
            | Language::TypeScript
            | Language::Java
            | Language::C
            | Language::Cpp
            | Language::CSharp
            | Language::Php
            | Language::Ruby
            | Language::Go
            | Language::Rust
            | Language::Swift
            | Language::Kotlin
            | Language::Scala => LanguageKind::Programming,
            Language::Html | Language::Markdown | Language::Xml => LanguageKind::Markup,
            Language::Css | Language::Scss | Language::Less => LanguageKind::Stylesheet,
            Language::Sql => LanguageKind::Query,
            Language::Shell => LanguageKind::Script,
            Language::Json => LanguageKind::Data,
            Language::Yaml | Language::Toml | Language::Ini => LanguageKind::Config,
            Language::Text => LanguageKind::Text,
        }
    }

    /// File extensions mapped to this language.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyw", "pyi"],
            Language::JavaScript => &["js", "mjs", "cjs", "jsx"],
            Language::TypeScript => &["ts", "tsx", "mts", "cts"],
            Language::Java => &["java"],
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "hxx", "hh"],
            Language::CSharp => &["cs"],
            Language::Php => &["php"],
            Language::Ruby => &["rb"],
            Language::Go => &["go"],
            Language::Rust => &["rs"],
            Language::Swift => &["swift"],
            Language::Kotlin => &["kt", "kts"],
            Language::Scala => &["scala"],
            Language::Html => &["html", "htm"],
            Language::Markdown => &["md", "markdown"],
            Language::Xml => &["xml"],
            Language::Css => &["css"],
            Language::Scss => &["scss", "sass"],
            Language::Less => &["less"],
            Language::Sql => &["sql"],
            Language::Shell => &["sh", "bash", "zsh"],
            Language::Json => &["json"],
            Language::Yaml => &["yml", "yaml"],
            Language::Toml => &["toml"],
            Language::Ini => &["ini", "cfg"],
            Language::Text => &["txt"],
        }
    }

    /// Detect language from a file extension. Unknown extensions yield `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Detect language from a file path's extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Every recognized language tag.
    pub fn all() -> &'static [Language] {
        &[
            Language::Python,
            Language::JavaScript,
            Language::TypeScript,
            Language::Java,
            Language::C,
            Language::Cpp,
            Language::CSharp,
            Language::Php,
            Language::Ruby,
            Language::Go,
            Language::Rust,
            Language::Swift,
            Language::Kotlin,
            Language::Scala,
            Language::Html,
            Language::Markdown,
            Language::Xml,
            Language::Css,
            Language::Scss,
            Language::Less,
            Language::Sql,
            Language::Shell,
            Language::Json,
            Language::Yaml,
            Language::Toml,
            Language::Ini,
            Language::Text,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One source file (or snippet) handed to the analysis pipeline.
///
/// Ephemeral: created per call and discarded with the [`FileAnalysis`]
/// that carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub content: String,
    pub language: Language,
}

/// Line-level metrics from a single pass over the content.
///
/// Invariant: `code_lines + comment_lines + blank_lines == total_lines`.
/// Block comments are not tracked; a `/* ... */` body counts as code
/// unless each line starts with a registered single-line prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralMetrics {
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub max_line_length: usize,
    pub avg_line_length: f64,
    pub functions_count: usize,
    pub classes_count: usize,
}

impl StructuralMetrics {
    pub fn empty() -> Self {
        Self {
            total_lines: 0,
            code_lines: 0,
            comment_lines: 0,
            blank_lines: 0,
            max_line_length: 0,
            avg_line_length: 0.0,
            functions_count: 0,
            classes_count: 0,
        }
    }
}

/// Kind of declaration a symbol record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
}

/// A function or class declaration site found by the syntax-tree walk.
///
/// `text` is the exact source substring spanned by the declaration node,
/// signature and body included, not an isolated identifier. Line spans are
/// 1-indexed and inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub kind: SymbolKind,
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Importance tier of a quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single quality finding on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable rule identifier, e.g. `line_length` or `wildcard_import`.
    pub rule: String,
    pub severity: Severity,
    /// 1-indexed line the issue was found on.
    pub line: usize,
    pub message: String,
}

/// Issue totals bucketed by severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

/// Result of the per-line quality scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub issues: Vec<Issue>,
    /// Flat linear score: `max(0, 100 - 2 * issues.len())`.
    pub score: f32,
    pub severity_counts: SeverityCounts,
}

/// Result of the grammar-backed syntax analysis.
///
/// A parse failure lands in `error` with an empty symbol list; it never
/// fails the surrounding file analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxReport {
    pub symbols: Vec<SymbolRecord>,
    pub error: Option<String>,
}

/// Complete analysis of one source unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub source: SourceUnit,
    pub structure: StructuralMetrics,
    /// Present only for languages with a registered grammar.
    pub syntax: Option<SyntaxReport>,
    pub quality: QualityReport,
}

/// Accumulated statistics for a project walk.
///
/// `total_files` counts only files whose analysis succeeded; the language
/// histogram values sum to `total_files`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total_files: usize,
    pub total_lines: usize,
    pub languages: HashMap<Language, usize>,
    pub issue_count: usize,
}

/// Aggregate quality score for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectScore {
    /// Arithmetic mean of per-file quality scores, rounded to 2 decimals.
    /// 0 when no file was analyzed.
    pub overall_score: f64,
    pub total_files_analyzed: usize,
    pub total_issues: usize,
}

/// Complete result of a project analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub root: PathBuf,
    pub stats: ProjectStats,
    pub score: ProjectScore,
    pub files: Vec<FileAnalysis>,
}
