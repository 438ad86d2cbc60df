//! Language capability registry
//!
//! Per-language behavior (comment prefixes, declaration patterns, quality
//! rules, grammar bindings) is resolved through one immutable registry
//! built on first use. Call sites look up a [`LanguageProfile`] and stay
//! unchanged when a language gains capabilities; adding a language means
//! adding a registry entry here.

use codescope_shared::{Language, Severity};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tree_sitter::Language as Grammar;

/// Regexes for the coarse declaration-count sweep.
pub struct DeclarationPatterns {
    pub functions: Regex,
    pub classes: Regex,
}

/// A single per-line quality rule. `check` receives the trimmed line.
pub struct LineRule {
    pub rule: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub check: fn(&str) -> bool,
}

/// Binding of a language to a tree-sitter grammar plus the node kinds
/// that denote function and class declarations in that grammar.
pub struct GrammarSpec {
    pub language: fn() -> Grammar,
    pub function_kinds: &'static [&'static str],
    pub class_kinds: &'static [&'static str],
}

/// Everything the pipeline needs to know about one language.
pub struct LanguageProfile {
    /// Single-line comment prefixes. Block comment delimiters are only
    /// recognized at line starts; multi-line bodies count as code.
    pub comment_prefixes: &'static [&'static str],
    pub declarations: Option<DeclarationPatterns>,
    pub rules: &'static [LineRule],
    pub grammar: Option<GrammarSpec>,
}

const NO_PREFIXES: &[&str] = &[];
const HASH: &[&str] = &["#"];
const SLASHES: &[&str] = &["//", "/*", "*"];
const SLASHES_OR_HASH: &[&str] = &["//", "/*", "*", "#"];
const DASHES: &[&str] = &["--"];
const ANGLE: &[&str] = &["<!--"];
const BLOCK: &[&str] = &["/*", "*"];
const SEMI_OR_HASH: &[&str] = &[";", "#"];

fn is_wildcard_import(line: &str) -> bool {
    line.starts_with("from ") && line.contains(" import *")
}

fn is_debug_print(line: &str) -> bool {
    line.contains("print(") && !line.starts_with('#')
}

fn has_todo_marker(line: &str) -> bool {
    let upper = line.to_uppercase();
    upper.contains("TODO") || upper.contains("FIXME")
}

fn has_console_log(line: &str) -> bool {
    line.contains("console.log(")
}

fn is_var_declaration(line: &str) -> bool {
    line.starts_with("var ")
}

static PYTHON_RULES: &[LineRule] = &[
    LineRule {
        rule: "wildcard_import",
        severity: Severity::Warning,
        message: "Avoid wildcard imports",
        check: is_wildcard_import,
    },
    LineRule {
        rule: "debug_print",
        severity: Severity::Info,
        message: "Consider removing debug print statement",
        check: is_debug_print,
    },
    LineRule {
        rule: "todo_comment",
        severity: Severity::Info,
        message: "TODO/FIXME comment found",
        check: has_todo_marker,
    },
];

static JS_RULES: &[LineRule] = &[
    LineRule {
        rule: "debug_console",
        severity: Severity::Info,
        message: "Consider removing debug console.log",
        check: has_console_log,
    },
    LineRule {
        rule: "var_declaration",
        severity: Severity::Warning,
        message: "Consider using let or const instead of var",
        check: is_var_declaration,
    },
];

fn python_grammar() -> Grammar {
    tree_sitter_python::LANGUAGE.into()
}

fn python_declarations() -> DeclarationPatterns {
    DeclarationPatterns {
        functions: Regex::new(r"(?m)^\s*def\s+\w+").expect("valid python function pattern"),
        classes: Regex::new(r"(?m)^\s*class\s+\w+").expect("valid python class pattern"),
    }
}

fn js_declarations() -> DeclarationPatterns {
    DeclarationPatterns {
        functions: Regex::new(r"function\s+\w+|=>\s*\{|\w+\s*:\s*function")
            .expect("valid js function pattern"),
        classes: Regex::new(r"class\s+\w+").expect("valid js class pattern"),
    }
}

/// Registry of language profiles, built once and read-only afterwards.
pub struct LanguageRegistry {
    profiles: HashMap<Language, LanguageProfile>,
    fallback: LanguageProfile,
}

impl LanguageRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Profile for a language; languages without an entry get the empty
    /// fallback profile (no comments, no patterns, no rules, no grammar).
    pub fn profile(&self, language: Language) -> &LanguageProfile {
        self.profiles.get(&language).unwrap_or(&self.fallback)
    }

    /// Whether a grammar is registered for this language.
    pub fn has_grammar(&self, language: Language) -> bool {
        self.profile(language).grammar.is_some()
    }
}

static REGISTRY: LazyLock<LanguageRegistry> = LazyLock::new(build_registry);

fn empty_profile() -> LanguageProfile {
    LanguageProfile {
        comment_prefixes: NO_PREFIXES,
        declarations: None,
        rules: &[],
        grammar: None,
    }
}

fn build_registry() -> LanguageRegistry {
    let mut profiles = HashMap::new();

    profiles.insert(
        Language::Python,
        LanguageProfile {
            comment_prefixes: HASH,
            declarations: Some(python_declarations()),
            rules: PYTHON_RULES,
            grammar: Some(GrammarSpec {
                language: python_grammar,
                function_kinds: &["function_definition"],
                class_kinds: &["class_definition"],
            }),
        },
    );

    for language in [Language::JavaScript, Language::TypeScript] {
        profiles.insert(
            language,
            LanguageProfile {
                comment_prefixes: SLASHES,
                declarations: Some(js_declarations()),
                rules: JS_RULES,
                grammar: None,
            },
        );
    }

    for language in [
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Go,
        Language::Rust,
        Language::Swift,
        Language::Kotlin,
        Language::Scala,
    ] {
        profiles.insert(
            language,
            LanguageProfile {
                comment_prefixes: SLASHES,
                ..empty_profile()
            },
        );
    }

    profiles.insert(
        Language::Php,
        LanguageProfile {
            comment_prefixes: SLASHES_OR_HASH,
            ..empty_profile()
        },
    );

    for language in [Language::Ruby, Language::Shell, Language::Yaml, Language::Toml] {
        profiles.insert(
            language,
            LanguageProfile {
                comment_prefixes: HASH,
                ..empty_profile()
            },
        );
    }

    for language in [Language::Html, Language::Xml] {
        profiles.insert(
            language,
            LanguageProfile {
                comment_prefixes: ANGLE,
                ..empty_profile()
            },
        );
    }

    profiles.insert(
        Language::Css,
        LanguageProfile {
            comment_prefixes: BLOCK,
            ..empty_profile()
        },
    );

    for language in [Language::Scss, Language::Less] {
        profiles.insert(
            language,
            LanguageProfile {
                comment_prefixes: SLASHES,
                ..empty_profile()
            },
        );
    }

    profiles.insert(
        Language::Sql,
        LanguageProfile {
            comment_prefixes: DASHES,
            ..empty_profile()
        },
    );

    profiles.insert(
        Language::Ini,
        LanguageProfile {
            comment_prefixes: SEMI_OR_HASH,
            ..empty_profile()
        },
    );

    LanguageRegistry {
        profiles,
        fallback: empty_profile(),
    }
}
