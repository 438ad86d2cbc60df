//! Grammar-backed syntax analysis
//!
//! For languages with a registered grammar binding, the full content is
//! parsed into a concrete syntax tree and walked depth-first; every node
//! whose kind denotes a function or class declaration becomes a
//! [`SymbolRecord`]. Parse failures are captured in the report's `error`
//! field and never surface as call errors.

use crate::analysis::registry::{GrammarSpec, LanguageRegistry};
use codescope_shared::{Language, SymbolKind, SymbolRecord, SyntaxReport};
use tree_sitter::{Node, Parser};

/// Builds syntax trees and extracts declaration symbols.
pub struct SyntaxAnalyzer;

impl SyntaxAnalyzer {
    /// Analyze content for a language. Returns `None` when no grammar is
    /// registered; otherwise always returns a report, with failures
    /// recorded in its `error` field.
    pub fn analyze(content: &str, language: Language) -> Option<SyntaxReport> {
        let profile = LanguageRegistry::global().profile(language);
        let spec = profile.grammar.as_ref()?;
        Some(Self::parse_and_walk(content, spec))
    }

    fn parse_and_walk(content: &str, spec: &GrammarSpec) -> SyntaxReport {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&(spec.language)()) {
            return SyntaxReport {
                symbols: Vec::new(),
                error: Some(format!("failed to load grammar: {e}")),
            };
        }

        let Some(tree) = parser.parse(content, None) else {
            return SyntaxReport {
                symbols: Vec::new(),
                error: Some("parser produced no tree".to_string()),
            };
        };

        let mut symbols = Vec::new();
        Self::collect_symbols(tree.root_node(), content, spec, &mut symbols);

        SyntaxReport {
            symbols,
            error: None,
        }
    }

    // Depth-first, every child of every node; the tree is never mutated.
    fn collect_symbols(
        node: Node<'_>,
        source: &str,
        spec: &GrammarSpec,
        symbols: &mut Vec<SymbolRecord>,
    ) {
        let kind = if spec.function_kinds.contains(&node.kind()) {
            Some(SymbolKind::Function)
        } else if spec.class_kinds.contains(&node.kind()) {
            Some(SymbolKind::Class)
        } else {
            None
        };

        if let Some(kind) = kind {
            // The full declaration span, not an isolated identifier.
            let text = source
                .get(node.byte_range())
                .unwrap_or_default()
                .to_string();
            symbols.push(SymbolRecord {
                kind,
                text,
                start_line: node.start_position().row + 1,
                end_line: node.end_position().row + 1,
            });
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::collect_symbols(child, source, spec, symbols);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_grammar_yields_none() {
        assert!(SyntaxAnalyzer::analyze("fn main() {}", Language::Rust).is_none());
        assert!(SyntaxAnalyzer::analyze("var x = 1;", Language::JavaScript).is_none());
    }

    #[test]
    fn test_python_function_symbol() {
        let source = "def add(a, b):\n    return a + b\n";
        let report = SyntaxAnalyzer::analyze(source, Language::Python).unwrap();

        assert!(report.error.is_none());
        assert_eq!(report.symbols.len(), 1);

        let symbol = &report.symbols[0];
        assert_eq!(symbol.kind, SymbolKind::Function);
        assert!(symbol.text.starts_with("def add"));
        assert_eq!(symbol.start_line, 1);
        assert_eq!(symbol.end_line, 2);
    }

    #[test]
    fn test_nested_declarations_are_all_visited() {
        let source = "class Greeter:\n    def hello(self):\n        return \"hi\"\n\ndef main():\n    pass\n";
        let report = SyntaxAnalyzer::analyze(source, Language::Python).unwrap();

        let functions: Vec<&SymbolRecord> = report
            .symbols
            .iter()
            .filter(|s| s.kind == SymbolKind::Function)
            .collect();
        let classes: Vec<&SymbolRecord> = report
            .symbols
            .iter()
            .filter(|s| s.kind == SymbolKind::Class)
            .collect();

        assert_eq!(functions.len(), 2);
        assert_eq!(classes.len(), 1);
        assert!(classes[0].text.starts_with("class Greeter"));
        // The method nested inside the class is found by the full walk.
        assert!(functions.iter().any(|f| f.text.starts_with("def hello")));
    }

    #[test]
    fn test_class_span_is_inclusive() {
        let source = "class A:\n    x = 1\n    y = 2\n";
        let report = SyntaxAnalyzer::analyze(source, Language::Python).unwrap();
        let class = report
            .symbols
            .iter()
            .find(|s| s.kind == SymbolKind::Class)
            .unwrap();
        assert_eq!(class.start_line, 1);
        assert_eq!(class.end_line, 3);
    }

    #[test]
    fn test_malformed_input_still_reports() {
        // tree-sitter is error-tolerant; whatever happens, the call must
        // not fail and the report must be well-formed.
        let report = SyntaxAnalyzer::analyze("def def def (((", Language::Python).unwrap();
        assert!(report.error.is_none() || report.symbols.is_empty());
    }

    #[test]
    fn test_empty_content() {
        let report = SyntaxAnalyzer::analyze("", Language::Python).unwrap();
        assert!(report.symbols.is_empty());
        assert!(report.error.is_none());
    }
}
