//! Per-line quality scan
//!
//! Universal rules run on every line; language-specific rules come from
//! the registry profile. The score is a flat linear penalty over the
//! issue count, deliberately not severity-weighted.

use crate::analysis::registry::LanguageRegistry;
use codescope_shared::{Issue, Language, QualityReport, Severity, SeverityCounts};

const MAX_LINE_LENGTH: usize = 120;

/// Runs the quality rules for one source unit.
pub struct QualityInspector;

impl QualityInspector {
    /// Scan content line by line (1-indexed) and produce a report.
    pub fn inspect(content: &str, language: Language) -> QualityReport {
        let profile = LanguageRegistry::global().profile(language);
        let mut issues = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            let length = line.chars().count();
            if length > MAX_LINE_LENGTH {
                issues.push(Issue {
                    rule: "line_length".to_string(),
                    severity: Severity::Warning,
                    line: line_number,
                    message: format!("Line too long ({length} characters)"),
                });
            }

            if line.ends_with(' ') || line.ends_with('\t') {
                issues.push(Issue {
                    rule: "trailing_whitespace".to_string(),
                    severity: Severity::Info,
                    line: line_number,
                    message: "Trailing whitespace".to_string(),
                });
            }

            let trimmed = line.trim();
            for rule in profile.rules {
                if (rule.check)(trimmed) {
                    issues.push(Issue {
                        rule: rule.rule.to_string(),
                        severity: rule.severity,
                        line: line_number,
                        message: rule.message.to_string(),
                    });
                }
            }
        }

        let score = (100.0 - 2.0 * issues.len() as f32).max(0.0);
        let severity_counts = Self::count_by_severity(&issues);

        QualityReport {
            issues,
            score,
            severity_counts,
        }
    }

    fn count_by_severity(issues: &[Issue]) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for issue in issues {
            match issue.severity {
                Severity::Error => counts.error += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_python_scores_100() {
        let report = QualityInspector::inspect("def add(a,b):\n    return a+b\n", Language::Python);
        assert!(report.issues.is_empty());
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_js_var_with_trailing_space() {
        // One trailing_whitespace info plus one var_declaration warning.
        let report = QualityInspector::inspect("  var x = 1; ", Language::JavaScript);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.score, 96.0);
        assert_eq!(report.severity_counts.warning, 1);
        assert_eq!(report.severity_counts.info, 1);
        assert_eq!(report.severity_counts.error, 0);

        let rules: Vec<&str> = report.issues.iter().map(|i| i.rule.as_str()).collect();
        assert!(rules.contains(&"trailing_whitespace"));
        assert!(rules.contains(&"var_declaration"));
    }

    #[test]
    fn test_line_length_rule() {
        let long_line = "x".repeat(130);
        let report = QualityInspector::inspect(&long_line, Language::Text);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].rule, "line_length");
        assert_eq!(report.issues[0].severity, Severity::Warning);
        assert_eq!(report.issues[0].line, 1);
        assert!(report.issues[0].message.contains("130"));
    }

    #[test]
    fn test_python_rules() {
        let source = "from os import *\nprint(\"debugging\")\n# TODO: tidy this up\n";
        let report = QualityInspector::inspect(source, Language::Python);

        let rules: Vec<(&str, usize)> = report
            .issues
            .iter()
            .map(|i| (i.rule.as_str(), i.line))
            .collect();
        assert!(rules.contains(&("wildcard_import", 1)));
        assert!(rules.contains(&("debug_print", 2)));
        assert!(rules.contains(&("todo_comment", 3)));
    }

    #[test]
    fn test_commented_print_is_not_flagged() {
        let report = QualityInspector::inspect("# print(\"old\")\n", Language::Python);
        assert!(report.issues.iter().all(|i| i.rule != "debug_print"));
    }

    #[test]
    fn test_console_log_rule() {
        let report = QualityInspector::inspect("console.log(value);\n", Language::TypeScript);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].rule, "debug_console");
        assert_eq!(report.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_no_language_rules_outside_python_and_js() {
        // console.log-looking content in a Go file only trips universal rules.
        let report = QualityInspector::inspect("console.log(1)\nvar x = 1\n", Language::Go);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_score_is_monotonic_and_bounded() {
        let mut previous = 100.0f32;
        for count in 1..=60 {
            let source = "var a = 1;\n".repeat(count);
            let report = QualityInspector::inspect(&source, Language::JavaScript);
            assert!(report.score <= previous);
            assert!((0.0..=100.0).contains(&report.score));
            previous = report.score;
        }
        // 60 issues put the score well past the floor.
        assert_eq!(previous, 0.0);
    }
}
