//! Content-based language detection
//!
//! Extension lookup lives on [`Language`] itself; this module adds the
//! heuristic classifier used when no extension is available or recognized.
//! The classifier is an ordered chain of detectors evaluated
//! first-match-wins. Later detectors (YAML, Markdown) are deliberately
//! permissive and must stay at the end of the chain; the order is a
//! load-bearing tie-break, not an optimization.

use codescope_shared::Language;
use std::path::Path;

type Detector = fn(&str) -> Option<Language>;

/// The detection chain. Each entry is tried in order against the content;
/// the first detector returning a language wins. Reordering entries
/// changes classification results.
const DETECTORS: &[(&str, Detector)] = &[
    ("python", detect_python),
    ("javascript", detect_javascript),
    ("java", detect_java),
    ("c-family", detect_c_family),
    ("csharp", detect_csharp),
    ("php", detect_php),
    ("ruby", detect_ruby),
    ("go", detect_go),
    ("rust", detect_rust),
    ("html", detect_html),
    ("css", detect_css),
    ("json", detect_json),
    ("xml", detect_xml),
    ("yaml", detect_yaml),
    ("shell", detect_shell),
    ("sql", detect_sql),
    ("markdown", detect_markdown),
];

/// Classify content into a language tag. Never fails: an optional file
/// name is consulted first, then the detector chain, then the `text`
/// fallback.
pub fn detect_from_content(content: &str, filename: Option<&str>) -> Language {
    if let Some(name) = filename {
        if let Some(language) = Language::from_path(Path::new(name)) {
            return language;
        }
    }

    for (_, detector) in DETECTORS {
        if let Some(language) = detector(content) {
            return language;
        }
    }

    Language::Text
}

fn contains_any(content: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| content.contains(marker))
}

fn detect_python(content: &str) -> Option<Language> {
    contains_any(content, &["def ", "import ", "class ", "elif ", "print("])
        .then_some(Language::Python)
}

fn detect_javascript(content: &str) -> Option<Language> {
    if !contains_any(
        content,
        &["function ", "=>", "console.log", "require(", "let ", "const "],
    ) {
        return None;
    }
    // Type annotations or interface/type declarations mark TypeScript.
    if contains_any(content, &["interface ", "type ", ": string", ": number"]) {
        Some(Language::TypeScript)
    } else {
        Some(Language::JavaScript)
    }
}

fn detect_java(content: &str) -> Option<Language> {
    contains_any(content, &["public class", "System.out.println"]).then_some(Language::Java)
}

fn detect_c_family(content: &str) -> Option<Language> {
    if !contains_any(content, &["#include", "printf("]) {
        return None;
    }
    if contains_any(content, &["std::", "cout", "namespace", "class "]) {
        Some(Language::Cpp)
    } else {
        Some(Language::C)
    }
}

fn detect_csharp(content: &str) -> Option<Language> {
    contains_any(content, &["using System", "Console.WriteLine"]).then_some(Language::CSharp)
}

fn detect_php(content: &str) -> Option<Language> {
    content.contains("<?php").then_some(Language::Php)
}

fn detect_ruby(content: &str) -> Option<Language> {
    (content.contains("puts ") || (content.contains("def ") && content.contains("end")))
        .then_some(Language::Ruby)
}

fn detect_go(content: &str) -> Option<Language> {
    contains_any(content, &["package ", "func ", "fmt.Print"]).then_some(Language::Go)
}

fn detect_rust(content: &str) -> Option<Language> {
    contains_any(content, &["fn ", "println!", "use std::"]).then_some(Language::Rust)
}

fn detect_html(content: &str) -> Option<Language> {
    let lower = content.to_lowercase();
    (lower.trim_start().starts_with("<!doctype html")
        || contains_any(&lower, &["<html", "<div", "<body"]))
    .then_some(Language::Html)
}

fn detect_css(content: &str) -> Option<Language> {
    let looks_like_rules =
        content.contains('{') && content.contains(':') && content.contains(';');
    let has_js_keywords =
        contains_any(content, &["function", "var ", "let ", "const ", "=>"]);
    (looks_like_rules && !has_js_keywords).then_some(Language::Css)
}

fn detect_json(content: &str) -> Option<Language> {
    serde_json::from_str::<serde_json::Value>(content)
        .map(|value| value.is_object())
        .unwrap_or(false)
        .then_some(Language::Json)
}

fn detect_xml(content: &str) -> Option<Language> {
    let trimmed = content.trim();
    (trimmed.starts_with("<?xml") || (trimmed.starts_with('<') && trimmed.ends_with('>')))
        .then_some(Language::Xml)
}

fn detect_yaml(content: &str) -> Option<Language> {
    if content.contains('{') || content.contains('}') || content.contains(';') {
        return None;
    }
    let non_blank: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if non_blank.is_empty() {
        return None;
    }
    let mappings = non_blank
        .iter()
        .filter(|line| is_yaml_mapping_line(line))
        .count();
    (mappings as f64 / non_blank.len() as f64 > 0.3).then_some(Language::Yaml)
}

// A `key:` or `key: value` line, comment lines excluded.
fn is_yaml_mapping_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return false;
    }
    match trimmed.split_once(':') {
        Some((key, rest)) => {
            !key.is_empty()
                && !key.chars().any(char::is_whitespace)
                && (rest.is_empty() || rest.starts_with(' '))
        }
        None => false,
    }
}

fn detect_shell(content: &str) -> Option<Language> {
    content.starts_with("#!").then_some(Language::Shell)
}

fn detect_sql(content: &str) -> Option<Language> {
    let upper = content.to_uppercase();
    contains_any(
        &upper,
        &["SELECT ", "INSERT INTO", "CREATE TABLE", "UPDATE ", "DELETE FROM"],
    )
    .then_some(Language::Sql)
}

fn detect_markdown(content: &str) -> Option<Language> {
    let has_line_marker = content.lines().any(|line| {
        line.starts_with("# ")
            || line.starts_with("## ")
            || line.starts_with("```")
            || line.starts_with("- ")
            || line.starts_with("* ")
    });
    (has_line_marker || content.contains("**")).then_some(Language::Markdown)
}
