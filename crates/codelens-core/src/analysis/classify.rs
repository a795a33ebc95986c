use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use tracing::debug;

use super::{AnalysisResult, Lens};

/// Highest score that still triggers the security override.
const SECURITY_SCORE_CEILING: u8 = 35;

/// Shown for the security lens whenever the overall score is low enough,
/// regardless of what the backend reported.
pub const SECURITY_OVERRIDE_MESSAGE: &str =
    "Potential security vulnerability detected due to unsafe coding patterns";
/// Shown for the complexity lens when no reported issue mentions complexity.
pub const COMPLEXITY_FALLBACK_MESSAGE: &str = "High cyclomatic complexity detected";
/// Fixed message for the dependency stub lens.
pub const DEPENDENCY_STUB_MESSAGE: &str = "Unused or risky dependency detected";
/// Fixed message for the refactor stub lens.
pub const REFACTOR_STUB_MESSAGE: &str = "Code can be refactored to improve readability";

static SECURITY_KEYWORDS: Lazy<AhoCorasick> =
    Lazy::new(|| keyword_automaton(&["secret", "eval", "exec", "insecure"]));
static COMPLEXITY_KEYWORDS: Lazy<AhoCorasick> = Lazy::new(|| keyword_automaton(&["complex"]));

fn keyword_automaton(patterns: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .expect("fixed keyword patterns always compile")
}

/// Produce the issue messages the given lens displays for a result.
///
/// Pure function of its inputs: the same `(lens, result)` pair always yields
/// the same ordered output. Filtered subsequences keep the original issue
/// order.
pub fn classify(lens: Lens, result: &AnalysisResult) -> Vec<String> {
    let messages = match lens {
        Lens::Security => security_rule(result),
        Lens::Complexity => complexity_rule(&result.issues),
        Lens::Dependency => vec![DEPENDENCY_STUB_MESSAGE.to_owned()],
        Lens::Refactor => vec![REFACTOR_STUB_MESSAGE.to_owned()],
    };
    debug!(%lens, count = messages.len(), "classified result");
    messages
}

/// Classify for a lens given by label. Unknown labels yield an empty
/// sequence, never an error.
pub fn classify_label(label: &str, result: &AnalysisResult) -> Vec<String> {
    Lens::parse(label)
        .map(|lens| classify(lens, result))
        .unwrap_or_default()
}

/// A low overall score always implies a security finding, overriding the
/// reported issue text entirely.
fn security_rule(result: &AnalysisResult) -> Vec<String> {
    if matches!(result.score, Some(score) if score <= SECURITY_SCORE_CEILING) {
        return vec![SECURITY_OVERRIDE_MESSAGE.to_owned()];
    }
    filter_matching(&result.issues, &SECURITY_KEYWORDS)
}

/// Complexity is never silently empty: a fixed fallback stands in when no
/// reported issue mentions complexity.
fn complexity_rule(issues: &[String]) -> Vec<String> {
    let matched = filter_matching(issues, &COMPLEXITY_KEYWORDS);
    if matched.is_empty() {
        return vec![COMPLEXITY_FALLBACK_MESSAGE.to_owned()];
    }
    matched
}

fn filter_matching(issues: &[String], keywords: &AhoCorasick) -> Vec<String> {
    issues
        .iter()
        .filter(|issue| keywords.is_match(issue.as_str()))
        .cloned()
        .collect()
}
