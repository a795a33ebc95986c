/// Explanation returned when no rule matches the issue text.
pub const GENERIC_EXPLANATION: &str =
    "This issue may negatively affect security or code quality.";

/// Ordered rule table, evaluated top to bottom; the first row whose keywords
/// hit wins.
const EXPLANATIONS: &[(&[&str], &str)] = &[
    (
        &["eval", "exec"],
        "This allows execution of arbitrary code and can be exploited by attackers.",
    ),
    (
        &["secret", "password", "token"],
        "Hardcoded secrets can leak credentials and should be stored securely.",
    ),
    (
        &["complex"],
        "High complexity makes code harder to understand, test, and maintain.",
    ),
    (
        &["dependency"],
        "Unused or risky dependencies increase attack surface and maintenance cost.",
    ),
    (
        &["refactor"],
        "Refactoring improves readability and long-term maintainability.",
    ),
];

/// Attach a human-readable rationale to one issue message.
///
/// Total over all strings: case-insensitive substring match against the rule
/// table, falling back to [`GENERIC_EXPLANATION`] when nothing hits.
pub fn explain(issue: &str) -> &'static str {
    let lowered = issue.to_lowercase();
    EXPLANATIONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, explanation)| *explanation)
        .unwrap_or(GENERIC_EXPLANATION)
}
