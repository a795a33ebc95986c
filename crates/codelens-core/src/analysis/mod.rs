use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod classify;
pub mod explain;

/// Normalized outcome of one backend analysis run.
///
/// Built exactly once per response by [`AnalysisResult::from_value`]; downstream
/// consumers never re-check payload types. Replaced wholesale on each new
/// analysis, never partially mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall quality score in `0..=100`, `None` when the backend omitted it
    /// or sent something non-numeric.
    pub score: Option<u8>,
    /// Issue messages in backend order, non-string entries already dropped.
    pub issues: Vec<String>,
}

impl AnalysisResult {
    /// Decode a raw backend payload into a well-typed result.
    ///
    /// A malformed shape is recovered silently: a non-array `issues` field
    /// becomes empty, non-string elements inside it are skipped (relative
    /// order of the survivors is preserved), and a missing or non-numeric
    /// `score` is left unset. Numeric scores are rounded and clamped to
    /// `0..=100`.
    pub fn from_value(value: &Value) -> Self {
        let score = value
            .get("score")
            .and_then(Value::as_f64)
            .map(|s| s.round().clamp(0.0, 100.0) as u8);
        let issues = value
            .get("issues")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Self { score, issues }
    }
}

/// The four fixed categories through which issues are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lens {
    Security,
    Complexity,
    Dependency,
    Refactor,
}

impl Lens {
    pub const ALL: [Lens; 4] = [
        Lens::Security,
        Lens::Complexity,
        Lens::Dependency,
        Lens::Refactor,
    ];

    /// Parse a lens label. Unknown labels yield `None`, which classifies to an
    /// empty sequence rather than an error.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "security" => Some(Lens::Security),
            "complexity" => Some(Lens::Complexity),
            "dependency" => Some(Lens::Dependency),
            "refactor" => Some(Lens::Refactor),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lens::Security => "security",
            Lens::Complexity => "complexity",
            Lens::Dependency => "dependency",
            Lens::Refactor => "refactor",
        }
    }
}

impl std::fmt::Display for Lens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One surfaced issue with its attached rationale. Derived on every render,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedIssue {
    pub text: String,
    pub explanation: String,
}

/// Everything a lens panel displays for the current result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LensView {
    pub lens: Lens,
    pub entries: Vec<ClassifiedIssue>,
}

/// Classify the result for one lens and attach a rationale to every entry.
pub fn lens_view(lens: Lens, result: &AnalysisResult) -> LensView {
    let entries = classify::classify(lens, result)
        .into_iter()
        .map(|text| {
            let explanation = explain::explain(&text).to_owned();
            ClassifiedIssue { text, explanation }
        })
        .collect();
    LensView { lens, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn decodes_well_formed_payload() {
        let value = json!({"score": 72, "issues": ["eval() used", "deep nesting"]});
        let result = AnalysisResult::from_value(&value);
        assert_eq!(result.score, Some(72));
        assert_eq!(result.issues, vec!["eval() used", "deep nesting"]);
    }

    #[test]
    fn drops_non_string_issue_entries_preserving_order() {
        let value = json!({"score": 50, "issues": ["first", null, 3, {"k": "v"}, "last"]});
        let result = AnalysisResult::from_value(&value);
        assert_eq!(result.issues, vec!["first", "last"]);
    }

    #[test]
    fn non_array_issues_become_empty() {
        for shape in [json!("not a list"), json!(42), json!({"a": 1}), json!(null)] {
            let value = json!({"score": 10, "issues": shape});
            assert!(AnalysisResult::from_value(&value).issues.is_empty());
        }
    }

    #[test]
    fn missing_or_non_numeric_score_is_unset() {
        assert_eq!(
            AnalysisResult::from_value(&json!({"issues": []})).score,
            None
        );
        assert_eq!(
            AnalysisResult::from_value(&json!({"score": "high", "issues": []})).score,
            None
        );
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(
            AnalysisResult::from_value(&json!({"score": 250})).score,
            Some(100)
        );
        assert_eq!(
            AnalysisResult::from_value(&json!({"score": -7})).score,
            Some(0)
        );
    }

    #[test]
    fn lens_labels_round_trip() {
        for lens in Lens::ALL {
            assert_eq!(Lens::parse(lens.as_str()), Some(lens));
        }
        assert_eq!(Lens::parse(" Security "), Some(Lens::Security));
        assert_eq!(Lens::parse("bogus-lens"), None);
    }

    #[test]
    fn lens_view_attaches_rationales() {
        let result = AnalysisResult {
            score: Some(50),
            issues: vec!["Found eval() call".into()],
        };
        let view = lens_view(Lens::Security, &result);
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].text, "Found eval() call");
        assert!(view.entries[0].explanation.contains("arbitrary code"));
    }

    proptest! {
        #[test]
        fn decode_keeps_only_strings(entries in proptest::collection::vec(
            prop_oneof![
                "[a-z ]{0,24}".prop_map(serde_json::Value::String),
                any::<i64>().prop_map(|n| json!(n)),
                Just(serde_json::Value::Null),
                any::<bool>().prop_map(|b| json!(b)),
            ],
            0..16,
        )) {
            let expected: Vec<String> = entries
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect();
            let result = AnalysisResult::from_value(&json!({"issues": entries}));
            prop_assert_eq!(result.issues, expected);
        }
    }

    proptest! {
        #[test]
        fn decoded_score_stays_in_bounds(score in -1000.0f64..1000.0f64) {
            let result = AnalysisResult::from_value(&json!({"score": score}));
            let decoded = result.score.expect("numeric score should decode");
            prop_assert!(decoded <= 100);
        }
    }
}
