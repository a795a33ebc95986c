use codelens_core::{
    classify, classify_label, explain, lens_view, AnalysisResult, Lens,
    COMPLEXITY_FALLBACK_MESSAGE, DEPENDENCY_STUB_MESSAGE, GENERIC_EXPLANATION,
    REFACTOR_STUB_MESSAGE, SECURITY_OVERRIDE_MESSAGE,
};
use serde_json::json;

#[test]
fn low_score_backend_response_drives_all_four_lenses() {
    let payload = json!({
        "score": 20,
        "issues": ["eval() used", "complex loop detected"],
    });
    let result = AnalysisResult::from_value(&payload);

    assert_eq!(
        classify(Lens::Security, &result),
        vec![SECURITY_OVERRIDE_MESSAGE]
    );
    assert_eq!(
        classify(Lens::Complexity, &result),
        vec!["complex loop detected"]
    );
    assert_eq!(
        classify(Lens::Dependency, &result),
        vec![DEPENDENCY_STUB_MESSAGE]
    );
    assert_eq!(
        classify(Lens::Refactor, &result),
        vec![REFACTOR_STUB_MESSAGE]
    );
}

#[test]
fn malformed_entries_never_reach_any_lens() {
    let payload = json!({
        "score": 50,
        "issues": ["Found eval() call", null, 12, true, "unrelated note"],
    });
    let result = AnalysisResult::from_value(&payload);

    for lens in Lens::ALL {
        for message in classify(lens, &result) {
            assert_ne!(message, "12");
            assert_ne!(message, "true");
            assert_ne!(message, "null");
        }
    }
    assert_eq!(
        classify(Lens::Security, &result),
        vec!["Found eval() call"]
    );
}

#[test]
fn complexity_fallback_applies_when_nothing_mentions_complexity() {
    let payload = json!({"score": 70, "issues": ["dead code", "long file"]});
    let result = AnalysisResult::from_value(&payload);
    assert_eq!(
        classify(Lens::Complexity, &result),
        vec![COMPLEXITY_FALLBACK_MESSAGE]
    );
}

#[test]
fn unrecognized_label_is_empty_not_an_error() {
    let payload = json!({"score": 10, "issues": ["x"]});
    let result = AnalysisResult::from_value(&payload);
    assert!(classify_label("bogus-lens", &result).is_empty());
}

#[test]
fn every_surfaced_issue_carries_a_rationale() {
    let payload = json!({
        "score": 60,
        "issues": ["Hardcoded password found", "complex branch", "weird thing"],
    });
    let result = AnalysisResult::from_value(&payload);

    for lens in Lens::ALL {
        let view = lens_view(lens, &result);
        for entry in view.entries {
            assert!(!entry.explanation.is_empty());
            assert_eq!(entry.explanation, explain(&entry.text));
        }
    }

    assert!(explain("Hardcoded password found").contains("credentials"));
    assert_eq!(explain(""), GENERIC_EXPLANATION);
}
