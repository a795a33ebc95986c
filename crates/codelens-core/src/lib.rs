pub mod analysis;
pub mod client;
pub mod report;
pub mod session;

pub use analysis::{
    classify::{
        classify, classify_label, COMPLEXITY_FALLBACK_MESSAGE, DEPENDENCY_STUB_MESSAGE,
        REFACTOR_STUB_MESSAGE, SECURITY_OVERRIDE_MESSAGE,
    },
    explain::{explain, GENERIC_EXPLANATION},
    lens_view, AnalysisResult, ClassifiedIssue, Lens, LensView,
};
pub use client::{
    Analyzer, ClientError, ClientSettings, HttpAnalysisClient, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_SECS,
};
pub use report::{render_lenses, OutputFormat};
pub use session::{Event, Session};
