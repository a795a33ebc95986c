use std::path::PathBuf;

use crate::analysis::{AnalysisResult, Lens};

/// Everything the front end holds for the lifetime of a browsing session.
///
/// Updated only through [`Session::apply`], which consumes the old record and
/// returns the new one, so each state change is a single explicit transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub file: Option<PathBuf>,
    pub result: Option<AnalysisResult>,
    pub active_lens: Option<Lens>,
    pub loading: bool,
    /// Monotonic analysis attempt counter; responses carry the generation of
    /// the attempt they answer, and stale ones are dropped.
    pub generation: u64,
}

/// State transitions the UI can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FileSelected(PathBuf),
    /// A new submission went out. Clears the previous result and lens in the
    /// same transition, so stale data never survives into a new attempt.
    AnalysisStarted,
    AnalysisCompleted {
        generation: u64,
        result: AnalysisResult,
    },
    AnalysisFailed {
        generation: u64,
    },
    LensSelected(Lens),
}

impl Session {
    pub fn apply(self, event: Event) -> Session {
        match event {
            Event::FileSelected(file) => Session {
                file: Some(file),
                ..self
            },
            Event::AnalysisStarted => Session {
                result: None,
                active_lens: None,
                loading: true,
                generation: self.generation + 1,
                ..self
            },
            Event::AnalysisCompleted { generation, result } => {
                if generation != self.generation {
                    return self;
                }
                Session {
                    result: Some(result),
                    loading: false,
                    ..self
                }
            }
            Event::AnalysisFailed { generation } => {
                if generation != self.generation {
                    return self;
                }
                Session {
                    loading: false,
                    ..self
                }
            }
            Event::LensSelected(lens) => Session {
                active_lens: Some(lens),
                ..self
            },
        }
    }
}
