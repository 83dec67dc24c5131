use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeuroflowError {
    #[error("not initialized: run 'neuroflow init'")]
    NotInitialized,

    #[error("no archetype on record: run 'neuroflow quiz submit' first")]
    NoArchetype,

    #[error("no active journey: run 'neuroflow journey start <sport>'")]
    NoJourney,

    #[error("invalid store key '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidKey(String),

    #[error("unknown question id: {0}")]
    UnknownQuestion(u32),

    #[error("question {question} has no option '{value}'")]
    UnknownOption { question: u32, value: String },

    #[error("no quiz answers collected")]
    EmptyAnswers,

    #[error("classification failed: {0}")]
    ClassificationFailed(String),

    #[error("journey generation failed: {0}")]
    GenerationFailed(String),

    #[error("invalid step kind: {0}")]
    InvalidStepKind(String),

    #[error("expected {expected} journey steps, got {got}")]
    WrongStepCount { expected: usize, got: usize },

    #[error("step {position} should be '{expected}', got '{got}'")]
    StepOrderMismatch {
        position: usize,
        expected: String,
        got: String,
    },

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NeuroflowError>;
