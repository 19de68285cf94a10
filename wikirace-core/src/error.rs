use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not resolve target keyword: {0}")]
    TargetResolution(String),

    #[error("Step fetch failed: {0}")]
    StepFetch(String),

    #[error("Dead end: {0}")]
    DeadEnd(String),

    #[error("Gave up after {0} clicks without reaching the target")]
    NoProgress(usize),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Bad scoring pattern: {0}")]
    ScorerError(String),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RaceError>;
