use thiserror::Error;

/// Errors that can occur while playing or searching a game.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZeroError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Evaluator contract violated: {0}")]
    EvaluatorContract(String),

    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No legal actions available")]
    NoLegalActions,
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, ZeroError>;
