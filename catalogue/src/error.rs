use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("input is empty")]
    EmptyInput,
    #[error("rank {k} is out of range for {len} element(s)")]
    RankOutOfRange { k: usize, len: usize },
    #[error("position {position} is out of range for {len} element(s)")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("division by zero")]
    ZeroDivisor,
    #[error("arithmetic overflow")]
    Overflow,
    #[error("{len} element(s) exceeds the limit of {max}")]
    TooLarge { len: usize, max: usize },
    #[error("unknown transform `{0}`")]
    UnknownTransform(String),
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),
    #[error("amount must be positive, got {0}")]
    InvalidAmount(i64),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: i64, available: i64 },
    #[error("salary cannot be negative, got {0}")]
    NegativeSalary(i64),
    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("failed to render output: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
