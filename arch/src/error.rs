use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot parse `{0}`: {1}")]
    Syntax(String, String),

    #[error("Literal out of range: {0} (max 32767)")]
    LiteralTooLarge(String),

    #[error("Invalid symbol: `{0}`")]
    InvalidSymbol(String),
}
