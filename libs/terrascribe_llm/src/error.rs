use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
