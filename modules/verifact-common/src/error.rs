use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifactError {
    #[error("no analyzable content: input was empty or whitespace-only")]
    EmptyContent,

    #[error("model service error: {0}")]
    Model(String),

    #[error("translation service error: {0}")]
    Translation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
