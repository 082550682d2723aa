use dom::BuildError;
use form_controls::ResetError;
use thiserror::Error;
use validation::ValidationError;

/// Any failure surfaced by the form layer.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Reset(#[from] ResetError),

    /// A DOM edit targeted a node that does not exist.
    #[error("no node with id {0:?}")]
    NodeNotFound(dom::Id),

    #[error("no element with id attribute {0:?}")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
