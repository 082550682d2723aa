use crate::Id;
use thiserror::Error;
use validation::ValidationError;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation needs an element (it appends children or sets attributes).
    #[error("node {id:?} is not an element")]
    NotAnElement { id: Id },
}
