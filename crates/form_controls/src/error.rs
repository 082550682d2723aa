use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ResetError {
    #[error("no element found to reset with the id: {id}")]
    ControlNotFound { id: String },
}
