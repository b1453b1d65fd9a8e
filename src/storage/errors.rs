use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
