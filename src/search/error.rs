use thiserror::Error;

use crate::knowledge::StoreError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("document store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown similarity method: {value}")]
pub struct UnknownMethodError {
    pub value: String,
}
