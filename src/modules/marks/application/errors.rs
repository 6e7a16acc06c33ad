use crate::modules::marks::core::mark::MarkError;
use crate::modules::marks::core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidMark(#[from] MarkError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
