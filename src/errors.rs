// errors.rs
use crate::catalog::SourceError;
use crate::domain::paginator::PaginationError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad query strings, etc.) or downstream layers (DB, sources).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Listing source error: {0}")]
    Source(#[from] SourceError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}
