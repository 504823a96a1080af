
use thiserror::Error;

use crate::catalog::BookId;

#[derive(Error, Debug)]
pub enum LibrarianError {
    #[error("book with id {0} doesn't exist in the library")]
    NotFound(BookId),
    #[error("cannot lend a book that has been lent: {0}")]
    AlreadyLent(BookId),
    #[error("cannot return a book that hasn't been lent: {0}")]
    NotLent(BookId),
    #[error("cannot remove a book that has been lent: {0}")]
    StillLent(BookId),
    #[error("invalid title: {0}")]
    InvalidTitle(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, LibrarianError>;
