use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unclosed groups: {depth} group(s) still open")]
    UnclosedGroup { depth: usize },

    #[error("Unmatched close: no open group to close at offset {offset}")]
    UnmatchedClose { offset: usize },
}

pub type Result<T> = std::result::Result<T, QueryError>;
