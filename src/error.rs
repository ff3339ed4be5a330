use thiserror::Error;

use crate::convert::ConvertError;
use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum CursorError {
    #[error("This result set is already closed")]
    Closed,

    #[error("Not on a valid row: {0}")]
    NoCurrentRow(&'static str),

    #[error("Column index[{0}] must be positive")]
    NonPositiveColumnIndex(i32),

    #[error("Column index {index} out of bound. There are only {count} columns")]
    ColumnIndexOutOfBounds { index: i32, count: usize },

    #[error("Column[{0}] does not exist")]
    ColumnNotFound(String),

    #[error("Invalid data type, expect {expected} but was {actual}")]
    TypeMismatch { expected: &'static str, actual: String },

    #[error("Data extraction failed: {0}")]
    DataExtraction(#[source] ConvertError),

    #[error("{0} is not supported")]
    FeatureNotSupported(&'static str),

    #[error("{0} is not supported yet")]
    NotYetSupported(&'static str),

    #[error("Row source error: {0}")]
    Source(#[from] SourceError),
}

impl CursorError {
    /// Both bound violations belong to the same class of column index errors.
    pub fn is_column_index_error(&self) -> bool {
        matches!(
            self,
            CursorError::NonPositiveColumnIndex(_) | CursorError::ColumnIndexOutOfBounds { .. }
        )
    }
}

impl From<ConvertError> for CursorError {
    fn from(err: ConvertError) -> Self {
        CursorError::DataExtraction(err)
    }
}

pub type CursorResult<T> = std::result::Result<T, CursorError>;
