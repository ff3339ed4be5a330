pub mod convert;
pub mod cursor;
pub mod error;
pub mod row;
pub mod source;
pub mod types;

pub use crate::convert::{DataConverter, DefaultDataConverter, StringDataConverter};
pub use crate::cursor::{CursorConfig, Position, ResultCursor, RowCursor};
pub use crate::error::{CursorError, CursorResult};
pub use crate::row::{GenericRow, Row, Value};
pub use crate::source::{RowSource, VecRowSource};
pub use crate::types::{Column, DataType, Schema};
