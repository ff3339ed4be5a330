pub mod config;
pub mod decimal;
pub mod result_cursor;
pub mod row_cursor;

pub use config::CursorConfig;
pub use decimal::rescale_half_even;
pub use result_cursor::ResultCursor;
pub use row_cursor::{Position, RowCursor};
