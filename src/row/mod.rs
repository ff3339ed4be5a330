pub mod generic_row;
pub mod value;

pub use generic_row::{GenericRow, Row};
pub use value::Value;
