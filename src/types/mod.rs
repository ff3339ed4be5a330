pub mod data_type;
pub mod schema;

pub use data_type::DataType;
pub use schema::{Column, Schema};
