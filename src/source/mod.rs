pub mod row_source;
pub mod vec_source;

pub use row_source::{RowSource, SourceError, SourceResult};
pub use vec_source::VecRowSource;
