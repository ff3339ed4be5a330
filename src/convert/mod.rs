pub mod converter;
pub mod default_converter;
pub mod string_converter;

pub use converter::{ConvertError, ConvertResult, DataConverter, fit_decimal};
pub use default_converter::DefaultDataConverter;
pub use string_converter::StringDataConverter;
