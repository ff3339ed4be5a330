use std::fmt;

use serde::{Deserialize, Serialize};

use super::Column;

/// Declared type of a result column, as reported by the result schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Decimal { precision: u32, scale: u32 },
    Char(usize),
    Varchar(usize),
    Binary(usize),
    Varbinary(usize),
    Date,
    Time,
    Timestamp,
    Array(Box<DataType>),
    Row(Vec<Column>),
}

impl DataType {
    pub fn decimal(precision: u32, scale: u32) -> Self {
        DataType::Decimal { precision, scale }
    }

    /// Precision and scale of a fixed-point decimal type, `None` for anything else.
    pub fn as_decimal(&self) -> Option<(u32, u32)> {
        match self {
            DataType::Decimal { precision, scale } => Some((*precision, *scale)),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::TinyInt => write!(f, "TINYINT"),
            DataType::SmallInt => write!(f, "SMALLINT"),
            DataType::Integer => write!(f, "INT"),
            DataType::BigInt => write!(f, "BIGINT"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)
            }
            DataType::Char(len) => write!(f, "CHAR({})", len),
            DataType::Varchar(len) => write!(f, "VARCHAR({})", len),
            DataType::Binary(len) => write!(f, "BINARY({})", len),
            DataType::Varbinary(len) => write!(f, "VARBINARY({})", len),
            DataType::Date => write!(f, "DATE"),
            DataType::Time => write!(f, "TIME"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::Array(inner) => write!(f, "ARRAY<{}>", inner),
            DataType::Row(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|c| format!("{} {}", c.name(), c.data_type()))
                    .collect();
                write!(f, "ROW<{}>", fields.join(", "))
            }
        }
    }
}
