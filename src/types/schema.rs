use serde::{Deserialize, Serialize};

use super::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Column { name: name.into(), data_type }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }
}

/// Ordered column list of a query result. Names are not required to be unique;
/// lookups by name resolve to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new() -> Self {
        Schema { columns: Vec::new() }
    }

    pub fn add_column(&mut self, name: impl Into<String>, data_type: DataType) {
        self.columns.push(Column::new(name, data_type));
    }

    /// Builder form of [`Schema::add_column`].
    pub fn with_column(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.add_column(name, data_type);
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name())
    }

    /// Zero-based position of the first column called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn data_type(&self, pos: usize) -> Option<&DataType> {
        self.columns.get(pos).map(|c| c.data_type())
    }
}

impl FromIterator<Column> for Schema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Schema { columns: iter.into_iter().collect() }
    }
}
