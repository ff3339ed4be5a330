use super::Value;

/// A fixed-arity tuple handed out by a row source.
pub trait Row {
    fn arity(&self) -> usize;
}

/// Row backed by a plain vector of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericRow {
    values: Vec<Value>,
}

impl GenericRow {
    pub fn new(values: Vec<Value>) -> Self {
        GenericRow { values }
    }

    pub fn get(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Row for GenericRow {
    fn arity(&self) -> usize {
        self.values.len()
    }
}

impl From<Vec<Value>> for GenericRow {
    fn from(values: Vec<Value>) -> Self {
        GenericRow::new(values)
    }
}

impl FromIterator<Value> for GenericRow {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        GenericRow::new(iter.into_iter().collect())
    }
}

/// Builds a [`GenericRow`] from anything convertible into [`Value`].
#[macro_export]
macro_rules! row {
    ($($val:expr),* $(,)?) => {
        $crate::row::GenericRow::new(vec![$($crate::row::Value::from($val)),*])
    };
}
