pub struct CursorConfig {
    pub label: String,
    pub close_on_drop: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            label: "cursor".to_string(),
            close_on_drop: true,
        }
    }
}

impl CursorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name reported in the cursor's log events.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// When set, dropping a cursor that was never closed releases its source.
    pub fn close_on_drop(mut self, close_on_drop: bool) -> Self {
        self.close_on_drop = close_on_drop;
        self
    }
}
