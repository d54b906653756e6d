//! Rendering options.

/// Options shared by the text and HTML renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    source_name: String,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source file name printed in the attribution trailer.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            source_name: "(stdin)".to_string(),
        }
    }
}
