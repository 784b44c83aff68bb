use crate::GhdEngine;

/// Configures a [`GhdEngine`].
///
/// ```
/// use ghd::GhdEngineBuilder;
///
/// let engine = GhdEngineBuilder::new().with_max_cells(1_000_000).build();
/// assert_eq!(engine.max_cells(), Some(1_000_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GhdEngineBuilder {
    max_cells: Option<usize>,
}

impl GhdEngineBuilder {
    pub fn new() -> Self {
        Self { max_cells: None }
    }

    /// Refuse inputs whose tableau would exceed `max_cells` cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    pub fn build(self) -> GhdEngine {
        match self.max_cells {
            Some(max) => GhdEngine::with_max_cells(max),
            None => GhdEngine::new(),
        }
    }
}
