// src/config/state.rs
use super::options::{FilterCriteria, IdRange, ViewMode};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// The most recently requested id range.
    pub range: IdRange,
    /// Live filter inputs (search text, category toggle).
    pub filter: FilterCriteria,
    pub gui: GuiState,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Cards (sprite grid) or Table (compact list).
    pub view: ViewMode,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 760,
            view: ViewMode::Cards,
        }
    }
}
