// src/config/state.rs
use super::consts::DEFAULT_PRUNE_DAYS;
use super::options::{AgeFilter, SearchOptions};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Search,
    Track,
}

/// Label used by the status filter to mean "no filter".
pub const ALL_STATUSES: &str = "All";

#[derive(Clone, Debug)]
pub struct GuiState {
    pub tab: Tab,
    pub window_w: f32,
    pub window_h: f32,

    /// Track tab -> status filter ("All" or a status label)
    pub status_filter: String,

    /// Track tab -> "Remove Old Jobs" threshold
    pub prune_days: i64,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tab: Tab::Search,
            window_w: 1200.0,
            window_h: 700.0,
            status_filter: s!(ALL_STATUSES),
            prune_days: DEFAULT_PRUNE_DAYS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub search: SearchOptions,
    pub age_filter: AgeFilter,
    pub gui: GuiState,
}
