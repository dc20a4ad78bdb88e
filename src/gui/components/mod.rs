// src/gui/components/mod.rs
pub mod details_window;
pub mod job_table;
pub mod prune_dialog;
pub mod search_panel;
pub mod tabs;
pub mod track_toolbar;
pub mod update_window;
