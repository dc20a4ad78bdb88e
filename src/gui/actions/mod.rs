// src/gui/actions/mod.rs
//
// Folder module facade. Components call into these; none of them draw.

pub mod prune;   // src/gui/actions/prune.rs
pub mod search;  // src/gui/actions/search.rs
pub mod track;   // src/gui/actions/track.rs
pub mod update;  // src/gui/actions/update.rs
