// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Opening the Track tab with nothing loaded picks up the newest file.

use eframe::egui;

use crate::config::state::Tab;
use crate::gui::{actions::track, app::App};

const TABS: [(Tab, &str); 2] = [
    (Tab::Search, "Search Jobs"),
    (Tab::Track, "Track Applications"),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (tab, title) in TABS {
            let selected = app.state.gui.tab == tab;
            if ui.selectable_label(selected, title).clicked() && !selected {
                log::debug!("UI: Tab switch {:?} → {:?}", app.state.gui.tab, tab);
                app.state.gui.tab = tab;
                if tab == Tab::Track && app.current_file.is_none() {
                    track::load_latest(app);
                }
            }
        }
    });
}
