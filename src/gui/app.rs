// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{mpsc::Receiver, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        consts::DATA_DIR,
        state::{AppState, Tab},
    },
    record::{col, JobRecord},
    scrape::RunSummary,
    store::{self, DataSet, PrunePlan},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "LinkedIn Job Tracker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), PathBuf::from(DATA_DIR))))),
    )?;
    Ok(())
}

/// What the search thread sends back when it is done.
pub type SearchOutcome = Result<RunSummary, String>;

/// Form contents of the Update Status window.
#[derive(Clone, Debug, Default)]
pub struct StatusEditor {
    pub job_id: String,
    pub status: String,
    pub date_applied: String,
    pub deadline: String,
    pub application_link: String,
    pub resume_link: String,
    pub notes: String,
}

impl StatusEditor {
    pub fn for_record(rec: &JobRecord) -> Self {
        Self {
            job_id: rec.job_id.clone(),
            status: rec.status.to_string(),
            date_applied: rec.date_applied.clone().unwrap_or_default(),
            deadline: rec.deadline.clone().unwrap_or_default(),
            application_link: rec.application_link.clone().unwrap_or_default(),
            resume_link: rec.resume_link.clone().unwrap_or_default(),
            notes: rec.notes.clone().unwrap_or_default(),
        }
    }
}

/// A planned prune waiting for the user's yes/no.
pub struct PruneConfirm {
    pub plan: PrunePlan,
    pub max_days: i64,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub data_dir: PathBuf,

    // Track tab: files in the data dir (newest first) and the loaded one
    pub files: Vec<PathBuf>,
    pub current_file: Option<PathBuf>,
    pub dataset: DataSet,
    /// Rows of `dataset` passing the status filter
    pub view_ix: Vec<usize>,
    /// Selected row, as an index into `dataset.rows`
    pub selected: Option<usize>,

    // status/progress (search thread writes here)
    pub status: Arc<Mutex<String>>,
    pub progress: Arc<Mutex<f32>>,
    pub running: bool,
    pub search_rx: Option<Receiver<SearchOutcome>>,

    // popups
    pub editor: Option<StatusEditor>,
    pub details: Option<usize>,
    pub prune_confirm: Option<PruneConfirm>,
}

impl App {
    pub fn new(state: AppState, data_dir: PathBuf) -> Self {
        let mut app = Self {
            state,
            data_dir,
            files: Vec::new(),
            current_file: None,
            dataset: DataSet::default(),
            view_ix: Vec::new(),
            selected: None,
            status: Arc::new(Mutex::new(s!("Ready"))),
            progress: Arc::new(Mutex::new(0.0)),
            running: false,
            search_rx: None,
            editor: None,
            details: None,
            prune_confirm: None,
        };

        actions::track::load_latest(&mut app);
        log::info!("Init: data_dir={}, files={}", app.data_dir.display(), app.files.len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn progress_fraction(&self) -> f32 {
        self.progress.lock().map(|p| *p).unwrap_or(0.0)
    }

    /// Recompute the visible rows from the status filter.
    pub fn rebuild_view(&mut self) {
        let filter = self.state.gui.status_filter.as_str();
        self.view_ix = store::rows_with_status(&self.dataset, Some(filter));
        if self.selected.is_some_and(|s| !self.view_ix.contains(&s)) {
            self.selected = None;
        }
    }

    pub fn record_at(&self, row: usize) -> Option<JobRecord> {
        self.dataset
            .rows
            .get(row)
            .map(|r| JobRecord::from_row(&self.dataset.headers, r))
    }

    pub fn cell_at(&self, row: usize, column: &str) -> Option<&str> {
        self.dataset.cell(row, column).filter(|c| !c.is_empty())
    }

    pub fn job_id_at(&self, row: usize) -> Option<&str> {
        self.cell_at(row, col::JOB_ID)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::search::poll(self);
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();

            match self.state.gui.tab {
                Tab::Search => components::search_panel::draw(ui, self),
                Tab::Track => {
                    components::track_toolbar::draw(ui, self);
                    ui.separator();
                    components::job_table::draw(ui, self);
                }
            }
        });

        components::details_window::show(ctx, self);
        components::update_window::show(ctx, self);
        components::prune_dialog::show(ctx, self);
    }
}
