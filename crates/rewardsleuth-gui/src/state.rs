/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The load thread communicates via a bounded channel; state updates
/// happen in `process_load_messages()` which runs once per frame.
///
/// The dataset itself is immutable: once a load completes the table and
/// its [`ReportStats`] snapshot are replaced wholesale, never edited.
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rewardsleuth_core::analysis::ReportStats;
use rewardsleuth_core::loader::{self, DatasetCache, LoadHandle, LoadProgress};
use rewardsleuth_core::model::Dataset;

use crate::theme::ThemeMode;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// A load is in flight — spinner and running row counter.
    Loading,
    /// The table and its report snapshot are available.
    Ready,
    /// The load failed — the failure message replaces the dashboard.
    Failed,
}

/// Maximum number of load-progress messages drained from the channel per
/// frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking
/// the render thread for a perceptible duration when it is eventually
/// shown again.
const MAX_MESSAGES_PER_FRAME: usize = 100;

/// All application state.
pub struct AppState {
    // ── Source ─────────────────────────────────────────
    /// Fixed path of the programme export.
    pub data_path: PathBuf,
    /// Memoized load cache, shared with each load thread.
    pub cache: Arc<DatasetCache>,

    // ── Load ───────────────────────────────────────────
    pub phase: AppPhase,
    pub load_handle: Option<LoadHandle>,
    /// Rows parsed so far (running counter while loading).
    pub rows_read: u64,
    pub load_duration: Option<Duration>,
    pub load_error: Option<String>,
    /// Wall-clock time the current table was loaded.
    pub loaded_at: Option<chrono::DateTime<chrono::Local>>,

    // ── Results ────────────────────────────────────────
    /// The loaded table (shared with the cache).
    pub dataset: Option<Arc<Dataset>>,
    /// Aggregates computed once per loaded table.
    pub stats: Option<ReportStats>,

    // ── UI state ───────────────────────────────────────
    pub theme_mode: ThemeMode,
    pub show_about: bool,
}

impl AppState {
    /// Create initial application state reading from `data_path`.
    ///
    /// No load is started — call [`start_load`](Self::start_load).
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            cache: Arc::new(DatasetCache::new()),
            phase: AppPhase::Loading,
            load_handle: None,
            rows_read: 0,
            load_duration: None,
            load_error: None,
            loaded_at: None,
            dataset: None,
            stats: None,
            theme_mode: ThemeMode::Dark,
            show_about: false,
        }
    }

    /// State pointed at the fixed default export path.
    pub fn with_default_path() -> Self {
        Self::new(PathBuf::from(loader::DEFAULT_DATA_FILE))
    }

    /// Start (or restart) loading the export.
    ///
    /// An unchanged file completes instantly off the cache; a replaced
    /// file is re-read. Previous results are cleared so a failed reload
    /// cannot present a stale dashboard as current.
    pub fn start_load(&mut self) {
        self.phase = AppPhase::Loading;
        self.rows_read = 0;
        self.load_duration = None;
        self.load_error = None;
        self.dataset = None;
        self.stats = None;

        let handle = loader::start_load(self.data_path.clone(), self.cache.clone());
        self.load_handle = Some(handle);
    }

    /// Process pending load progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    /// Capped at [`MAX_MESSAGES_PER_FRAME`] messages per call so that a
    /// backlog cannot stall the render thread.
    pub fn process_load_messages(&mut self) -> bool {
        let handle = match &self.load_handle {
            Some(h) => h,
            None => return false,
        };

        let mut repaint = false;
        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                LoadProgress::Update { rows_read } => {
                    self.rows_read = rows_read;
                }
                LoadProgress::Complete { dataset, duration } => {
                    tracing::info!(
                        "Report ready: {} rows aggregated in {:.1?}",
                        dataset.len(),
                        duration
                    );
                    self.rows_read = dataset.len() as u64;
                    self.load_duration = Some(duration);
                    self.loaded_at = Some(chrono::Local::now());
                    self.stats = Some(ReportStats::compute(&dataset));
                    self.dataset = Some(dataset);
                    self.phase = AppPhase::Ready;
                    self.load_handle = None;
                    return true;
                }
                LoadProgress::Failed { error } => {
                    self.load_error = Some(error.to_string());
                    self.phase = AppPhase::Failed;
                    self.load_handle = None;
                    return true;
                }
            }
        }

        repaint
    }
}
