/// Loader module — orchestrates dataset loading.
///
/// The read runs on a **named background thread** so the UI stays
/// responsive while a large export is parsed; progress and the final
/// result travel back over a bounded crossbeam channel. The thread
/// consults the caller's [`DatasetCache`], so re-loading an unchanged
/// file completes without touching the disk beyond a metadata check.
pub mod cache;
pub mod csv_read;
pub mod progress;

pub use cache::DatasetCache;
pub use progress::LoadProgress;

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crossbeam_channel::Receiver;
use tracing::{info, warn};

/// Fixed input path of the programme export, relative to the working
/// directory. There are no flags or environment overrides — the report
/// reads one known file.
pub const DEFAULT_DATA_FILE: &str = "Rewards.csv";

/// Maximum number of progress messages that may queue up in the channel.
///
/// The UI drains this channel once per frame. Progress is emitted at most
/// once per [`PROGRESS_EVERY_ROWS`] rows, so even a multi-million-row file
/// cannot outrun this capacity by more than a frame or two; if the UI
/// falls behind the loader stalls briefly rather than queueing unbounded
/// heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 256;

/// Emit one `Update` per this many parsed rows.
pub const PROGRESS_EVERY_ROWS: u64 = 256;

/// Handle to a running or completed load.
pub struct LoadHandle {
    /// Receiver for progress updates and the final outcome.
    pub progress_rx: Receiver<LoadProgress>,
    /// Join handle for the load thread. Held so the thread is not
    /// detached; dropped with the handle once the outcome is received.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start loading `path` on a background thread.
///
/// Returns a [`LoadHandle`] whose channel delivers zero or more
/// [`LoadProgress::Update`] messages followed by exactly one
/// [`LoadProgress::Complete`] or [`LoadProgress::Failed`].
pub fn start_load(path: PathBuf, cache: Arc<DatasetCache>) -> LoadHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<LoadProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("rewardsleuth-loader".into())
        .spawn(move || {
            info!("Loading {}", path.display());
            let started = Instant::now();

            let tx = progress_tx.clone();
            let result = cache.load_with_progress(&path, move |rows_read| {
                if rows_read % PROGRESS_EVERY_ROWS == 0 {
                    let _ = tx.send(LoadProgress::Update { rows_read });
                }
            });

            match result {
                Ok(dataset) => {
                    let duration = started.elapsed();
                    info!(
                        "Loaded {} rows from {} in {:.1?}",
                        dataset.len(),
                        path.display(),
                        duration
                    );
                    let _ = progress_tx.send(LoadProgress::Complete { dataset, duration });
                }
                Err(error) => {
                    warn!("Load of {} failed: {error}", path.display());
                    let _ = progress_tx.send(LoadProgress::Failed { error });
                }
            }
        })
        .expect("failed to spawn loader thread");

    LoadHandle {
        progress_rx,
        _thread: Some(thread),
    }
}
