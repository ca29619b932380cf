/// Load progress reporting — messages sent from the load thread to the
/// UI thread via a crossbeam channel.
use std::sync::Arc;
use std::time::Duration;

use crate::error::LoadError;
use crate::model::Dataset;

/// Progress updates sent from the load thread to the UI.
///
/// The dataset itself crosses the channel once, inside `Complete`, as a
/// shared `Arc` — the `Update` messages carry only a counter.
#[derive(Debug)]
pub enum LoadProgress {
    /// Periodic update with the running row count.
    Update { rows_read: u64 },
    /// Loading finished; the table is ready for aggregation.
    Complete {
        dataset: Arc<Dataset>,
        duration: Duration,
    },
    /// Loading failed. Fatal to the report — there is nothing to render.
    Failed { error: LoadError },
}
