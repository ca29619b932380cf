/// RewardSleuth Core — loading, aggregation, and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — The redemption record table and formatting helpers.
/// - [`loader`] — CSV loading with a memoized cache and background-thread
///   progress reporting.
/// - [`analysis`] — Pure aggregate queries over the loaded table (KPIs,
///   rankings, distributions).
/// - [`error`] — The load/schema error taxonomy.
pub mod analysis;
pub mod error;
pub mod loader;
pub mod model;
