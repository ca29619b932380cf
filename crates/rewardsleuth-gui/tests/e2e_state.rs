/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState`
/// without spinning up an egui window, keeping them fast and
/// deterministic.
///
/// **Scope:** All user-visible state transitions are covered:
///   - Load lifecycle (start, progress messages, completion, failure)
///   - Reload through the shared cache
///   - Report snapshot computation on completion
///
/// The real loader thread is used so no mocking is needed.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rewardsleuth_gui::state::{AppPhase, AppState};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

const HEADER: &str = "Member_Name_Surname_Per_Redemption,Country,Reward_Received,\
                      Redemptions_by_User,Reward_Value_Amount_in_Dollars,\
                      Cost_Per_Redemption_in_Dollars,Satisfaction_Rating_on_Reward,\
                      Time_to_Reward_Received_in_Seconds";

/// Write a minimal export and return its path.
fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("Rewards.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{HEADER}").unwrap();
    writeln!(f, "Alice Archer,US,Voucher,10,50,2.5,4,3600").unwrap();
    writeln!(f, "Bob Breen,UK,Gift Card,3,20,1.0,5,7200").unwrap();
    writeln!(f, "Cara Cruz,US,Voucher,2,15,2.0,3,1800").unwrap();
    path
}

/// Pump `process_load_messages()` until the phase leaves `Loading` or
/// the deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Loading {
        assert!(
            std::time::Instant::now() < deadline,
            "load did not complete within 30 seconds"
        );
        state.process_load_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

// ── Load lifecycle ─────────────────────────────────────────────────────────────

/// After `start_load`, the phase must be `Loading`.
#[test]
fn start_load_sets_loading_phase() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new(write_sample(tmp.path()));
    state.start_load();
    assert_eq!(state.phase, AppPhase::Loading);
}

/// After the channel delivers `Complete`, the phase must flip to `Ready`
/// with the table and its report snapshot populated.
#[test]
fn load_completes_with_table_and_stats() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new(write_sample(tmp.path()));
    state.start_load();
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Ready);
    let dataset = state.dataset.as_ref().expect("table must be populated");
    assert_eq!(dataset.len(), 3);
    assert_eq!(state.rows_read, 3);

    let stats = state.stats.as_ref().expect("stats must be computed");
    assert_eq!(stats.kpis.total_redemptions, 15);
    assert_eq!(stats.kpis.distinct_members, 3);
    assert_eq!(stats.top_performers[0].name, "Alice Archer");
    assert!(state.load_duration.is_some());
    assert!(state.loaded_at.is_some());
}

/// A missing export must land in `Failed` with a user-visible message,
/// and no stale results.
#[test]
fn missing_file_fails_with_message() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new(tmp.path().join("absent.csv"));
    state.start_load();
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.dataset.is_none());
    assert!(state.stats.is_none());
    let err = state.load_error.as_ref().expect("error message expected");
    assert!(err.contains("absent.csv"), "message should name the file");
}

/// A schema violation surfaces the offending column in the message.
#[test]
fn missing_column_failure_names_the_column() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("short.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "Member_Name_Surname_Per_Redemption,Country").unwrap();
    writeln!(f, "Alice Archer,US").unwrap();
    drop(f);

    let mut state = AppState::new(path);
    state.start_load();
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Failed);
    let err = state.load_error.as_ref().unwrap();
    assert!(
        err.contains("Reward_Received"),
        "message should name the missing column, got: {err}"
    );
}

/// A header-only export is a valid empty report: phase `Ready`, zeroed
/// aggregates, no panic anywhere downstream.
#[test]
fn empty_export_renders_an_empty_report() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{HEADER}").unwrap();
    drop(f);

    let mut state = AppState::new(path);
    state.start_load();
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Ready);
    let stats = state.stats.as_ref().unwrap();
    assert_eq!(stats.kpis.total_redemptions, 0);
    assert!(stats.top_performers.is_empty());
    assert!(stats.satisfaction_density.is_empty());
}

// ── Reload & cache ─────────────────────────────────────────────────────────────

/// Reloading an unmodified file must complete off the shared cache with
/// the very same table.
#[test]
fn reload_reuses_the_cached_table() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new(write_sample(tmp.path()));

    state.start_load();
    pump_until_done(&mut state);
    let first = state.dataset.clone().unwrap();

    state.start_load();
    assert_eq!(state.phase, AppPhase::Loading, "reload restarts the phase");
    assert!(state.dataset.is_none(), "stale results are cleared");
    pump_until_done(&mut state);

    let second = state.dataset.clone().unwrap();
    assert!(
        Arc::ptr_eq(&first, &second),
        "unchanged file must come from the cache"
    );
}

/// Two consecutive loads of the same file must produce identical
/// aggregates — the pipeline has no hidden mutable state.
#[test]
fn reload_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new(write_sample(tmp.path()));

    state.start_load();
    pump_until_done(&mut state);
    let first = state.stats.as_ref().unwrap().kpis.clone();

    state.start_load();
    pump_until_done(&mut state);
    let second = state.stats.as_ref().unwrap().kpis.clone();

    assert_eq!(first, second);
}
