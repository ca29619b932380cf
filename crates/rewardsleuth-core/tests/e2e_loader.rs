/// End-to-end loader integration tests.
///
/// These tests exercise the real `start_load` code path against real
/// temporary files, verifying that the loader thread parses the export,
/// reports progress through the channel, consults the shared cache, and
/// delivers exactly one terminal message.
///
/// **Why a `tests/` integration test (not unit test)?**
///
/// `start_load` spawns a real OS thread and communicates over a bounded
/// crossbeam channel. Testing it in isolation would mean mocking the
/// filesystem and the channel; an integration test with `tempfile`
/// exercises the whole path — thread spawn, CSV parse, cache insert,
/// channel delivery — with zero mocking.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rewardsleuth_core::error::LoadError;
use rewardsleuth_core::loader::{start_load, DatasetCache, LoadHandle, LoadProgress};
use rewardsleuth_core::model::Dataset;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

const HEADER: &str = "Member_Name_Surname_Per_Redemption,Country,Reward_Received,\
                      Redemptions_by_User,Reward_Value_Amount_in_Dollars,\
                      Cost_Per_Redemption_in_Dollars,Satisfaction_Rating_on_Reward,\
                      Time_to_Reward_Received_in_Seconds";

/// Write a small, reproducible export:
///
/// ```text
/// Alice Archer  US  Voucher    10 × $50
/// Bob Breen     UK  Gift Card   3 × $20
/// Cara Cruz     US  Voucher     2 × $15
/// ```
fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("Rewards.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{HEADER}").unwrap();
    writeln!(f, "Alice Archer,US,Voucher,10,50,2.5,4,3600").unwrap();
    writeln!(f, "Bob Breen,UK,Gift Card,3,20,1.0,5,7200").unwrap();
    writeln!(f, "Cara Cruz,US,Voucher,2,15,2.0,3,1800").unwrap();
    path
}

/// Drain the channel until the terminal message, returning the dataset on
/// success (panicking after a generous timeout so a stuck loader cannot
/// hang the suite).
fn drain_to_completion(handle: &LoadHandle) -> Result<Arc<Dataset>, LoadError> {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    loop {
        assert!(
            std::time::Instant::now() < deadline,
            "loader did not complete within 30 seconds"
        );
        match handle.progress_rx.try_recv() {
            Ok(LoadProgress::Complete { dataset, .. }) => return Ok(dataset),
            Ok(LoadProgress::Failed { error }) => return Err(error),
            Ok(LoadProgress::Update { .. }) => continue,
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("loader channel disconnected before a terminal message");
            }
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

/// A valid export loads completely with the expected rows.
#[test]
fn load_delivers_the_parsed_table() {
    let tmp = TempDir::new().unwrap();
    let path = write_sample(tmp.path());

    let handle = start_load(path, Arc::new(DatasetCache::new()));
    let dataset = drain_to_completion(&handle).expect("load must succeed");

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.records()[0].member_name, "Alice Archer");
    assert_eq!(dataset.records()[2].redemptions, 2);
}

/// A missing file fails with a read error, not a hang or panic.
#[test]
fn missing_file_reports_failure() {
    let tmp = TempDir::new().unwrap();
    let handle = start_load(
        tmp.path().join("absent.csv"),
        Arc::new(DatasetCache::new()),
    );
    let err = drain_to_completion(&handle).expect_err("load must fail");
    assert!(matches!(err, LoadError::Read { .. }));
}

/// A header-only export loads as an empty table — downstream aggregates
/// must degrade, not the loader.
#[test]
fn header_only_export_loads_empty() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{HEADER}").unwrap();
    drop(f);

    let handle = start_load(path, Arc::new(DatasetCache::new()));
    let dataset = drain_to_completion(&handle).expect("empty table is valid");
    assert!(dataset.is_empty());
}

// ── Progress ─────────────────────────────────────────────────────────────────

/// A file larger than the progress granularity must produce at least one
/// `Update` before completing.
#[test]
fn large_file_reports_progress() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("big.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{HEADER}").unwrap();
    for i in 0..1_000u64 {
        writeln!(f, "Member {i},US,Voucher,{},10,1.0,4,60", i % 20).unwrap();
    }
    drop(f);

    let handle = start_load(path, Arc::new(DatasetCache::new()));

    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    let mut updates = 0u32;
    loop {
        assert!(std::time::Instant::now() < deadline, "loader timed out");
        match handle.progress_rx.try_recv() {
            Ok(LoadProgress::Update { rows_read }) => {
                assert!(rows_read > 0 && rows_read <= 1_000);
                updates += 1;
            }
            Ok(LoadProgress::Complete { dataset, .. }) => {
                assert_eq!(dataset.len(), 1_000);
                break;
            }
            Ok(LoadProgress::Failed { error }) => panic!("unexpected failure: {error}"),
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(5));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("channel disconnected early");
            }
        }
    }
    assert!(updates >= 1, "expected at least one progress update");
}

// ── Cache ────────────────────────────────────────────────────────────────────

/// Two loads through the same cache of an unmodified file must share one
/// table.
#[test]
fn reload_hits_the_shared_cache() {
    let tmp = TempDir::new().unwrap();
    let path = write_sample(tmp.path());
    let cache = Arc::new(DatasetCache::new());

    let first = drain_to_completion(&start_load(path.clone(), cache.clone())).unwrap();
    let second = drain_to_completion(&start_load(path, cache)).unwrap();

    assert!(
        Arc::ptr_eq(&first, &second),
        "unchanged file must not be re-read"
    );
}
