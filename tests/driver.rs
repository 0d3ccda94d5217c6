// End-to-end runs of the trial loop with mock strategies, checking the
// trial count, the warm-up discard, and the aggregate bands.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tempfile::NamedTempFile;

use hash_bench::driver;
use hash_bench::types::{Inputs, Strategy};

fn write_temp(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&vec![0u8; len]).unwrap();
    file.flush().unwrap();
    file
}

static SLEEPY_CALLS: AtomicUsize = AtomicUsize::new(0);

fn sleepy(_path: &Path) -> Result<String> {
    SLEEPY_CALLS.fetch_add(1, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(10));
    Ok(String::from("feedface"))
}

#[test]
fn aggregates_land_in_the_expected_band() {
    const SLEEPY: &[Strategy] = &[Strategy {
        name: "sleepy",
        description: "sleeps for 10 ms instead of hashing.",
        run: sleepy,
    }];

    let file = write_temp(10 * 1024 * 1024);
    let inputs = Inputs {
        files: vec![file.path().to_path_buf()],
        iterations: 5,
    };

    let reports = driver::run(&inputs, SLEEPY).unwrap();

    // iterations + 1 trials ran, one per strategy invocation
    assert_eq!(SLEEPY_CALLS.load(Ordering::SeqCst), 6);

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.path, file.path());
    assert_eq!(report.size_bytes, 10 * 1024 * 1024);
    assert_eq!(report.stats.len(), 1);

    let stat = &report.stats[0];
    assert_eq!(stat.name, "sleepy");
    // ~10 ms per invocation; generous ceiling for scheduler jitter
    assert!(
        stat.avg >= 0.010 && stat.avg < 0.050,
        "mean {} outside the expected band",
        stat.avg
    );
    assert!(
        stat.std_dev < 0.010,
        "std dev {} outside the expected band",
        stat.std_dev
    );
}

static SPIKY_CALLS: AtomicUsize = AtomicUsize::new(0);

fn spiky(_path: &Path) -> Result<String> {
    // the second call is 10x slower than the rest
    let call = SPIKY_CALLS.fetch_add(1, Ordering::SeqCst);
    let ms = if call == 1 { 50 } else { 5 };
    thread::sleep(Duration::from_millis(ms));
    Ok(String::from("feedface"))
}

#[test]
fn the_discarded_trial_is_the_second_one() {
    const SPIKY: &[Strategy] = &[Strategy {
        name: "spiky",
        description: "slow on the second call only.",
        run: spiky,
    }];

    let file = write_temp(1024);
    let inputs = Inputs {
        files: vec![file.path().to_path_buf()],
        iterations: 3,
    };

    let reports = driver::run(&inputs, SPIKY).unwrap();
    assert_eq!(SPIKY_CALLS.load(Ordering::SeqCst), 4);

    // The 50 ms spike sits at trial index 1, which never reaches the
    // aggregate; had index 0 been discarded instead, the mean would be
    // pulled to ~20 ms.
    let stat = &reports[0].stats[0];
    assert!(
        stat.avg < 0.020,
        "mean {} includes the discarded warm-up trial",
        stat.avg
    );
}

fn noop(_path: &Path) -> Result<String> {
    Ok(String::new())
}

#[test]
fn missing_file_aborts_the_run() {
    const NOOP: &[Strategy] = &[Strategy {
        name: "noop",
        description: "does nothing.",
        run: noop,
    }];

    let inputs = Inputs {
        files: vec![PathBuf::from("/no/such/file.safetensors")],
        iterations: 1,
    };

    let err = driver::run(&inputs, NOOP).unwrap_err();
    assert!(err.to_string().contains("/no/such/file.safetensors"));
}

fn failing(_path: &Path) -> Result<String> {
    anyhow::bail!("disk fell off")
}

#[test]
fn failing_strategy_aborts_with_its_name() {
    const FAILING: &[Strategy] = &[Strategy {
        name: "failing",
        description: "always errors.",
        run: failing,
    }];

    let file = write_temp(16);
    let inputs = Inputs {
        files: vec![file.path().to_path_buf()],
        iterations: 2,
    };

    let err = driver::run(&inputs, FAILING).unwrap_err();
    assert!(err.to_string().contains("failing"));
}
