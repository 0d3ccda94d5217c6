use std::cell::Cell;
use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::format::pretty_file_size;
use crate::stats;
use crate::timer::ScopedTimer;
use crate::types::{FileReport, Inputs, Strategy, StrategyStats};

/// Runs every strategy against every file, one at a time, and
/// aggregates the timings into one report per file. Any I/O failure is
/// fatal to the whole run.
pub fn run(inputs: &Inputs, strategies: &[Strategy]) -> Result<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(inputs.files.len());

    for path in &inputs.files {
        let size_bytes = fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        info!("hashing {} ({})", path.display(), pretty_file_size(size_bytes));

        let mut samples: Vec<Vec<f64>> = strategies
            .iter()
            .map(|_| Vec::with_capacity(inputs.iterations))
            .collect();

        // One extra trial runs so that a warm-up pass can be thrown away.
        for i in 0..=inputs.iterations {
            for (strategy, recorded) in strategies.iter().zip(samples.iter_mut()) {
                let interval = Cell::new(0.0);
                {
                    let _timer = ScopedTimer::new(&interval);
                    (strategy.run)(path).with_context(|| {
                        format!("{} failed on {}", strategy.name, path.display())
                    })?;
                }
                // The discarded warm-up pass is the one at index 1, not
                // index 0: the first pass is recorded.
                // TODO: confirm the second pass was really the intended
                // discard rather than an off-by-one for the first.
                if i != 1 {
                    recorded.push(interval.get());
                }
            }
            debug!("trial {i}/{} done for {}", inputs.iterations, path.display());
        }

        let aggregated = strategies
            .iter()
            .zip(&samples)
            .map(|(strategy, recorded)| StrategyStats {
                name: strategy.name,
                avg: stats::mean(recorded),
                std_dev: stats::std_dev(recorded),
            })
            .collect();

        reports.push(FileReport {
            path: path.clone(),
            size_bytes,
            stats: aggregated,
        });
    }

    Ok(reports)
}
