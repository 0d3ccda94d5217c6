use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::format::{fmt_rounded, pretty_file_size, pretty_time};

/// A named way of turning one file into a hex digest.
pub struct Strategy {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&Path) -> Result<String>,
}

pub struct Inputs {
    pub files: Vec<PathBuf>,
    pub iterations: usize,
}

/// Aggregated timings for one (file, strategy) pair.
#[derive(Debug)]
pub struct StrategyStats {
    pub name: &'static str,
    pub avg: f64,
    pub std_dev: f64,
}

impl fmt::Display for StrategyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, std dev {}",
            self.name,
            pretty_time(self.avg),
            fmt_rounded(self.std_dev, 4)
        )
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub stats: Vec<StrategyStats>,
}

impl fmt::Display for FileReport {
    /// One block per file: a header line, then one aligned line per
    /// strategy with the mean right-justified and the standard
    /// deviation rounded to 4 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self.stats.iter().map(|s| s.name.len()).max().unwrap_or(0) + 1;
        let avg_width = self
            .stats
            .iter()
            .map(|s| pretty_time(s.avg).len())
            .max()
            .unwrap_or(0)
            + 1;

        writeln!(
            f,
            "File: {} ({})",
            self.path.display(),
            pretty_file_size(self.size_bytes)
        )?;
        for stat in &self.stats {
            writeln!(
                f,
                "  {:<nw$}: {:>aw$} (SD {})",
                stat.name,
                pretty_time(stat.avg),
                fmt_rounded(stat.std_dev, 4),
                nw = name_width,
                aw = avg_width,
            )?;
        }
        Ok(())
    }
}
