use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use walkdir::WalkDir;

use hash_bench::types::Inputs;
use hash_bench::{driver, logging, STRATEGIES, TEST_FILES};

fn main() -> Result<()> {
    logging::init();

    let args: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    let files = if args.is_empty() {
        TEST_FILES.iter().map(PathBuf::from).collect()
    } else {
        collect_files(args)?
    };

    let iterations = std::env::var("ITERATIONS")
        .map(|s| s.parse::<usize>().expect("Invalid ITERATIONS"))
        .unwrap_or(5);

    info!("About to start with parameters");
    info!("  files: {}", files.len());
    info!("  iterations: {}", iterations);
    info!("  threads: {}", num_cpus::get());
    for strategy in STRATEGIES {
        info!("  {} - {}", strategy.name, strategy.description);
    }

    let inputs = Inputs { files, iterations };
    let reports = driver::run(&inputs, STRATEGIES)?;

    for report in &reports {
        println!("{report}");
    }

    Ok(())
}

/// Arguments may name files or directories. A directory argument is
/// walked and every regular file under it joins the run.
fn collect_files(args: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        if arg.is_dir() {
            for entry in WalkDir::new(&arg) {
                let entry = entry?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(arg);
        }
    }
    Ok(files)
}
