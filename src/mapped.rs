use std::fs::File;
use std::path::Path;

use anyhow::Result;
use memmap2::Mmap;

/// Maps the whole file and hands the mapping to BLAKE3's rayon worker
/// pool in one call, skipping explicit read syscalls entirely.
pub fn digest_blake3(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    // Safety: the mapping is only read, and the file is not truncated
    // while the hasher walks it.
    let mmap = unsafe { Mmap::map(&file)? };
    let mut hasher = blake3::Hasher::new();
    hasher.update_rayon(&mmap);
    Ok(hasher.finalize().to_hex().to_string())
}
