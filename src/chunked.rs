use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use sha2::Digest;

/// Reusable read-buffer size shared by the incremental strategies.
pub const CHUNK_SIZE: usize = 128 * 1024;

/// How far into the file the truncated "fast" strategy reads.
pub const PREFIX_LEN: usize = 64 * 1024;

/// Incremental digest over a reusable fixed-size buffer, one
/// `update` per chunk read.
pub fn digest<D: Digest>(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digests only the first 64 KiB. The result is NOT a digest of the
/// whole file; it exists to show what the read path alone costs.
pub fn digest_prefix<D: Digest>(path: &Path) -> Result<String> {
    let mut prefix = Vec::with_capacity(PREFIX_LEN);
    File::open(path)?
        .take(PREFIX_LEN as u64)
        .read_to_end(&mut prefix)?;
    Ok(hex::encode(D::digest(&prefix)))
}

/// Incremental BLAKE3 over the same reusable buffer, with the chunk
/// mixing handed to the hasher's rayon worker pool.
pub fn digest_blake3(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update_rayon(&buffer[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}
