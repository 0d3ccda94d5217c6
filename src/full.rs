use std::fs;
use std::path::Path;

use anyhow::Result;
use sha2::Digest;

/// Reads the whole file into memory, then digests the buffer in one
/// shot. Works for any RustCrypto hash.
pub fn digest<D: Digest>(path: &Path) -> Result<String> {
    let contents = fs::read(path)?;
    Ok(hex::encode(D::digest(&contents)))
}
