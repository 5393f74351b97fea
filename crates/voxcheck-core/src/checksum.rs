//! Streaming MD5 of voice files.
//!
//! MD5 is fixed by the manifest format: each entry carries a 32-hex-char
//! digest of the installed voice file's content.

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute MD5 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; voice files run to tens of MB.
///
/// A read error after a successful open finishes the digest over the bytes
/// read so far: the resulting mismatch downgrades the voice to unavailable
/// instead of aborting the whole run.
pub fn md5_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        match f.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) => {
                tracing::warn!("read {}: {}", path.display(), e);
                break;
            }
        }
    }
    Ok(hex::encode(hasher.finalize()))
}
