//! Remote manifest fetch over HTTP.
//!
//! Synchronous: when `fetch_manifest` returns, the transfer has definitively
//! finished and the caller may parse. The body is written to `<dest>.part`
//! and renamed into place only on success, so a partially written manifest
//! is never observable at the destination path.

use curl::easy::Easy;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Why a manifest fetch failed. All variants are advisory to the caller:
/// the orchestrator logs the failure and falls back to a synthetic manifest.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, aborted write, etc.).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET returned HTTP {0}")]
    Http(u32),
    /// Local file creation, flush, or rename failed.
    #[error("write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successful `fetch_manifest` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination already existed; no network use, the cached manifest wins.
    AlreadyPresent,
    /// Manifest downloaded and renamed into place.
    Downloaded,
}

/// Fetch `url` into `dest` unless `dest` already exists.
///
/// `timeout` bounds the whole transfer so a dead server cannot block the
/// verification run indefinitely.
pub fn fetch_manifest(url: &str, dest: &Path, timeout: Duration) -> Result<FetchOutcome, FetchError> {
    if dest.exists() {
        tracing::debug!("manifest already present at {}", dest.display());
        return Ok(FetchOutcome::AlreadyPresent);
    }

    let part = part_path(dest);
    match download_to(url, &part, timeout) {
        Ok(()) => {
            fs::rename(&part, dest).map_err(|e| FetchError::Io {
                path: dest.display().to_string(),
                source: e,
            })?;
            Ok(FetchOutcome::Downloaded)
        }
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(e)
        }
    }
}

/// Temp path for an in-progress fetch: appends `.part` to the destination.
fn part_path(dest: &Path) -> PathBuf {
    let mut o = dest.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

fn download_to(url: &str, part: &Path, timeout: Duration) -> Result<(), FetchError> {
    let mut file = File::create(part).map_err(|e| FetchError::Io {
        path: part.display().to_string(),
        source: e,
    })?;

    let mut easy = Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                tracing::warn!("manifest write failed: {}", e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    file.flush().map_err(|e| FetchError::Io {
        path: part.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_destination_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("voices.list");
        std::fs::write(&dest, "eng-USA-rms\tabc\n").unwrap();
        // URL is unreachable; the call must not even try it.
        let out = fetch_manifest(
            "http://127.0.0.1:9/voices.list",
            &dest,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(out, FetchOutcome::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "eng-USA-rms\tabc\n");
    }

    #[test]
    fn failed_fetch_leaves_no_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("voices.list");
        let err = fetch_manifest(
            "http://127.0.0.1:9/voices.list",
            &dest,
            Duration::from_secs(2),
        );
        assert!(err.is_err());
        assert!(!dest.exists());
        assert!(!part_path(&dest).exists());
    }
}
