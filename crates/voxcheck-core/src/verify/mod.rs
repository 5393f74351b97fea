//! Verification orchestrator.
//!
//! Drives the full flow: bootstrap the storage layout, make sure a manifest
//! exists (remote fetch, then synthetic fallback), parse it, verify every
//! voice file by checksum, and report which voices are installed.

use crate::checksum;
use crate::config::CheckConfig;
use crate::fetch::{self, FetchOutcome};
use crate::manifest;
use crate::store;
use crate::voice::{VoiceDescriptor, VOICE_CATEGORY};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overall outcome of a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The run completed; individual voices may still be unavailable.
    Pass,
    /// Storage could not be bootstrapped or the manifest could not be
    /// written/read; no per-voice results exist.
    Fail,
}

/// Result of one verification run: every well-formed manifest entry
/// partitioned by canonical voice name into `available` and `unavailable`,
/// in manifest order. Built once per run and handed off unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub outcome: Outcome,
    /// Data root the run was pointed at, echoed for the caller.
    pub data_root: PathBuf,
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
}

impl VerificationReport {
    fn failed(data_root: &Path) -> Self {
        Self {
            outcome: Outcome::Fail,
            data_root: data_root.to_path_buf(),
            available: Vec::new(),
            unavailable: Vec::new(),
        }
    }
}

/// Run the full verification flow against `cfg.data_root`.
///
/// Fatal failures (unwritable storage, unreadable manifest) produce a `Fail`
/// report with both lists empty. A failed remote fetch is advisory: a
/// synthetic one-entry manifest is written instead. Per-voice problems never
/// fail the run; they classify that voice as unavailable. Runs are
/// idempotent: voice files are only read, and only missing directories and
/// manifest files are created.
pub fn run_check(cfg: &CheckConfig) -> VerificationReport {
    let data_root = &cfg.data_root;
    let category_dir = data_root.join(VOICE_CATEGORY);

    if let Err(e) = store::ensure_dir(&category_dir) {
        tracing::error!("storage bootstrap failed: {:#}", e);
        return VerificationReport::failed(data_root);
    }

    let manifest_path = category_dir.join(manifest::MANIFEST_FILE);
    if !store::path_exists(&manifest_path) {
        let timeout = Duration::from_secs(cfg.fetch_timeout_secs);
        match fetch::fetch_manifest(&cfg.manifest_url, &manifest_path, timeout) {
            Ok(FetchOutcome::Downloaded) => {
                tracing::info!("downloaded manifest from {}", cfg.manifest_url)
            }
            Ok(FetchOutcome::AlreadyPresent) => {}
            Err(e) => tracing::warn!("could not fetch manifest: {}", e),
        }
    }

    if !store::path_exists(&manifest_path) {
        tracing::warn!("manifest not cached and not fetched, writing fallback");
        if let Err(e) = manifest::write_fallback(&manifest_path) {
            tracing::error!("failed to write fallback manifest: {}", e);
            return VerificationReport::failed(data_root);
        }
    }

    let voices = match manifest::parse_manifest(&manifest_path) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("failed to read manifest {}: {}", manifest_path.display(), e);
            return VerificationReport::failed(data_root);
        }
    };

    let mut available = Vec::new();
    let mut unavailable = Vec::new();
    for voice in &voices {
        if voice_available(voice, data_root) {
            available.push(voice.name());
        } else {
            unavailable.push(voice.name());
        }
    }

    VerificationReport {
        outcome: Outcome::Pass,
        data_root: data_root.clone(),
        available,
        unavailable,
    }
}

/// True if the voice file exists under `data_root` and its MD5 matches the
/// manifest entry. The expected side is lowercased before comparing since
/// computed digests are canonical lowercase hex.
pub fn voice_available(voice: &VoiceDescriptor, data_root: &Path) -> bool {
    let path = voice.storage_path(data_root);
    tracing::debug!("checking voice file {}", path.display());
    let digest = match checksum::md5_path(&path) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("voice {} unavailable: {:#}", voice.name(), e);
            return false;
        }
    };
    if digest == voice.expected_md5.to_lowercase() {
        true
    } else {
        tracing::warn!(
            "voice {} found but checksum mismatch: computed {}, expected {}",
            voice.name(),
            digest,
            voice.expected_md5
        );
        false
    }
}
