//! Manifest parsing and the synthetic fallback.
//!
//! A manifest is plain text, one voice per line, two tab-separated fields:
//! `language-region-variant\tchecksumHex`.

mod parse;

pub use parse::parse_line;

use crate::voice::VoiceDescriptor;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Manifest file name under the voice category directory.
pub const MANIFEST_FILE: &str = "voices.list";

/// Single entry written when no manifest can be fetched and none is cached.
/// The checksum field is a placeholder that can never match a real digest,
/// so the entry always classifies as unavailable and downstream consumers
/// can offer to install it.
pub const FALLBACK_LINE: &str = "eng-USA-male\trms";

/// Read and parse a manifest file.
///
/// A read failure is returned to the caller (fatal to a verification run).
/// Malformed lines are skipped with a diagnostic; one bad line never aborts
/// the rest. Duplicate names are kept and verified independently.
pub fn parse_manifest(path: &Path) -> std::io::Result<Vec<VoiceDescriptor>> {
    let data = fs::read_to_string(path)?;
    let mut voices = Vec::new();
    for line in data.lines() {
        match parse_line(line) {
            Some(v) => voices.push(v),
            None => tracing::warn!(line, "skipping malformed manifest line"),
        }
    }
    Ok(voices)
}

/// Write the synthetic one-entry fallback manifest.
///
/// Used when the remote fetch failed and nothing is cached: parsing an empty
/// manifest would be indistinguishable from successfully verifying nothing.
/// Write failure is fatal to the run.
pub fn write_fallback(path: &Path) -> std::io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(FALLBACK_LINE.as_bytes())?;
    f.write_all(b"\n")?;
    Ok(())
}
