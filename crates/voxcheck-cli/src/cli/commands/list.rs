//! List command: print the voices the cached manifest expects.

use anyhow::{Context, Result};
use voxcheck_core::config::CheckConfig;
use voxcheck_core::manifest;
use voxcheck_core::voice::VOICE_CATEGORY;

/// Print each parsed manifest entry as `checksum  name`, manifest order.
pub fn run_list(cfg: &CheckConfig) -> Result<()> {
    let manifest_path = cfg
        .data_root
        .join(VOICE_CATEGORY)
        .join(manifest::MANIFEST_FILE);
    let voices = manifest::parse_manifest(&manifest_path)
        .with_context(|| format!("read manifest {}", manifest_path.display()))?;
    for v in &voices {
        println!("{}  {}", v.expected_md5, v.name());
    }
    Ok(())
}
