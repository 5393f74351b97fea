//! Voice identity and on-disk layout.

use std::path::{Path, PathBuf};

/// Subdirectory under the data root holding all clustergen voice files.
pub const VOICE_CATEGORY: &str = "cg";

/// File extension of an installed clustergen voice.
pub const VOICE_FILE_EXT: &str = "cg.flitevox";

/// One expected voice from the manifest: identity plus integrity checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub language: String,
    pub region: String,
    pub variant: String,
    /// Expected MD5 of the installed voice file, hex. Compared
    /// case-insensitively against the computed (lowercase) digest.
    pub expected_md5: String,
}

impl VoiceDescriptor {
    /// Canonical `language-region-variant` name used in manifests and reports.
    pub fn name(&self) -> String {
        format!("{}-{}-{}", self.language, self.region, self.variant)
    }

    /// Where the voice file lives under `data_root`:
    /// `<data_root>/cg/<language>/<region>/<variant>.cg.flitevox`.
    pub fn storage_path(&self, data_root: &Path) -> PathBuf {
        data_root
            .join(VOICE_CATEGORY)
            .join(&self.language)
            .join(&self.region)
            .join(format!("{}.{}", self.variant, VOICE_FILE_EXT))
    }
}
