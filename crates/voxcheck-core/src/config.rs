use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Remote manifest published alongside the packaged voices.
pub const DEFAULT_MANIFEST_URL: &str =
    "http://tts.speech.cs.cmu.edu/android/vox-flite-1.5.6/voices.list?q=1";

/// Global configuration loaded from `~/.config/voxcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Root directory holding voice data (`<data_root>/cg/...`). Carried
    /// explicitly so tests can point a run at a temporary directory.
    pub data_root: PathBuf,
    /// URL of the published voices.list manifest.
    pub manifest_url: String,
    /// Total timeout for the manifest fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// `<XDG data home>/voxcheck/flite-data`, the install target for voices.
fn default_data_root() -> PathBuf {
    match xdg::BaseDirectories::with_prefix("voxcheck") {
        Ok(dirs) => dirs.get_data_home().join("flite-data"),
        Err(_) => PathBuf::from("flite-data"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("voxcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CheckConfig::default();
        assert_eq!(cfg.manifest_url, DEFAULT_MANIFEST_URL);
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert!(cfg.data_root.ends_with("flite-data"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CheckConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CheckConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.data_root, cfg.data_root);
        assert_eq!(parsed.manifest_url, cfg.manifest_url);
        assert_eq!(parsed.fetch_timeout_secs, cfg.fetch_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            data_root = "/srv/voices"
            manifest_url = "http://mirror.example.org/voices.list"
            fetch_timeout_secs = 5
        "#;
        let cfg: CheckConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.data_root, PathBuf::from("/srv/voices"));
        assert_eq!(cfg.manifest_url, "http://mirror.example.org/voices.list");
        assert_eq!(cfg.fetch_timeout_secs, 5);
    }

    #[test]
    fn config_toml_timeout_defaults_when_absent() {
        let toml = r#"
            data_root = "/srv/voices"
            manifest_url = "http://mirror.example.org/voices.list"
        "#;
        let cfg: CheckConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fetch_timeout_secs, 30);
    }
}
