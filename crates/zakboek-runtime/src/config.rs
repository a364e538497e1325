use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the zakboek data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ZAKBOEK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.zakboek (fallback for systems without XDG)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ZAKBOEK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("zakboek"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".zakboek"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workbook location; defaults to `ledger.csv` in the data directory.
    #[serde(default)]
    pub workbook: Option<PathBuf>,

    /// Hand-in source presets offered during registration.
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Label prefix stripped from scanned bag barcodes.
    #[serde(default = "default_barcode_prefix")]
    pub barcode_prefix: String,
}

fn default_sources() -> Vec<String> {
    vec!["Supermarkt".to_string()]
}

fn default_barcode_prefix() -> String {
    "1991571".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workbook: None,
            sources: default_sources(),
            barcode_prefix: default_barcode_prefix(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn workbook_path(&self, data_dir: &Path) -> PathBuf {
        self.workbook
            .clone()
            .unwrap_or_else(|| data_dir.join("ledger.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.workbook.is_none());
        assert_eq!(config.sources, vec!["Supermarkt".to_string()]);
        assert_eq!(config.barcode_prefix, "1991571");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.workbook = Some(PathBuf::from("/srv/zakboek/ledger.csv"));
        config.sources.push("Marktplein".to_string());

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.workbook.as_deref(),
            Some(Path::new("/srv/zakboek/ledger.csv"))
        );
        assert_eq!(loaded.sources.len(), 2);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config.barcode_prefix, "1991571");
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "sources = [\"Kantine\"]\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.sources, vec!["Kantine".to_string()]);
        assert_eq!(config.barcode_prefix, "1991571");
        assert!(config.workbook.is_none());
        Ok(())
    }

    #[test]
    fn test_workbook_path_default() {
        let config = Config::default();
        assert_eq!(
            config.workbook_path(Path::new("/data/zakboek")),
            PathBuf::from("/data/zakboek/ledger.csv")
        );
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = resolve_data_path(Some("/tmp/zb")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/zb"));
    }
}
