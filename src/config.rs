use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file used when neither the CLI nor a config file names one
pub const DEFAULT_DATABASE: &str = "mydatabase.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TeachersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("teachers.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TeachersConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TeachersConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TeachersConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Pick the database path: explicit flag, then config file, then the default
/// relative to the working directory
pub fn resolve_database(flag: Option<&Path>, config: Option<&TeachersConfig>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    config
        .and_then(|c| c.database.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teachers.toml");
        let config = TeachersConfig {
            database: Some("data/school.db".into()),
        };

        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &TeachersConfig::default(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(TeachersConfig::default()));
    }

    #[test]
    fn test_resolve_database_precedence() {
        let config = TeachersConfig {
            database: Some("from_config.db".into()),
        };

        assert_eq!(
            resolve_database(Some(Path::new("flag.db")), Some(&config)),
            PathBuf::from("flag.db")
        );
        assert_eq!(resolve_database(None, Some(&config)), PathBuf::from("from_config.db"));
        assert_eq!(
            resolve_database(None, Some(&TeachersConfig::default())),
            PathBuf::from(DEFAULT_DATABASE)
        );
        assert_eq!(resolve_database(None, None), PathBuf::from(DEFAULT_DATABASE));
    }
}
