use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shapevault_store::RepositoryConfig;

/// Settings read from `--config`.
///
/// ```toml
/// [repository]
/// label = "catalog"
/// notification_policy = "log-only"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub repository: RepositoryConfig,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use shapevault_store::NotificationPolicy;

    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn reads_repository_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shapevault.toml");
        std::fs::write(
            &path,
            "[repository]\nlabel = \"catalog\"\nnotification_policy = \"log-only\"\n",
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.repository.label, "catalog");
        assert_eq!(
            config.repository.notification_policy,
            NotificationPolicy::LogOnly
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "repository = 3").unwrap();
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}
