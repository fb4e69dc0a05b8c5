use serde::{Deserialize, Serialize};

/// How the repository reports observer failures after a mutation.
///
/// Both policies deliver every event to every registered observer; they
/// only differ in what the mutating call returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPolicy {
    /// Return [`StoreError::Notification`](crate::StoreError::Notification)
    /// listing every failure.
    #[default]
    Report,
    /// Log failures and return `Ok(())`.
    LogOnly,
}

/// Configuration for a [`Repository`](crate::Repository).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Label attached to every log event emitted by the repository.
    pub label: String,
    /// Observer failure reporting.
    pub notification_policy: NotificationPolicy,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            label: "shapes".into(),
            notification_policy: NotificationPolicy::Report,
        }
    }
}

impl RepositoryConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reports_failures() {
        let config = RepositoryConfig::default();
        assert_eq!(config.label, "shapes");
        assert_eq!(config.notification_policy, NotificationPolicy::Report);
    }

    #[test]
    fn parses_partial_toml() {
        let config: RepositoryConfig =
            toml::from_str("notification_policy = \"log-only\"").unwrap();
        assert_eq!(config.notification_policy, NotificationPolicy::LogOnly);
        assert_eq!(config.label, "shapes");
    }

    #[test]
    fn labeled_keeps_default_policy() {
        let config = RepositoryConfig::labeled("cones");
        assert_eq!(config.label, "cones");
        assert_eq!(config.notification_policy, NotificationPolicy::Report);
    }
}
