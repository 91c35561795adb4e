//! Desktop notifications.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default application name shown by the notification daemon.
pub const DEFAULT_APP_NAME: &str = "TClip";

/// Default notification icon.
pub const DEFAULT_ICON: &str =
    "/usr/share/icons/hicolor/scalable/apps/org.gnome.Settings-region-symbolic.svg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

pub trait Notifier {
    fn push(&mut self, notice: &Notice) -> Result<()>;
}

/// Presentation settings applied to every notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub app_name: String,
    /// Icon path or freedesktop icon name; empty means no icon.
    pub icon: String,
    pub urgency: Urgency,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            icon: DEFAULT_ICON.to_string(),
            urgency: Urgency::Normal,
        }
    }
}

/// Sends notifications to the desktop notification daemon.
#[derive(Debug, Clone, Default)]
pub struct DesktopNotifier {
    settings: NotificationSettings,
}

impl DesktopNotifier {
    pub const fn new(settings: NotificationSettings) -> Self {
        Self { settings }
    }
}

impl Notifier for DesktopNotifier {
    fn push(&mut self, notice: &Notice) -> Result<()> {
        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&self.settings.app_name)
            .summary(&notice.title)
            .body(&notice.body);
        if !self.settings.icon.is_empty() {
            notification.icon(&self.settings.icon);
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        notification.urgency(self.settings.urgency.into());

        notification
            .show()
            .map(|_| ())
            .with_context(|| format!("Failed to show notification '{}'", notice.title))
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
impl From<Urgency> for notify_rust::Urgency {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Low => Self::Low,
            Urgency::Normal => Self::Normal,
            Urgency::Critical => Self::Critical,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        urgency: Urgency,
    }

    #[test]
    fn test_urgency_parses_lowercase() {
        let w: Wrapper = toml::from_str(r#"urgency = "critical""#).unwrap();
        assert_eq!(w.urgency, Urgency::Critical);
        assert!(toml::from_str::<Wrapper>(r#"urgency = "urgent""#).is_err());
    }

    #[test]
    fn test_default_settings() {
        let settings = NotificationSettings::default();
        assert_eq!(settings.app_name, "TClip");
        assert_eq!(settings.urgency, Urgency::Normal);
        assert!(settings.icon.ends_with(".svg"));
    }
}
