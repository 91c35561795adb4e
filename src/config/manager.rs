use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::notify::{DEFAULT_APP_NAME, DEFAULT_ICON, NotificationSettings, Urgency};
use crate::paths;
use crate::translation::{
    BackendSettings, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, DEFAULT_TRANSLATE_ENDPOINT,
    Mode,
};

/// Built-in known language.
pub const DEFAULT_KNOWN: &str = "en";

/// Built-in learn language.
pub const DEFAULT_LEARN: &str = "ko";

/// Default run settings in the `[tclip]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TclipConfig {
    /// The language you already know.
    pub known: Option<String>,
    /// The language you are learning.
    pub learn: Option<String>,
    /// Use the LLM backend by default.
    pub llm: Option<bool>,
    /// Prepend the original text to the translation by default.
    pub append: Option<bool>,
}

/// The `[notification]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationConfig {
    pub app_name: Option<String>,
    pub icon: Option<String>,
    pub urgency: Option<Urgency>,
}

/// The `[backends]` section. API keys are never read from here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendsConfig {
    pub translate_endpoint: Option<String>,
    pub gemini_endpoint: Option<String>,
    pub gemini_model: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tclip/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tclip: TclipConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub backends: BackendsConfig,
}

/// CLI values that take precedence over the config file.
///
/// `None` means the flag was not given; an explicit `Some(false)` still
/// overrides a `true` in the file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub known: Option<String>,
    pub learn: Option<String>,
    pub llm: Option<bool>,
    pub append: Option<bool>,
    pub list: bool,
}

/// Configuration after merging CLI options, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub known: String,
    pub learn: String,
    pub mode: Mode,
    pub append: bool,
    pub list: bool,
    pub backends: BackendSettings,
    pub notification: NotificationSettings,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let file = &config_file.tclip;

    let known = pick(options.known.as_ref(), file.known.as_ref(), DEFAULT_KNOWN);
    let learn = pick(options.learn.as_ref(), file.learn.as_ref(), DEFAULT_LEARN);
    let use_llm = options.llm.or(file.llm).unwrap_or(false);
    let append = options.append.or(file.append).unwrap_or(false);

    let backends = &config_file.backends;
    let notification = &config_file.notification;

    ResolvedConfig {
        known,
        learn,
        mode: Mode::from_llm_flag(use_llm),
        append,
        list: options.list,
        backends: BackendSettings {
            translate_endpoint: pick(
                None,
                backends.translate_endpoint.as_ref(),
                DEFAULT_TRANSLATE_ENDPOINT,
            ),
            gemini_endpoint: pick(None, backends.gemini_endpoint.as_ref(), DEFAULT_GEMINI_ENDPOINT),
            gemini_model: pick(None, backends.gemini_model.as_ref(), DEFAULT_GEMINI_MODEL),
        },
        notification: NotificationSettings {
            app_name: pick(None, notification.app_name.as_ref(), DEFAULT_APP_NAME),
            icon: pick(None, notification.icon.as_ref(), DEFAULT_ICON),
            urgency: notification.urgency.unwrap_or_default(),
        },
    }
}

fn pick(cli: Option<&String>, file: Option<&String>, default: &str) -> String {
    cli.or(file)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tclip/config.toml`
    /// or `~/.config/tclip/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as an empty config.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
