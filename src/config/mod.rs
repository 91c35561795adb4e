//! Configuration file management.

mod manager;

pub use manager::{
    BackendsConfig, ConfigFile, ConfigManager, NotificationConfig, ResolveOptions,
    ResolvedConfig, TclipConfig, resolve_config,
};
