//! Global output configuration and logging macros.
//!
//! tclip is usually bound to a hotkey, so the desktop notification is the
//! primary channel. Everything printed here is diagnostics:
//!
//! - Language listings go to stdout (for piping)
//! - Status lines (selected text, detected language, ...) go to stderr
//! - Errors always go to stderr
//! - Quiet mode suppresses status lines but never warnings or errors
//! - Colors can be disabled via the NO_COLOR environment variable

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Initialize the global output configuration.
///
/// Called once at startup with the CLI flags. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status line to stderr (respects quiet mode).
///
/// Used for the step-by-step trace of a run: selected text, detected
/// language, translated text.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!(
            "{} {}",
            $crate::ui::Style::warning("warning:"),
            format_args!($($arg)*)
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default_is_not_quiet() {
        let config = OutputConfig::default();
        assert!(!config.quiet);
    }

    #[test]
    fn test_output_config_default_follows_no_color() {
        let config = OutputConfig::default();
        assert_eq!(config.no_color, std::env::var_os("NO_COLOR").is_some());
    }
}
