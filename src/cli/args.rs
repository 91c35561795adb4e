use std::ffi::OsString;

use clap::Parser;
use clap::builder::BoolishValueParser;

use crate::clipboard::Selection;

#[derive(Parser, Debug)]
#[command(name = "tclip")]
#[command(about = "Translate the selected text and copy the translation to the clipboard")]
#[command(version)]
pub struct Args {
    /// The language you already know (default: en)
    #[arg(short = 'k', long = "known", value_name = "CODE")]
    pub known: Option<String>,

    /// The language you are learning (default: ko)
    #[arg(short = 'l', long = "learn", value_name = "CODE")]
    pub learn: Option<String>,

    /// Use an LLM for translation (`--llm=false` overrides the config file)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub llm: Option<bool>,

    /// Append the translation to the original text
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub append: Option<bool>,

    /// List all possible language codes
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub list: Option<bool>,

    /// Suppress status output on stderr
    #[arg(short = 'q', long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub quiet: Option<bool>,

    /// Serve text from stdin on the given selection until replaced
    #[arg(long, value_name = "SELECTION", hide = true)]
    pub clipboard_daemon: Option<Selection>,
}

impl Args {
    /// Parses the process arguments, accepting single-dash long flags.
    pub fn parse_env() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }

    pub fn wants_list(&self) -> bool {
        self.list.unwrap_or(false)
    }
}

/// Boolean flags that may be spelled with a single dash (`-llm`).
const LEGACY_FLAGS: &[&str] = &["llm", "append", "list", "quiet"];

/// Rewrites Go-style single-dash long flags into clap's double-dash form.
///
/// `-llm` becomes `--llm` and `-llm=false` becomes `--llm=false`, so an
/// explicit `false` still overrides the config file.
/// Everything after a `--` terminator is passed through untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg = arg.into();
        if passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        match arg.to_str().and_then(legacy_flag) {
            Some(flag) => normalized.push(flag.into()),
            None => normalized.push(arg),
        }
    }

    normalized
}

fn legacy_flag(arg: &str) -> Option<String> {
    let flag = arg.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);

    LEGACY_FLAGS.contains(&name).then(|| format!("--{flag}"))
}
