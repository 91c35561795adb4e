use anyhow::Result;

use crate::cli::Args;
use crate::clipboard::SystemClipboard;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::status;
use crate::notify::DesktopNotifier;
use crate::orchestrator::{Orchestrator, Outcome, RunOptions};
use crate::translation::{Backend, api_key_from_env, print_languages, validate_language};

/// Merges the CLI flags with the config file and checks the language codes.
pub fn load_config(args: &Args) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let options = ResolveOptions {
        known: args.known.clone(),
        learn: args.learn.clone(),
        llm: args.llm,
        append: args.append,
        list: args.wants_list(),
    };
    let config = resolve_config(&options, &file_config);

    validate_language(&config.known)?;
    validate_language(&config.learn)?;

    Ok(config)
}

/// Translates the current selection using the real clipboard, notifier and
/// backend.
pub async fn run_translate(config: ResolvedConfig) -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        SystemClipboard::new(),
        DesktopNotifier::new(config.notification.clone()),
        RunOptions::from(&config),
    );

    let settings = &config.backends;
    let outcome = orchestrator
        .run(|mode| Backend::connect(mode, settings, api_key_from_env(mode)))
        .await?;

    match outcome {
        Outcome::Languages(languages) => print_languages(&languages),
        Outcome::EmptyClipboard | Outcome::ClipboardUnreadable => {
            status!("Nothing to translate");
        }
        Outcome::Translated { .. } => {}
    }

    Ok(())
}
