use anyhow::Result;

use tclip::cli::commands::translate;
use tclip::cli::{Args, exit_code};
use tclip::clipboard;
use tclip::output::{self, OutputConfig};
use tclip::ui::Style;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_env();

    if let Some(selection) = args.clipboard_daemon {
        if let Err(err) = clipboard::serve_daemon(selection) {
            std::process::exit(exit_code(&anyhow::Error::new(err)));
        }
        return;
    }

    output::init(OutputConfig {
        quiet: args.is_quiet(),
        ..OutputConfig::default()
    });

    if let Err(err) = run(&args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = translate::load_config(args)?;
    translate::run_translate(config).await
}
