//! Setting Toggle host — entry point.
//!
//! Wires the JSON-file settings store to the toggle use case and exposes the
//! toggle commands on the command line.
//!
//! # Usage
//!
//! ```text
//! toggle-host [OPTIONS] <COMMAND>
//!
//! Commands:
//!   toggle  Runs a configured toggle command (primary, s1, s2)
//!   ref     Toggles an explicit setting reference
//!   status  Prints the status lines for visible toggle commands
//!
//! Options:
//!   --settings-path <FILE>  Settings document to operate on
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable               | Description                              |
//! |------------------------|------------------------------------------|
//! | `TOGGLE_SETTINGS_PATH` | Overrides the settings document location |
//! | `RUST_LOG`             | Overrides the configured log level       |
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ host_config::load_config()   -- host TOML config
//!  └─ JsonFileStore::open()        -- settings document
//!  └─ ToggleSettingUseCase         -- resolve + toggle + persist
//!  └─ status::status_lines()       -- presentation for `status`
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use toggle_host::application::store::SettingsStore;
use toggle_host::application::toggle_setting::{Toggled, ToggleError, ToggleSettingUseCase};
use toggle_host::application::{commands, status};
use toggle_host::infrastructure::host_config;
use toggle_host::infrastructure::settings_store::json_file::JsonFileStore;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Toggles user settings between two configured states.
#[derive(Debug, Parser)]
#[command(
    name = "toggle-host",
    about = "Toggle user settings between two configured states",
    version
)]
struct Cli {
    /// Settings document to operate on.
    ///
    /// Defaults to the `settings.json` in the platform config directory, or
    /// the `settings_path` entry of the host config file when set.
    #[arg(long, env = "TOGGLE_SETTINGS_PATH")]
    settings_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs a configured toggle command.
    Toggle {
        /// Command id: primary, s1, or s2.
        id: String,
    },
    /// Toggles an explicit setting reference, bypassing the title entries.
    Ref {
        /// Setting reference, e.g. "[python]editor.tabSize" or
        /// "myObjSetting[flags.enabled]".
        reference: String,
    },
    /// Prints the status lines for visible toggle commands.
    Status,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let host_cfg = host_config::load_config().context("failed to load host configuration")?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(host_cfg.general.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();

    // CLI flag wins over the host config; both fall back to the platform path.
    let settings_path = match cli.settings_path.or(host_cfg.general.settings_path.clone()) {
        Some(path) => path,
        None => JsonFileStore::default_settings_path()
            .context("failed to resolve the settings document location")?,
    };

    info!(path = %settings_path.display(), "Setting Toggle host starting");

    let store: Arc<dyn SettingsStore> = Arc::new(
        JsonFileStore::open(settings_path).context("failed to open the settings document")?,
    );

    match cli.command {
        Command::Toggle { id } => {
            let command = commands::find(&id)
                .with_context(|| format!("unknown toggle command '{id}' (expected primary, s1, or s2)"))?;
            let use_case = ToggleSettingUseCase::new(Arc::clone(&store));
            report(use_case.toggle_command(command).await)
        }
        Command::Ref { reference } => {
            let use_case = ToggleSettingUseCase::new(Arc::clone(&store));
            report(use_case.toggle_reference(&reference).await)
        }
        Command::Status => {
            for line in status::status_lines(store.as_ref(), &host_cfg.display.glyphs()) {
                println!("{}", line.text);
            }
            Ok(())
        }
    }
}

/// Prints a toggle outcome the way the user expects to read it.
///
/// Aborts are reported on stderr with a non-zero exit code; they are
/// expected outcomes, not crashes, so no backtrace-bearing error is
/// propagated.
fn report(outcome: Result<Toggled, ToggleError>) -> anyhow::Result<()> {
    match outcome {
        Ok(toggled) => {
            println!(
                "Setting Toggle '{}' changed to '{}'.",
                toggled.reference.display_key(),
                toggled.applied
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Setting Toggle: {e}.");
            std::process::exit(1);
        }
    }
}
