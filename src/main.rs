//! swatch - theme preset switcher for the design system
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swatch::app::config::{default_config_path, init_config_file, load_settings};
use swatch::commands::{self, ApplyOptions, Context};
use swatch::headless::HeadlessEvent;

/// swatch - switch the design system's color theme
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(about = "Apply named color presets as CSS custom properties", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config dir)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Print NDJSON events instead of CSS
    #[arg(long, global = true)]
    json: bool,

    /// Log to stderr instead of the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in presets
    List,
    /// Print the saved theme id
    Current,
    /// Apply a theme
    Apply {
        /// Theme id, e.g. coastal-sage
        theme_id: String,
        /// Remember this theme for `init`
        #[arg(long)]
        save: bool,
        /// Stylesheet to update in place
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Apply the saved theme
    Init {
        /// Stylesheet to update in place
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show a preset and its design tokens as JSON
    Show {
        theme_id: String,
    },
    /// List the UI prop enumerations
    Props,
    /// Write a default config.toml if none exists
    InitConfig,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.verbose {
        swatch::core::logging::init_stderr();
    } else if let Err(e) = swatch::core::logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let settings = load_settings(&config_path);
    let mut ctx = Context::from_settings(&settings, args.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.command {
        Command::List => commands::list(&ctx, &mut out),
        Command::Current => commands::current(&ctx, &mut out),
        Command::Apply {
            theme_id,
            save,
            out: stylesheet,
        } => commands::apply(
            &mut ctx,
            &theme_id,
            &ApplyOptions { save, stylesheet },
            &mut out,
        ),
        Command::Init { out: stylesheet } => commands::init(
            &mut ctx,
            &ApplyOptions {
                save: false,
                stylesheet,
            },
            &mut out,
        ),
        Command::Show { theme_id } => commands::show(&theme_id, &mut out),
        Command::Props => commands::props(&mut out),
        Command::InitConfig => match init_config_file(&config_path) {
            Ok(true) => writeln!(out, "Created {}", config_path.display()).map_err(Into::into),
            Ok(false) => writeln!(out, "{} already exists", config_path.display())
                .map_err(Into::into),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        if args.json {
            if let Err(write_err) = HeadlessEvent::error(e.to_string(), true).write_to(&mut out) {
                tracing::warn!("Failed to write error event: {}", write_err);
            }
        }
        return Err(e.into());
    }

    out.flush()?;
    Ok(())
}
