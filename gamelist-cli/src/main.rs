//! gamelist CLI
//!
//! Command-line interface for inspecting, filtering, converting and repairing
//! game list documents.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::Level;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{GameList, LoadOptions, Settings, StdFileSystem};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let settings = Settings::load();
    let quiet = cli.quiet;

    let result = match cli.command {
        Commands::Info { list, facets } => commands::info::run_info(&list, facets, &settings, quiet),
        Commands::Show { list, id, language } => {
            commands::show::run_show(&list, &id, language, &settings, quiet)
        }
        Commands::Filter {
            list,
            facets,
            output,
            export,
        } => commands::filter::run_filter(&list, &facets, output, &export, &settings, quiet),
        Commands::Convert {
            list,
            output,
            export,
        } => commands::convert::run_convert(&list, &output, &export, &settings, quiet),
        Commands::Remove {
            list,
            ids,
            output,
            export,
        } => commands::remove::run_remove(&list, &ids, output, &export, &settings, quiet),
        Commands::FixClones {
            list,
            dat,
            dry_run,
            output,
            export,
        } => commands::fix_clones::run_fix_clones(
            &list, &dat, dry_run, output, &export, &settings, quiet,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Init => commands::config::run_config_init(&settings),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Route `log` output to stdout. Info lines are printed bare so commands can
/// use `log::info!` for normal output; `--quiet` keeps only warnings and
/// errors, `--verbose` adds debug lines and timestamps.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                let ts = buf.timestamp_millis();
                write!(buf, "[{ts} {:5}] ", record.level())?;
            } else {
                match record.level() {
                    Level::Error => write!(
                        buf,
                        "{} ",
                        "error:".if_supports_color(Stdout, |t| t.red())
                    )?,
                    Level::Warn => write!(
                        buf,
                        "{} ",
                        "warning:".if_supports_color(Stdout, |t| t.yellow())
                    )?,
                    _ => {}
                }
            }
            writeln!(buf, "{}", record.args())
        })
        .init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Spinner shown while a document is parsed. Hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load a game list with a spinner.
pub(crate) fn load_list(
    path: &Path,
    options: &LoadOptions,
    quiet: bool,
) -> Result<GameList, CliError> {
    let pb = spinner(quiet, format!("Loading {}", path.display()));
    let result = GameList::load(path, options, &StdFileSystem);
    pb.finish_and_clear();
    Ok(result?)
}

/// Write a game list, logging the destination.
pub(crate) fn save_list(
    list: &GameList,
    path: &Path,
    language: &str,
    format: gamelist_lib::Format,
) -> Result<(), CliError> {
    list.save(path, language, format)?;
    log::info!(
        "Wrote {} games to {} ({})",
        list.len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        format,
    );
    Ok(())
}
