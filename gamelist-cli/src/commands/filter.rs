use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::Settings;

use crate::CliError;
use crate::cli_types::{ExportArgs, FacetArgs, ListArgs};

/// Run the filter command.
pub(crate) fn run_filter(
    args: &ListArgs,
    facets: &FacetArgs,
    output: Option<PathBuf>,
    export: &ExportArgs,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    if facets.available && args.roms.is_none() {
        log::warn!("--available without --roms matches nothing");
    }

    let list = crate::load_list(&args.gamelist, &args.load_options(settings), quiet)?;
    let filtered = list.filter(&facets.to_filter());

    log::debug!("{} of {} games match", filtered.len(), list.len());

    if let Some(output) = output {
        return crate::save_list(
            &filtered,
            &output,
            &export.language(settings),
            export.format(settings),
        );
    }

    for game in filtered.games() {
        log::info!(
            "{:>8}  {}  {}",
            game.rom_id.if_supports_color(Stdout, |t| t.dimmed()),
            game.name(),
            game.path.if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    crate::log_blank();
    log::info!("{} of {} games", filtered.len(), list.len());

    Ok(())
}
