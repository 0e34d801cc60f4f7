use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::Settings;

use crate::CliError;
use crate::cli_types::{ExportArgs, ListArgs};

/// Run the remove command. Unknown ids are reported and skipped.
pub(crate) fn run_remove(
    args: &ListArgs,
    ids: &[String],
    output: Option<PathBuf>,
    export: &ExportArgs,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let mut list = crate::load_list(&args.gamelist, &args.load_options(settings), quiet)?;

    let mut removed = 0usize;
    for rom_id in ids {
        let Some(name) = list.find(rom_id).map(|g| g.name().to_string()) else {
            log::warn!("No game with rom id '{rom_id}'");
            continue;
        };
        list.remove(rom_id);
        log::info!(
            "  {} {} ({})",
            "Removed".if_supports_color(Stdout, |t| t.green()),
            name,
            rom_id
        );
        removed += 1;
    }

    if removed == 0 {
        log::info!("Nothing removed");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| args.gamelist.clone());
    crate::save_list(
        &list,
        &output,
        &export.language(settings),
        export.format.unwrap_or(list.format),
    )
}
