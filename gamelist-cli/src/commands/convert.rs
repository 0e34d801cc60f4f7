use std::path::Path;

use gamelist_lib::Settings;

use crate::CliError;
use crate::cli_types::{ExportArgs, ListArgs};

/// Run the convert command.
pub(crate) fn run_convert(
    args: &ListArgs,
    output: &Path,
    export: &ExportArgs,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let list = crate::load_list(&args.gamelist, &args.load_options(settings), quiet)?;
    let format = export.format(settings);
    log::info!("Converting {} ({} → {})", args.gamelist.display(), list.format, format);
    crate::save_list(&list, output, &export.language(settings), format)
}
