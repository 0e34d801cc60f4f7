use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{CloneReport, Settings};

use crate::CliError;
use crate::cli_types::{ExportArgs, ListArgs};

/// Run the fix-clones command.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_fix_clones(
    args: &ListArgs,
    dat_path: &Path,
    dry_run: bool,
    output: Option<PathBuf>,
    export: &ExportArgs,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let mut list = crate::load_list(&args.gamelist, &args.load_options(settings), quiet)?;

    let pb = crate::spinner(quiet, format!("Reading {}", dat_path.display()));
    let dat = gamelist_dat::parse_dat_file(dat_path);
    pb.finish_and_clear();
    let dat = dat?;

    log::info!(
        "Reference: {} ({} games)",
        dat.name.if_supports_color(Stdout, |t| t.cyan()),
        dat.games.len(),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be modified".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let report = list.fix_clones_with(&dat, &args.rom_extension(settings));
    print_report(&report);

    if dry_run || report.fixed.is_empty() {
        return Ok(());
    }

    crate::log_blank();
    let output = output.unwrap_or_else(|| args.gamelist.clone());
    crate::save_list(
        &list,
        &output,
        &export.language(settings),
        export.format.unwrap_or(list.format),
    )
}

fn print_report(report: &CloneReport) {
    log::info!(
        "{}",
        "Clone repair summary".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Checked:          {}", report.total_checked());
    log::info!(
        "  Fixed:            {}",
        report.fixed.len().if_supports_color(Stdout, |t| t.green()),
    );
    if !report.inconsistent.is_empty() {
        log::info!(
            "  Inconsistent:     {}",
            report.inconsistent.len().if_supports_color(Stdout, |t| t.red()),
        );
    }
    log::info!("  Not a clone:      {}", report.not_a_clone);
    log::info!("  Not in reference: {}", report.not_in_reference);
    log::info!("  Parent missing:   {}", report.parent_missing);
}
