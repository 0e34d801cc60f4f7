use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{Facet, Settings, WILDCARD};

use crate::CliError;
use crate::cli_types::ListArgs;

/// Run the info command.
pub(crate) fn run_info(
    args: &ListArgs,
    show_facets: bool,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let list = crate::load_list(&args.gamelist, &args.load_options(settings), quiet)?;

    let clones = list.games().iter().filter(|g| g.is_clone()).count();

    log::info!(
        "{}",
        args.gamelist
            .display()
            .if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Format:    {}", list.format);
    log::info!("  Games:     {}", list.len());
    log::info!("  Clones:    {}", clones);
    if list.rom_dir.is_some() {
        log::info!(
            "  Available: {}",
            list.available_count()
                .if_supports_color(Stdout, |t| t.green()),
        );
    }
    crate::log_blank();

    for facet in Facet::ALL {
        let values: Vec<&str> = list
            .facet_values(facet)
            .iter()
            .map(String::as_str)
            .filter(|v| *v != WILDCARD)
            .collect();

        log::info!(
            "  {:<11} {} values",
            facet.if_supports_color(Stdout, |t| t.cyan()),
            values.len(),
        );
        if show_facets {
            for value in values {
                let value = if value.is_empty() { "(none)" } else { value };
                log::info!("    {value}");
            }
        }
    }

    Ok(())
}
