use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::Settings;
use gamelist_lib::settings::settings_path;

use crate::CliError;

/// Show effective settings and the file they come from.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "gamelist Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    log::info!("  language      = {}", settings.language);
    log::info!("  format        = {}", settings.format);
    log::info!("  rom_extension = {}", settings.rom_extension);
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Write the effective settings, creating the file if needed.
pub(crate) fn run_config_init(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();
    settings
        .save_to(&path)
        .map_err(|e| CliError::config(format!("Failed to write {}: {e}", path.display())))?;
    log::info!(
        "Settings saved to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
