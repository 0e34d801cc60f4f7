use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{Game, Settings};

use crate::CliError;
use crate::cli_types::ListArgs;

/// Run the show command.
pub(crate) fn run_show(
    args: &ListArgs,
    rom_id: &str,
    language: Option<String>,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let list = crate::load_list(&args.gamelist, &args.load_options(settings), quiet)?;
    let language = language.unwrap_or_else(|| settings.language.clone());

    let game = list.find(rom_id).ok_or_else(|| CliError::not_found(rom_id))?;
    print_game(game, &language, list.rom_dir.is_some());
    Ok(())
}

fn print_game(game: &Game, language: &str, show_available: bool) {
    log::info!("{}", game.name().if_supports_color(Stdout, |t| t.bold()));

    let fields = [
        ("Rom id", game.rom_id.as_str()),
        ("Game id", game.id.as_str()),
        ("Path", game.path.as_str()),
        ("Clone of", game.clone_of.as_str()),
        ("System", game.system.text.as_str()),
        ("Editor", game.editor.text.as_str()),
        ("Developer", game.developer.text.as_str()),
        ("Date", game.date()),
        ("Genre", game.genre(language)),
        ("Players", game.players.as_str()),
        ("Rating", game.rating.as_str()),
        ("Top staff", game.topstaff.as_str()),
        ("Rotation", game.rotation.as_str()),
        ("Resolution", game.resolution.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            log::info!(
                "  {:<11} {}",
                format!("{label}:").if_supports_color(Stdout, |t| t.dimmed()),
                value
            );
        }
    }

    if game.not_game {
        log::info!("  {}", "Not a game".if_supports_color(Stdout, |t| t.yellow()));
    }
    if show_available {
        let status = if game.available { "yes" } else { "no" };
        log::info!("  {:<11} {}", "Available:", status);
    }

    if !game.medias.is_empty() {
        log::info!("  Media:");
        for media in &game.medias {
            log::info!(
                "    {:<10} {:<4} {}",
                media.media_type,
                media.region,
                media.export_path(&game.path)
            );
        }
    }

    let synopsis = game.synopsis(language);
    if !synopsis.is_empty() {
        crate::log_blank();
        log::info!("{synopsis}");
    }
}
