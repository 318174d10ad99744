use knightfall::config::GameConfig;
use knightfall::game::Game;
use knightfall::save::SaveManager;
use knightfall::{frontend, logging};
use log::{error, info};
use std::process::ExitCode;

const CONFIG_PATH: &str = "assets/config/game.json";

fn run() -> Result<(), String> {
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    logging::init(verbose);

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let saves = SaveManager::new(SaveManager::default_directory()).map_err(|e| e.to_string())?;
    info!("Saves in {}", saves.directory().display());

    let mut game = Game::new(config, saves);
    frontend::run(&mut game)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("knightfall: {}", e);
            ExitCode::FAILURE
        }
    }
}
