//! Snake entry point

use std::process::ExitCode;

use tile_arcade::Settings;
use tile_arcade::games::SnakeGame;
use tile_arcade::harness;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Snake starting...");

    let result = Settings::load()
        .and_then(|settings| harness::run(SnakeGame::from_settings(&settings), &settings));
    harness::finish(result)
}
