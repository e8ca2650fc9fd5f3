//! Pong entry point

use std::process::ExitCode;

use tile_arcade::Settings;
use tile_arcade::games::PongGame;
use tile_arcade::harness;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong starting...");

    let result = Settings::load().and_then(|settings| harness::run(PongGame::new(), &settings));
    harness::finish(result)
}
