mod assets;
mod audio;
mod input;
mod renderer;
mod settings;

use anyhow::{Context, Result};
use game_core::{Board, Config as GameConfig, Session};
use log::{error, info};
use macroquad::prelude::*;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use assets::Assets;
use settings::Settings;

fn window_conf() -> Conf {
    Conf {
        window_title: "Exciting Snake Game".to_owned(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    macroquad::Window::from_config(window_conf(), app());
}

async fn app() {
    if let Err(err) = run().await {
        error!("{:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env().context("Failed to read settings")?;

    TermLogger::init(
        settings.log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialise logger")?;

    let seed = settings.seed_or_random();
    info!("Starting snake with seed {}", seed);

    let assets = Assets::load(&settings.asset_dir).await;
    let mut session = Session::new(GameConfig::new(), current_board(), seed);

    loop {
        session.set_board(current_board());
        session.update(get_frame_time(), input::poll());

        let events = session.drain_events();
        audio::play_cues(&assets, &events);

        if session.is_finished() {
            break;
        }

        renderer::draw(&session, &assets);
        next_frame().await;
    }

    info!("Exiting with score {}", session.score.apples);
    Ok(())
}

fn current_board() -> Board {
    Board::new(screen_width(), screen_height())
}
