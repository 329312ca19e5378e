// Text driver: prints a snapshot of the board every generation.

use std::error::Error;
use std::thread;
use std::time::Instant;

use log::{error, info};

use toroidal_life::auxiliary::{entropy_rng, seeded_rng, Settings};
use toroidal_life::Board;

fn run(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let mut rng = match settings.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };
    let mut board = Board::new_random(settings.width, settings.height, &mut rng)?;
    info!(
        "{}x{} board, {} live cells, running {} generations",
        board.width(),
        board.height(),
        board.live_count(),
        settings.generations
    );
    println!("{}", board);

    let interval = settings.frame_interval();
    for _ in 0..settings.generations {
        let started = Instant::now();
        board.step();
        println!("\n{}", board);
        if let Some(rest) = interval.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
    info!(
        "stopped at generation {} with {} live cells",
        board.generation(),
        board.live_count()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let settings = Settings::from_args(std::env::args().skip(1))?;
    run(&settings).map_err(|e| {
        error!("simulation failed: {}", e);
        e
    })
}
