#![warn(clippy::all)]

use std::cell::Cell;
use std::rc::Rc;

use torus_life::{svg_path_data, Config, GameOfLife, LogEvent};

const MAX_GENERATIONS: u64 = 256;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("torus_life=debug")
        .init();

    let mut game = GameOfLife::new(Config::DEFAULT_WIDTH, Config::DEFAULT_HEIGHT, false)
        .expect("default dimensions are positive");

    game.on_game_over(|| tracing::info!("game over"));

    let stop = game.stop_handle();
    let generations = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&generations);
    game.on_log(move |event| {
        tracing::debug!(
            label = event.label,
            interval_ms = event.interval_ms() as u64,
            "timed operation"
        );
        if event.label == LogEvent::GENERATION {
            counter.set(counter.get() + 1);
            if counter.get() >= MAX_GENERATIONS {
                stop.stop();
            }
        }
    });

    game.fill_random();
    game.start();

    tracing::info!(
        generations = generations.get(),
        population = game.grid().population(),
        path_bytes = svg_path_data(&game.render_commands()).len(),
        "simulation finished"
    );
}
