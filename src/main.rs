//! file: main.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:31 Sunday
//! brief: entry point

mod app;
mod view;

use anyhow::Context;
use astar_snake::{
    Settings, logging,
    game::RandomPlacer,
    score::{FileHighScoreStore, HighScoreStore},
};

fn main() -> anyhow::Result<()> {
    logging::init();

    let settings = Settings::load(None).context("loading settings")?;
    let store = FileHighScoreStore::new(&settings.storage.high_score_path);
    tracing::info!(
        cols = settings.grid.cols,
        rows = settings.grid.rows,
        high_score = store.load(),
        "starting"
    );

    let placer = match settings.seed {
        Some(seed) => RandomPlacer::seeded(seed),
        None => RandomPlacer::from_entropy(),
    };

    app::run(settings, Box::new(placer), Box::new(store));
    Ok(())
}
