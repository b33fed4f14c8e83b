#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use life_core::{
    Config, DenseGrid, GameOfLife, Grid, LifeControl, LifeRunner, PackedGrid, Representation,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    info!(?config, "starting headless game of life");
    match config.representation {
        Representation::Dense => simulate::<DenseGrid>(&config).await,
        Representation::Packed => simulate::<PackedGrid>(&config).await,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

async fn simulate<G: Grid + Send + 'static>(config: &Config) -> Result<()> {
    let grid = G::random(config.width, config.height, config.seed, config.fill_rate)?;
    println!("{}", grid.dump());
    if config.generations == 0 {
        return Ok(());
    }

    let runner = LifeRunner::new(
        LifeControl::new(config.interval_ms),
        GameOfLife::from_grid(grid)?.into_shared(),
    );
    runner.set_grid_callback(|grid: &G| println!("{}", grid.dump()));
    let limit = config.generations;
    let control = runner.clone();
    runner.set_iteration_callback(move |iteration| {
        info!(iteration, "generation computed");
        if iteration >= limit {
            control.stop();
        }
    });
    runner.spawn().await?;

    let game = runner
        .game()
        .lock()
        .map_err(|_| anyhow!("game lock poisoned"))?;
    info!(
        iteration = game.iteration(),
        population = game.current().population(),
        "simulation finished"
    );
    Ok(())
}
