//! Terminal driver animating a Game of Life field.
//!
//! Usage: `life-cli [pattern|random] [width] [height] [epochs] [delay_ms] [probability] [seed]`

mod telemetry;

use anyhow::{bail, Result};
use life_core::{FieldConfig, RunConfig};
use life_world::{patterns, Field};
use std::thread;
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).cloned().unwrap_or_else(|| "gun".to_string());

    let field_defaults = FieldConfig::default();
    let field_config = FieldConfig {
        width: args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(field_defaults.width),
        height: args
            .get(3)
            .and_then(|s| s.parse().ok())
            .unwrap_or(field_defaults.height),
    };

    let run_defaults = RunConfig::default();
    let run_config = RunConfig {
        epochs: args.get(4).and_then(|s| s.parse().ok()),
        delay_ms: args
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(run_defaults.delay_ms),
        alive_probability: args
            .get(6)
            .and_then(|s| s.parse().ok())
            .unwrap_or(run_defaults.alive_probability),
        seed: args.get(7).and_then(|s| s.parse().ok()),
    };

    let mut field = Field::from_config(&field_config)?;
    match mode.as_str() {
        "random" => field.randomize(run_config.alive_probability, run_config.seed)?,
        name => match patterns::lookup(name) {
            Some(pattern) => field.set_pattern(pattern, 0, 0),
            None => bail!("unknown pattern: {name} (try glider, pulsar, gun or random)"),
        },
    }

    info!(
        mode = %mode,
        width = field.width(),
        height = field.height(),
        population = field.population(),
        "starting simulation"
    );

    run(&mut field, &run_config);
    Ok(())
}

/// Render, update, wait. Pacing lives here, not in the core.
fn run(field: &mut Field, config: &RunConfig) {
    let delay = Duration::from_millis(config.delay_ms);
    let mut epoch: u64 = 0;

    loop {
        println!("{field}");

        if config.epochs.is_some_and(|limit| epoch >= limit) {
            break;
        }

        field.update();
        epoch += 1;

        if epoch % 100 == 0 {
            info!(epoch, population = field.population(), "epoch milestone");
        }

        thread::sleep(delay);
    }

    info!(epoch, population = field.population(), "simulation finished");
}
