mod args;
mod render;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::debug;
use log::info;
use percolation::Percolation;
use percolation::RandomSource;
use percolation::SeededSource;

use crate::args::Args;
use crate::render::render;

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::new()
        .filter("PERCOLATION_LOG")
        .write_style("PERCOLATION_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    args.validate()?;
    debug!("running with {args:?}");

    let mut source = match args.seed {
        Some(seed) => SeededSource::seed_from_u64(seed),
        None => SeededSource::from_entropy(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let percolated = run_trials(&args, &mut source, &mut out)?;
    writeln!(
        out,
        "{percolated} of {} grids percolated ({:.2}%)",
        args.trials,
        percentage(percolated, args.trials)
    )?;
    Ok(())
}

/// Simulates `args.trials` grids, reporting each outcome to `out`, and
/// returns how many of them percolated.
fn run_trials<R: RandomSource, W: Write>(
    args: &Args,
    source: &mut R,
    out: &mut W,
) -> anyhow::Result<u32> {
    let mut percolated = 0;
    for trial in 0..args.trials {
        let p = match args.probability {
            Some(p) => p,
            None => source
                .uniform(args.min_probability, args.max_probability)
                .with_context(|| format!("failed to draw a probability for trial {trial}"))?,
        };

        let mut grid = Percolation::new(args.size)
            .with_context(|| format!("failed to create grid for trial {trial}"))?;
        grid.open_all(p, source)
            .with_context(|| format!("failed to fill grid for trial {trial}"))?;

        if args.render {
            write!(out, "{}", render(&grid))?;
        }
        let result = grid.percolates();
        if result {
            percolated += 1;
        }
        info!(
            "trial {trial}: {} open sites, percolates = {result}",
            grid.number_of_open_sites()
        );
        writeln!(out, "Percolation result is: {result} - the probability is: {p}")?;
    }
    Ok(percolated)
}

fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(count) / f64::from(total)
}
