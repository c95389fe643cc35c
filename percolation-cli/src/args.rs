use anyhow::ensure;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Number of rows and columns of each grid
    #[arg(short = 'n', long, default_value_t = 10)]
    pub(crate) size: i32,

    /// Number of grids to simulate
    #[arg(short, long, default_value_t = 10)]
    pub(crate) trials: u32,

    /// Lower bound of the range each trial draws its probability from
    #[arg(long, default_value_t = 0.10)]
    pub(crate) min_probability: f64,

    /// Upper bound (exclusive) of the probability range
    #[arg(long, default_value_t = 0.99)]
    pub(crate) max_probability: f64,

    /// Use this probability for every trial instead of drawing one
    #[arg(short, long)]
    pub(crate) probability: Option<f64>,

    /// Seed for reproducible runs
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Print each grid after filling it
    #[arg(long)]
    pub(crate) render: bool,
}

impl Args {
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.size >= 1, "grid size must be at least 1, got {}", self.size);
        match self.probability {
            Some(p) => ensure!((0.0..=1.0).contains(&p), "probability {p} is outside [0, 1]"),
            None => {
                ensure!(
                    (0.0..=1.0).contains(&self.min_probability)
                        && (0.0..=1.0).contains(&self.max_probability),
                    "probability range must lie within [0, 1]"
                );
                ensure!(
                    self.min_probability < self.max_probability,
                    "min probability {} must be below max probability {}",
                    self.min_probability,
                    self.max_probability
                );
            }
        }
        Ok(())
    }
}
