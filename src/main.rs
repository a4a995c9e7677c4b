use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use traversals::driver::{self, DriverConfig, Measurement, TraversalKind};

#[derive(Parser, Debug)]
#[command(
    name = "traversals",
    about = "Time offset, fixed-stride and shuffled traversals over a sequence"
)]
struct Cli {
    /// Number of elements in the backing sequence.
    #[arg(long, default_value_t = 1_000_000)]
    len: usize,
    /// Start offset for the offset and pseudo-random traversals.
    #[arg(long, default_value_t = 2)]
    offset: usize,
    /// Stride for the pseudo-random traversal.
    #[arg(long, default_value_t = 2_147_483_647)]
    stride: usize,
    /// Seed for the shuffled traversal (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Refuse strides that share a factor with the length.
    #[arg(long)]
    strict: bool,
    /// Traversals to run (default: all, in order).
    #[arg(long = "kind", value_enum)]
    kinds: Vec<Kind>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Offset,
    Pseudo,
    Shuffle,
}

impl From<Kind> for TraversalKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Offset => TraversalKind::Offset,
            Kind::Pseudo => TraversalKind::PseudoRandom,
            Kind::Shuffle => TraversalKind::Shuffled,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let kinds = if cli.kinds.is_empty() {
        TraversalKind::ALL.to_vec()
    } else {
        cli.kinds.into_iter().map(TraversalKind::from).collect()
    };
    let config = DriverConfig {
        len: cli.len,
        offset: cli.offset,
        stride: cli.stride,
        seed: cli.seed,
        strict: cli.strict,
        kinds,
    };

    let measurements = driver::run(&config).context("benchmark run failed")?;
    for (idx, measurement) in measurements.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_measurement(measurement);
    }

    Ok(())
}

fn print_measurement(measurement: &Measurement) {
    println!("{}", measurement.kind);
    println!("{}", measurement.sum);
    println!("{} s", measurement.elapsed.as_secs_f64());
}
