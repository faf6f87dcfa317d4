//! Sample the 12-ball by rejection or by order statistics and report the cost.
//!
//! ```text
//! cargo run --release --example hyperball -- 100000 --method order-statistics
//! ```
//!
//! Rejection accepts about one trial in 3000; expect it to be slow.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use tama::{
    sample_hyperball12, GeneratorConfig, Hyperball12Method, RunStats, HYPERBALL12_ACCEPTANCE,
    HYPERBALL12_MEAN_R2,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Rejection,
    OrderStatistics,
}

impl From<Method> for Hyperball12Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Rejection => Hyperball12Method::Rejection,
            Method::OrderStatistics => Hyperball12Method::OrderStatistics,
        }
    }
}

/// Uniform points in the 12-dimensional unit ball
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Points per method
    #[arg(default_value_t = 100_000)]
    points: u64,

    /// Stream number
    #[arg(short, long, default_value_t = 0)]
    sequence: u32,

    /// Generator buffer size
    #[arg(short, long, default_value_t = tama::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Run a single method instead of both
    #[arg(short, long, value_enum)]
    method: Option<Method>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = GeneratorConfig::new()
        .with_sequence(args.sequence)
        .with_capacity(args.capacity)
        .build()?;

    let methods = match args.method {
        Some(m) => vec![m.into()],
        None => Hyperball12Method::ALL.to_vec(),
    };

    for method in methods {
        if method == Hyperball12Method::Rejection {
            let expected = args.points as f64 / HYPERBALL12_ACCEPTANCE;
            info!(
                points = args.points,
                expected_trials = expected as u64,
                "starting rejection run"
            );
        }

        let start = Instant::now();
        let stats = RunStats::collect(args.points, || sample_hyperball12(&mut rng, method));
        let elapsed = start.elapsed();

        println!();
        println!("===================== {method} ({} points)", args.points);
        println!(
            "it took {} attempts to sample {} points in a 12d ball",
            stats.attempts(),
            stats.samples()
        );
        if let Some(eff) = stats.efficiency() {
            println!("sampling efficiency: {eff:.3e}");
        }
        if let Some(mean) = stats.mean_r2() {
            println!("<r2> = {mean:.6} (exact {HYPERBALL12_MEAN_R2:.6})");
        }
        println!("run time: {:.3} ms", elapsed.as_secs_f64() * 1e3);
    }

    Ok(())
}
