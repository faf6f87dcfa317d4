//! Time the three unit-ball samplers and check their mean squared radius.
//!
//! ```text
//! cargo run --release --example ball -- 1000000
//! ```

use std::time::Instant;

use clap::{Parser, ValueEnum};
use tama::{sample_ball, BallMethod, GeneratorConfig, RunStats, BALL_MEAN_R2};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Rejection,
    CbrtRadius,
    MaxOfThree,
}

impl From<Method> for BallMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Rejection => BallMethod::Rejection,
            Method::CbrtRadius => BallMethod::CubeRootRadius,
            Method::MaxOfThree => BallMethod::MaxOfThree,
        }
    }
}

/// Uniform points in the unit ball
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Points per method
    #[arg(default_value_t = 1_000_000)]
    points: u64,

    /// Stream number
    #[arg(short, long, default_value_t = 0)]
    sequence: u32,

    /// Generator buffer size
    #[arg(short, long, default_value_t = tama::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Run a single method instead of all three
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
        None => BallMethod::ALL.to_vec(),
    };

    for method in methods {
        let start = Instant::now();
        let stats = RunStats::collect(args.points, || sample_ball(&mut rng, method));
        let elapsed = start.elapsed();

        println!();
        println!("===================== {method} ({} points)", args.points);
        if let Some(mean) = stats.mean_r2() {
            println!("<r2> = {mean:.6} (exact {BALL_MEAN_R2})");
        }
        println!("time: {:.3} ms", elapsed.as_secs_f64() * 1e3);
        if method == BallMethod::Rejection {
            println!("attempts: {}", stats.attempts());
            if let Some(eff) = stats.efficiency() {
                println!("efficiency: {eff:.4} (exact {:.4})", tama::BALL_ACCEPTANCE);
            }
        }
    }

    Ok(())
}
