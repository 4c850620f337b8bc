//! # Range Square-Root Sum
//!
//! ```shell
//! range-sqrt-sum <a> <b> <num_threads> <method>
//! ```
//!
//! Prints a single `Sum: <value>` line. Set `RUST_LOG=debug` to follow the workers on stderr.

use clap::Parser;
use range_sqrt_sum::method::parse_method;
use range_sqrt_sum::report::format_sum;
use range_sqrt_sum::{run, Method, SumConfig};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "range-sqrt-sum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sum of square roots over [a, b] with a choice of synchronization", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Start of the range (inclusive)
    a: i64,

    /// End of the range (inclusive)
    b: i64,

    /// Number of worker threads, 1 to 32
    num_threads: i64,

    /// 1 = unsynchronized, 2 = lock per element, 3 = local sum then lock
    #[arg(value_parser = parse_method)]
    method: Method,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = SumConfig::new(cli.a, cli.b, cli.num_threads, cli.method)
        .and_then(|config| run(&config));

    match outcome {
        Ok(outcome) => println!("{}", format_sum(outcome.sum)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
