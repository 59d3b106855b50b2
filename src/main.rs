use clap::Parser;
use implprove::config::DEFAULT_CAPACITY;
use implprove::ProverConfig;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Searches for a proof of an implicational formula from the three axiom templates
/// and modus ponens.
#[derive(Parser)]
#[command(name = "implprove", version)]
struct Args {
	/// File holding the formula, e.g. `(1 -> 1)`
	#[arg(default_value = "p.txt")]
	input: PathBuf,

	/// Node limit for one search branch
	#[arg(long, default_value_t = DEFAULT_CAPACITY)]
	capacity: usize,

	/// Give up once the depth bound would pass this
	#[arg(long)]
	max_bound: Option<u32>,
}

fn main() {
	// progress goes to stderr at info, RUST_LOG=implprove=trace shows every rule attempt
	tracing_subscriber::registry()
		.with(fmt::layer().with_ansi(false).without_time().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();
	let string = match std::fs::read_to_string(&args.input) {
		Ok(string) => string,
		Err(e) => {
			eprintln!("cannot read {}: {}", args.input.display(), e);
			process::exit(1);
		}
	};
	let config = ProverConfig {
		capacity: args.capacity,
		max_bound: args.max_bound,
	};
	match implprove::solve(&string, &config) {
		Ok(derivation) => print!("{}", derivation),
		Err(e) => {
			eprintln!("{}", e);
			process::exit(1);
		}
	}
}
