use std::io;
use std::process::ExitCode;

use clap::Parser;
use dh_exchange::{Session, SessionConfig, ValidationPolicy};

/// Diffie-Hellman key change between Alice and Bob over 64-bit integers.
///
/// Any value not given as a flag is asked for on standard input.
#[derive(Parser, Debug)]
#[command(name = "key_change", version)]
struct Args {
    /// Reject a composite prime and out-of-range generator or private keys
    #[arg(long)]
    strict: bool,

    /// Public prime p
    #[arg(short, long, allow_negative_numbers = true)]
    prime: Option<i64>,

    /// Public generator g
    #[arg(short, long, allow_negative_numbers = true)]
    generator: Option<i64>,

    /// Alice's private key a
    #[arg(short, long, allow_negative_numbers = true)]
    alice: Option<i64>,

    /// Bob's private key b
    #[arg(short, long, allow_negative_numbers = true)]
    bob: Option<i64>,

    /// Draw private keys at random from [2, p-2] instead of asking for them
    #[arg(short, long)]
    random_secrets: bool,

    /// Seed for --random-secrets, for reproducible runs
    #[arg(long, requires = "random_secrets")]
    seed: Option<u64>,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        SessionConfig {
            policy: if args.strict {
                ValidationPolicy::Strict
            } else {
                ValidationPolicy::Permissive
            },
            prime: args.prime,
            generator: args.generator,
            alice: args.alice,
            bob: args.bob,
            random_secrets: args.random_secrets,
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("Starting key change with {:?}", args);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), args.into());
    match session.run() {
        Ok(outcome) => {
            log::debug!("Public values: {} / {}", outcome.public_a, outcome.public_b);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Key change failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
