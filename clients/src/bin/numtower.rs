//! `numtower` - Evaluates one operation of the ℕ → ℤ → ℚ tower.
//!
//! The result is printed with the level it landed in, so promotions are
//! visible: `ℕ 14`, `ℤ -1`, `ℚ 140/11`.
//!
//! **Usage:**
//! ```
//! numtower [-v...] eval <LHS> <OP> <RHS> [--domain natural|integer]
//! numtower [-v...] reduce <RATIONAL>
//! ```
//!
//! Logging goes to stderr; `-v` enables debug events, `-vv` trace events
//! (every promotion), and `RUST_LOG` overrides both.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use numtower_clients::{evaluate, reduce, Domain, Operator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Evaluate operations of the number tower.
#[derive(Parser)]
#[command(
    name = "numtower",
    about = "Evaluate ℕ, ℤ and ℚ arithmetic with explicit promotion",
    version
)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply one operator: + - * ^ / % root log.
    Eval {
        /// Left operand (the degree for `root`, the base for `log`).
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        /// Operator symbol.
        op: Operator,

        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        rhs: String,

        /// Level the operands are parsed in.
        #[arg(long, value_enum, default_value_t = Domain::Natural)]
        domain: Domain,
    },

    /// Print the canonical form of a rational literal `n/d`.
    Reduce {
        /// The literal to reduce.
        #[arg(allow_hyphen_values = true)]
        rational: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Eval {
            lhs,
            op,
            rhs,
            domain,
        } => println!("{}", evaluate(domain, &lhs, op, &rhs)?),
        Command::Reduce { rational } => println!("ℚ {}", reduce(&rational)?),
    }
    Ok(())
}
