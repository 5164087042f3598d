//! # redeem CLI
//!
//! Command-line interface for the redeemcode generator.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use redeemcode::{
    commands::{self, DecodeArgs, GenerateArgs, LayoutArgs},
    constants::DEFAULT_LOG_FILTER,
    ui,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/redeemcode/config   Global defaults (max_scope, batch_count)
  .redeemcode                   Project overrides (searched upward from cwd)

Code Alphabet:
  ABCDEFGHJKLMNPQRSTUVWXYZ23456789   (no 0, 1, I or O)

Getting Started:
  redeem setup                  Create the global config
  redeem generate               Print a batch of codes
  redeem generate -n 100        Print 100 codes
  redeem decode K4M2ZQX9PA      Show the value behind a code

Logging:
  RUST_LOG=debug redeem generate   Show layout and sampling details";

#[derive(Parser)]
#[command(name = "redeem")]
#[command(version)]
#[command(about = "Generate short, human-typable redemption codes")]
#[command(
    long_about = "redeem generates batches of redemption codes. Each code packs the current \
UNIX timestamp above a random suffix and renders the bits five at a time in an alphabet \
without ambiguous characters. Codes within one batch are always distinct."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of codes
    #[command(
        long_about = "Generate a batch of distinct redemption codes, one per line.\n\n\
The random suffix domain holds at least max_scope values; the code length is the \
smallest whole number of characters that fits the timestamp and the suffix.",
        after_help = "Examples:\n  \
redeem generate                   Use configured defaults\n  \
redeem generate -n 50             Generate 50 codes\n  \
redeem generate -s 1000000        Use a larger suffix domain\n  \
redeem generate --seed 42         Reproducible suffixes (same second only)\n  \
redeem generate --verbose         Also print the bit layout to stderr"
    )]
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Minimum random suffix domain size
        #[arg(short = 's', long)]
        max_scope: Option<u64>,

        /// Seed for the random sampler
        #[arg(long)]
        seed: Option<u64>,

        /// Print the bit layout and timestamp to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode codes back into their values
    #[command(
        long_about = "Decode one or more codes into their composite values.\n\n\
Input is trimmed and upper-cased before decoding. With --random-bits the composite \
is split into the issuing timestamp and the random suffix.",
        after_help = "Examples:\n  \
redeem decode K4M2ZQX9PA\n  \
redeem decode K4M2ZQX9PA --random-bits 19"
    )]
    Decode {
        /// Codes to decode
        #[arg(required = true)]
        codes: Vec<String>,

        /// Width of the random suffix in bits
        #[arg(long)]
        random_bits: Option<u32>,
    },

    /// Show the bit layout a batch would use
    Layout {
        /// Minimum random suffix domain size
        #[arg(short = 's', long)]
        max_scope: Option<u64>,

        /// UNIX timestamp to size for (defaults to now)
        #[arg(long)]
        timestamp: Option<u64>,
    },

    /// Create or update the global config
    Setup,

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run() {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            count,
            max_scope,
            seed,
            verbose,
        } => commands::generate(GenerateArgs {
            max_scope,
            count,
            seed,
            verbose,
        }),

        Commands::Decode { codes, random_bits } => {
            commands::decode(&DecodeArgs { codes, random_bits })
        }

        Commands::Layout {
            max_scope,
            timestamp,
        } => commands::layout(LayoutArgs {
            max_scope,
            timestamp,
        }),

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
