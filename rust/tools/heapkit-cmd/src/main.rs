use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Report, heap::BuildMode, heap::Order};

#[derive(Parser)]
#[command(name = "heapkit-cmd")]
#[command(about = "Command-line driver for heapkit buffers and heaps")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the result as JSON instead of one value per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a heap with N, N-1, ..., 1 and pop every element
    Heap {
        /// Number of elements
        #[arg(short, long, default_value_t = 20)]
        count: usize,

        /// Which element the heap keeps on top
        #[arg(long, value_enum, default_value_t = Order::Min)]
        order: Order,

        /// How the heap is built from the input
        #[arg(long, value_enum, default_value_t = BuildMode::Heapify)]
        mode: BuildMode,
    },

    /// Append 0..N to a growable buffer and print it back to front
    Buffer {
        /// Number of elements
        #[arg(short, long, default_value_t = 20)]
        count: usize,
    },

    /// Heap-sort the given integers
    Sort {
        /// Sort from largest to smallest
        #[arg(long)]
        descending: bool,

        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.verbose);

    let report = match cli.command {
        Commands::Heap { count, order, mode } => commands::heap::run(count, order, mode)?,
        Commands::Buffer { count } => commands::buffer::run(count)?,
        Commands::Sort { descending, values } => commands::sort::run(values, descending),
    };
    print_report(&report, cli.json)
}

fn initialize_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}
