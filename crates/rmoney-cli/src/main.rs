mod commands;
mod config;
mod input;
mod logging;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::brokerage::EquityCostsArgs;
use commands::plans::FeeScheduleArgs;
use commands::projection::{LumpsumArgs, SipArgs};

/// Brokerage charges and investment projections
#[derive(Parser)]
#[command(
    name = "rmoney",
    version,
    about = "Brokerage charges and investment projections",
    long_about = "Itemized equity delivery charges (STT, exchange, GST, SEBI, stamp duty) \
                  and SIP / lumpsum future-value projections, computed with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Include rounded ₹ display strings alongside raw values
    #[arg(long, global = true)]
    display: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Itemized charges for an equity delivery trade
    EquityCosts(EquityCostsArgs),
    /// Project a monthly SIP forward
    Sip(SipArgs),
    /// Project a one-time investment forward
    Lumpsum(LumpsumArgs),
    /// List pricing plans and their per-order brokerage
    Plans,
    /// Print the effective fee schedule
    FeeSchedule(FeeScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::EquityCosts(args) => commands::brokerage::run_equity_costs(args, cli.display),
        Commands::Sip(args) => commands::projection::run_sip(args, cli.display),
        Commands::Lumpsum(args) => commands::projection::run_lumpsum(args, cli.display),
        Commands::Plans => commands::plans::run_plans(),
        Commands::FeeSchedule(args) => commands::plans::run_fee_schedule(args),
        Commands::Version => {
            println!("rmoney {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
