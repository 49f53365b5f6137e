use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sankhya Vedic numerology CLI.
#[derive(Parser)]
#[command(name = "sankhya", version, about = "Vedic numerology from a birth date")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Birth date as three positional numbers.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Day of month (1-31)
    pub day: i64,
    /// Month (1-12)
    pub month: i64,
    /// Year (1900-2100)
    pub year: i64,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full analysis of a birth date
    Analyze {
        #[command(flatten)]
        date: DateArgs,
        /// Print the analysis record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reduce a number to a single digit
    Reduce {
        n: u32,
        /// Stop at master numbers 11, 22, 33
        #[arg(long)]
        master: bool,
    },
    /// Lo Shu grid of a birth date
    Grid {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Yogas formed by the digits of a birth date
    Yogas {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Simplified mahadasha cycle for a destiny number
    Mahadasha { destiny: u32 },
    /// Compatibility with a partner born on a given day of the month
    Compat {
        #[command(flatten)]
        date: DateArgs,
        /// Partner's day of birth (1-31)
        #[arg(long)]
        partner_day: u32,
    },
    /// Lucky dates in a calendar month
    LuckyDates {
        #[command(flatten)]
        date: DateArgs,
        /// Calendar year to search
        #[arg(long)]
        for_year: i32,
        /// Calendar month to search (1-12)
        #[arg(long)]
        for_month: u32,
    },
    /// Career paths and health focus areas
    Guidance {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Print the prompt sent to the reading provider
    Prompt {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Request an AI reading from the configured provider
    Reading {
        #[command(flatten)]
        date: DateArgs,
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the HTTP service
    Serve {
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the listen address
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}
