//! Short Date CLI tool
//!
//! A command-line tool for rendering dates as "Jan 5, 2024".

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use std::process;

use short_date::date::{parse_utc_offset, DateFormatter, InvalidDatePolicy};
use short_date::batch::{expand_globs, format_file};
use short_date::startup;

/// Short Date - Render dates as short en-US display strings
#[derive(Parser)]
#[command(name = "short-date")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Format a few dates
    short-date format 2024-01-05 \"2024-12-31 08:15:00\"

    # Pick the calendar day in a fixed offset
    short-date format --tz +14:00 2024-01-05T10:00:00Z

    # Fail on the first malformed line instead of printing a placeholder
    short-date batch --strict \"dates/*.txt\"")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format dates given on the command line, one output line each
    Format {
        /// Date strings (ISO-8601, RFC 2822, MM/DD/YYYY, "Jan 5, 2024", ...)
        dates: Vec<String>,

        #[command(flatten)]
        options: FormatArgs,
    },

    /// Format every line of one or more text files
    Batch {
        /// Input files. Supports glob patterns like "*.txt"
        #[arg(required = true)]
        inputs: Vec<String>,

        #[command(flatten)]
        options: FormatArgs,
    },
}

#[derive(Args)]
struct FormatArgs {
    /// UTC offset used to pick the calendar day (e.g. "UTC", "+05:30", "-0800")
    #[arg(long, env = "SHORT_DATE_TZ", default_value = "UTC")]
    tz: String,

    /// Fail on malformed dates instead of printing a placeholder
    #[arg(long)]
    strict: bool,

    /// Text printed for malformed dates
    #[arg(long)]
    placeholder: Option<String>,
}

impl FormatArgs {
    fn formatter(&self) -> Result<DateFormatter> {
        let time_zone = parse_utc_offset(&self.tz)?;
        let policy = if self.strict {
            InvalidDatePolicy::Reject
        } else {
            InvalidDatePolicy::Placeholder
        };

        let mut formatter = DateFormatter::new()
            .with_time_zone(time_zone)
            .with_policy(policy);
        if let Some(placeholder) = &self.placeholder {
            formatter = formatter.with_placeholder(placeholder.as_str());
        }

        debug!("Using formatter {:?}", formatter);
        Ok(formatter)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    startup::announce();

    let result = match cli.command {
        Commands::Format { dates, options } => cmd_format(dates, options),
        Commands::Batch { inputs, options } => cmd_batch(inputs, options),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Format dates passed as arguments
fn cmd_format(dates: Vec<String>, options: FormatArgs) -> Result<()> {
    let formatter = options.formatter()?;

    for date in &dates {
        let formatted = formatter
            .format(Some(date.as_str()))
            .with_context(|| format!("Failed to format {:?}", date))?;
        println!("{}", formatted);
    }

    Ok(())
}

/// Format every line of the matched files
fn cmd_batch(inputs: Vec<String>, options: FormatArgs) -> Result<()> {
    let formatter = options.formatter()?;
    let paths = expand_globs(&inputs)?;

    debug!("Formatting {} file(s)", paths.len());

    for path in &paths {
        let lines = format_file(path, &formatter)
            .with_context(|| format!("Failed to format {}", path.display()))?;
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
