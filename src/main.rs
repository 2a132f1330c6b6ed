mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, Months};
use clap::Parser;
use tracing::info;

use nongli::{LunarDate, convert, convert_from_timestamp};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.dates.is_empty() {
        let instant = shift_months(Local::now(), cli.offset_months)?;
        info!(%instant, "converting local date");
        let lunar = convert_from_timestamp(&instant)
            .with_context(|| format!("converting {}", instant.date_naive()))?;
        print_line(&instant.date_naive().to_string(), &lunar);
        return Ok(());
    }

    for date in cli.dates {
        let lunar = convert(date.year(), date.month(), date.day())
            .with_context(|| format!("converting {date}"))?;
        print_line(&date.to_string(), &lunar);
    }
    Ok(())
}

fn shift_months(instant: DateTime<Local>, months: i32) -> Result<DateTime<Local>> {
    let shift = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        instant.checked_add_months(shift)
    } else {
        instant.checked_sub_months(shift)
    };
    shifted.with_context(|| format!("cannot shift {instant} by {months} months"))
}

fn print_line(civil: &str, lunar: &LunarDate) {
    println!(
        "{civil}  {lunar}  (month slot {}, day {})",
        lunar.month_index, lunar.day_index
    );
}
