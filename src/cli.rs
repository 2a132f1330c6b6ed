use chrono::NaiveDate;
use clap::Parser;

/// Convert Gregorian dates into the Chinese lunar calendar.
#[derive(Parser)]
#[command(
    name = "nongli",
    version,
    about = "Convert Gregorian dates (1892-2100) into the Chinese lunar calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Shift today's date by this many months when no dates are given.
    #[arg(long = "offset-months", default_value_t = 0, allow_negative_numbers = true)]
    pub offset_months: i32,

    /// Dates to convert, as YYYY-MM-DD. Defaults to today's local date.
    #[arg(value_parser = parse_date)]
    pub dates: Vec<NaiveDate>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
