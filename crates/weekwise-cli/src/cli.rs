use clap::{Parser, Subcommand, ValueEnum};

use week_engine::CalculationStandard;

/// Week numbers for right now or any date.
#[derive(Parser, Debug)]
#[command(
    name = "weekwise",
    version,
    about = "ISO-8601 and US week numbers for now or any date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Locale for date and weekday labels (BCP-47 or POSIX, e.g. zh-CN, en_US).
    #[arg(long, global = true, env = "WEEKWISE_LOCALE", default_value = "zh-CN")]
    pub locale: String,

    /// Week-numbering convention.
    #[arg(long, global = true, value_enum, default_value_t = StandardArg::Iso)]
    pub standard: StandardArg,

    /// IANA timezone for "now"; the host timezone is detected when omitted.
    #[arg(long, global = true, env = "WEEKWISE_TIMEZONE")]
    pub timezone: Option<String>,

    /// Emit one JSON object per card instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the week of the current moment.
    Now(NowArgs),
    /// Show the week of a given date.
    Date(DateArgs),
    /// Print the timezone used for "now".
    Timezone,
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args, Debug)]
pub struct NowArgs {
    /// Keep refreshing the card.
    #[arg(short, long)]
    pub watch: bool,

    /// Seconds between refreshes in watch mode (at least 1).
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Stop after this many cards in watch mode.
    #[arg(long)]
    pub ticks: Option<u64>,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args, Debug)]
pub struct DateArgs {
    /// Target date as YYYY-MM-DD.
    pub date: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandardArg {
    /// ISO-8601, weeks start on Monday.
    Iso,
    /// US, weeks start on Sunday.
    Us,
}

impl From<StandardArg> for CalculationStandard {
    fn from(arg: StandardArg) -> Self {
        match arg {
            StandardArg::Iso => CalculationStandard::Iso8601,
            StandardArg::Us => CalculationStandard::Us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_args(extra: &[&str]) -> Result<NowArgs, clap::Error> {
        let argv = ["weekwise", "now"].iter().chain(extra).copied();
        match Cli::try_parse_from(argv)?.command {
            Command::Now(args) => Ok(args),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_interval_defaults_to_a_minute() {
        assert_eq!(now_args(&[]).unwrap().interval, 60);
        assert_eq!(now_args(&["--interval", "1"]).unwrap().interval, 1);
    }

    #[test]
    fn test_interval_zero_is_rejected() {
        let err = now_args(&["--watch", "--interval", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
