//! UI state and command handlers.
//!
//! `App` owns everything the display needs between renders: card options,
//! the timezone used for "now" and its label. The clock is read by the
//! handlers and passed into the engine by value.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, info_span, warn};

use week_engine::{
    detect_timezone, now_in, parse_locale, parse_target_date, parse_timezone, CardOptions,
    WeekCard,
};

use crate::cli::{Cli, DateArgs, NowArgs};

pub const NOW_TITLE: &str = "Current moment";
pub const TARGET_TITLE: &str = "Target date";

pub struct App {
    options: CardOptions,
    /// Explicit zone for "now"; `None` means the host's local time.
    timezone: Option<Tz>,
    timezone_label: String,
    json: bool,
}

impl App {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let locale = parse_locale(&cli.locale).context("unsupported --locale")?;
        let timezone = cli
            .timezone
            .as_deref()
            .map(parse_timezone)
            .transpose()
            .context("unsupported --timezone")?;

        let app = Self::new(
            CardOptions {
                locale,
                standard: cli.standard.into(),
            },
            timezone,
            cli.json,
        );
        debug!(
            locale = %app.options.locale,
            standard = %app.options.standard,
            timezone = %app.timezone_label,
            "configured"
        );
        Ok(app)
    }

    pub fn new(options: CardOptions, timezone: Option<Tz>, json: bool) -> Self {
        let timezone_label = match timezone {
            Some(tz) => tz.name().to_string(),
            None => detect_timezone(),
        };
        Self {
            options,
            timezone,
            timezone_label,
            json,
        }
    }

    /// Wall-clock time at `anchor` in the configured zone.
    fn local_time(&self, anchor: DateTime<Utc>) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => now_in(anchor, tz).naive_local(),
            None => anchor.with_timezone(&Local).naive_local(),
        }
    }

    pub fn now_card(&self, anchor: DateTime<Utc>) -> WeekCard {
        WeekCard::live(
            NOW_TITLE,
            self.local_time(anchor),
            Some(self.timezone_label.clone()),
            &self.options,
        )
    }

    pub fn target_card(&self, input: &str) -> WeekCard {
        let target = parse_target_date(input);
        if !target.is_valid() {
            warn!(input, "target date is not YYYY-MM-DD");
        }
        WeekCard::for_target(TARGET_TITLE, &target, &self.options)
    }

    pub fn render(&self, card: &WeekCard) -> Result<String> {
        if self.json {
            serde_json::to_string(card).context("failed to serialize card")
        } else {
            Ok(card.to_string())
        }
    }

    // ── Command handlers ────────────────────────────────────────────────

    pub fn run_now(&self, args: &NowArgs, out: &mut impl Write) -> Result<()> {
        let _cmd = info_span!("now").entered();

        if !args.watch {
            return self.emit(&self.now_card(Utc::now()), out);
        }

        let interval = Duration::from_secs(args.interval);
        info!(interval_secs = args.interval, ticks = ?args.ticks, "watching clock");

        let mut tick = 0u64;
        loop {
            self.emit(&self.now_card(Utc::now()), out)?;
            tick += 1;
            if args.ticks.is_some_and(|n| tick >= n) {
                debug!(tick, "tick budget spent");
                return Ok(());
            }
            if !self.json {
                writeln!(out)?;
            }
            thread::sleep(interval);
        }
    }

    pub fn run_date(&self, args: &DateArgs, out: &mut impl Write) -> Result<()> {
        let _cmd = info_span!("date").entered();
        self.emit(&self.target_card(&args.date), out)
    }

    pub fn run_timezone(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            let value = serde_json::json!({ "timezone": self.timezone_label });
            writeln!(out, "{value}")?;
        } else {
            writeln!(out, "{}", self.timezone_label)?;
        }
        Ok(())
    }

    fn emit(&self, card: &WeekCard, out: &mut impl Write) -> Result<()> {
        let rendered = self.render(card)?;
        writeln!(out, "{rendered}").context("failed to write card")?;
        out.flush()?;
        Ok(())
    }
}
