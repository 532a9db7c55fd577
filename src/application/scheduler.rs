//! # Daily Scheduler
//!
//! Fires a trigger once per calendar day at a fixed wall-clock time.
//! There is no catch-up: a fire that could not happen on time is skipped.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use crate::strings::logs;

/// How late a wake-up may be and still count as the scheduled fire.
const MISFIRE_GRACE_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
}

impl DailySchedule {
    pub fn new(at: NaiveTime) -> Self {
        Self { at }
    }

    /// Parse `HH:MM` (24h).
    pub fn parse(s: &str) -> Result<Self> {
        let at = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .with_context(|| format!("Invalid schedule time {s:?}, expected HH:MM"))?;
        Ok(Self::new(at))
    }

    pub fn at(&self) -> NaiveTime {
        self.at
    }

    /// First instant strictly after `after` whose local time is `at`.
    /// Days where `at` does not exist (DST gap) are skipped; ambiguous times take the earliest.
    pub fn next_fire<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let tz = after.timezone();
        let mut date = after.date_naive();
        // Two days always suffice unless a DST gap swallows one of them
        for _ in 0..4 {
            if let Some(candidate) = tz.from_local_datetime(&date.and_time(self.at)).earliest()
                && candidate > *after
            {
                return Some(candidate);
            }
            date = date.succ_opt()?;
        }
        None
    }
}

/// True when `now` is too far past `scheduled` for the fire to still count.
pub fn is_missed<Tz: TimeZone>(scheduled: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    now.clone().signed_duration_since(scheduled.clone()) > TimeDelta::seconds(MISFIRE_GRACE_SECS)
}

pub type Clock<Tz> = Arc<dyn Fn() -> DateTime<Tz> + Send + Sync>;

pub struct Scheduler<Tz: TimeZone> {
    schedule: DailySchedule,
    clock: Clock<Tz>,
}

impl Scheduler<Local> {
    /// Scheduler on the server's local time zone.
    pub fn local(schedule: DailySchedule) -> Self {
        Self::with_clock(schedule, Arc::new(Local::now))
    }
}

impl<Tz> Scheduler<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_clock(schedule: DailySchedule, clock: Clock<Tz>) -> Self {
        Self { schedule, clock }
    }

    /// Loop forever: sleep until the next fire, await the trigger, repeat.
    /// Each fire is computed strictly after the previous one, so a day fires at most once.
    pub async fn run<F, Fut>(&self, mut trigger: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut last: Option<DateTime<Tz>> = None;
        loop {
            let now = (self.clock)();
            let after = match &last {
                Some(prev) if *prev > now => prev.clone(),
                _ => now.clone(),
            };
            let Some(next) = self.schedule.next_fire(&after) else {
                tracing::error!("No further fire time after {}", after);
                return;
            };
            tracing::info!("{}", logs::schedule_armed(&next.to_string()));

            let wait = next
                .clone()
                .signed_duration_since(now)
                .to_std()
                .unwrap_or_default();
            tokio::time::sleep(wait).await;

            let woke = (self.clock)();
            last = Some(next.clone());
            if is_missed(&next, &woke) {
                tracing::warn!("Skipping scheduled briefing for {}: woke at {}", next, woke);
                continue;
            }

            tracing::info!("{}", logs::SCHEDULED_RUN);
            trigger().await;
        }
    }
}
