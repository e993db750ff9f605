//! Fixtures shared by the unit tests.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::{ExpirationLimit, ExpirationTable};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// `base` shifted by `offset` days, negative offsets going back in time
pub fn days_from(base: NaiveDate, offset: i64) -> NaiveDate {
    let shift = Days::new(offset.unsigned_abs());
    if offset < 0 {
        base.checked_sub_days(shift)
    } else {
        base.checked_add_days(shift)
    }
    .expect("test date in range")
}

pub fn limit(days: i64) -> ExpirationLimit {
    ExpirationLimit::new(days).expect("valid test limit")
}

pub fn single_entry(file: &str, expires_on: NaiveDate) -> ExpirationTable {
    [(file, expires_on)].into_iter().collect()
}

/// Runs `f` with a subscriber that records the message of every WARN event.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(WarningCollector(Arc::clone(&messages)));
    let result = tracing::subscriber::with_default(subscriber, f);
    let messages = messages.lock().expect("warning collector poisoned").clone();
    (result, messages)
}

struct WarningCollector(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for WarningCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .expect("warning collector poisoned")
            .push(visitor.0);
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}
