//! Unit test suites for the task module.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicUsize, Ordering};


/// Clock returning a fixed instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock yielding a fixed sequence of instants, repeating the final one.
struct SequenceClock {
    instants: Vec<DateTime<Utc>>,
    cursor: AtomicUsize,
}

impl SequenceClock {
    fn new(instants: Vec<DateTime<Utc>>) -> Self {
        Self {
            instants,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.instants
            .get(index)
            .or_else(|| self.instants.last())
            .copied()
            .expect("sequence clock requires at least one instant")
    }
}

/// A timestamp at the given hour on a fixed reference day.
fn instant_at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2029, 6, 15, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// The due date used by test drafts and requests.
fn due_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}
