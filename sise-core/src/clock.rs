use chrono::{DateTime, Utc};
use chrono_tz::Asia::Seoul;

/// Explicit clock passed into the pipeline at invocation.
///
/// Replaces a global "now" so runs are deterministic under test: every
/// timestamp in a snapshot comes from the one clock the caller supplied.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current instant rendered in KST as `YYYY-MM-DD HH:MM:SS`.
    fn kst_stamp(&self) -> String {
        self.now_utc()
            .with_timezone(&Seoul)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Wall-clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
