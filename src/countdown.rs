use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

const MS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("invalid countdown target {0:?}")]
    InvalidTarget(String),
}

/// Parses the target stamp. Stamps with an offset are taken as given; bare
/// local stamps like `2025-11-08T18:00:00` are read in the viewer's time
/// zone, which is what the browser does with them too.
pub fn parse_target(raw: &str) -> Result<DateTime<Utc>, CountdownError> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(stamp.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| CountdownError::InvalidTarget(raw.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| CountdownError::InvalidTarget(raw.to_string()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Floors a millisecond delta into whole units. Negative deltas clamp
    /// to zero.
    pub fn from_millis(delta_ms: i64) -> Self {
        let total = delta_ms.max(0) / MS_PER_SECOND;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Label and value pairs in display order.
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Live countdown against a fixed instant. Once it goes live it stays
/// live, whatever the clock says afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
    remaining: TimeLeft,
    is_live: bool,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            remaining: TimeLeft::default(),
            is_live: false,
        }
    }

    /// Recomputes against `now`. Returns whether further ticks are needed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_live {
            return false;
        }
        let delta_ms = (self.target - now).num_milliseconds();
        if delta_ms <= 0 {
            self.remaining = TimeLeft::default();
            self.is_live = true;
            return false;
        }
        self.remaining = TimeLeft::from_millis(delta_ms);
        true
    }

    pub fn remaining(&self) -> TimeLeft {
        self.remaining
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    impl TimeLeft {
        fn total_seconds(&self) -> i64 {
            self.days * SECONDS_PER_DAY
                + self.hours * SECONDS_PER_HOUR
                + self.minutes * SECONDS_PER_MINUTE
                + self.seconds
        }
    }

    fn target() -> DateTime<Utc> {
        parse_target("2025-11-08T18:00:00").unwrap()
    }

    #[test]
    fn test_one_of_each_unit() {
        let mut countdown = Countdown::new(target());
        let now = target()
            - (Duration::days(1) + Duration::hours(1) + Duration::minutes(1) + Duration::seconds(1));

        assert!(countdown.tick(now));
        assert_eq!(
            countdown.remaining(),
            TimeLeft { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
        assert!(!countdown.is_live());
    }

    #[test]
    fn test_decomposition_sums_back_to_floored_seconds() {
        for delta_ms in [1, 999, 1_000, 59_999, 3_600_000, 86_399_999, 86_400_000, 1_234_567_890] {
            let left = TimeLeft::from_millis(delta_ms);
            assert_eq!(left.total_seconds(), delta_ms / 1_000, "delta {}", delta_ms);
            assert!((0..24).contains(&left.hours));
            assert!((0..60).contains(&left.minutes));
            assert!((0..60).contains(&left.seconds));
        }
    }

    #[test]
    fn test_sub_second_rounds_down() {
        let mut countdown = Countdown::new(target());
        assert!(countdown.tick(target() - Duration::milliseconds(999)));
        assert_eq!(countdown.remaining(), TimeLeft::default());
        assert!(!countdown.is_live());
    }

    #[test]
    fn test_goes_live_at_target() {
        let mut countdown = Countdown::new(target());
        assert!(!countdown.tick(target()));
        assert!(countdown.is_live());
        assert_eq!(countdown.remaining(), TimeLeft::default());
    }

    #[test]
    fn test_live_is_terminal() {
        let mut countdown = Countdown::new(target());
        countdown.tick(target() + Duration::hours(3));
        assert!(countdown.is_live());

        // Clock jumps back before the target
        assert!(!countdown.tick(target() - Duration::days(2)));
        assert!(countdown.is_live());
        assert_eq!(countdown.remaining(), TimeLeft::default());
    }

    #[test]
    fn test_negative_delta_clamps() {
        assert_eq!(TimeLeft::from_millis(-5_000), TimeLeft::default());
    }

    #[test]
    fn test_parse_with_offset() {
        let parsed = parse_target("2025-11-08T18:00:00+05:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 11, 8, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_local_without_seconds() {
        assert_eq!(
            parse_target("2025-11-08T18:00").unwrap(),
            parse_target("2025-11-08T18:00:00").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_target("next saturday"),
            Err(CountdownError::InvalidTarget("next saturday".into()))
        );
    }

    #[test]
    fn test_units_in_display_order() {
        let left = TimeLeft { days: 3, hours: 2, minutes: 1, seconds: 0 };
        let labels: Vec<_> = left.units().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
        assert_eq!(left.units()[0].1, 3);
    }
}
