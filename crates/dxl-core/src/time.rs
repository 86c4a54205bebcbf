//! Instants and time intervals.
//!
//! DXL annotates facts with valid time and transaction time. An [`Instant`]
//! is a UTC timestamp; [`DISTANT_PAST`] and [`DISTANT_FUTURE`] stand for the
//! unbounded ends of a [`TimeInterval`].
//!
//! Interval relations follow Allen's interval algebra, see
//! <https://www.ics.uci.edu/~alspaugh/cls/shr/allen.html>.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use thiserror::Error;

/// A point on the UTC time line.
pub type Instant = DateTime<Utc>;

/// The earliest representable instant, standing for an unbounded past.
pub const DISTANT_PAST: Instant = DateTime::<Utc>::MIN_UTC;

/// The latest representable instant, standing for an unbounded future.
pub const DISTANT_FUTURE: Instant = DateTime::<Utc>::MAX_UTC;

/// Errors raised while building instants and intervals.
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid instant `{text}`: {source}")]
    InvalidInstant {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("time interval must start before it ends ({start} is not before {end})")]
    EmptyInterval { start: Instant, end: Instant },

    #[error("time interval end is out of range")]
    OutOfRange,
}

/// Renders an instant as ISO-8601 text in UTC with a `Z` suffix.
///
/// Fractional seconds are printed with 0, 3, 6 or 9 digits as needed, so
/// rendering is lossless for nanosecond precision.
pub fn format_instant(instant: &Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses RFC 3339 text into a UTC instant.
///
/// # Errors
///
/// Returns [`TimeError::InvalidInstant`] if the text is not a complete
/// RFC 3339 timestamp (seconds and offset are required).
pub fn parse_instant(text: &str) -> Result<Instant, TimeError> {
    DateTime::parse_from_rfc3339(text)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| TimeError::InvalidInstant {
            text: text.to_string(),
            source,
        })
}

/// A half-open span of time `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: Instant,
    end: Instant,
}

impl TimeInterval {
    /// Creates the interval from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::EmptyInterval`] unless `start < end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, TimeError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(TimeError::EmptyInterval { start, end })
        }
    }

    /// Creates the interval lasting `duration` from `start`.
    pub fn with_duration(start: Instant, duration: TimeDelta) -> Result<Self, TimeError> {
        let end = start
            .checked_add_signed(duration)
            .ok_or(TimeError::OutOfRange)?;
        Self::new(start, end)
    }

    /// The interval from `start` until the distant future.
    ///
    /// Every instant except [`DISTANT_FUTURE`] itself can start such an interval.
    pub fn starting_at(start: Instant) -> Result<Self, TimeError> {
        Self::new(start, DISTANT_FUTURE)
    }

    /// The interval from the distant past until `end`.
    pub fn ending_at(end: Instant) -> Result<Self, TimeError> {
        Self::new(DISTANT_PAST, end)
    }

    /// The interval covering every representable instant.
    pub fn all_time() -> Self {
        Self {
            start: DISTANT_PAST,
            end: DISTANT_FUTURE,
        }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    // Allen relations

    /// This interval ends before `other` starts.
    pub fn precedes(&self, other: &TimeInterval) -> bool {
        self.end < other.start
    }

    /// This interval ends exactly where `other` starts.
    pub fn meets(&self, other: &TimeInterval) -> bool {
        self.end == other.start
    }

    /// This interval starts before `other` and ends inside it.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.start && self.end > other.start && self.end < other.end
    }

    /// Both end together and this one starts earlier.
    pub fn finished_by(&self, other: &TimeInterval) -> bool {
        self.start < other.start && self.end == other.end
    }

    /// This interval starts before and ends after `other`.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start < other.start && self.end > other.end
    }

    /// Both start together and this one ends earlier.
    pub fn starts(&self, other: &TimeInterval) -> bool {
        self.start == other.start && self.end < other.end
    }

    /// Both start together and this one ends later.
    pub fn started_by(&self, other: &TimeInterval) -> bool {
        self.start == other.start && self.end > other.end
    }

    /// This interval lies strictly inside `other`.
    pub fn during(&self, other: &TimeInterval) -> bool {
        self.start > other.start && self.end < other.end
    }

    /// Both end together and this one starts later.
    pub fn finishes(&self, other: &TimeInterval) -> bool {
        self.start > other.start && self.end == other.end
    }

    /// This interval starts inside `other` and ends after it.
    pub fn overlapped_by(&self, other: &TimeInterval) -> bool {
        self.start > other.start && self.start < other.end && self.end > other.end
    }

    /// This interval starts exactly where `other` ends.
    pub fn met_by(&self, other: &TimeInterval) -> bool {
        self.start == other.end
    }

    /// This interval starts after `other` ends.
    pub fn preceded_by(&self, other: &TimeInterval) -> bool {
        self.start > other.end
    }

    // Composite relations

    pub fn ends_after(&self, other: &TimeInterval) -> bool {
        self.end > other.end
    }

    pub fn precedes_or_meets(&self, other: &TimeInterval) -> bool {
        self.end <= other.start
    }

    pub fn starts_before(&self, other: &TimeInterval) -> bool {
        self.start < other.start
    }

    pub fn starts_or_equals(&self, other: &TimeInterval) -> bool {
        self.start == other.start && self.end <= other.end
    }

    /// Starts no earlier and ends no later than `other`: one of starts,
    /// equals, during or finishes.
    pub fn within(&self, other: &TimeInterval) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    // Instant queries

    /// Whether `instant` falls inside the interval. An interval reaching the
    /// distant future also contains [`DISTANT_FUTURE`] itself.
    pub fn contains_instant(&self, instant: Instant) -> bool {
        self.start <= instant
            && (instant < self.end || (self.ends_in_distant_future() && instant == DISTANT_FUTURE))
    }

    pub fn ends_after_instant(&self, instant: Instant) -> bool {
        self.end > instant
    }

    pub fn ends_at(&self, instant: Instant) -> bool {
        self.end == instant
    }

    pub fn precedes_instant(&self, instant: Instant) -> bool {
        self.end < instant
    }

    pub fn preceded_by_instant(&self, instant: Instant) -> bool {
        self.start > instant
    }

    pub fn starts_at(&self, instant: Instant) -> bool {
        self.start == instant
    }

    pub fn starts_in_distant_past(&self) -> bool {
        self.start == DISTANT_PAST
    }

    pub fn ends_in_distant_future(&self) -> bool {
        self.end == DISTANT_FUTURE
    }

    /// The common part of two intervals, or `None` if they share no time.
    pub fn intersect(&self, other: &TimeInterval) -> Option<TimeInterval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeInterval { start, end })
    }

    /// The combination of two intervals that overlap or abut, or `None` if
    /// there is a gap between them.
    pub fn union(&self, other: &TimeInterval) -> Option<TimeInterval> {
        if self.end < other.start || self.start > other.end {
            return None;
        }
        Some(TimeInterval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(text: &str) -> Instant {
        parse_instant(text).expect("valid instant")
    }

    fn interval(start: Instant, end: Instant) -> TimeInterval {
        TimeInterval::new(start, end).expect("valid interval")
    }

    fn timeline() -> Vec<Instant> {
        vec![
            DISTANT_PAST,
            instant("2020-01-01T12:00:00Z"),
            instant("2020-02-01T12:00:00Z"),
            instant("2020-02-02T12:01:00Z"),
            instant("2020-03-31T12:00:00Z"),
            instant("2020-04-01T12:00:00Z"),
            DISTANT_FUTURE,
        ]
    }

    #[test]
    fn test_format_instant() {
        assert_eq!(
            format_instant(&instant("2021-06-01T12:00:00Z")),
            "2021-06-01T12:00:00Z"
        );
        assert_eq!(
            format_instant(&instant("2021-06-01T12:00:00.5Z")),
            "2021-06-01T12:00:00.500Z"
        );
        assert_eq!(
            format_instant(&instant("2021-06-01T14:00:00+02:00")),
            "2021-06-01T12:00:00Z"
        );
    }

    #[test]
    fn test_parse_instant_rejects_partial_timestamps() {
        assert!(parse_instant("2021-06-01").is_err());
        assert!(parse_instant("2021-06-01T12:00Z").is_err());
        assert!(parse_instant("2021-13-01T12:00:00Z").is_err());
    }

    #[test]
    fn test_interval_requires_increasing_bounds() {
        let t = timeline();
        assert!(TimeInterval::new(t[2], t[1]).is_err());
        assert!(TimeInterval::new(t[2], t[2]).is_err());
        assert!(TimeInterval::new(t[1], t[2]).is_ok());
        assert!(TimeInterval::starting_at(DISTANT_FUTURE).is_err());
    }

    #[test]
    fn test_open_and_closed_intervals() {
        let t = timeline();
        let open = TimeInterval::starting_at(t[1]).unwrap();
        assert!(open.ends_in_distant_future());
        assert!(!open.starts_in_distant_past());
        assert!(open.contains_instant(DISTANT_FUTURE));

        let closed = interval(t[1], t[2]);
        assert!(!closed.ends_in_distant_future());
        assert!(closed.contains_instant(t[1]));
        assert!(!closed.contains_instant(t[2]));

        assert!(TimeInterval::ending_at(t[3]).unwrap().starts_in_distant_past());
        assert!(TimeInterval::all_time().contains_instant(t[4]));
    }

    #[test]
    fn test_allen_relations() {
        let t = timeline();

        for i in 0..=4 {
            assert!(interval(t[i], t[i + 1]).starts(&interval(t[i], t[i + 2])));
            assert!(interval(t[i], t[i + 2]).started_by(&interval(t[i], t[i + 1])));
        }

        for i in 2..=6 {
            assert!(interval(t[i - 1], t[i]).finishes(&interval(t[i - 2], t[i])));
            assert!(interval(t[i - 2], t[i]).finished_by(&interval(t[i - 1], t[i])));
        }

        for i in 1..=4 {
            assert!(interval(t[i], t[i + 1]).during(&interval(t[i - 1], t[i + 2])));
            assert!(interval(t[i - 1], t[i + 2]).contains(&interval(t[i], t[i + 1])));
        }

        for i in 1..=4 {
            assert!(interval(t[i - 1], t[i + 1]).overlaps(&interval(t[i], t[i + 2])));
            assert!(interval(t[i], t[i + 2]).overlapped_by(&interval(t[i - 1], t[i + 1])));
        }

        for i in 0..=3 {
            assert!(interval(t[i], t[i + 1]).precedes(&interval(t[i + 2], t[i + 3])));
            assert!(interval(t[i + 2], t[i + 3]).preceded_by(&interval(t[i], t[i + 1])));
        }

        for i in 1..=5 {
            assert!(interval(t[i - 1], t[i]).meets(&interval(t[i], t[i + 1])));
            assert!(interval(t[i], t[i + 1]).met_by(&interval(t[i - 1], t[i])));
        }
    }

    #[test]
    fn test_intersect_and_union() {
        let t = timeline();
        let a = interval(t[1], t[3]);
        let b = interval(t[2], t[4]);
        let c = interval(t[4], t[5]);

        assert_eq!(a.intersect(&b), Some(interval(t[2], t[3])));
        assert_eq!(a.intersect(&c), None);
        assert_eq!(a.union(&b), Some(interval(t[1], t[4])));
        assert_eq!(b.union(&c), Some(interval(t[2], t[5])));
        assert_eq!(a.union(&c), None);
    }

    #[test]
    fn test_with_duration() {
        let t = timeline();
        let day = TimeInterval::with_duration(t[1], TimeDelta::days(1)).unwrap();
        assert_eq!(day.end(), instant("2020-01-02T12:00:00Z"));
        assert!(TimeInterval::with_duration(t[1], TimeDelta::zero()).is_err());
    }
}
