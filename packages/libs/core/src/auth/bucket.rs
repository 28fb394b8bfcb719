//! 시간 버킷
//!
//! 토큰 파생에 쓰이는 시(hour) 단위 UTC 구간입니다.

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

/// 시 단위로 잘라낸 시각
///
/// (연도, 연중 일자, 시) 세 값으로 식별됩니다. 토큰 유효성은 초 단위 근접도가 아니라
/// 버킷 동일성으로 판정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeBucket {
    start: NaiveDateTime,
}

impl TimeBucket {
    /// 주어진 시각이 속한 버킷
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let naive = instant.naive_utc();
        let start = naive.date().and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(naive.hour()));
        Self { start }
    }

    /// 한 시간 앞 버킷
    pub fn previous(&self) -> Self {
        Self {
            start: self.start - TimeDelta::hours(1),
        }
    }

    /// 한 시간 뒤 버킷
    pub fn next(&self) -> Self {
        Self {
            start: self.start + TimeDelta::hours(1),
        }
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// 1부터 시작하는 연중 일자
    pub fn day_of_year(&self) -> u32 {
        self.start.ordinal()
    }

    pub fn hour(&self) -> u32 {
        self.start.hour()
    }

    /// 버킷 시작 시각
    pub fn start(&self) -> DateTime<Utc> {
        self.start.and_utc()
    }
}

/// 현재 시각 공급자
///
/// 테스트에서 버킷 경계를 고정하기 위해 주입합니다.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 고정 시계 (테스트용)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncates_to_hour() {
        let bucket = TimeBucket::containing(Utc.with_ymd_and_hms(2024, 3, 1, 14, 59, 59).unwrap());

        assert_eq!(bucket.year(), 2024);
        assert_eq!(bucket.day_of_year(), 61);
        assert_eq!(bucket.hour(), 14);
        assert_eq!(bucket.start(), Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap());
    }

    #[test]
    fn test_same_hour_same_bucket() {
        let a = TimeBucket::containing(Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap());
        let b = TimeBucket::containing(Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 12).unwrap());
        let c = TimeBucket::containing(Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap());

        assert_eq!(a, b);
        assert_ne!(b, c);
        assert_eq!(c.previous(), b);
        assert_eq!(b.next(), c);
    }

    #[test]
    fn test_previous_crosses_year_boundary() {
        let bucket = TimeBucket::containing(Utc.with_ymd_and_hms(2025, 1, 1, 0, 10, 0).unwrap());
        let previous = bucket.previous();

        assert_eq!(previous.year(), 2024);
        // 2024년은 윤년
        assert_eq!(previous.day_of_year(), 366);
        assert_eq!(previous.hour(), 23);
        assert_eq!(previous.next(), bucket);
    }

    #[test]
    fn test_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        assert_eq!(FixedClock(at).now(), at);
    }
}
