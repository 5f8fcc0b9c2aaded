//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format used for user-facing timestamps, e.g. `3:04:05 PM`.
const TIME_OF_DAY_FORMAT: &str = "%-I:%M:%S %p";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        get_timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Get current Unix timestamp (milliseconds)
pub fn get_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as a time of day in the local time zone.
pub fn format_time_of_day(timestamp_millis: i64) -> String {
    format_time_of_day_in(timestamp_millis, &Local)
}

/// Format a Unix timestamp (milliseconds) as a time of day in the given time zone.
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn format_time_of_day_in<Tz>(timestamp_millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_millis).unwrap_or_default();
    utc.with_timezone(tz).format(TIME_OF_DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_non_zero_timestamp() {
        // テスト項目: SystemClock が 0 以外のタイムスタンプを返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp = clock.now_millis();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_system_clock_returns_increasing_timestamps() {
        // テスト項目: SystemClock が呼び出すたびに増加するタイムスタンプを返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp1 = clock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert!(timestamp2 >= timestamp1);
    }

    #[test]
    fn test_fixed_clock_returns_consistent_timestamp() {
        // テスト項目: FixedClock が複数回呼び出しても同じタイムスタンプを返す
        // given (前提条件):
        let fixed_time = 9876543210987;
        let clock = FixedClock::new(fixed_time);

        // when (操作):
        let timestamp1 = clock.now_millis();
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert_eq!(timestamp1, fixed_time);
        assert_eq!(timestamp2, fixed_time);
    }

    #[test]
    fn test_format_time_of_day_afternoon() {
        // テスト項目: 午後の時刻が 12 時間表記でフォーマットされる
        // given (前提条件):
        // 2023-01-01 15:04:05 UTC
        let timestamp = 1672585445000;

        // when (操作):
        let result = format_time_of_day_in(timestamp, &Utc);

        // then (期待する結果):
        assert_eq!(result, "3:04:05 PM");
    }

    #[test]
    fn test_format_time_of_day_midnight() {
        // テスト項目: 0 時は 12 AM と表記される
        // given (前提条件):
        // 2023-01-01 00:00:09 UTC
        let timestamp = 1672531209000;

        // when (操作):
        let result = format_time_of_day_in(timestamp, &Utc);

        // then (期待する結果):
        assert_eq!(result, "12:00:09 AM");
    }

    #[test]
    fn test_format_time_of_day_in_applies_zone_offset() {
        // テスト項目: 指定したタイムゾーンのオフセットが適用される
        // given (前提条件):
        // 2023-01-01 00:00:00 UTC == 09:00:00 JST
        let timestamp = 1672531200000;
        let jst = chrono::FixedOffset::east_opt(9 * 3600).unwrap();

        // when (操作):
        let result = format_time_of_day_in(timestamp, &jst);

        // then (期待する結果):
        assert_eq!(result, "9:00:00 AM");
    }

    #[test]
    fn test_format_time_of_day_local_is_not_empty() {
        // テスト項目: ローカルタイムゾーンでのフォーマット結果が空でない
        // given (前提条件):
        let timestamp = get_timestamp_millis();

        // when (操作):
        let result = format_time_of_day(timestamp);

        // then (期待する結果):
        assert!(result.ends_with("AM") || result.ends_with("PM"));
    }
}
