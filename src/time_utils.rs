use chrono::{DateTime, Utc};

/// Current timestamp in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO 8601 form used for log entries.
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Seconds elapsed from `start` to `end`, millisecond precision, never negative.
pub fn elapsed_secs(start: &DateTime<Utc>, end: &DateTime<Utc>) -> f64 {
    let ms = (*end - *start).num_milliseconds().max(0);
    ms as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_elapsed_secs() {
        let start = now();
        let end = start + Duration::milliseconds(2_900);
        assert!((elapsed_secs(&start, &end) - 2.9).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed_clamped_when_clock_goes_backwards() {
        let start = now();
        let end = start - Duration::seconds(10);
        assert_eq!(elapsed_secs(&start, &end), 0.0);
    }

    #[test]
    fn test_rfc3339_roundtrip() {
        let dt = now();
        let parsed: DateTime<Utc> = to_rfc3339(&dt).parse().unwrap();
        assert_eq!(dt.timestamp(), parsed.timestamp());
    }
}
