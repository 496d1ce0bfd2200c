use chrono::{DateTime, Utc};

/// Formats the time elapsed between two timestamps, e.g. `"0.148s"`.
pub fn format_duration(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> String {
    let millis = (ended_at - started_at).num_milliseconds();
    format!("{:.3}s", millis as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_whole_seconds() {
        let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let ended = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 2).unwrap();
        assert_eq!(format_duration(started, ended), "2.000s");
    }

    #[test]
    fn test_milliseconds() {
        let started = Utc.timestamp_millis_opt(1_000).unwrap();
        let ended = Utc.timestamp_millis_opt(1_148).unwrap();
        assert_eq!(format_duration(started, ended), "0.148s");
    }

    #[test]
    fn test_same_instant() {
        let at = Utc.timestamp_millis_opt(5_000).unwrap();
        assert_eq!(format_duration(at, at), "0.000s");
    }
}
