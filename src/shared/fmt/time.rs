//! Relative timestamps for activity lists.

use chrono::{DateTime, Utc};

/// Coarse "time ago" label: `3d ago`, `5h ago`, `12m ago`, `Just now`.
///
/// Timestamps in the future read as `Just now`.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    let days = diff.num_days();
    let hours = diff.num_hours();
    let minutes = diff.num_minutes();

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2h ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let now = now();
        assert_eq!(time_ago(now + Duration::minutes(5), now), "Just now");
    }
}
