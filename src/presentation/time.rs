use chrono::{DateTime, Utc};

/// Formats an RFC 3339 timestamp as a short relative-time string
/// ("3d ago", "just now"). Unparseable input yields "unknown" rather than an
/// error: a garbled date should not keep a row from rendering.
pub fn from_now(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => relative_between(parsed.with_timezone(&Utc), Utc::now()),
        Err(_) => "unknown".to_string(),
    }
}

fn relative_between(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(then);

    if duration.num_days() > 365 {
        format!("{}y ago", duration.num_days() / 365)
    } else if duration.num_days() > 30 {
        format!("{}mo ago", duration.num_days() / 30)
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}
