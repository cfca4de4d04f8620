//! Compact human-readable durations for table cells
//!
//! Same single-unit granularity cluster tooling uses for age columns, so
//! "2h" here reads the same as it does in kubectl output.

use chrono::Duration;

/// Format an elapsed duration as a short string ("47s", "8m30s", "2h", "30h",
/// "3d4h", "2y").
///
/// Total over any input: a negative duration is formatted as its magnitude.
pub fn human_duration(d: Duration) -> String {
    let seconds = d.num_seconds().unsigned_abs();

    if seconds < 60 * 2 {
        return format!("{}s", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 10 {
        let s = seconds % 60;
        if s == 0 {
            return format!("{}m", minutes);
        }
        return format!("{}m{}s", minutes, s);
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = seconds / 3600;
    if hours < 8 {
        let m = minutes % 60;
        if m == 0 {
            return format!("{}h", hours);
        }
        return format!("{}h{}m", hours, m);
    }
    if hours < 48 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if hours < 24 * 8 {
        let h = hours % 24;
        if h == 0 {
            return format!("{}d", days);
        }
        return format!("{}d{}h", days, h);
    }
    if days < 365 * 2 {
        return format!("{}d", days);
    }

    let years = days / 365;
    if days < 365 * 8 {
        let dy = days % 365;
        if dy == 0 {
            return format!("{}y", years);
        }
        return format!("{}y{}d", years, dy);
    }
    format!("{}y", years)
}
