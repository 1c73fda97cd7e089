// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::time::Duration;

/// Longest duration reported in seconds; anything longer is shown in minutes.
const SECONDS_LIMIT: Duration = Duration::from_secs(90);

/// Human-readable wall time: `"1.234 seconds"`, or `"2.50 minutes"` past 90 s.
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed <= SECONDS_LIMIT {
        format!("{:.3} seconds", elapsed.as_secs_f64())
    } else {
        format!("{:.2} minutes", elapsed.as_secs_f64() / 60.0)
    }
}
