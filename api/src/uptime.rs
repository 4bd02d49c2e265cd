use std::{fmt::Write, time::Duration};

/// Formats a duration the way Go's `time.Duration` prints, e.g. `1h2m3.5s`,
/// `42.1ms`, `900ns`. Sub-second durations use a single unit; longer ones
/// use hours, minutes and fractional seconds with trailing zeros dropped.
pub fn format_uptime(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", decimal(nanos, 6));
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = u128::from(total_secs % 60) * 1_000_000_000 + u128::from(d.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    out.push_str(&decimal(seconds, 9));
    out.push('s');
    out
}

/// `value / 10^scale` with trailing fractional zeros dropped.
fn decimal(value: u128, scale: u32) -> String {
    let unit = 10u128.pow(scale);
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:0width$}", width = scale as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_units() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
        assert_eq!(format_uptime(Duration::from_nanos(900)), "900ns");
        assert_eq!(format_uptime(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_uptime(Duration::from_micros(42_100)), "42.1ms");
        assert_eq!(format_uptime(Duration::from_millis(250)), "250ms");
    }

    #[test]
    fn seconds_minutes_hours() {
        assert_eq!(format_uptime(Duration::from_secs(1)), "1s");
        assert_eq!(format_uptime(Duration::from_millis(3_500)), "3.5s");
        assert_eq!(format_uptime(Duration::from_secs(62)), "1m2s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(
            format_uptime(Duration::new(26 * 3600 + 3 * 60 + 4, 1)),
            "26h3m4.000000001s"
        );
    }
}
