//! Formatting utilities for CLI and export outputs.

/// Render a signed minute delta as `+H시간 MM분` / `-H시간 MM분`.
///
/// The sign is always present, including for zero (`+0시간 00분`), so the
/// column reads uniformly in tables and spreadsheets.
pub fn format_delta(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let abs_m = mins.abs();
    format!("{}{}시간 {:02}분", sign, abs_m / 60, abs_m % 60)
}

/// Parse a string produced by [`format_delta`] back into signed minutes.
///
/// Returns `None` for anything that is not a well-formed delta (status
/// strings like `출근만` or `기록 누락` end up in the same column).
pub fn parse_delta(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, rest) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => return None,
    };

    let (hours_str, rest) = rest.split_once("시간")?;
    let minutes_str = rest.trim().strip_suffix("분")?;

    let hours: i64 = hours_str.trim().parse().ok()?;
    let minutes: i64 = minutes_str.trim().parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}
