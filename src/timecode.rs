/*!
 * Time-code conversion between format text and canonical seconds.
 *
 * Two families are supported:
 * - clock times (`HH:MM:SS,mmm` / `HH:MM:SS.mmm`, optionally `MM:SS.mmm`)
 * - offset times (`12.3s`)
 *
 * Formatting truncates the fractional part instead of rounding it, so
 * `11.9996` becomes `00:00:11,999` rather than carrying into the seconds.
 */

use chrono::{NaiveTime, Timelike};

use crate::errors::{SubtitleError, SubtitleResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// Millisecond separator used by SubRip and DFXP
pub const COMMA: char = ',';

/// Millisecond separator used by WebVTT and TTML clock times
pub const DOT: char = '.';

/// Parse a clock time such as `01:02:03,456` into seconds.
///
/// The part before `separator` is read as a time of day; the part after it is
/// a decimal fraction of a second. `MM:SS` without hours is accepted.
pub fn parse_clock_time(text: &str, separator: char) -> SubtitleResult<f64> {
    let text = text.trim();
    let (clock, fraction) = text
        .split_once(separator)
        .ok_or_else(|| SubtitleError::invalid(format!("missing '{}' in time '{}'", separator, text)))?;

    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubtitleError::invalid(format!("invalid fraction in time '{}'", text)));
    }

    let whole = parse_time_of_day(clock)?;

    // Joining the digits textually keeps 9.03 identical to the literal 9.03
    format!("{}.{}", whole, fraction)
        .parse::<f64>()
        .map_err(|e| SubtitleError::invalid(format!("invalid time '{}': {}", text, e)))
}

/// Seconds since midnight for `HH:MM:SS` or `MM:SS`
pub fn parse_time_of_day(text: &str) -> SubtitleResult<u32> {
    let text = text.trim();
    let normalized = match text.matches(':').count() {
        1 => format!("00:{}", text),
        _ => text.to_string(),
    };

    NaiveTime::parse_from_str(&normalized, "%H:%M:%S")
        .map(|time| time.num_seconds_from_midnight())
        .map_err(|e| SubtitleError::invalid(format!("invalid clock time '{}': {}", text, e)))
}

/// Parse an offset time such as `12.3s` (the unit suffix is optional)
pub fn parse_offset_time(text: &str) -> SubtitleResult<f64> {
    let text = text.trim();
    let number = text.strip_suffix('s').unwrap_or(text);

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(SubtitleError::invalid(format!("non-finite time '{}'", text))),
        Err(e) => Err(SubtitleError::invalid(format!("invalid offset time '{}': {}", text, e))),
    }
}

/// Format seconds as `HH:MM:SS<separator>mmm`.
///
/// Hours come from a time-of-day formatter and wrap every 24 hours.
/// Non-finite input renders as midnight.
pub fn format_clock_time(seconds: f64, separator: char) -> String {
    let (whole, fraction) = split_seconds(seconds, 3);
    let of_day = whole.rem_euclid(SECONDS_PER_DAY) as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(of_day, 0).unwrap_or_default();

    format!("{}{}{}", time.format("%H:%M:%S"), separator, fraction)
}

/// Format seconds as an offset time with one decimal digit, e.g. `1.7s`
pub fn format_offset_time(seconds: f64) -> String {
    let (whole, fraction) = split_seconds(seconds, 1);
    let sign = if seconds < 0.0 && whole == 0 { "-" } else { "" };
    format!("{}{}.{}s", sign, whole, fraction)
}

/// Split into the integer part and the first `digits` fractional digits,
/// taken from the shortest decimal representation and right-padded with zeros.
fn split_seconds(seconds: f64, digits: usize) -> (i64, String) {
    if !seconds.is_finite() {
        return (0, "0".repeat(digits));
    }

    // f64 Display never uses exponent notation
    let repr = seconds.to_string();
    let (integer, decimals) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let whole = integer.parse::<i64>().unwrap_or(0);

    let mut fraction: String = decimals.chars().take(digits).collect();
    while fraction.len() < digits {
        fraction.push('0');
    }

    (whole, fraction)
}
