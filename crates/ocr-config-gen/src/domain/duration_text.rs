//! # Text Durations
//!
//! Plugin configs carry some durations as text such as `"1h0m0s"`, `"2m0s"`,
//! `"30s"` or `"100ms"`. Nodes parse these with their own duration grammar,
//! so the canonical form has to be reproduced exactly:
//!
//! - zero is `0s`
//! - below one second the largest of `ns`, `µs`, `ms` that fits is used
//! - otherwise `h` and `m` components are emitted once a larger unit is present,
//!   seconds always, with fractional digits only when non-zero

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};
use std::fmt::Write as _;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// `serde_with` adapter for text durations.
pub struct DurationText;

impl SerializeAs<Duration> for DurationText {
    fn serialize_as<S: Serializer>(source: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_duration(*source))
    }
}

impl<'de> DeserializeAs<'de, Duration> for DurationText {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_duration(&text).map_err(D::Error::custom)
    }
}

/// Render a duration in canonical text form.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (scale, unit) = if nanos < NANOS_PER_MICRO {
            (1, "ns")
        } else if nanos < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        return format!("{}{}", decimal(nanos, scale), unit);
    }

    let hours = nanos / NANOS_PER_HOUR;
    let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = nanos % NANOS_PER_MINUTE;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{}s", decimal(seconds, NANOS_PER_SEC));
    out
}

/// `value / scale` with trailing fractional zeros trimmed.
fn decimal(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Parse text produced by [`format_duration`] (and other sums of unit terms
/// such as `1h30m` or `1.5s`).
pub fn parse_duration(text: &str) -> Result<Duration, String> {
    if text == "0" {
        return Ok(Duration::ZERO);
    }
    if text.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total: u128 = 0;
    let mut rest = text;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration {text:?}"))?;
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() {
            return Err(format!("missing number in duration {text:?}"));
        }

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let scale = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "s" => NANOS_PER_SEC,
            "m" => NANOS_PER_MINUTE,
            "h" => NANOS_PER_HOUR,
            other => return Err(format!("unknown unit {other:?} in duration {text:?}")),
        };

        total = total
            .checked_add(scaled(number, scale).ok_or_else(|| format!("invalid duration {text:?}"))?)
            .ok_or_else(|| format!("duration {text:?} overflows"))?;
        rest = tail;
    }

    let secs =
        u64::try_from(total / NANOS_PER_SEC).map_err(|_| format!("duration {text:?} overflows"))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

/// `number * scale` for a decimal `number`, truncating sub-nanosecond digits.
fn scaled(number: &str, scale: u128) -> Option<u128> {
    let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut value = whole.checked_mul(scale)?;

    let mut place = scale;
    for digit in frac.chars() {
        let digit = digit.to_digit(10)? as u128;
        place /= 10;
        value = value.checked_add(digit * place)?;
    }
    Some(value)
}
