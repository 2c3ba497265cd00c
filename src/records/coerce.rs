//! Lenient numeric coercion for form input.

use serde::{Deserialize, Deserializer};

use crate::logging::warn;

/// Parse the leading integer in `input`, or 0 if there is none.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits is taken: `"12abc"` is 12, `"3.7"` is 3, `" -4"` is -4.
/// Empty, non-numeric, and out-of-range input all become 0. There are no
/// range checks.
pub fn lenient_int(input: &str) -> i64 {
    match parse_leading_int(input) {
        Some(value) => value,
        None => {
            if !input.trim().is_empty() {
                warn!(input = input, "non-numeric input coerced to 0");
            }
            0
        }
    }
}

fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest.get(..end)?.parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

/// Deserialize an integer field that may be `null` in older data.
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}
