// ./src/size.rs
//! Human-readable storage sizes
//!
//! Sizes use binary multiples: `1KB` is 1024 bytes. A bare number, or a
//! number followed by anything that is not a recognised unit, is read as a
//! byte count (`"512B"` is 512 bytes).

const KB: f64 = (1u64 << 10) as f64;
const MB: f64 = (1u64 << 20) as f64;
const GB: f64 = (1u64 << 30) as f64;
const TB: f64 = (1u64 << 40) as f64;
const PB: f64 = (1u64 << 50) as f64;

fn unit_multiplier(unit: &str) -> Option<f64> {
    match unit.to_ascii_lowercase().as_str() {
        "kb" => Some(KB),
        "mb" => Some(MB),
        "gb" => Some(GB),
        "tb" => Some(TB),
        "pb" => Some(PB),
        _ => None,
    }
}

/// Splits an optional sign followed by `digits[.digits]` off the front of `s`.
fn split_number(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == int_start {
        return None;
    }

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
        }
    }

    Some(s.split_at(end))
}

/// `<number> *<unit>`, whole string, no surrounding whitespace.
fn parse_with_unit(s: &str) -> Option<i64> {
    let (number, rest) = split_number(s)?;
    let multiplier = unit_multiplier(rest.trim_start_matches(' '))?;
    let value: f64 = number.parse().ok()?;
    Some((value * multiplier).floor() as i64)
}

/// Leading integer of the string, ignoring leading whitespace and any trailing text.
fn parse_leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    match s[..end].parse::<i64>() {
        Ok(n) => Some(n),
        // too many digits for i64, clamp like a float conversion would
        Err(_) if bytes[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Parses a human-readable size such as `"512B"`, `"1KB"` or `"1.5 GB"`
/// into a byte count. Returns `None` when the string has no leading number.
pub fn parse_size(input: &str) -> Option<i64> {
    parse_with_unit(input).or_else(|| parse_leading_integer(input))
}

/// A size is usable as an allocation when it is present and strictly positive.
pub fn is_valid_size(size: Option<i64>) -> bool {
    matches!(size, Some(n) if n > 0)
}
