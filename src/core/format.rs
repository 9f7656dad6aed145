//! Canonical float formatting.
//!
//! Identifiers embed voltages as text, so the exact bytes matter. Floats are
//! written as the shortest decimal that parses back to the same `f64`, laid
//! out like Python's `repr(float)`:
//!
//! - fixed notation with at least one fractional digit when the decimal
//!   exponent is in `-4..16` (`1.0`, `0.8`, `0.0001`)
//! - scientific notation otherwise, with a signed exponent of at least two
//!   digits (`1e+16`, `1.5e-05`)
//! - `nan`, `inf`, `-inf` and `-0.0` for the special values

/// Format a float in the canonical identifier form.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.234e-5"
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exponent) {
        fixed(&digits, exponent)
    } else {
        exponential(&digits, exponent)
    };

    format!("{}{}", sign, body)
}

fn fixed(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let padding = "0".repeat(int_len - digits.len());
        format!("{}{}.0", digits, padding)
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn exponential(digits: &str, exponent: i32) -> String {
    let (head, tail) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    if tail.is_empty() {
        format!("{}e{}{:02}", head, sign, exponent.abs())
    } else {
        format!("{}.{}e{}{:02}", head, tail, sign, exponent.abs())
    }
}
