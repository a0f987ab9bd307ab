//! Number formatting as a browser prints it
//!
//! `fixed` follows `Number.prototype.toFixed`: the exact binary value is
//! rounded, and an exact tie goes away from zero. `number` follows
//! `Number.prototype.toString`: shortest round-trip digits, exponent form
//! outside `[1e-6, 1e21)`.

/// Largest magnitude `toFixed` prints positionally
const FIXED_LIMIT: f64 = 1e21;

/// Most fraction digits the tie check can scale by without overflowing
const MAX_TIE_DIGITS: usize = 20;

/// `value.toFixed(digits)`
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return number(value);
    }

    match tie_rounded_up(value.abs(), digits) {
        Some(scaled) => {
            let negative = value < 0.0;
            positional(scaled, digits, negative)
        }
        // -0 is not below zero, so it prints unsigned
        None if value == 0.0 => format!("{:.*}", digits, 0.0),
        None => format!("{:.*}", digits, value),
    }
}

/// `String(value)`
pub fn number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..FIXED_LIMIT).contains(&magnitude) {
        return value.to_string();
    }

    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// When `magnitude * 10^digits` lies exactly halfway between two integers,
/// the larger one; `None` otherwise
fn tie_rounded_up(magnitude: f64, digits: usize) -> Option<u128> {
    if digits > MAX_TIE_DIGITS {
        return None;
    }

    let (mantissa, exponent) = decompose(magnitude);
    if mantissa == 0 || exponent >= 0 {
        return None;
    }
    let shift = exponent.unsigned_abs();
    if shift >= 128 {
        return None;
    }

    // twice the scaled value, as an exact integer multiple of 2^-shift
    let doubled = u128::from(mantissa) * 10u128.pow(digits as u32) * 2;
    if doubled % (1u128 << shift) != 0 {
        return None;
    }
    let halves = doubled >> shift;
    if halves % 2 == 1 {
        Some((halves + 1) / 2)
    } else {
        None
    }
}

/// `(m, e)` with `value == m * 2^e` exactly
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);

    if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    }
}

fn positional(scaled: u128, digits: usize, negative: bool) -> String {
    let sign = if negative { "-" } else { "" };
    if digits == 0 {
        return format!("{}{}", sign, scaled);
    }

    let unit = 10u128.pow(digits as u32);
    format!(
        "{}{}.{:0width$}",
        sign,
        scaled / unit,
        scaled % unit,
        width = digits
    )
}
