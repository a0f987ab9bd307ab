//! Prediction form parsing
//!
//! Field values are parsed the way a browser's `parseFloat` / `parseInt`
//! read them: leading whitespace is skipped, the longest numeric prefix is
//! used, and anything without one becomes not-a-number. There is no range
//! or required-field checking.

use serde::Deserialize;

use crate::client::PredictionInput;

/// Raw form submission, one string per input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionForm {
    #[serde(default)]
    pub transaction_date: String,
    #[serde(default)]
    pub house_age: String,
    #[serde(default)]
    pub distance_to_mrt: String,
    #[serde(default)]
    pub num_convenience_stores: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
}

impl PredictionForm {
    pub fn to_input(&self) -> PredictionInput {
        PredictionInput {
            transaction_date: parse_float(&self.transaction_date),
            house_age: parse_float(&self.house_age),
            distance_to_mrt: parse_float(&self.distance_to_mrt),
            num_convenience_stores: parse_int(&self.num_convenience_stores),
            latitude: parse_float(&self.latitude),
            longitude: parse_float(&self.longitude),
        }
    }
}

/// Parse the longest decimal prefix; NaN when there is none
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse the longest base-10 integer prefix; `None` when there is none
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("2013.5"), 2013.5);
        assert_eq!(parse_float("  24.9abc"), 24.9);
        assert_eq!(parse_float("-121.5"), -121.5);
        assert_eq!(parse_float("+.5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2.5E-1x"), 0.25);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("e5").is_nan());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int(" 3.9"), Some(3));
        assert_eq!(parse_int("-2 stores"), Some(-2));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("three"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn test_form_to_input() {
        let form = PredictionForm {
            transaction_date: "2013.5".into(),
            house_age: "10".into(),
            distance_to_mrt: "500".into(),
            num_convenience_stores: "3".into(),
            latitude: "24.9".into(),
            longitude: "".into(),
        };
        let input = form.to_input();

        assert_eq!(input.house_age, 10.0);
        assert_eq!(input.num_convenience_stores, Some(3));
        assert!(input.longitude.is_nan());
    }
}
