//! Display formatting for unit labels and numeric results

/// Significant-digit precision for the two display contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Headline result and conversion details (6 significant digits)
    Headline,
    /// History rows and chart bar text (4 significant digits)
    Compact,
}

impl Precision {
    pub fn digits(self) -> usize {
        match self {
            Precision::Headline => 6,
            Precision::Compact => 4,
        }
    }
}

/// Human-readable unit label: `"square_meter"` -> `"Square Meter"`.
///
/// Accepts any string. A letter is upper-cased when it starts a word (follows a
/// non-letter) and lower-cased otherwise.
pub fn display_name(unit_id: &str) -> String {
    let mut out = String::with_capacity(unit_id.len());
    let mut prev_is_letter = false;
    for ch in unit_id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Format with `digits` significant digits, `%g` style.
///
/// Fixed notation while the decimal exponent is in `[-4, digits)`, scientific
/// (`1.5e+07`) outside it. Trailing zeros are stripped in both forms.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round once in scientific form to learn the post-rounding exponent
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = strip_trailing_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Shortest round-trip form of an input value, always carrying a decimal
/// point or exponent: `1.0`, `0.25`, `1e+16`, `1.5e-05`.
pub fn format_input(value: f64) -> String {
    if !value.is_finite() {
        return format_significant(value, 1);
    }

    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && (exponent < -4 || exponent >= 16) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Headline precision (6 significant digits)
pub fn format_number(value: f64) -> String {
    format_with(value, Precision::Headline)
}

pub fn format_with(value: f64, precision: Precision) -> String {
    format_significant(value, precision.digits())
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("square_foot"), "Square Foot");
        assert_eq!(display_name("square_meter"), "Square Meter");
        assert_eq!(display_name("kilowatt_hour"), "Kilowatt Hour");
        assert_eq!(display_name("meter"), "Meter");
        assert_eq!(display_name("psi"), "Psi");
    }

    #[test]
    fn test_display_name_any_input() {
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("ALL_CAPS"), "All Caps");
        assert_eq!(display_name("__x"), "  X");
    }

    #[test]
    fn test_format_headline() {
        assert_eq!(format_number(0.001), "0.001");
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(3.785411784), "3.78541");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(1234567.0), "1.23457e+06");
        assert_eq!(format_number(0.00001234), "1.234e-05");
        assert_eq!(format_number(-40.0), "-40");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_with(3.78541178, Precision::Compact), "3.785");
        assert_eq!(format_with(1609.344, Precision::Compact), "1609");
        assert_eq!(format_with(16093.44, Precision::Compact), "1.609e+04");
        assert_eq!(format_with(0.5, Precision::Compact), "0.5");
    }

    #[test]
    fn test_format_rounding_bumps_exponent() {
        // 999999.5 rounds to 1e+06 at six digits
        assert_eq!(format_number(999999.5), "1e+06");
        assert_eq!(format_with(9999.6, Precision::Compact), "1e+04");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_input() {
        assert_eq!(format_input(1.0), "1.0");
        assert_eq!(format_input(2500.0), "2500.0");
        assert_eq!(format_input(0.25), "0.25");
        assert_eq!(format_input(123.456), "123.456");
        assert_eq!(format_input(-0.0), "-0.0");
        assert_eq!(format_input(1e16), "1e+16");
        assert_eq!(format_input(1.5e-5), "1.5e-05");
        assert_eq!(format_input(f64::INFINITY), "inf");
    }
}
