//! # Report
//!
//! Renders the result line in C's `%.5e` notation: `Sum: 6.62158e+02`.
//!
//! Rust's own `{:.5e}` writes `6.62158e2`, so the exponent is re-rendered with an explicit sign
//! and at least two digits. Non-finite sums are printed the way glibc prints them.

/// `Sum: <value>`, without a trailing newline.
pub fn format_sum(sum: f64) -> String {
    format!("Sum: {}", scientific(sum))
}

/// `value` with 5 fractional digits and a C-style exponent.
pub fn scientific(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rendered = format!("{value:.5e}");
    // Finite values always render as `<mantissa>e<exponent>`.
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_exponents() {
        assert_eq!("6.62158e+02", scientific(662.157_535));
        assert_eq!("1.23456e+08", scientific(123_456_000.0));
        assert_eq!("1.00000e+100", scientific(1e100));
    }

    #[test]
    fn negative_exponents() {
        assert_eq!("1.00000e-05", scientific(0.00001));
        assert_eq!("-2.50000e-03", scientific(-0.0025));
    }

    #[test]
    fn zero() {
        assert_eq!("0.00000e+00", scientific(0.0));
    }

    #[test]
    fn non_finite() {
        assert_eq!("nan", scientific(f64::NAN));
        assert_eq!("-nan", scientific(-f64::NAN));
        assert_eq!("inf", scientific(f64::INFINITY));
        assert_eq!("-inf", scientific(f64::NEG_INFINITY));
    }

    #[test]
    fn result_line() {
        assert_eq!("Sum: 6.71463e+02", format_sum(671.462_947));
    }
}
