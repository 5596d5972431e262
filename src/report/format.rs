//! Number formatting helpers for the text report.

/// Group the digits of an integer in threes: 18356706 → "18,356,706".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Scientific notation with a signed, at least two-digit exponent:
/// 0.0418 → "4.18e-02".
pub fn scientific(x: f64, precision: usize) -> String {
    let s = format!("{:.*e}", precision, x);
    if let Some((mantissa, exp)) = s.split_once('e') {
        if let Ok(e) = exp.parse::<i32>() {
            let sign = if e < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", e.abs());
        }
    }
    // inf / NaN
    s
}

/// A positive number as mantissa×10^exp: 2e9 → "2×10^9", 1e9 → "10^9".
pub fn power_of_ten(x: f64) -> String {
    if !(x.is_finite() && x > 0.0) {
        return x.to_string();
    }
    let mut exp = x.log10().floor() as i32;
    let mut mantissa = (x / 10f64.powi(exp) * 100.0).round() / 100.0;
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }
    if mantissa == 1.0 {
        format!("10^{exp}")
    } else {
        format!("{mantissa}×10^{exp}")
    }
}
