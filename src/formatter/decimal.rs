/// Formats `value` with exactly `digits` decimals, `,` as the thousands
/// separator and `.` as the decimal point, independent of the locale.
///
/// Ties round half to even. A value that rounds to zero is printed without a
/// sign.
pub fn format_grouped(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let plain = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let is_zero = plain.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if value < 0.0 && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
