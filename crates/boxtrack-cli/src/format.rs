//! Display helpers shared by the report commands.

/// Group an integer amount with thousands separators: `1234567` → `"1,234,567"`.
pub(crate) fn amount(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Round a floating-point amount to whole units and group its digits.
pub(crate) fn amount_f64(value: f64) -> String {
    group_digits(&format!("{value:.0}"))
}

/// Signed amount, e.g. the gap to a target that may already be passed.
pub(crate) fn signed_amount(value: i64) -> String {
    group_digits(&value.to_string())
}

/// Render an amount in `億` (×10⁸) with two decimals: `428952000` → `"4.29億"`.
pub(crate) fn yi(value: f64) -> String {
    format!("{:.2}億", value / 100_000_000.0)
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn yi_u64(value: u64) -> String {
    yi(value as f64)
}

pub(crate) fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub(crate) fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| v.to_string())
}

fn group_digits(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
