//! Money formatting
//!
//! Amounts are plain `f64` values. They are rendered with en-US digit
//! grouping and a fixed number of fraction digits, e.g. `$1,234.50`.

/// Format an amount with a currency symbol, grouped thousands and a fixed
/// number of fraction digits.
///
/// Negative amounts put the sign before the symbol (`-$12.00`). Amounts that
/// round to zero never carry a sign.
pub fn format_currency(amount: f64, symbol: &str, decimals: usize) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, symbol);
    }

    let digits = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction),
        None => format!("{}{}{}", sign, symbol, group_thousands(whole)),
    }
}

/// Format a gain with an explicit sign: `+$12.00`, `-$12.00`
pub fn format_gain(amount: f64, symbol: &str) -> String {
    let text = format_currency(amount, symbol, 2);
    if amount >= 0.0 {
        format!("+{}", text)
    } else {
        text
    }
}

/// Format an amount with two fraction digits and no grouping: `1234.50`
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Insert a comma between every group of three digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
