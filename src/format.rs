//! Display formatting for the installment table
//!
//! Currency follows the Brazilian Portuguese convention for the Real:
//! `R$` symbol, `.` thousands separator and `,` before two decimals.

/// Format an amount as Brazilian Real, treating a missing amount as zero
pub fn format_currency(amount: Option<f64>) -> String {
    let value = amount.unwrap_or(0.0);
    if value.is_nan() {
        return "R$ NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}R$ ∞");
    }

    let cents = (value.abs() * 100.0).round();
    let negative = value < 0.0 && cents > 0.0;
    let whole = (cents / 100.0).trunc();
    let fraction = (cents - whole * 100.0) as u64;

    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}R$ {},{fraction:02}",
        group_thousands(&format!("{whole:.0}"))
    )
}

/// Insert `.` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Rewrite an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`
pub fn format_date(iso_date: &str) -> String {
    if iso_date.is_empty() {
        return String::new();
    }
    let mut parts = iso_date.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}/{month}/{year}")
}
