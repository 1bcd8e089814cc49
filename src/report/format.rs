//! Display formatting for currency, rates and section banners

/// Width of banners and table rules
pub const REPORT_WIDTH: usize = 150;

/// Money with thousands separators and `decimals` places, no currency sign
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, amount.abs());
    let grouped = add_thousands_separator(&s);

    // -0.00 prints as 0.00
    if amount < 0.0 && grouped.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Dollar amount with two decimals, e.g. "$1,234.50"
pub fn format_money(amount: f64) -> String {
    format!("${}", format_amount(amount, 2))
}

/// Percentage with two decimals, e.g. "5.15%"
pub fn format_pct(rate: f64) -> String {
    format!("{:.2}%", rate)
}

/// Signed percentage-point difference, e.g. "+0.15%"
pub fn format_pct_diff(diff: f64) -> String {
    format!("{:+.2}%", diff)
}

/// Full-width line of `ch`
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(REPORT_WIDTH)
}

fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match decimal_part {
        Some(dec) => format!("{}.{}", grouped, dec),
        None => grouped,
    }
}
