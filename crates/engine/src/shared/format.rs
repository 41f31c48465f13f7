/// Форматирует число с разделителями тысяч (запятыми, как en-US)
///
/// # Примеры
/// ```
/// use engine::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Форматирует сумму в денежном стиле en-US с двумя знаками после запятой
///
/// Для валют без известного символа перед суммой ставится ISO-код.
///
/// # Примеры
/// ```
/// use engine::shared::format::format_currency;
/// assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
/// assert_eq!(format_currency(-7.0, "AFN"), "-AFN 7.00");
/// ```
pub fn format_currency(amount: f64, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let body = format!("{}.{:02}", format_number(cents / 100), cents % 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, body),
        None => format!("{}{} {}", sign, currency, body),
    }
}
