//! Currency table and display formatting for schedule output
//!
//! Currency is a display label only; amounts are never converted.

use serde::Serialize;

use crate::error::LoanError;
use crate::LoanResult;

/// Display metadata for an ISO 4217 currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn currency(code: &'static str, symbol: &'static str, name: &'static str) -> Currency {
    Currency { code, symbol, name }
}

/// Supported display currencies
pub static CURRENCIES: &[Currency] = &[
    currency("EUR", "€", "Euro"),
    currency("USD", "$", "US Dollar"),
    currency("GBP", "£", "British Pound"),
    currency("JPY", "¥", "Japanese Yen"),
    currency("CHF", "CHF", "Swiss Franc"),
    currency("CAD", "C$", "Canadian Dollar"),
    currency("AUD", "A$", "Australian Dollar"),
    currency("SEK", "kr", "Swedish Krona"),
    currency("NOK", "kr", "Norwegian Krone"),
    currency("DKK", "kr", "Danish Krone"),
    currency("PLN", "zł", "Polish Zloty"),
    currency("CZK", "Kč", "Czech Koruna"),
    currency("HUF", "Ft", "Hungarian Forint"),
    currency("RUB", "₽", "Russian Ruble"),
    currency("CNY", "¥", "Chinese Yuan"),
    currency("INR", "₹", "Indian Rupee"),
    currency("KRW", "₩", "South Korean Won"),
    currency("SGD", "S$", "Singapore Dollar"),
    currency("HKD", "HK$", "Hong Kong Dollar"),
    currency("NZD", "NZ$", "New Zealand Dollar"),
    currency("MXN", "$", "Mexican Peso"),
    currency("BRL", "R$", "Brazilian Real"),
    currency("ZAR", "R", "South African Rand"),
    currency("TRY", "₺", "Turkish Lira"),
    currency("ILS", "₪", "Israeli Shekel"),
    currency("AED", "د.إ", "UAE Dirham"),
    currency("SAR", "﷼", "Saudi Riyal"),
    currency("THB", "฿", "Thai Baht"),
    currency("MYR", "RM", "Malaysian Ringgit"),
    currency("IDR", "Rp", "Indonesian Rupiah"),
    currency("PHP", "₱", "Philippine Peso"),
    currency("VND", "₫", "Vietnamese Dong"),
];

/// Look up a currency by ISO code, case-insensitive
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Primary language subtag of a locale ("nl-NL" -> "nl")
fn language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn group_separator(locale: &str, language: &str) -> char {
    let region = locale.split(['-', '_']).nth(1).unwrap_or_default();
    if region.eq_ignore_ascii_case("CH") && matches!(language, "de" | "it") {
        return '\u{2019}';
    }

    match language {
        "nl" | "de" | "es" | "it" | "pt" | "da" | "id" | "tr" => '.',
        "fr" | "sv" | "nb" | "no" | "fi" | "pl" | "cs" | "ru" | "hu" => ' ',
        _ => ',',
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

fn format_with(amount: f64, locale: &str, currency: &Currency) -> String {
    let lang = language(locale);
    let rounded = amount.round();
    let digits = group_thousands(rounded.abs() as u64, group_separator(locale, &lang));

    let spaced = lang == "nl"
        || currency
            .symbol
            .chars()
            .last()
            .is_some_and(|c| c.is_alphabetic());
    let sign = if rounded < 0.0 { "-" } else { "" };

    if spaced {
        format!("{}{} {}", sign, currency.symbol, digits)
    } else {
        format!("{}{}{}", sign, currency.symbol, digits)
    }
}

/// Format an amount rounded to whole units, e.g. `€ 1.432` for `nl-NL`/`EUR`
pub fn format_currency(amount: f64, locale: &str, currency_code: &str) -> LoanResult<String> {
    let currency = find_currency(currency_code)
        .ok_or_else(|| LoanError::UnknownCurrency(currency_code.to_string()))?;
    Ok(format_with(amount, locale, currency))
}

/// Euro amount in Dutch notation
pub fn format_euro(amount: f64) -> String {
    format_with(amount, "nl-NL", &CURRENCIES[0])
}

/// One-decimal percentage, e.g. `2.0%`
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}
