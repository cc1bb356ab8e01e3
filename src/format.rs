//! Display formatting for amounts, months and dates.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month};

use crate::month::YearMonth;

/// The currency symbol shown in front of amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format `number` as currency with two decimal places, e.g. "₹1,234.50" or "-₹40.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency(&format!("-{CURRENCY_SYMBOL}"))
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return format!("{CURRENCY_SYMBOL}0.00");
    };

    pad_cents(formatted_string)
}

/// numfmt drops trailing zeros from the fraction, e.g. "12.30" is rendered as
/// "12.3", so pad the fraction back out to two digits.
fn pad_cents(mut formatted: String) -> String {
    match formatted.rfind('.') {
        Some(point) => {
            let digits = formatted.len() - point - 1;
            for _ in digits..2 {
                formatted.push('0');
            }
        }
        None => formatted.push_str(".00"),
    }

    formatted
}

/// Format a transaction amount with an explicit sign, e.g. "+₹100.00" or "-₹40.00".
pub fn format_signed_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };

    format!("{sign}{}", format_currency(amount.abs()))
}

/// Format a month for chart labels, e.g. "Jan 2024".
pub fn format_month_label(month: YearMonth) -> String {
    format!("{} {}", month_abbrev(month.month()), month.year())
}

/// Format a date for the transaction list, e.g. "15 Jan 2024".
pub fn format_date(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_abbrev(date.month()),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        format::{
            format_currency, format_date, format_month_label, format_signed_amount, pad_cents,
        },
        month::YearMonth,
    };

    #[test]
    fn zero_is_formatted_with_cents() {
        assert_eq!(format_currency(0.0), "₹0.00");
    }

    #[test]
    fn negative_amounts_have_leading_minus() {
        assert!(format_currency(-40.0).starts_with("-₹"));
        assert!(format_currency(-40.0).ends_with(".00"));
    }

    #[test]
    fn always_shows_two_decimal_places() {
        assert!(format_currency(12.3).ends_with(".30"));
        assert!(format_currency(12.34).ends_with(".34"));
    }

    #[test]
    fn pads_missing_cents() {
        assert_eq!(pad_cents("₹12.3".to_owned()), "₹12.30");
        assert_eq!(pad_cents("₹12".to_owned()), "₹12.00");
        assert_eq!(pad_cents("₹12.34".to_owned()), "₹12.34");
    }

    #[test]
    fn signed_amounts_show_direction() {
        assert!(format_signed_amount(100.0).starts_with("+₹"));
        assert!(format_signed_amount(-40.0).starts_with("-₹"));
        assert!(!format_signed_amount(-40.0).starts_with("--"));
    }

    #[test]
    fn month_labels_use_short_month_names() {
        assert_eq!(format_month_label(YearMonth::new(2024, Month::January)), "Jan 2024");
        assert_eq!(format_month_label(YearMonth::new(2023, Month::December)), "Dec 2023");
    }

    #[test]
    fn dates_are_day_month_year() {
        assert_eq!(format_date(date!(2024 - 01 - 15)), "15 Jan 2024");
    }
}
