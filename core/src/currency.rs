//! Indian rupee display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

const RUPEE: char = '₹';

/// Render `amount` the way the `en-IN` locale renders INR: `₹12,34,567.80`.
///
/// The amount is taken at its shortest decimal form, so `7e28` prints as
/// seven followed by zeros. Negative amounts that round to zero keep their
/// sign (`-₹0.00`); an exact `-0.0` does not. Missing and non-finite amounts
/// render as `₹0.00`, as do amounts too large for a `Decimal`.
pub fn format_currency_inr(amount: Option<f64>) -> String {
    let (negative, mut abs) = amount
        .filter(|a| a.is_finite())
        .and_then(|a| a.to_string().parse::<Decimal>().ok().map(|d| (a < 0.0, d.abs())))
        .unwrap_or((false, Decimal::ZERO));
    abs = abs.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    abs.rescale(2);

    let text = abs.to_string();
    let (units, paise) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut out = String::with_capacity(text.len() + 8);
    if negative {
        out.push('-');
    }
    out.push(RUPEE);
    out.push_str(&group_indian(units));
    out.push('.');
    out.push_str(paise);
    out
}

/// Lakh/crore grouping: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    if !head.is_empty() {
        groups.push(head);
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_currency_inr(Some(1234.5)), "₹1,234.50");
    }

    #[test]
    fn missing_amount_is_zero() {
        assert_eq!(format_currency_inr(None), "₹0.00");
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(format_currency_inr(Some(f64::NAN)), "₹0.00");
        assert_eq!(format_currency_inr(Some(f64::INFINITY)), "₹0.00");
        assert_eq!(format_currency_inr(Some(f64::NEG_INFINITY)), "₹0.00");
    }

    #[test]
    fn small_amounts_are_ungrouped() {
        assert_eq!(format_currency_inr(Some(0.0)), "₹0.00");
        assert_eq!(format_currency_inr(Some(7.0)), "₹7.00");
        assert_eq!(format_currency_inr(Some(999.0)), "₹999.00");
    }

    #[test]
    fn lakh_and_crore_grouping() {
        assert_eq!(format_currency_inr(Some(1_234_567.8)), "₹12,34,567.80");
        assert_eq!(format_currency_inr(Some(100_000.0)), "₹1,00,000.00");
        assert_eq!(format_currency_inr(Some(12_345_678_901.0)), "₹12,34,56,78,901.00");
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(format_currency_inr(Some(999.999)), "₹1,000.00");
        assert_eq!(format_currency_inr(Some(10.125)), "₹10.13");
    }

    #[test]
    fn negative_sign_precedes_symbol() {
        assert_eq!(format_currency_inr(Some(-1500.0)), "-₹1,500.00");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_currency_inr(Some(-0.0)), "₹0.00");
    }

    #[test]
    fn tiny_negative_keeps_sign() {
        assert_eq!(format_currency_inr(Some(-0.001)), "-₹0.00");
    }

    #[test]
    fn large_amount_uses_shortest_form() {
        assert_eq!(
            format_currency_inr(Some(7.0e28)),
            "₹70,00,00,00,00,00,00,00,00,00,00,00,00,000.00"
        );
    }

    #[test]
    fn out_of_range_amount_is_zero() {
        assert_eq!(format_currency_inr(Some(1.0e30)), "₹0.00");
    }

    #[test]
    fn midpoint_of_shortest_form_rounds_up() {
        assert_eq!(format_currency_inr(Some(1.005)), "₹1.01");
    }

    #[test]
    fn grouping_helper() {
        assert_eq!(group_indian("1"), "1");
        assert_eq!(group_indian("1234"), "1,234");
        assert_eq!(group_indian("12345"), "12,345");
        assert_eq!(group_indian("123456"), "1,23,456");
    }
}
