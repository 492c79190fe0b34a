//! Field formatting: raw cell values and field names to display strings.
//!
//! Everything here is pure and total. Malformed values never panic, they
//! fall back to their plain text form.

mod currency;
mod header;

use serde_json::{Number, Value};

pub use currency::format_inr;
pub use header::humanize_header;

/// True when values of `field` are rupee amounts.
///
/// Matches on the raw key, case-insensitively.
pub fn is_currency_field(field: &str) -> bool {
    let field = field.to_lowercase();
    field.contains("price") || field.contains("_inr")
}

/// Display string for a single cell of column `field`.
pub fn format_value(field: &str, value: &Value) -> String {
    if is_currency_field(field) {
        if let Some(amount) = as_amount(value) {
            return format_inr(amount);
        }
    }
    plain(value)
}

/// Plain string form: numbers as-is, strings verbatim, null as empty.
pub fn plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => plain_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn plain_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => js_number(f),
        None => n.to_string(),
    }
}

/// Number to string the way JavaScript does it: plain decimals in
/// `[1e-6, 1e21)`, exponent form with an explicit sign outside that range.
fn js_number(f: f64) -> String {
    let magnitude = f.abs();
    if f == 0.0 || !f.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return if f == 0.0 { String::from("0") } else { f.to_string() };
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

fn as_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("price", true)]
    #[case("Resale Price (INR)", true)]
    #[case("resale_price_inr", true)]
    #[case("cost_INR", true)]
    #[case("brand", false)]
    #[case("inr", false)]
    #[case("origin_country", false)]
    fn test_is_currency_field(#[case] field: &str, #[case] expected: bool) {
        assert_eq!(is_currency_field(field), expected);
    }

    #[test]
    fn test_currency_example() {
        let out = format_value("Resale Price (INR)", &json!(149934.18));
        assert!(out.contains('₹'));
        assert_eq!(out, "₹1,49,934.18");
    }

    #[test]
    fn test_currency_field_numeric_string() {
        assert_eq!(format_value("price", &json!("24999")), "₹24,999.00");
    }

    #[rstest]
    #[case(json!("not available"), "not available")]
    #[case(json!(null), "")]
    #[case(json!(""), "")]
    #[case(json!("NaN"), "NaN")]
    #[case(json!(true), "true")]
    fn test_currency_field_malformed_passes_through(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(format_value("resale_price_inr", &value), expected);
    }

    #[rstest]
    #[case(json!("Bajaj"), "Bajaj")]
    #[case(json!(2019), "2019")]
    #[case(json!(2019.0), "2019")]
    #[case(json!(68.84), "68.84")]
    #[case(json!(-3), "-3")]
    #[case(json!(null), "")]
    #[case(json!(1e21), "1e+21")]
    #[case(json!(1.5e22), "1.5e+22")]
    #[case(json!(1e-7), "1e-7")]
    #[case(json!(-2.5e-8), "-2.5e-8")]
    #[case(json!(123456789012.5), "123456789012.5")]
    #[case(json!(-0.0), "0")]
    #[case(json!([1, 2]), "[1,2]")]
    fn test_plain_fields(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(format_value("model", &value), expected);
    }

    #[test]
    fn test_format_is_pure() {
        let value = json!(131100);
        let first = format_value("price_inr", &value);
        let second = format_value("price_inr", &value);
        assert_eq!(first, second);
        assert_eq!(first, "₹1,31,100.00");
    }
}
