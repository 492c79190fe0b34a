const RUPEE: char = '₹';

/// Formats an amount as Indian rupees, e.g. `149934.18` as `₹1,49,934.18`.
///
/// Always two fraction digits, rounded half away from zero on the shortest
/// decimal form of `amount` (so `0.125` gives `₹0.13`). The integer part is
/// grouped the Indian way: the last three digits, then pairs. Negative values,
/// including those that round to zero, keep their sign.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let (int_part, frac_part) = round_cents(&amount.abs().to_string());

    let mut out = String::with_capacity(int_part.len() * 2 + 8);
    if amount.is_sign_negative() {
        out.push('-');
    }
    out.push(RUPEE);
    out.push_str(&group_indian(&int_part));
    out.push('.');
    out.push_str(&frac_part);
    out
}

/// Rounds a plain decimal string to two places, ties away from zero.
fn round_cents(decimal: &str) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend((0..2).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let frac_digits = digits.split_off(digits.len() - 2);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac_digits).into_owned(),
    )
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
