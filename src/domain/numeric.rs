/// Reads the longest decimal prefix of `text` and ignores whatever follows,
/// so `"10ft"` reads as 10 and `"4x"` as 4. Leading whitespace is skipped.
/// `Infinity` with an optional sign is accepted. Returns `None` when no
/// number starts the text.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_leading_float("10ft"), Some(10.0));
        assert_eq!(parse_leading_float("10%"), Some(10.0));
        assert_eq!(parse_leading_float("4x"), Some(4.0));
        assert_eq!(parse_leading_float(" 42.5 sq ft"), Some(42.5));
        assert_eq!(parse_leading_float("1.2.3"), Some(1.2));
    }

    #[test]
    fn accepts_partial_decimals_and_exponents() {
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("+7"), Some(7.0));
        assert_eq!(parse_leading_float("-3e2px"), Some(-300.0));
        assert_eq!(parse_leading_float("2E-1"), Some(0.2));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("1e+"), Some(1.0));
    }

    #[test]
    fn infinity_is_spelled_out() {
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity!"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_float("inf"), None);
    }

    #[test]
    fn text_without_a_leading_number_is_rejected() {
        for raw in ["", " ", ".", "-", "+.", "abc", "NaN", "ft10", "e5"] {
            assert_eq!(parse_leading_float(raw), None, "{raw:?}");
        }
    }
}
