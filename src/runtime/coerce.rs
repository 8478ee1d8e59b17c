// Lenient text-to-value coercion
//
// Numeric coercion mirrors the conventional atoi/atof contract: skip
// leading whitespace, take an optional sign, parse the longest valid
// numeric prefix, and yield zero when no prefix exists. Malformed numeric
// text silently degrades instead of failing, so a malformed default
// behaves exactly like a malformed runtime value.

/// Copies a config value verbatim into an owned string.
pub fn coerce_string(text: &str) -> String {
    text.to_string()
}

/// Coerces text to a signed integer by parsing its leading numeric prefix.
///
/// Non-numeric input yields 0; a value whose digits exceed the `i64` range
/// saturates rather than wrapping.
pub fn coerce_int(text: &str) -> i64 {
    let bytes = text.as_bytes();
    let mut i = skip_leading_whitespace(bytes);

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut saw_digit = false;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        saw_digit = true;
        let digit = (b - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
        i += 1;
    }

    if saw_digit { value } else { 0 }
}

/// Coerces text to a floating-point value by parsing its leading numeric
/// prefix. Non-numeric input yields 0.0.
pub fn coerce_double(text: &str) -> f64 {
    let len = numeric_prefix_len(text);
    if len == 0 {
        return 0.0;
    }
    text[..len].trim_start().parse::<f64>().unwrap_or(0.0)
}

/// Returns the byte length of the leading numeric prefix of `text`,
/// including any leading whitespace and sign, or 0 when no digits are
/// found. Shared by the double coercion and the schema validator.
pub fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = skip_leading_whitespace(bytes);

    if matches!(bytes.get(i), Some(b'-') | Some(b'+')) {
        i += 1;
    }

    let int_digits = count_digits(bytes, i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(bytes, i + 1);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    // Exponent part only counts when digits follow the marker.
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'-') | Some(b'+')) {
            j += 1;
        }
        let exp_digits = count_digits(bytes, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn skip_leading_whitespace(bytes: &[u8]) -> usize {
    let mut i = 0;
    while matches!(bytes.get(i), Some(b' ') | Some(b'\t')) {
        i += 1;
    }
    i
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    let mut n = 0;
    while bytes.get(start + n).is_some_and(|b| b.is_ascii_digit()) {
        n += 1;
    }
    n
}
