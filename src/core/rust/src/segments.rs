/* src/core/rust/src/segments.rs */

// Path splitting and the browser-style string coercions the classifier relies on.

/// Split a pathname on `/`, dropping the empty pieces left by leading,
/// trailing or doubled slashes. No percent-decoding is applied.
pub fn split_segments(pathname: &str) -> Vec<&str> {
  pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// String length in UTF-16 code units, matching `String.prototype.length`.
pub fn js_length(s: &str) -> usize {
  s.encode_utf16().count()
}

/// True when `to_number` yields anything other than NaN.
pub fn is_numeric(s: &str) -> bool {
  !to_number(s).is_nan()
}

/// Convert a string to a number with the rules of `Number(string)`.
///
/// Surrounding whitespace is ignored and whitespace-only input yields `0`.
/// Accepted forms are `0x`/`0o`/`0b` integer literals, optionally signed
/// `Infinity`, and optionally signed decimal literals with an optional
/// exponent. Everything else yields NaN.
pub fn to_number(s: &str) -> f64 {
  let trimmed = s.trim_matches(is_js_whitespace);
  if trimmed.is_empty() {
    return 0.0;
  }
  if let Some(value) = parse_radix_literal(trimmed) {
    return value;
  }
  parse_decimal_literal(trimmed).unwrap_or(f64::NAN)
}

fn is_js_whitespace(c: char) -> bool {
  matches!(
    c,
    '\u{0009}'
      | '\u{000A}'
      | '\u{000B}'
      | '\u{000C}'
      | '\u{000D}'
      | '\u{0020}'
      | '\u{00A0}'
      | '\u{1680}'
      | '\u{2000}'..='\u{200A}'
      | '\u{2028}'
      | '\u{2029}'
      | '\u{202F}'
      | '\u{205F}'
      | '\u{3000}'
      | '\u{FEFF}'
  )
}

/// `None` when `s` has no radix prefix; `Some(NaN)` when the prefix is
/// followed by invalid or missing digits.
fn parse_radix_literal(s: &str) -> Option<f64> {
  let bytes = s.as_bytes();
  if bytes.len() < 2 || bytes[0] != b'0' {
    return None;
  }
  let radix = match bytes[1] {
    b'x' | b'X' => 16,
    b'o' | b'O' => 8,
    b'b' | b'B' => 2,
    _ => return None,
  };
  let digits = &s[2..];
  if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
    return Some(f64::NAN);
  }
  if let Ok(value) = u128::from_str_radix(digits, radix) {
    return Some(value as f64);
  }
  // Wider than u128: accumulate in floating point
  let value = digits
    .chars()
    .filter_map(|c| c.to_digit(radix))
    .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
  Some(value)
}

fn parse_decimal_literal(s: &str) -> Option<f64> {
  let (negative, unsigned) = match s.as_bytes().first() {
    Some(b'+') => (false, &s[1..]),
    Some(b'-') => (true, &s[1..]),
    _ => (false, s),
  };
  let magnitude = if unsigned == "Infinity" {
    f64::INFINITY
  } else if is_decimal_literal(unsigned) {
    unsigned.parse::<f64>().ok()?
  } else {
    return None;
  };
  Some(if negative { -magnitude } else { magnitude })
}

/// `digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit on
/// either side of the dot. Rejects the words `inf`/`nan` that `f64::from_str`
/// would otherwise accept.
fn is_decimal_literal(s: &str) -> bool {
  let bytes = s.as_bytes();
  let mut i = skip_digits(bytes, 0);
  let mut mantissa_digits = i;
  if bytes.get(i) == Some(&b'.') {
    let frac_end = skip_digits(bytes, i + 1);
    mantissa_digits += frac_end - (i + 1);
    i = frac_end;
  }
  if mantissa_digits == 0 {
    return false;
  }
  if matches!(bytes.get(i), Some(b'e' | b'E')) {
    i += 1;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
      i += 1;
    }
    let exp_end = skip_digits(bytes, i);
    if exp_end == i {
      return false;
    }
    i = exp_end;
  }
  i == bytes.len()
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
  while bytes.get(i).is_some_and(u8::is_ascii_digit) {
    i += 1;
  }
  i
}
