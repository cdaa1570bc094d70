//! Numeric parsing and formatting.
//!
//! Parsing follows the conventional integer syntax: base 0 infers the base
//! from a `0b`/`0o`/`0x` prefix (with a bare leading `0` meaning octal) and
//! permits `_` digit separators; explicit bases 2 through 36 take plain
//! digits only. The bit size (0 meaning 64, or 8/16/32/64) selects the width
//! used for overflow detection.
//!
//! Every parse has a strict form returning `Result` and a permissive
//! `_lossy` sibling that discards the error and returns the zero value.

use std::fmt;

use thiserror::Error;

use crate::Strand;

/// What went wrong while parsing a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumErrorKind {
    /// The text is not valid syntax for the target type.
    Syntax,
    /// The value does not fit the requested bit width.
    Range,
    /// The base argument is outside {0, 2..=36}.
    InvalidBase,
    /// The bit-size argument is not one of the supported widths.
    InvalidBitSize,
}

impl fmt::Display for NumErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "invalid syntax",
            Self::Range => "value out of range",
            Self::InvalidBase => "invalid base",
            Self::InvalidBitSize => "invalid bit size",
        })
    }
}

/// A numeric parse failure, carrying the offending input, the target type
/// name, and the failure kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {input:?} as {target}: {kind}")]
pub struct ParseNumError {
    /// The text that failed to parse.
    pub input: String,
    /// The target type family, e.g. `"integer"` or `"float"`.
    pub target: &'static str,
    /// The failure kind.
    pub kind: NumErrorKind,
}

fn num_err(input: &str, target: &'static str, kind: NumErrorKind) -> ParseNumError {
    ParseNumError {
        input: input.to_owned(),
        target,
        kind,
    }
}

/// A complex value with 64-bit components, for the complex parse/format
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// The real component.
    pub re: f64,
    /// The imaginary component.
    pub im: f64,
}

impl Complex {
    /// Creates a complex value from its components.
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() && !self.im.is_nan() {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// The notation used by the float and complex formatting constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFormat {
    /// Scientific notation (`1.5e2`).
    Exp,
    /// Plain decimal notation (`150`).
    Fixed,
    /// The shortest representation that round-trips; ignores the precision
    /// argument.
    Compact,
}

/// Strips and validates `_` separators: they may appear only between
/// digits.
fn strip_separators(digits: &str, input: &str, target: &'static str) -> Result<String, ParseNumError> {
    let bytes = digits.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_'
            && (i == 0 || i + 1 == bytes.len() || bytes[i - 1] == b'_' || bytes[i + 1] == b'_')
        {
            return Err(num_err(input, target, NumErrorKind::Syntax));
        }
    }
    Ok(digits.chars().filter(|&c| c != '_').collect())
}

/// Parses an unsigned magnitude. `input` is the original text used for
/// error reporting.
fn parse_magnitude(
    digits: &str,
    base: u32,
    input: &str,
    target: &'static str,
) -> Result<u64, ParseNumError> {
    if !(base == 0 || (2..=36).contains(&base)) {
        return Err(num_err(input, target, NumErrorKind::InvalidBase));
    }
    let separators_allowed = base == 0;

    let (digits, base) = if base == 0 {
        let lowered = digits.as_bytes();
        match lowered {
            [b'0', b'x' | b'X', rest @ ..] if !rest.is_empty() => (&digits[2..], 16),
            [b'0', b'o' | b'O', rest @ ..] if !rest.is_empty() => (&digits[2..], 8),
            [b'0', b'b' | b'B', rest @ ..] if !rest.is_empty() => (&digits[2..], 2),
            [b'0', rest @ ..] if !rest.is_empty() => (&digits[1..], 8),
            _ => (digits, 10),
        }
    } else {
        (digits, base)
    };

    let cleaned = if separators_allowed {
        strip_separators(digits, input, target)?
    } else {
        if digits.contains('_') {
            return Err(num_err(input, target, NumErrorKind::Syntax));
        }
        digits.to_owned()
    };
    if cleaned.is_empty() {
        return Err(num_err(input, target, NumErrorKind::Syntax));
    }

    let mut value: u64 = 0;
    for c in cleaned.chars() {
        let digit = c
            .to_digit(base)
            .ok_or_else(|| num_err(input, target, NumErrorKind::Syntax))?;
        value = value
            .checked_mul(u64::from(base))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| num_err(input, target, NumErrorKind::Range))?;
    }
    Ok(value)
}

fn int_width(bits: u32, input: &str, target: &'static str) -> Result<u32, ParseNumError> {
    match bits {
        0 => Ok(64),
        8 | 16 | 32 | 64 => Ok(bits),
        _ => Err(num_err(input, target, NumErrorKind::InvalidBitSize)),
    }
}

fn parse_float_str(s: &str, bits: u32) -> Result<f64, ParseNumError> {
    let value = match bits {
        32 => s.parse::<f32>().map(f64::from),
        64 => s.parse::<f64>(),
        _ => return Err(num_err(s, "float", NumErrorKind::InvalidBitSize)),
    };
    value.map_err(|_| num_err(s, "float", NumErrorKind::Syntax))
}

fn parse_complex_str(s: &str, bits: u32) -> Result<Complex, ParseNumError> {
    let component_bits = match bits {
        64 => 32,
        128 => 64,
        _ => return Err(num_err(s, "complex", NumErrorKind::InvalidBitSize)),
    };

    let body = match s.strip_suffix('i') {
        None => return Ok(Complex::new(parse_float_str(s, component_bits)?, 0.0)),
        Some(body) => body,
    };

    // Split re and im at the last +/- that is neither leading nor an
    // exponent sign.
    let bytes = body.as_bytes();
    let mut split_at = None;
    for i in (1..bytes.len()).rev() {
        if matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E' | b'p' | b'P') {
            split_at = Some(i);
            break;
        }
    }

    match split_at {
        Some(i) => {
            let re = parse_float_str(&body[..i], component_bits)
                .map_err(|_| num_err(s, "complex", NumErrorKind::Syntax))?;
            let im = parse_float_str(&body[i..], component_bits)
                .map_err(|_| num_err(s, "complex", NumErrorKind::Syntax))?;
            Ok(Complex::new(re, im))
        }
        None => {
            let im = parse_float_str(body, component_bits)
                .map_err(|_| num_err(s, "complex", NumErrorKind::Syntax))?;
            Ok(Complex::new(0.0, im))
        }
    }
}

const FORMAT_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn format_magnitude(mut value: u64, base: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut buf = [0u8; 64];
    let mut at = buf.len();
    while value > 0 {
        at -= 1;
        buf[at] = FORMAT_DIGITS[(value % base) as usize];
        value /= base;
    }
    buf[at..].iter().map(|&b| b as char).collect()
}

fn format_float_str(value: f64, format: FloatFormat, precision: Option<usize>) -> String {
    match (format, precision) {
        (FloatFormat::Exp, Some(p)) => format!("{value:.p$e}"),
        (FloatFormat::Exp, None) => format!("{value:e}"),
        (FloatFormat::Fixed, Some(p)) => format!("{value:.p$}"),
        (FloatFormat::Fixed, None) | (FloatFormat::Compact, _) => format!("{value}"),
    }
}

impl Strand {
    /// Strictly parses a signed integer in the given base and bit width.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// assert_eq!(Strand::new("-0x2a").parse_int(0, 64).unwrap(), -42);
    /// assert_eq!(Strand::new("ff").parse_int(16, 16).unwrap(), 255);
    /// assert!(Strand::new("200").parse_int(10, 8).is_err());
    /// ```
    pub fn parse_int(&self, base: u32, bits: u32) -> Result<i64, ParseNumError> {
        const TARGET: &str = "integer";
        let s = &*self.0;
        let width = int_width(bits, s, TARGET)?;
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let magnitude = parse_magnitude(digits, base, s, TARGET)?;
        let positive_max = (1u64 << (width - 1)) - 1;
        if negative {
            if magnitude > positive_max + 1 {
                return Err(num_err(s, TARGET, NumErrorKind::Range));
            }
            Ok((magnitude as i64).wrapping_neg())
        } else {
            if magnitude > positive_max {
                return Err(num_err(s, TARGET, NumErrorKind::Range));
            }
            Ok(magnitude as i64)
        }
    }

    /// [`parse_int`][Self::parse_int], discarding the error; returns `0` on
    /// failure.
    pub fn parse_int_lossy(&self, base: u32, bits: u32) -> i64 {
        self.parse_int(base, bits).unwrap_or_default()
    }

    /// Strictly parses an unsigned integer in the given base and bit width.
    /// No sign is permitted.
    pub fn parse_uint(&self, base: u32, bits: u32) -> Result<u64, ParseNumError> {
        const TARGET: &str = "unsigned integer";
        let s = &*self.0;
        let width = int_width(bits, s, TARGET)?;
        let magnitude = parse_magnitude(s, base, s, TARGET)?;
        let max = if width == 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        if magnitude > max {
            return Err(num_err(s, TARGET, NumErrorKind::Range));
        }
        Ok(magnitude)
    }

    /// [`parse_uint`][Self::parse_uint], discarding the error; returns `0`
    /// on failure.
    pub fn parse_uint_lossy(&self, base: u32, bits: u32) -> u64 {
        self.parse_uint(base, bits).unwrap_or_default()
    }

    /// Parses a base-10, 64-bit signed integer.
    pub fn atoi(&self) -> Result<i64, ParseNumError> {
        self.parse_int(10, 0)
    }

    /// Strictly parses a float; `bits` (32 or 64) selects the precision the
    /// result is rounded through.
    pub fn parse_float(&self, bits: u32) -> Result<f64, ParseNumError> {
        parse_float_str(&self.0, bits)
    }

    /// [`parse_float`][Self::parse_float], discarding the error; returns
    /// `0.0` on failure.
    pub fn parse_float_lossy(&self, bits: u32) -> f64 {
        self.parse_float(bits).unwrap_or_default()
    }

    /// Strictly parses a complex number of the form `N`, `Ni`, or `N±Mi`;
    /// `bits` (64 or 128) selects the component precision.
    pub fn parse_complex(&self, bits: u32) -> Result<Complex, ParseNumError> {
        parse_complex_str(&self.0, bits)
    }

    /// [`parse_complex`][Self::parse_complex], discarding the error; returns
    /// zero on failure.
    pub fn parse_complex_lossy(&self, bits: u32) -> Complex {
        self.parse_complex(bits).unwrap_or_default()
    }

    /// Strictly parses a boolean: `1`, `t`, `T`, `true`, `True`, `TRUE` and
    /// their false counterparts.
    pub fn parse_bool(&self) -> Result<bool, ParseNumError> {
        match &*self.0 {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
            other => Err(num_err(other, "bool", NumErrorKind::Syntax)),
        }
    }

    /// [`parse_bool`][Self::parse_bool], discarding the error; returns
    /// `false` on failure.
    pub fn parse_bool_lossy(&self) -> bool {
        self.parse_bool().unwrap_or_default()
    }

    /// Formats a boolean as `"true"` or `"false"`.
    pub fn format_bool(value: bool) -> Strand {
        Strand::new(if value { "true" } else { "false" })
    }

    /// Formats a signed integer in the given base (2 through 36), using
    /// lowercase digits.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `2..=36`.
    pub fn format_int(value: i64, base: u32) -> Strand {
        assert!((2..=36).contains(&base), "base must be in 2..=36");
        let magnitude = format_magnitude(value.unsigned_abs(), u64::from(base));
        if value < 0 {
            Strand::new(format!("-{magnitude}"))
        } else {
            Strand::new(magnitude)
        }
    }

    /// Formats an unsigned integer in the given base (2 through 36), using
    /// lowercase digits.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `2..=36`.
    pub fn format_uint(value: u64, base: u32) -> Strand {
        assert!((2..=36).contains(&base), "base must be in 2..=36");
        Strand::new(format_magnitude(value, u64::from(base)))
    }

    /// Formats a signed integer in base 10.
    pub fn itoa(value: i64) -> Strand {
        Strand::from_display(value)
    }

    /// Formats a float in the requested notation. `precision` is the number
    /// of digits after the decimal point; `None` uses the shortest form.
    pub fn format_float(value: f64, format: FloatFormat, precision: Option<usize>) -> Strand {
        Strand::new(format_float_str(value, format, precision))
    }

    /// Formats a complex value as `(re+imi)` using the requested float
    /// notation for both components.
    pub fn format_complex(value: Complex, format: FloatFormat, precision: Option<usize>) -> Strand {
        let re = format_float_str(value.re, format, precision);
        let im = format_float_str(value.im, format, precision);
        let sign = if im.starts_with('-') { "" } else { "+" };
        Strand::new(format!("({re}{sign}{im}i)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_zero_infers_from_prefix() {
        assert_eq!(Strand::new("0x2a").parse_int(0, 64).unwrap(), 42);
        assert_eq!(Strand::new("0b101").parse_int(0, 64).unwrap(), 5);
        assert_eq!(Strand::new("0o17").parse_int(0, 64).unwrap(), 15);
        assert_eq!(Strand::new("017").parse_int(0, 64).unwrap(), 15);
        assert_eq!(Strand::new("42").parse_int(0, 64).unwrap(), 42);
        assert_eq!(Strand::new("1_000").parse_int(0, 64).unwrap(), 1000);
    }

    #[test]
    fn explicit_base_takes_plain_digits_only() {
        assert_eq!(Strand::new("z").parse_int(36, 64).unwrap(), 35);
        assert!(Strand::new("1_0").parse_int(10, 64).is_err());
        assert!(Strand::new("0x10").parse_int(10, 64).is_err());
        let err = Strand::new("5").parse_int(1, 64).unwrap_err();
        assert_eq!(err.kind, NumErrorKind::InvalidBase);
        let err = Strand::new("5").parse_int(10, 7).unwrap_err();
        assert_eq!(err.kind, NumErrorKind::InvalidBitSize);
    }

    #[test]
    fn bit_width_bounds_are_exact() {
        assert_eq!(Strand::new("127").parse_int(10, 8).unwrap(), 127);
        assert_eq!(Strand::new("-128").parse_int(10, 8).unwrap(), -128);
        assert_eq!(
            Strand::new("128").parse_int(10, 8).unwrap_err().kind,
            NumErrorKind::Range
        );
        assert_eq!(
            Strand::new("-129").parse_int(10, 8).unwrap_err().kind,
            NumErrorKind::Range
        );
        assert_eq!(Strand::new("255").parse_uint(10, 8).unwrap(), 255);
        assert_eq!(
            Strand::new("256").parse_uint(10, 8).unwrap_err().kind,
            NumErrorKind::Range
        );
        assert_eq!(
            Strand::new("-1").parse_uint(10, 64).unwrap_err().kind,
            NumErrorKind::Syntax
        );
        assert_eq!(
            Strand::new("9223372036854775807").parse_int(10, 0).unwrap(),
            i64::MAX
        );
        assert_eq!(
            Strand::new("-9223372036854775808").parse_int(10, 0).unwrap(),
            i64::MIN
        );
        assert_eq!(
            Strand::new("18446744073709551615").parse_uint(10, 64).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn lossy_forms_return_zero_silently() {
        assert_eq!(Strand::new("abc").parse_int_lossy(10, 64), 0);
        assert_eq!(Strand::new("abc").parse_uint_lossy(10, 64), 0);
        assert_eq!(Strand::new("abc").parse_float_lossy(64), 0.0);
        assert_eq!(Strand::new("abc").parse_complex_lossy(128), Complex::default());
        assert!(!Strand::new("abc").parse_bool_lossy());
    }

    #[test]
    fn complex_forms() {
        assert_eq!(
            Strand::new("1.5+2i").parse_complex(128).unwrap(),
            Complex::new(1.5, 2.0)
        );
        assert_eq!(
            Strand::new("1.5-2i").parse_complex(128).unwrap(),
            Complex::new(1.5, -2.0)
        );
        assert_eq!(Strand::new("3i").parse_complex(128).unwrap(), Complex::new(0.0, 3.0));
        assert_eq!(Strand::new("7").parse_complex(128).unwrap(), Complex::new(7.0, 0.0));
        assert_eq!(
            Strand::new("1e2+5e-1i").parse_complex(128).unwrap(),
            Complex::new(100.0, 0.5)
        );
        assert!(Strand::new("i").parse_complex(128).is_err());
        assert!(Strand::new("1+i").parse_complex(128).is_err());
    }

    #[test]
    fn formatting_round_trips() {
        assert_eq!(Strand::format_int(-42, 10), "-42");
        assert_eq!(Strand::format_int(255, 16), "ff");
        assert_eq!(Strand::format_uint(5, 2), "101");
        assert_eq!(Strand::itoa(7), "7");
        assert_eq!(Strand::format_bool(true), "true");
        assert_eq!(Strand::format_float(1.5, FloatFormat::Fixed, Some(2)), "1.50");
        assert_eq!(Strand::format_float(150.0, FloatFormat::Exp, Some(1)), "1.5e2");
        assert_eq!(Strand::format_float(0.25, FloatFormat::Compact, None), "0.25");
        assert_eq!(
            Strand::format_complex(Complex::new(1.0, -2.5), FloatFormat::Compact, None),
            "(1-2.5i)"
        );
        assert_eq!(
            Strand::format_int(-42, 10).parse_int(10, 64).unwrap(),
            -42
        );
    }
}
