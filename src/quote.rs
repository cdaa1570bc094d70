//! Quoting and unquoting of escaped string literals.
//!
//! [`Strand::quote`] produces a double-quoted representation using backslash
//! escapes (`\n`, `\r`, `\t`, `\0`, `\\`, `\"`, and `\u{...}` for other
//! non-printable chars). [`Strand::unquote`] is the strict inverse and also
//! accepts backquoted raw text and single-quoted char literals; on input it
//! additionally understands `\'` and two-digit `\xHH` ASCII escapes.

use thiserror::Error;

use crate::Strand;

/// Failure modes of the unquoting family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The text does not start with a quote, or the closing quote is
    /// missing.
    #[error("missing opening or closing quote")]
    MissingQuote,
    /// A backslash escape is malformed or names an invalid char.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A literal newline appeared inside quoted text.
    #[error("literal newline inside quoted text")]
    Newline,
    /// A single-quoted literal held zero or several chars.
    #[error("char literal must hold exactly one char")]
    NotSingleChar,
    /// Data followed the closing quote.
    #[error("unexpected data after the closing quote")]
    TrailingData,
}

fn push_escaped(out: &mut String, c: char, quote: char, ascii_only: bool, graphic_only: bool) {
    match c {
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c.is_control()
            || (ascii_only && !c.is_ascii())
            || (graphic_only && c != ' ' && c.is_whitespace()) =>
        {
            out.push_str(&format!("\\u{{{:x}}}", c as u32));
        }
        c => out.push(c),
    }
}

fn quote_impl(s: &str, quote: char, ascii_only: bool, graphic_only: bool) -> Strand {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        push_escaped(&mut out, c, quote, ascii_only, graphic_only);
    }
    out.push(quote);
    Strand::new(out)
}

/// Returns `c` as a single-quoted char literal.
pub fn quote_char(c: char) -> Strand {
    quote_impl(c.to_string().as_str(), '\'', false, false)
}

/// Returns `c` as a single-quoted char literal with non-ASCII escaped.
pub fn quote_char_to_ascii(c: char) -> Strand {
    quote_impl(c.to_string().as_str(), '\'', true, false)
}

/// Returns `c` as a single-quoted char literal with non-graphic chars
/// escaped.
pub fn quote_char_to_graphic(c: char) -> Strand {
    quote_impl(c.to_string().as_str(), '\'', false, true)
}

fn hex_value(digits: &str) -> Result<u32, QuoteError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QuoteError::InvalidEscape);
    }
    u32::from_str_radix(digits, 16).map_err(|_| QuoteError::InvalidEscape)
}

/// Decodes one possibly-escaped char at the front of `s`. `quote` is the
/// active quote char; an unescaped occurrence of it is rejected here and
/// must be consumed by the caller as the closing quote.
fn unquote_char_impl(s: &str, quote: char) -> Result<(char, &str), QuoteError> {
    let first = s.chars().next().ok_or(QuoteError::MissingQuote)?;
    match first {
        c if c == quote && c != '\0' => Err(QuoteError::InvalidEscape),
        '\n' => Err(QuoteError::Newline),
        '\\' => {
            let rest = &s[1..];
            let esc = rest.chars().next().ok_or(QuoteError::InvalidEscape)?;
            let after = &rest[esc.len_utf8()..];
            match esc {
                'n' => Ok(('\n', after)),
                'r' => Ok(('\r', after)),
                't' => Ok(('\t', after)),
                '0' => Ok(('\0', after)),
                '\\' => Ok(('\\', after)),
                '\'' => Ok(('\'', after)),
                '"' => Ok(('"', after)),
                'x' => {
                    let digits = after.get(..2).ok_or(QuoteError::InvalidEscape)?;
                    let value = hex_value(digits)?;
                    if value > 0x7F {
                        return Err(QuoteError::InvalidEscape);
                    }
                    let c = char::from_u32(value).ok_or(QuoteError::InvalidEscape)?;
                    Ok((c, &after[2..]))
                }
                'u' => {
                    let body = after.strip_prefix('{').ok_or(QuoteError::InvalidEscape)?;
                    let close = body.find('}').ok_or(QuoteError::InvalidEscape)?;
                    if close > 6 {
                        return Err(QuoteError::InvalidEscape);
                    }
                    let value = hex_value(&body[..close])?;
                    let c = char::from_u32(value).ok_or(QuoteError::InvalidEscape)?;
                    Ok((c, &body[close + 1..]))
                }
                _ => Err(QuoteError::InvalidEscape),
            }
        }
        c => Ok((c, &s[c.len_utf8()..])),
    }
}

/// Decodes one quoted token at the front of `s`, returning its value and the
/// unconsumed remainder.
fn unquote_any(s: &str) -> Result<(String, &str), QuoteError> {
    let quote = s.chars().next().ok_or(QuoteError::MissingQuote)?;
    match quote {
        '`' => {
            let body = &s[1..];
            let end = body.find('`').ok_or(QuoteError::MissingQuote)?;
            // Raw text takes no escapes; stray carriage returns are dropped.
            let value = body[..end].chars().filter(|&c| c != '\r').collect();
            Ok((value, &body[end + 1..]))
        }
        '"' | '\'' => {
            let mut rest = &s[1..];
            let mut out = String::new();
            loop {
                if let Some(after) = rest.strip_prefix(quote) {
                    if quote == '\'' && out.chars().count() != 1 {
                        return Err(QuoteError::NotSingleChar);
                    }
                    return Ok((out, after));
                }
                if rest.is_empty() {
                    return Err(QuoteError::MissingQuote);
                }
                let (c, tail) = unquote_char_impl(rest, quote)?;
                out.push(c);
                rest = tail;
            }
        }
        _ => Err(QuoteError::MissingQuote),
    }
}

impl Strand {
    /// Returns the held text as a double-quoted literal, escaping quotes,
    /// backslashes, and non-printable chars.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// let q = Strand::new("tab\there").quote();
    /// assert_eq!(q, "\"tab\\there\"");
    /// assert_eq!(q.unquote().unwrap(), "tab\there");
    /// ```
    pub fn quote(&self) -> Strand {
        quote_impl(&self.0, '"', false, false)
    }

    /// Like [`quote`][Self::quote], additionally escaping every non-ASCII
    /// char.
    pub fn quote_to_ascii(&self) -> Strand {
        quote_impl(&self.0, '"', true, false)
    }

    /// Like [`quote`][Self::quote], additionally escaping non-graphic
    /// whitespace (space itself stays literal).
    pub fn quote_to_graphic(&self) -> Strand {
        quote_impl(&self.0, '"', false, true)
    }

    /// Reports whether the held text can appear unchanged inside a
    /// backquoted raw literal: no backquote, no carriage return, and no
    /// control chars other than tab.
    pub fn can_backquote(&self) -> bool {
        self.0
            .chars()
            .all(|c| c != '`' && c != '\r' && c != '\u{feff}' && (c == '\t' || !c.is_control()))
    }

    /// Strictly reverses the quoting family: decodes one double-quoted,
    /// backquoted, or single-quoted literal spanning the whole held text.
    pub fn unquote(&self) -> Result<Strand, QuoteError> {
        let (value, rest) = unquote_any(&self.0)?;
        if !rest.is_empty() {
            return Err(QuoteError::TrailingData);
        }
        Ok(Strand::new(value))
    }

    /// [`unquote`][Self::unquote], discarding the error; returns an empty
    /// `Strand` on failure.
    pub fn unquote_lossy(&self) -> Strand {
        self.unquote().unwrap_or_default()
    }

    /// Returns the quoted literal at the start of the held text, quotes
    /// included, ignoring anything after it.
    pub fn quoted_prefix(&self) -> Result<Strand, QuoteError> {
        let (_, rest) = unquote_any(&self.0)?;
        Ok(Strand::new(&self.0[..self.0.len() - rest.len()]))
    }

    /// [`quoted_prefix`][Self::quoted_prefix], discarding the error; returns
    /// an empty `Strand` on failure.
    pub fn quoted_prefix_lossy(&self) -> Strand {
        self.quoted_prefix().unwrap_or_default()
    }

    /// Decodes the first (possibly escaped) char of the held text, returning
    /// the char, whether it encodes to more than one byte, and the
    /// unconsumed tail. `quote` names the active quote byte (`b'"'` or
    /// `b'\''`; `0` for none), whose unescaped occurrence is rejected.
    pub fn unquote_char(&self, quote: u8) -> Result<(char, bool, Strand), QuoteError> {
        let active = match quote {
            0 => '\0',
            b'"' => '"',
            b'\'' => '\'',
            _ => return Err(QuoteError::InvalidEscape),
        };
        let (c, tail) = unquote_char_impl(&self.0, active)?;
        Ok((c, c.len_utf8() > 1, Strand::new(tail)))
    }

    /// [`unquote_char`][Self::unquote_char], discarding everything but the
    /// tail; returns an empty `Strand` on failure.
    pub fn unquote_char_lossy(&self, quote: u8) -> Strand {
        match self.unquote_char(quote) {
            Ok((_, _, tail)) => tail,
            Err(_) => Strand::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_controls_and_quotes() {
        assert_eq!(Strand::new("a\"b\\c").quote(), "\"a\\\"b\\\\c\"");
        assert_eq!(Strand::new("\u{1}").quote(), "\"\\u{1}\"");
        assert_eq!(Strand::new("héy").quote(), "\"héy\"");
    }

    #[test]
    fn ascii_and_graphic_variants() {
        assert_eq!(Strand::new("héy").quote_to_ascii(), "\"h\\u{e9}y\"");
        // Non-breaking space is whitespace but not graphic; plain space is.
        assert_eq!(Strand::new("a\u{a0}b c").quote_to_graphic(), "\"a\\u{a0}b c\"");
        assert_eq!(Strand::new("a\u{a0}b").quote(), "\"a\u{a0}b\"");
    }

    #[test]
    fn unquote_rejects_malformed_input() {
        assert_eq!(Strand::new("\"abc").unquote(), Err(QuoteError::MissingQuote));
        assert_eq!(Strand::new("abc").unquote(), Err(QuoteError::MissingQuote));
        assert_eq!(Strand::new("\"a\\qb\"").unquote(), Err(QuoteError::InvalidEscape));
        assert_eq!(Strand::new("\"a\"b").unquote(), Err(QuoteError::TrailingData));
        assert_eq!(Strand::new("\"a\nb\"").unquote(), Err(QuoteError::Newline));
        assert_eq!(Strand::new("'ab'").unquote(), Err(QuoteError::NotSingleChar));
    }

    #[test]
    fn unquote_accepts_all_three_quote_forms() {
        assert_eq!(Strand::new("\"a\\tb\"").unquote().unwrap(), "a\tb");
        assert_eq!(Strand::new("`no \\escapes`").unquote().unwrap(), "no \\escapes");
        assert_eq!(Strand::new("'x'").unquote().unwrap(), "x");
        assert_eq!(Strand::new("\"\\x41\\u{1f600}\"").unquote().unwrap(), "A\u{1f600}");
    }

    #[test]
    fn quoted_prefix_keeps_quotes_and_ignores_tail() {
        let s = Strand::new("\"quoted\" tail");
        assert_eq!(s.quoted_prefix().unwrap(), "\"quoted\"");
        assert_eq!(s.quoted_prefix_lossy(), "\"quoted\"");
        assert_eq!(Strand::new("no quote").quoted_prefix_lossy(), "");
    }

    #[test]
    fn unquote_char_walks_the_text() {
        let s = Strand::new("\\\"rest");
        let (c, multibyte, tail) = s.unquote_char(b'"').unwrap();
        assert_eq!(c, '"');
        assert!(!multibyte);
        assert_eq!(tail, "rest");

        let (c, multibyte, tail) = Strand::new("émile").unquote_char(0).unwrap();
        assert_eq!(c, 'é');
        assert!(multibyte);
        assert_eq!(tail, "mile");
    }

    #[test]
    fn can_backquote_rejects_controls() {
        assert!(Strand::new("plain text\twith tab").can_backquote());
        assert!(!Strand::new("has ` tick").can_backquote());
        assert!(!Strand::new("has \n newline").can_backquote());
    }
}
