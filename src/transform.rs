//! Transformations: casing, trimming, repetition, char mapping, replacement,
//! and header-key canonicalization. Every operation returns a new [`Strand`].

use crate::Strand;

/// Per-char casing overrides for locale-special casing rules.
///
/// Each field maps a char to its special-cased form, or `None` to fall back
/// to the standard Unicode mapping. Overrides are single-char by construction;
/// the standard fallback may expand to multiple chars.
///
/// ```
/// use strand::{SpecialCase, Strand};
///
/// const TURKISH: SpecialCase = SpecialCase {
///     lower: |c| match c {
///         'I' => Some('ı'),
///         'İ' => Some('i'),
///         _ => None,
///     },
///     upper: |c| match c {
///         'i' => Some('İ'),
///         'ı' => Some('I'),
///         _ => None,
///     },
///     title: |c| match c {
///         'i' => Some('İ'),
///         'ı' => Some('I'),
///         _ => None,
///     },
/// };
///
/// assert_eq!(Strand::new("istanbul").to_upper_special(TURKISH), "İSTANBUL");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SpecialCase {
    /// Override applied by [`Strand::to_lower_special`].
    pub lower: fn(char) -> Option<char>,
    /// Override applied by [`Strand::to_upper_special`].
    pub upper: fn(char) -> Option<char>,
    /// Override applied by [`Strand::to_title_special`].
    pub title: fn(char) -> Option<char>,
}

/// A word separator for title-casing: anything that is not alphanumeric in
/// ASCII (underscore included as a word char), and whitespace beyond ASCII.
fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

fn is_header_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

impl Strand {
    /// Returns the held text lowercased.
    pub fn to_lower(&self) -> Strand {
        Strand::new(self.0.to_lowercase())
    }

    /// Returns the held text uppercased.
    pub fn to_upper(&self) -> Strand {
        Strand::new(self.0.to_uppercase())
    }

    /// Returns the held text with every char title-cased.
    ///
    /// Rust exposes no distinct title-case mappings, so the uppercase
    /// mappings are used.
    pub fn to_title(&self) -> Strand {
        self.to_upper()
    }

    /// Returns the held text with the first char of each word uppercased
    /// and the rest of the word left untouched.
    pub fn to_title_case(&self) -> Strand {
        let mut out = String::with_capacity(self.0.len());
        let mut prev = ' ';
        for c in self.0.chars() {
            if is_separator(prev) {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            prev = c;
        }
        Strand::new(out)
    }

    /// Lowercases with the overrides in `case` taking priority over the
    /// standard mappings.
    pub fn to_lower_special(&self, case: SpecialCase) -> Strand {
        self.case_special(case.lower, char::to_lowercase)
    }

    /// Uppercases with the overrides in `case` taking priority over the
    /// standard mappings.
    pub fn to_upper_special(&self, case: SpecialCase) -> Strand {
        self.case_special(case.upper, char::to_uppercase)
    }

    /// Title-cases every char with the overrides in `case` taking priority;
    /// the standard fallback is the uppercase mapping.
    pub fn to_title_special(&self, case: SpecialCase) -> Strand {
        self.case_special(case.title, char::to_uppercase)
    }

    fn case_special<I>(&self, special: fn(char) -> Option<char>, standard: fn(char) -> I) -> Strand
    where
        I: Iterator<Item = char>,
    {
        let mut out = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            match special(c) {
                Some(mapped) => out.push(mapped),
                None => out.extend(standard(c)),
            }
        }
        Strand::new(out)
    }

    /// Trims every leading and trailing char contained in `cutset`.
    pub fn trim(&self, cutset: &str) -> Strand {
        Strand::new(self.0.trim_matches(|c: char| cutset.contains(c)))
    }

    /// Trims every leading char contained in `cutset`.
    pub fn trim_left(&self, cutset: &str) -> Strand {
        Strand::new(self.0.trim_start_matches(|c: char| cutset.contains(c)))
    }

    /// Trims every trailing char contained in `cutset`.
    pub fn trim_right(&self, cutset: &str) -> Strand {
        Strand::new(self.0.trim_end_matches(|c: char| cutset.contains(c)))
    }

    /// Trims every leading and trailing char satisfying `pred`.
    pub fn trim_fn<F: FnMut(char) -> bool>(&self, pred: F) -> Strand {
        Strand::new(self.0.trim_matches(pred))
    }

    /// Trims every leading char satisfying `pred`.
    pub fn trim_left_fn<F: FnMut(char) -> bool>(&self, pred: F) -> Strand {
        Strand::new(self.0.trim_start_matches(pred))
    }

    /// Trims every trailing char satisfying `pred`.
    pub fn trim_right_fn<F: FnMut(char) -> bool>(&self, pred: F) -> Strand {
        Strand::new(self.0.trim_end_matches(pred))
    }

    /// Trims leading and trailing Unicode whitespace.
    pub fn trim_space(&self) -> Strand {
        Strand::new(self.0.trim())
    }

    /// Removes `prefix` once if present; otherwise returns the text
    /// unchanged.
    pub fn trim_prefix(&self, prefix: &str) -> Strand {
        match self.0.strip_prefix(prefix) {
            Some(rest) => Strand::new(rest),
            None => self.clone(),
        }
    }

    /// Removes `suffix` once if present; otherwise returns the text
    /// unchanged.
    pub fn trim_suffix(&self, suffix: &str) -> Strand {
        match self.0.strip_suffix(suffix) {
            Some(rest) => Strand::new(rest),
            None => self.clone(),
        }
    }

    /// Returns the held text repeated `n` times.
    pub fn repeat(&self, n: usize) -> Strand {
        Strand::new(self.0.repeat(n))
    }

    /// Maps every char through `f`, dropping chars mapped to `None`.
    pub fn map<F: FnMut(char) -> Option<char>>(&self, f: F) -> Strand {
        Strand::new(self.0.chars().filter_map(f).collect::<String>())
    }

    /// Replaces the first occurrence of `old` with `new` (the documented
    /// default count of one).
    pub fn replace(&self, old: &str, new: &str) -> Strand {
        self.replace_n(old, new, 1)
    }

    /// Replaces up to `n` non-overlapping occurrences of `old` with `new`;
    /// `n < 0` replaces all. An empty `old` matches at the start of the text
    /// and after each char.
    pub fn replace_n(&self, old: &str, new: &str, n: isize) -> Strand {
        let s = &*self.0;
        if old == new || n == 0 {
            return self.clone();
        }
        let available = self.count(old);
        if available == 0 {
            return self.clone();
        }
        let n = if n < 0 || available < n as usize {
            available
        } else {
            n as usize
        };

        let mut out = String::with_capacity(s.len());
        let mut start = 0;
        for i in 0..n {
            let mut at = start;
            if old.is_empty() {
                if i > 0 {
                    match s[start..].chars().next() {
                        Some(c) => at += c.len_utf8(),
                        None => break,
                    }
                }
            } else {
                match s[start..].find(old) {
                    Some(found) => at = start + found,
                    None => break,
                }
            }
            out.push_str(&s[start..at]);
            out.push_str(new);
            start = at + old.len();
        }
        out.push_str(&s[start..]);
        Strand::new(out)
    }

    /// Replaces every non-overlapping occurrence of `old` with `new`.
    pub fn replace_all(&self, old: &str, new: &str) -> Strand {
        self.replace_n(old, new, -1)
    }

    /// Returns the canonical header-key form of the held text: the first
    /// letter of each hyphen-separated token uppercased and the rest
    /// lowercased. Text containing a byte that is not a valid header token
    /// byte is returned unchanged.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// assert_eq!(Strand::new("content-type").header_key(), "Content-Type");
    /// ```
    pub fn header_key(&self) -> Strand {
        let s = &*self.0;
        if s.is_empty() || !s.bytes().all(is_header_token_byte) {
            return self.clone();
        }
        let mut out = String::with_capacity(s.len());
        let mut at_token_start = true;
        for b in s.bytes() {
            let mapped = if at_token_start {
                b.to_ascii_uppercase()
            } else {
                b.to_ascii_lowercase()
            };
            out.push(mapped as char);
            at_token_start = b == b'-';
        }
        Strand::new(out)
    }
}
