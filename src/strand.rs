//! The boxed scalar string value.

use std::{borrow::Borrow, convert::Infallible, fmt, io, str::FromStr};

use crate::StrSource;

/// A boxed, immutable string value with chainable operations.
///
/// A `Strand` owns one string. Every transformation returns a new `Strand`
/// rather than mutating in place, so values can be shared freely and chained
/// fluently:
///
/// ```
/// use strand::Strand;
///
/// let cleaned = Strand::new("  Hello, World  ").trim_space().to_lower();
/// assert_eq!(cleaned, "hello, world");
/// ```
///
/// Construction never fails: absent inputs normalize to the placeholder text
/// [`NIL`][crate::NIL] (see [`StrSource`]).
///
/// `Strand` intentionally does not implement `Deref<Target = str>`; dropping
/// down to untyped text is always an explicit call to [`as_str`][Self::as_str]
/// or [`into_string`][Self::into_string].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strand(pub(crate) Box<str>);

impl Strand {
    /// Creates a new `Strand` from any of the accepted input shapes.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// assert_eq!(Strand::new("abc"), "abc");
    /// assert_eq!(Strand::new(None::<&str>), "nil");
    /// ```
    pub fn new(source: impl StrSource) -> Self {
        Self(source.into_raw().into_boxed_str())
    }

    /// Creates a `Strand` from any displayable value.
    ///
    /// This is the escape hatch for shapes outside the closed [`StrSource`]
    /// set: the value's `Display` representation becomes the held text.
    pub fn from_display(value: impl fmt::Display) -> Self {
        Self(value.to_string().into_boxed_str())
    }

    /// Creates a `Strand` from bytes, replacing invalid UTF-8 sequences with
    /// U+FFFD REPLACEMENT CHARACTER.
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned().into_boxed_str())
    }

    /// Creates a `Strand` from bytes, replacing each maximal run of invalid
    /// UTF-8 bytes with `replacement`.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// let s = Strand::from_utf8_with_replacement(b"a\xff\xfeb", "?");
    /// assert_eq!(s, "a?b");
    /// ```
    pub fn from_utf8_with_replacement(bytes: &[u8], replacement: &str) -> Self {
        let mut out = String::with_capacity(bytes.len());
        let mut in_invalid_run = false;
        for chunk in bytes.utf8_chunks() {
            let valid = chunk.valid();
            if !valid.is_empty() {
                out.push_str(valid);
                in_invalid_run = false;
            }
            if !chunk.invalid().is_empty() {
                if !in_invalid_run {
                    out.push_str(replacement);
                }
                in_invalid_run = true;
            }
        }
        Self::new(out)
    }

    /// Returns the held text as a borrowed string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Strand`, returning the held text.
    pub fn into_string(self) -> String {
        self.0.into_string()
    }

    /// Returns the length of the held text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the held text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Writes the held text into `sink`, returning the number of bytes
    /// written.
    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> io::Result<usize> {
        sink.write_all(self.0.as_bytes())?;
        Ok(self.0.len())
    }

    /// Returns a reader over the held bytes.
    pub fn reader(&self) -> io::Cursor<&[u8]> {
        io::Cursor::new(self.0.as_bytes())
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <str as fmt::Display>::fmt(&self.0, f)
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <str as fmt::Debug>::fmt(&self.0, f)
    }
}

impl Default for Strand {
    fn default() -> Self {
        Self(Box::from(""))
    }
}

impl From<&str> for Strand {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Strand {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<std::borrow::Cow<'_, str>> for Strand {
    fn from(s: std::borrow::Cow<'_, str>) -> Self {
        Self::new(s)
    }
}

impl From<Option<&str>> for Strand {
    fn from(s: Option<&str>) -> Self {
        Self::new(s)
    }
}

impl From<Option<String>> for Strand {
    fn from(s: Option<String>) -> Self {
        Self::new(s)
    }
}

impl From<Strand> for String {
    fn from(s: Strand) -> Self {
        s.into_string()
    }
}

impl FromStr for Strand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for Strand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Strand {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Strand {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Strand {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for Strand {
    fn eq(&self, other: &String) -> bool {
        &*self.0 == other.as_str()
    }
}

impl PartialEq<Strand> for str {
    fn eq(&self, other: &Strand) -> bool {
        self == &*other.0
    }
}

impl PartialEq<Strand> for &str {
    fn eq(&self, other: &Strand) -> bool {
        *self == &*other.0
    }
}

impl PartialEq<Strand> for String {
    fn eq(&self, other: &Strand) -> bool {
        self.as_str() == &*other.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Strand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        <str as serde::Serialize>::serialize(self.as_str(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Strand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_quoted_display_is_raw() {
        let s = Strand::new("one");
        assert_eq!(s.to_string(), "one");
        assert_eq!(format!("{s:?}"), "\"one\"");
    }

    #[test]
    fn write_to_reports_byte_count() {
        let mut sink = Vec::new();
        let n = Strand::new("héllo").write_to(&mut sink).unwrap();
        assert_eq!(n, 6);
        assert_eq!(sink, "héllo".as_bytes());
    }

    #[test]
    fn reader_reads_held_bytes() {
        use std::io::Read;

        let s = Strand::new("abc");
        let mut buf = String::new();
        s.reader().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "abc");
    }

    #[test]
    fn utf8_repair_coalesces_invalid_runs() {
        let s = Strand::from_utf8_with_replacement(b"a\xf0\x90\xff\xffb", "!");
        assert_eq!(s, "a!b");
    }
}
