//! The boxed sequence of [`Strand`]s.

use std::{fmt, ops::Index, slice, vec};

use crate::{Replacer, ReplacerError, Strand, StrSource};

/// An ordered sequence of [`Strand`]s, mirroring a plain list of strings.
///
/// A `Strands` is produced by the splitting family or built directly from raw
/// strings; it converts back losslessly and joins into a single [`Strand`].
///
/// ```
/// use strand::Strand;
///
/// let parts = Strand::new("a,b,c").split(",");
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts.join("-"), "a-b-c");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Strands(pub(crate) Vec<Strand>);

impl Strands {
    /// Creates a sequence by normalizing each item through [`StrSource`],
    /// preserving order.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: StrSource,
    {
        Self(items.into_iter().map(Strand::new).collect())
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence holds no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Strand> {
        self.0.get(index)
    }

    /// Borrows the items as a slice.
    pub fn as_slice(&self) -> &[Strand] {
        &self.0
    }

    /// Appends one item, normalized through [`StrSource`].
    pub fn push(&mut self, item: impl StrSource) {
        self.0.push(Strand::new(item));
    }

    /// Iterates over the items.
    pub fn iter(&self) -> slice::Iter<'_, Strand> {
        self.0.iter()
    }

    /// Concatenates the items with `sep` between them.
    pub fn join(&self, sep: &str) -> Strand {
        let mut out = String::new();
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(item.as_str());
        }
        Strand::new(out)
    }

    /// Converts into a plain ordered list of strings.
    pub fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(Strand::into_string).collect()
    }

    /// Copies out a plain ordered list of strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|s| s.as_str().to_owned()).collect()
    }

    /// Builds a [`Replacer`] from sequential (old, new) pairs; fails if the
    /// sequence holds an odd number of items.
    ///
    /// ```
    /// use strand::Strands;
    ///
    /// let html = Strands::new(["<", "&lt;", ">", "&gt;"]).replacer().unwrap();
    /// assert_eq!(html.replace("<b>"), "&lt;b&gt;");
    /// ```
    pub fn replacer(&self) -> Result<Replacer, ReplacerError> {
        if self.0.len() % 2 != 0 {
            return Err(ReplacerError { len: self.0.len() });
        }
        Ok(Replacer::new(
            self.0
                .chunks_exact(2)
                .map(|pair| (pair[0].as_str(), pair[1].as_str())),
        ))
    }

    /// [`replacer`][Self::replacer], discarding the error; returns a no-op
    /// [`Replacer`] on failure.
    pub fn replacer_lossy(&self) -> Replacer {
        self.replacer().unwrap_or_default()
    }
}

impl fmt::Debug for Strands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl fmt::Display for Strands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for Strands {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for Strands {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items)
    }
}

impl From<&[&str]> for Strands {
    fn from(items: &[&str]) -> Self {
        Self::new(items.iter().copied())
    }
}

impl From<Strands> for Vec<String> {
    fn from(items: Strands) -> Self {
        items.into_strings()
    }
}

impl FromIterator<Strand> for Strands {
    fn from_iter<I: IntoIterator<Item = Strand>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<String> for Strands {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> FromIterator<&'a str> for Strands {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Strand> for Strands {
    fn extend<I: IntoIterator<Item = Strand>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Strands {
    type Item = Strand;
    type IntoIter = vec::IntoIter<Strand>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Strands {
    type Item = &'a Strand;
    type IntoIter = slice::Iter<'a, Strand>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Strands {
    type Output = Strand;

    fn index(&self, index: usize) -> &Strand {
        &self.0[index]
    }
}

impl PartialEq<&[&str]> for Strands {
    fn eq(&self, other: &&[&str]) -> bool {
        self.0.len() == other.len()
            && self.0.iter().zip(other.iter()).all(|(a, b)| a.as_str() == *b)
    }
}

impl PartialEq<Vec<String>> for Strands {
    fn eq(&self, other: &Vec<String>) -> bool {
        self.0.len() == other.len()
            && self.0.iter().zip(other.iter()).all(|(a, b)| a.as_str() == b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Strands {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Strand::as_str))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Strands {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <Vec<String> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
