//! Splitting a [`Strand`] into a [`Strands`] sequence.
//!
//! The split family follows the conventional separator semantics: an empty
//! separator splits between every char, splitting the empty string on a
//! non-empty separator yields a single empty item, and adjacent separators
//! produce empty items (`"a,,b"` on `","` is `["a", "", "b"]`).

use crate::{Strand, Strands};

/// Splits into individual chars, honoring the item limit. With a positive
/// limit the final item carries the unsplit remainder.
fn explode(s: &str, limit: isize) -> Vec<Strand> {
    let mut out = Vec::new();
    let mut rest = s;
    loop {
        if limit > 0 && out.len() as isize == limit - 1 {
            break;
        }
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };
        out.push(Strand::new(&rest[..c.len_utf8()]));
        rest = &rest[c.len_utf8()..];
    }
    if !rest.is_empty() {
        out.push(Strand::new(rest));
    }
    out
}

/// The shared split loop. `limit < 0` means unlimited, `limit == 0` yields an
/// empty sequence, and a positive limit caps the item count with the unsplit
/// remainder last. When `keep_sep` is set, each item retains its trailing
/// separator.
fn split_impl(s: &str, sep: &str, limit: isize, keep_sep: bool) -> Strands {
    if limit == 0 {
        return Strands::default();
    }
    if sep.is_empty() {
        return Strands(explode(s, limit));
    }
    let mut out = Vec::new();
    let mut rest = s;
    while limit < 0 || (out.len() as isize) < limit - 1 {
        match rest.find(sep) {
            Some(at) => {
                let end = if keep_sep { at + sep.len() } else { at };
                out.push(Strand::new(&rest[..end]));
                rest = &rest[at + sep.len()..];
            }
            None => break,
        }
    }
    out.push(Strand::new(rest));
    Strands(out)
}

impl Strand {
    /// Splits the held text around every occurrence of `sep`.
    ///
    /// An empty `sep` (the documented default when the separator is omitted)
    /// splits between every char.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// let parts = Strand::new("a,,b").split(",");
    /// assert_eq!(parts.to_strings(), vec!["a", "", "b"]);
    /// ```
    pub fn split(&self, sep: &str) -> Strands {
        split_impl(&self.0, sep, -1, false)
    }

    /// Splits around `sep` into at most `n` items; `n < 0` is unlimited and
    /// `n == 0` yields an empty sequence. The final item holds the unsplit
    /// remainder.
    pub fn split_n(&self, sep: &str, n: isize) -> Strands {
        split_impl(&self.0, sep, n, false)
    }

    /// Splits after every occurrence of `sep`, retaining the separator at
    /// the end of each item.
    pub fn split_after(&self, sep: &str) -> Strands {
        split_impl(&self.0, sep, -1, true)
    }

    /// Splits after `sep` into at most `n` items, retaining separators.
    pub fn split_after_n(&self, sep: &str, n: isize) -> Strands {
        split_impl(&self.0, sep, n, true)
    }

    /// Splits around runs of Unicode whitespace; the result holds no empty
    /// items.
    pub fn fields(&self) -> Strands {
        self.0.split_whitespace().collect()
    }

    /// Splits around runs of chars satisfying `pred`; the result holds no
    /// empty items.
    pub fn fields_fn<F: FnMut(char) -> bool>(&self, pred: F) -> Strands {
        self.0.split(pred).filter(|part| !part.is_empty()).collect()
    }

    /// Cuts the held text around the first occurrence of `sep`, returning
    /// the text before, the text after, and whether `sep` was found. When it
    /// was not, the result is the whole text, an empty `Strand`, and `false`.
    pub fn cut(&self, sep: &str) -> (Strand, Strand, bool) {
        match self.0.split_once(sep) {
            Some((before, after)) => (Strand::new(before), Strand::new(after), true),
            None => (self.clone(), Strand::default(), false),
        }
    }

    /// [`cut`][Self::cut] without the found flag.
    pub fn cut_lossy(&self, sep: &str) -> (Strand, Strand) {
        let (before, after, _) = self.cut(sep);
        (before, after)
    }

    /// Removes `prefix` from the front of the held text, reporting whether
    /// it was present. When it was not, the text is returned unchanged.
    pub fn cut_prefix(&self, prefix: &str) -> (Strand, bool) {
        match self.0.strip_prefix(prefix) {
            Some(rest) => (Strand::new(rest), true),
            None => (self.clone(), false),
        }
    }

    /// [`cut_prefix`][Self::cut_prefix] without the found flag.
    pub fn cut_prefix_lossy(&self, prefix: &str) -> Strand {
        self.cut_prefix(prefix).0
    }

    /// Removes `suffix` from the end of the held text, reporting whether it
    /// was present. When it was not, the text is returned unchanged.
    pub fn cut_suffix(&self, suffix: &str) -> (Strand, bool) {
        match self.0.strip_suffix(suffix) {
            Some(rest) => (Strand::new(rest), true),
            None => (self.clone(), false),
        }
    }

    /// [`cut_suffix`][Self::cut_suffix] without the found flag.
    pub fn cut_suffix_lossy(&self, suffix: &str) -> Strand {
        self.cut_suffix(suffix).0
    }
}
