//! Multi-pattern replacement.

use std::io;

use thiserror::Error;

use crate::Strand;

/// The pair list handed to [`Strands::replacer`][crate::Strands::replacer]
/// held an odd number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("replacer requires an even number of strings, got {len}")]
pub struct ReplacerError {
    /// The offending item count.
    pub len: usize,
}

/// A multi-pattern replacer built from ordered (old, new) pairs.
///
/// Replacement is a single left-to-right pass over the input without
/// overlapping matches; at each position the earliest-listed matching pair
/// wins. An empty `old` matches at the start of the input and after every
/// char. A `Replacer` is immutable after construction and can be applied to
/// any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    pairs: Vec<(String, String)>,
}

impl Replacer {
    /// Builds a replacer from (old, new) pairs, applied in the given order.
    pub fn new<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(old, new)| (old.to_owned(), new.to_owned()))
                .collect(),
        }
    }

    /// Applies every replacement to `input`, returning the result.
    pub fn replace(&self, input: &str) -> Strand {
        Strand::new(self.run(input))
    }

    /// Applies every replacement to the text held by `input`.
    pub fn replace_strand(&self, input: &Strand) -> Strand {
        self.replace(input.as_str())
    }

    /// Applies every replacement to `input`, writing the result into `sink`
    /// and returning the number of bytes written.
    pub fn write_replaced<W: io::Write>(&self, sink: &mut W, input: &str) -> io::Result<usize> {
        let out = self.run(input);
        sink.write_all(out.as_bytes())?;
        Ok(out.len())
    }

    fn matching_pair(&self, rest: &str) -> Option<&(String, String)> {
        self.pairs
            .iter()
            .find(|(old, _)| old.is_empty() || rest.starts_with(old.as_str()))
    }

    fn run(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        loop {
            match self.matching_pair(rest) {
                Some((old, new)) if !old.is_empty() => {
                    out.push_str(new);
                    rest = &rest[old.len()..];
                    continue;
                }
                Some((_, new)) => out.push_str(new),
                None => {}
            }
            // No pattern consumed anything; copy one char through, or stop
            // at the final boundary.
            match rest.chars().next() {
                Some(c) => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
                None => break,
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strands;

    #[test]
    fn earliest_listed_pair_wins() {
        let r = Replacer::new([("ab", "1"), ("a", "2")]);
        assert_eq!(r.replace("aba"), "12");

        let r = Replacer::new([("a", "2"), ("ab", "1")]);
        assert_eq!(r.replace("aba"), "2b2");
    }

    #[test]
    fn matches_do_not_overlap() {
        let r = Replacer::new([("aa", "x")]);
        assert_eq!(r.replace("aaa"), "xa");
    }

    #[test]
    fn empty_pattern_matches_every_boundary() {
        let r = Replacer::new([("", "-")]);
        assert_eq!(r.replace("ab"), "-a-b-");
    }

    #[test]
    fn odd_pair_list_is_an_error() {
        let items = Strands::new(["a", "b", "c"]);
        assert_eq!(items.replacer().unwrap_err(), ReplacerError { len: 3 });
        assert_eq!(items.replacer_lossy().replace("abc"), "abc");
    }

    #[test]
    fn write_replaced_reports_byte_count() {
        let r = Strands::new(["<", "&lt;"]).replacer().unwrap();
        let mut sink = Vec::new();
        let n = r.write_replaced(&mut sink, "<x").unwrap();
        assert_eq!(n, 5);
        assert_eq!(sink, b"&lt;x");
    }
}
