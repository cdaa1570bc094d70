//! Query operations: comparison, containment, indexing, counting, and
//! prefix/suffix tests.
//!
//! Index results are byte offsets into the UTF-8 text, with `-1` standing for
//! "not found". Multi-candidate variants resolve ties deterministically; see
//! [`Strand::index_any_of`] and [`Strand::last_index_any_of`].

use std::cmp::Ordering;

use crate::Strand;

fn offset(found: Option<usize>) -> isize {
    found.map_or(-1, |i| i as isize)
}

impl Strand {
    /// Lexicographically compares the held text against `other`.
    pub fn compare(&self, other: &str) -> Ordering {
        (*self.0).cmp(other)
    }

    /// Reports whether the held text and `other` are equal under Unicode
    /// case folding (via lowercase expansion).
    pub fn equal_fold(&self, other: &str) -> bool {
        let mut ours = self.0.chars().flat_map(char::to_lowercase);
        let mut theirs = other.chars().flat_map(char::to_lowercase);
        loop {
            match (ours.next(), theirs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }

    /// Reports whether `substr` occurs within the held text.
    pub fn contains(&self, substr: &str) -> bool {
        self.0.contains(substr)
    }

    /// Reports whether any char from `chars` occurs within the held text.
    pub fn contains_any(&self, chars: &str) -> bool {
        self.0.contains(|c: char| chars.contains(c))
    }

    /// Reports whether any of the candidate substrings occurs within the
    /// held text.
    pub fn contains_any_of(&self, substrs: &[&str]) -> bool {
        substrs.iter().any(|sub| self.0.contains(sub))
    }

    /// Alias for [`contains_any_of`][Self::contains_any_of].
    pub fn includes_any(&self, substrs: &[&str]) -> bool {
        self.contains_any_of(substrs)
    }

    /// Reports whether `c` occurs within the held text.
    pub fn contains_char(&self, c: char) -> bool {
        self.0.contains(c)
    }

    /// Reports whether any char satisfying `pred` occurs within the held
    /// text.
    pub fn contains_fn<F: FnMut(char) -> bool>(&self, pred: F) -> bool {
        self.0.contains(pred)
    }

    /// Returns the byte offset of the first occurrence of `substr`, or `-1`.
    pub fn index(&self, substr: &str) -> isize {
        offset(self.0.find(substr))
    }

    /// Returns the byte offset of the first char from `chars`, or `-1`.
    pub fn index_any(&self, chars: &str) -> isize {
        offset(self.0.find(|c: char| chars.contains(c)))
    }

    /// Returns the smallest non-negative first-occurrence offset across the
    /// candidate substrings, or `-1` if none occurs.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// assert_eq!(Strand::new("xbcay").index_any_of(&["a", "b", "c"]), 1);
    /// ```
    pub fn index_any_of(&self, substrs: &[&str]) -> isize {
        let mut best = -1;
        for sub in substrs {
            if let Some(i) = self.0.find(sub) {
                let i = i as isize;
                if best < 0 || i < best {
                    best = i;
                }
            }
        }
        best
    }

    /// Returns the byte offset of the first occurrence of byte `b`, or `-1`.
    pub fn index_byte(&self, b: u8) -> isize {
        offset(self.0.as_bytes().iter().position(|&x| x == b))
    }

    /// Returns the byte offset of the first occurrence of `c`, or `-1`.
    pub fn index_char(&self, c: char) -> isize {
        offset(self.0.find(c))
    }

    /// Returns the byte offset of the first char satisfying `pred`, or `-1`.
    pub fn index_fn<F: FnMut(char) -> bool>(&self, pred: F) -> isize {
        offset(self.0.find(pred))
    }

    /// Returns the byte offset of the last occurrence of `substr`, or `-1`.
    pub fn last_index(&self, substr: &str) -> isize {
        offset(self.0.rfind(substr))
    }

    /// Returns the byte offset of the last char from `chars`, or `-1`.
    pub fn last_index_any(&self, chars: &str) -> isize {
        offset(self.0.rfind(|c: char| chars.contains(c)))
    }

    /// Returns the largest last-occurrence offset across the candidate
    /// substrings, or `-1` if none occurs. Ties go to the earlier-listed
    /// candidate.
    pub fn last_index_any_of(&self, substrs: &[&str]) -> isize {
        let mut best = -1;
        for sub in substrs {
            if let Some(i) = self.0.rfind(sub) {
                let i = i as isize;
                if i > best {
                    best = i;
                }
            }
        }
        best
    }

    /// Returns the byte offset of the last occurrence of byte `b`, or `-1`.
    pub fn last_index_byte(&self, b: u8) -> isize {
        offset(self.0.as_bytes().iter().rposition(|&x| x == b))
    }

    /// Returns the byte offset of the last char satisfying `pred`, or `-1`.
    pub fn last_index_fn<F: FnMut(char) -> bool>(&self, pred: F) -> isize {
        offset(self.0.rfind(pred))
    }

    /// Counts the non-overlapping occurrences of `substr` in the held text.
    ///
    /// An empty `substr` counts one more than the number of chars, one per
    /// char boundary.
    pub fn count(&self, substr: &str) -> usize {
        if substr.is_empty() {
            self.0.chars().count() + 1
        } else {
            self.0.matches(substr).count()
        }
    }

    /// Counts char boundaries; the omitted-pattern form of
    /// [`count`][Self::count] (pattern defaults to the empty string).
    pub fn count_chars(&self) -> usize {
        self.count("")
    }

    /// Reports whether the held text begins with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Reports whether the held text ends with `suffix`.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }
}
