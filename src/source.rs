//! Normalization of the accepted input shapes into raw text.
//!
//! Every constructor in this crate funnels through [`StrSource`], which maps a
//! closed set of shapes onto a plain [`String`]. Absent values ([`None`] in any
//! of the optional shapes) normalize to the placeholder text [`NIL`] instead of
//! failing, so construction is total.

use std::borrow::Cow;

use crate::Strand;

/// The placeholder text substituted for absent values.
///
/// ```
/// use strand::{Strand, NIL};
///
/// assert_eq!(Strand::new(None::<&str>).as_str(), NIL);
/// ```
pub const NIL: &str = "nil";

mod private {
    use std::borrow::Cow;

    use crate::Strand;

    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for &String {}
    impl Sealed for &str {}
    impl Sealed for Cow<'_, str> {}
    impl Sealed for Strand {}
    impl Sealed for &Strand {}
    impl<T: Sealed> Sealed for Option<T> {}
}

/// A value that can be normalized into the raw text held by a [`Strand`].
///
/// The set of implementors is sealed and exhaustive: raw text (owned,
/// borrowed, or copy-on-write), an existing [`Strand`] (owned or borrowed),
/// and [`Option`]s of any of those. `None` normalizes to [`NIL`].
///
/// Arbitrary values are deliberately excluded; anything else reaches a
/// [`Strand`] through [`Strand::from_display`].
pub trait StrSource: private::Sealed {
    /// Consumes the value, producing its canonical raw text.
    fn into_raw(self) -> String;
}

impl StrSource for String {
    fn into_raw(self) -> String {
        self
    }
}

impl StrSource for &String {
    fn into_raw(self) -> String {
        self.clone()
    }
}

impl StrSource for &str {
    fn into_raw(self) -> String {
        self.to_owned()
    }
}

impl StrSource for Cow<'_, str> {
    fn into_raw(self) -> String {
        self.into_owned()
    }
}

impl StrSource for Strand {
    fn into_raw(self) -> String {
        self.into_string()
    }
}

impl StrSource for &Strand {
    fn into_raw(self) -> String {
        self.as_str().to_owned()
    }
}

impl<T: StrSource> StrSource for Option<T> {
    fn into_raw(self) -> String {
        match self {
            Some(value) => value.into_raw(),
            None => NIL.to_owned(),
        }
    }
}
