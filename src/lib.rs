//! Chainable, boxed string values
//!
//! Working with the standard free functions for searching, trimming,
//! splitting, quoting, and numeric conversion quickly turns into nested
//! calls read inside-out. This crate boxes a string into a [`Strand`] so the
//! same operations become method calls that chain left to right, and boxes a
//! list of strings into a [`Strands`] for the split/join side of the family.
//!
//! ## Usage
//!
//! A [`Strand`] is built from raw text and transformed fluently; every
//! transformation returns a new value and the original is never mutated.
//!
//! ```
//! use strand::Strand;
//!
//! let slug = Strand::new("  Boxed Strings, Chained  ")
//!     .trim_space()
//!     .to_lower()
//!     .replace_all(", ", "-")
//!     .replace_all(" ", "-");
//! assert_eq!(slug, "boxed-strings-chained");
//! ```
//!
//! Splitting produces a [`Strands`], which converts losslessly to and from a
//! plain `Vec<String>` and joins back into a single [`Strand`].
//!
//! ```
//! use strand::Strand;
//!
//! let fields = Strand::new("a,,b").split(",");
//! assert_eq!(fields.to_strings(), vec!["a", "", "b"]);
//! assert_eq!(fields.join(","), "a,,b");
//! ```
//!
//! ## Construction is total
//!
//! Constructors accept a closed set of shapes — raw text, an existing box,
//! or an `Option` of either — and never fail. Absent values normalize to the
//! placeholder text [`NIL`]:
//!
//! ```
//! use strand::Strand;
//!
//! assert_eq!(Strand::new(None::<&str>), "nil");
//! assert_eq!(Strand::new(Some("here")), "here");
//! ```
//!
//! ## Strict and lossy forms
//!
//! Every fallible operation comes in two tiers: a strict form returning
//! `Result`, and a `_lossy` sibling that discards the error and returns the
//! zero value. The lossy tier is an ergonomic convenience, not a safety
//! feature; callers opt into strictness by using the `Result` form.
//!
//! ```
//! use strand::Strand;
//!
//! assert_eq!(Strand::new("0x2a").parse_int(0, 64).unwrap(), 42);
//! assert!(Strand::new("abc").parse_int(10, 64).is_err());
//! assert_eq!(Strand::new("abc").parse_int_lossy(10, 64), 0);
//! ```
//!
//! ## Multi-pattern replacement
//!
//! A [`Strands`] holding sequential (old, new) pairs builds a [`Replacer`]
//! applicable to any input:
//!
//! ```
//! use strand::Strands;
//!
//! let html = Strands::new(["<", "&lt;", ">", "&gt;"]).replacer().unwrap();
//! assert_eq!(html.replace("<b>"), "&lt;b&gt;");
//! ```
//!
//! ## Serde
//!
//! With the `serde` cargo feature enabled, [`Strand`] serializes as a plain
//! string and [`Strands`] as a sequence of strings; deserialization runs
//! through the normalizing constructors.

#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_must_use
)]
#![forbid(unsafe_code)]

mod num;
mod query;
mod quote;
mod replace;
mod source;
mod split;
mod strand;
mod strands;
mod transform;

pub use num::{Complex, FloatFormat, NumErrorKind, ParseNumError};
pub use quote::{quote_char, quote_char_to_ascii, quote_char_to_graphic, QuoteError};
pub use replace::{Replacer, ReplacerError};
pub use source::{StrSource, NIL};
pub use strand::Strand;
pub use strands::Strands;
pub use transform::SpecialCase;
