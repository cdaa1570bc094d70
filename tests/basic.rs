use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use static_assertions::assert_impl_all;
use strand::{ParseNumError, QuoteError, Replacer, ReplacerError, Strand, Strands, NIL};

assert_impl_all!(
    Strand: Clone,
    std::fmt::Debug,
    std::fmt::Display,
    std::hash::Hash,
    Eq,
    Ord,
    Default,
    Send,
    Sync
);
assert_impl_all!(
    Strands: Clone,
    std::fmt::Debug,
    std::fmt::Display,
    std::hash::Hash,
    Eq,
    Default,
    Send,
    Sync
);
assert_impl_all!(Replacer: Clone, std::fmt::Debug, Default, Send, Sync);
assert_impl_all!(QuoteError: std::error::Error, Send, Sync);
assert_impl_all!(ParseNumError: std::error::Error, Send, Sync);
assert_impl_all!(ReplacerError: std::error::Error, Send, Sync);

#[quickcheck]
fn construction_round_trips(s: String) -> bool {
    Strand::new(s.as_str()).as_str() == s
}

#[quickcheck]
fn sequence_round_trips(xs: Vec<String>) -> bool {
    Strands::new(xs.clone()).into_strings() == xs
}

#[test]
pub fn equality_tests() {
    let x = Strand::new("One");
    assert_eq!(x, Strand::new("One"));
    assert_eq!(x, "One");
    assert_eq!("One", x);
    assert_eq!(x, String::from("One"));
    assert_ne!(x, "one");

    assert_eq!("One", x.clone().into_string());
}

#[test]
pub fn absent_values_normalize_to_nil() {
    assert_eq!(Strand::new(None::<&str>), NIL);
    assert_eq!(Strand::new(None::<String>), "nil");
    assert_eq!(Strand::new(Some("present")), "present");

    let from_opt: Strand = None::<&str>.into();
    assert_eq!(from_opt.as_str(), "nil");
}

#[test]
pub fn parsing_never_fails() -> Result<(), Box<dyn std::error::Error>> {
    let x: Strand = "One".parse()?;
    assert_eq!("One", x.as_str());
    Ok(())
}

#[test]
fn can_use_as_hash_keys() {
    let mut set = HashSet::new();

    assert!(set.insert(Strand::new("One")));
    assert!(set.insert(Strand::new("Seven")));

    // Borrow<str> lets raw text probe the set.
    assert!(set.contains("One"));
    assert!(!set.contains("Two"));

    assert!(set.remove("Seven"));
    assert!(!set.remove("Seven"));
}

#[test]
fn transformations_leave_the_source_untouched() {
    let original = Strand::new("shouting");
    let upper = original.to_upper();
    assert_eq!(original, "shouting");
    assert_eq!(upper, "SHOUTING");
}

#[test]
fn display_and_debug() {
    let s = Strand::new("One");
    assert_eq!("One", s.to_string());
    assert_eq!("\"One\"", format!("{s:?}"));

    let items = Strands::new(["One", "Two"]);
    assert_eq!("One, Two", items.to_string());
}
