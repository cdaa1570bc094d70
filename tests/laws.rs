//! Property tests for the round-trip laws the crate guarantees.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use strand::{Strand, Strands};

#[quickcheck]
fn join_inverts_split(s: String, sep: String) -> TestResult {
    if sep.is_empty() {
        return TestResult::discard();
    }
    let boxed = Strand::new(s.as_str());
    TestResult::from_bool(boxed.split(&sep).join(&sep) == boxed)
}

#[quickcheck]
fn join_inverts_split_after_n(s: String) -> bool {
    let boxed = Strand::new(s.as_str());
    boxed.split_after_n(",", 3).join("") == boxed
}

#[quickcheck]
fn unquote_inverts_quote(s: String) -> bool {
    let boxed = Strand::new(s.as_str());
    [boxed.quote(), boxed.quote_to_ascii(), boxed.quote_to_graphic()]
        .iter()
        .all(|quoted| quoted.unquote().as_ref() == Ok(&boxed))
}

#[quickcheck]
fn quoted_prefix_consumes_the_quoted_token(s: String, tail: String) -> bool {
    // The closing quote delimits the token, so any tail may follow.
    let quoted = Strand::new(s.as_str()).quote();
    let with_tail = Strand::new(format!("{quoted}{tail}"));
    with_tail.quoted_prefix().as_ref() == Ok(&quoted)
}

#[quickcheck]
fn int_formatting_round_trips(value: i64, base_seed: u8) -> bool {
    let base = 2 + u32::from(base_seed) % 35;
    Strand::format_int(value, base).parse_int(base, 64) == Ok(value)
}

#[quickcheck]
fn uint_formatting_round_trips(value: u64, base_seed: u8) -> bool {
    let base = 2 + u32::from(base_seed) % 35;
    Strand::format_uint(value, base).parse_uint(base, 64) == Ok(value)
}

#[quickcheck]
fn split_items_reassemble_with_count(s: String) -> bool {
    // Splitting on a separator yields count + 1 items.
    let boxed = Strand::new(s.as_str());
    boxed.split(",").len() == boxed.count(",") + 1
}

#[quickcheck]
fn sequence_order_is_preserved(xs: Vec<String>) -> bool {
    let boxed = Strands::new(xs.clone());
    boxed.iter().map(Strand::as_str).eq(xs.iter().map(String::as_str))
}

#[quickcheck]
fn lossy_parses_never_panic(s: String) -> bool {
    let boxed = Strand::new(s.as_str());
    let _ = boxed.parse_int_lossy(0, 64);
    let _ = boxed.parse_uint_lossy(10, 32);
    let _ = boxed.parse_float_lossy(64);
    let _ = boxed.parse_complex_lossy(128);
    let _ = boxed.parse_bool_lossy();
    let _ = boxed.unquote_lossy();
    let _ = boxed.quoted_prefix_lossy();
    true
}
