//! End-to-end scenarios exercising the chained method surface.

use strand::{Strand, Strands};

#[test]
fn normalizing_a_header_line() {
    let value = Strand::new("  content-type:  Text/HTML  ");
    let (key, rest, found) = value.trim_space().cut(":");
    assert!(found);
    assert_eq!(key.header_key(), "Content-Type");
    assert_eq!(rest.trim_space().to_lower(), "text/html");
}

#[test]
fn tokenizing_and_reassembling_a_path() {
    let path = Strand::new("/usr//local/bin/");
    let parts: Vec<String> = path
        .split("/")
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(Strand::into_string)
        .collect();
    assert_eq!(parts, vec!["usr", "local", "bin"]);

    let rebuilt = Strands::new(parts).join("/");
    assert_eq!(rebuilt, "usr/local/bin");
}

#[test]
fn csv_row_with_quoted_cell() {
    let row = Strand::new("name,\"last, first\",age");
    let cell = row.split_n(",", 2)[1].clone();
    let quoted = cell.quoted_prefix().unwrap();
    assert_eq!(quoted.unquote().unwrap(), "last, first");
}

#[test]
fn escaping_markup_via_replacer() {
    let escape = Strands::new(["&", "&amp;", "<", "&lt;", ">", "&gt;"])
        .replacer()
        .unwrap();
    let line = Strand::new("a < b && b > c");
    assert_eq!(
        escape.replace_strand(&line),
        "a &lt; b &amp;&amp; b &gt; c"
    );
}

#[test]
fn building_a_report_line() {
    let mut sink = Vec::new();
    let label = Strand::new("ratio");
    let written = label
        .to_upper()
        .trim_suffix("O")
        .write_to(&mut sink)
        .unwrap();
    assert_eq!(written, 4);
    assert_eq!(sink, b"RATI");

    let value = Strand::format_float(2.0 / 3.0, strand::FloatFormat::Fixed, Some(3));
    assert_eq!(value, "0.667");
}

#[test]
fn chained_numeric_extraction() {
    let line = Strand::new("retries=0x10 timeout=250");
    let retries = line
        .fields()
        .iter()
        .find_map(|field| {
            let (key, value, _) = field.cut("=");
            (key == "retries").then(|| value.parse_int(0, 64))
        })
        .unwrap()
        .unwrap();
    assert_eq!(retries, 16);
}
