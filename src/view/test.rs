use super::*;
use crate::charset::{DIGITS_SET, HEX_DIGITS_SET};

fn reassemble(p: Partition<'_>) -> Vec<u8> {
    [p.before.as_bytes(), p.matched.as_bytes(), p.after.as_bytes()].concat()
}

#[test]
fn accessors() {
    let v = ByteStr::new(b"abc");
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
    assert_eq!(v.first(), Some(b'a'));
    assert_eq!(v.last(), Some(b'c'));
    assert_eq!(v.as_bytes(), b"abc");

    let empty = ByteStr::default();
    assert!(empty.is_empty());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn get_and_slice() {
    let v = ByteStr::new(b"abcdef");
    assert_eq!(v.get(1..3).unwrap(), "bc");
    assert_eq!(v.get(..).unwrap(), v);
    assert_eq!(v.get(..=0).unwrap(), "a");
    assert_eq!(v.get(4..), Some(ByteStr::new(b"ef")));
    assert_eq!(v.get(5..9), None);
    assert_eq!(v.slice(2..4), "cd");
    assert_eq!(v.slice(6..), "");
}

#[test]
#[should_panic]
fn slice_out_of_bounds_panics() {
    let v = ByteStr::new(b"abc");
    let _ = v.slice(2..9);
}

#[test]
fn sub_views_borrow_from_the_source() {
    let v = ByteStr::new(b"abcdef");
    let sub = v.slice(2..5);
    assert_eq!(sub.as_bytes().as_ptr() as usize - v.as_bytes().as_ptr() as usize, 2);
}

#[test]
fn find_and_rfind() {
    let v = ByteStr::new(b"abracadabra");
    assert_eq!(v.find("abra"), Some(0));
    assert_eq!(v.rfind("abra"), Some(7));
    assert_eq!(v.find("cad"), Some(4));
    assert_eq!(v.rfind("cad"), Some(4));
    assert_eq!(v.find("zebra"), None);
    assert_eq!(v.rfind("zebra"), None);
    assert!(v.contains("cad"));
    assert!(!v.contains("dac"));
}

#[test]
fn find_empty_needle_conventions() {
    let v = ByteStr::new(b"abc");
    assert_eq!(v.find(""), Some(0));
    assert_eq!(v.rfind(""), Some(3));
    assert_eq!(ByteStr::default().find(""), Some(0));
    assert_eq!(ByteStr::default().rfind(""), Some(0));
}

#[test]
fn find_with_offsets() {
    let v = ByteStr::new(b"abcabcabc");
    assert_eq!(v.find_from("abc", 0), Some(0));
    assert_eq!(v.find_from("abc", 1), Some(3));
    assert_eq!(v.find_from("abc", 7), None);
    assert_eq!(v.find_from("abc", 9), None);

    assert_eq!(v.rfind_from("abc", 9), Some(6));
    assert_eq!(v.rfind_from("abc", 8), Some(3));
    assert_eq!(v.rfind_from("abc", 2), None);
    assert_eq!(v.rfind_from("abc", 0), None);
}

#[test]
#[should_panic]
fn find_from_past_the_end_panics() {
    let _ = ByteStr::new(b"abc").find_from("a", 4);
}

#[test]
fn byte_search() {
    let v = ByteStr::new(b"mississippi");
    assert_eq!(v.find_byte(b's'), Some(2));
    assert_eq!(v.rfind_byte(b's'), Some(6));
    assert_eq!(v.find_byte(b'z'), None);
    assert!(v.contains_byte(b'p'));
    assert!(!v.contains_byte(b'z'));
}

#[test]
fn set_search() {
    let v = ByteStr::new(b"key42value7");
    assert_eq!(v.find_first_of(DIGITS_SET), Some(3));
    assert_eq!(v.find_last_of(DIGITS_SET), Some(10));
    assert_eq!(v.find_first_not_of(b"key"), Some(3));
    assert_eq!(v.find_last_not_of(DIGITS_SET), Some(9));
    assert_eq!(v.find_first_of(b"#!"), None);
    assert_eq!(ByteStr::default().find_first_of(DIGITS_SET), None);
}

#[test]
fn prefixes_and_suffixes() {
    let v = ByteStr::new(b"prefix:rest.txt");
    assert!(v.starts_with("prefix"));
    assert!(v.ends_with(".txt"));
    assert!(!v.starts_with("rest"));
    assert_eq!(v.strip_prefix("prefix:").unwrap(), "rest.txt");
    assert_eq!(v.strip_suffix(".txt").unwrap(), "prefix:rest");
    assert_eq!(v.strip_prefix("rest"), None);
    assert!(v.starts_with(""));
    assert_eq!(v.strip_suffix("").unwrap(), v);

    assert!(v.starts_with_byte(b'p'));
    assert!(v.ends_with_byte(b't'));
    assert!(!v.ends_with_byte(b'p'));
    assert!(!ByteStr::default().starts_with_byte(b'p'));
    assert!(!ByteStr::default().ends_with_byte(b'p'));
}

#[test]
fn stripping() {
    let v = ByteStr::new(b"  \thello world\r\n");
    assert_eq!(v.lstrip(WHITESPACE_SET), "hello world\r\n");
    assert_eq!(v.rstrip(WHITESPACE_SET), "  \thello world");
    assert_eq!(v.strip(WHITESPACE_SET), "hello world");
    assert_eq!(v.trim(), "hello world");

    assert_eq!(ByteStr::new(b"xxabcxx").strip(b"x"), "abc");
    assert_eq!(ByteStr::new(b"abc").strip(b"x"), "abc");
}

#[test]
fn stripping_everything_leaves_an_empty_view() {
    let v = ByteStr::new(b"   ");
    assert!(v.trim().is_empty());
    assert!(v.lstrip(WHITESPACE_SET).is_empty());
    assert!(v.rstrip(WHITESPACE_SET).is_empty());
    assert!(ByteStr::default().trim().is_empty());
}

#[test]
fn trim_is_idempotent() {
    for raw in [b" a b ".as_slice(), b"ab", b"", b"  ", b"\t\na\r"] {
        let once = ByteStr::new(raw).trim();
        assert_eq!(once.trim(), once);
    }
}

#[test]
fn partition_around_first_match() {
    let v = ByteStr::new(b"key=value=tail");
    let p = v.partition("=");
    assert_eq!(p.before, "key");
    assert_eq!(p.matched, "=");
    assert_eq!(p.after, "value=tail");
    assert_eq!(reassemble(p), v.as_bytes());
}

#[test]
fn rpartition_around_last_match() {
    let v = ByteStr::new(b"key=value=tail");
    let p = v.rpartition("=");
    assert_eq!(p.before, "key=value");
    assert_eq!(p.matched, "=");
    assert_eq!(p.after, "tail");
    assert_eq!(reassemble(p), v.as_bytes());
}

#[test]
fn partition_misses() {
    let v = ByteStr::new(b"plain");

    let p = v.partition(",");
    assert_eq!(p.before, v);
    assert!(p.matched.is_empty());
    assert!(p.after.is_empty());
    assert_eq!(reassemble(p), v.as_bytes());

    let p = v.rpartition(",");
    assert_eq!(p.before, v);
    assert!(p.matched.is_empty());
    assert!(p.after.is_empty());
    assert_eq!(reassemble(p), v.as_bytes());
}

#[test]
fn ranges_from_views() {
    let v = ByteStr::new(b"a,b,,c");
    let fields: Vec<_> = v.split(",").collect();
    assert_eq!(fields, ["a", "b", "", "c"]);

    let fields: Vec<_> = v.rsplit(",").collect();
    assert_eq!(fields, ["c", "", "b", "a"]);

    assert_eq!(v.matches(",").count(), 3);
    assert_eq!(v.rmatches(",").count(), 3);
    assert_eq!(ByteStr::new(b"aaaa").matches("aa").count(), 3);
    assert_eq!(ByteStr::new(b"aaaa").matches_disjoint("aa").count(), 2);
    assert_eq!(ByteStr::new(b"aaaa").rmatches_disjoint("aa").count(), 2);
}

#[test]
fn set_ranges_from_views() {
    let v = ByteStr::new(b"a1b22c");
    assert_eq!(v.matches_of(DIGITS_SET).count(), 3);
    assert_eq!(v.rmatches_of(DIGITS_SET).count(), 3);
    assert_eq!(v.matches_not_of(DIGITS_SET).count(), 3);
    assert_eq!(v.rmatches_not_of(DIGITS_SET).count(), 3);

    let parts: Vec<_> = v.split_of(DIGITS_SET).collect();
    assert_eq!(parts, ["a", "b", "", "c"]);
    let parts: Vec<_> = v.rsplit_of(DIGITS_SET).collect();
    assert_eq!(parts, ["c", "", "b", "a"]);
}

#[test]
fn line_and_whitespace_splitting() {
    let text = ByteStr::new(b"one\ntwo\r\nthree");
    let lines: Vec<_> = text.split_lines().collect();
    // A \r\n pair is two terminators, so an empty line sits between them.
    assert_eq!(lines, ["one", "two", "", "three"]);

    let words: Vec<_> = ByteStr::new(b"a b\tc").split_whitespace().collect();
    assert_eq!(words, ["a", "b", "c"]);
}

#[test]
fn classification() {
    assert!(ByteStr::new(b"abc").is_alphabetic());
    assert!(!ByteStr::new(b"abc1").is_alphabetic());
    assert!(ByteStr::new(b"abc1").is_alphanumeric());
    assert!(ByteStr::new(b"0420").is_digit());
    assert!(!ByteStr::new(b"0x42").is_digit());
    assert!(ByteStr::new(b"abc").is_lowercase());
    assert!(!ByteStr::new(b"aBc").is_lowercase());
    assert!(ByteStr::new(b"ABC").is_uppercase());
    assert!(ByteStr::new(b" \t\r\n").is_space());
    assert!(!ByteStr::new(b" x ").is_space());
    assert!(ByteStr::new(b"deadBEEF42").contains_only(HEX_DIGITS_SET));
    assert!(!ByteStr::new(b"0xg").contains_only(HEX_DIGITS_SET));
}

#[test]
fn classification_of_the_empty_view() {
    let empty = ByteStr::default();

    // Set containment holds vacuously.
    assert!(empty.contains_only(DIGITS_SET));
    assert!(empty.is_ascii());
    assert!(empty.is_printable());

    // Shape predicates require at least one byte.
    assert!(!empty.is_alphabetic());
    assert!(!empty.is_alphanumeric());
    assert!(!empty.is_digit());
    assert!(!empty.is_lowercase());
    assert!(!empty.is_space());
    assert!(!empty.is_uppercase());
}

#[test]
fn ascii_and_printable() {
    assert!(ByteStr::new(b"plain text, 42!").is_printable());
    assert!(!ByteStr::new(b"bell\x07").is_printable());
    assert!(ByteStr::new(b"\x00\x7F").is_ascii());
    assert!(!ByteStr::new(b"caf\xC3\xA9").is_ascii());
}

#[test]
fn equality_and_ordering() {
    let v = ByteStr::new(b"abc");
    assert_eq!(v, ByteStr::new(b"abc"));
    assert_eq!(v, *b"abc");
    assert_eq!(v, b"abc");
    assert_eq!(v, b"abc".as_slice());
    assert_eq!(v, "abc");
    assert_ne!(v, "abd");

    assert!(ByteStr::new(b"abc") < ByteStr::new(b"abd"));
    assert!(ByteStr::new(b"abc") < ByteStr::new(b"abcd"));
    assert!(ByteStr::new(b"b") > ByteStr::new(b"abcd"));

    let mut keys = [ByteStr::new(b"pear"), ByteStr::new(b"apple"), ByteStr::new(b"app")];
    keys.sort_unstable();
    assert_eq!(keys, [ByteStr::new(b"app"), ByteStr::new(b"apple"), ByteStr::new(b"pear")]);
}

#[test]
fn views_work_as_map_keys() {
    let mut counts = std::collections::HashMap::new();
    for word in ByteStr::new(b"to be or not to be").split(" ") {
        *counts.entry(word).or_insert(0usize) += 1;
    }
    assert_eq!(counts[&ByteStr::new(b"to")], 2);
    assert_eq!(counts[&ByteStr::new(b"or")], 1);
    assert_eq!(counts.len(), 4);
}

#[test]
fn indexing_and_iteration() {
    let v = ByteStr::new(b"abc");
    assert_eq!(v[0], b'a');
    assert_eq!(&v[1..], b"bc");
    assert_eq!(v.iter().count(), 3);
    assert_eq!(v.into_iter().collect::<Vec<u8>>(), b"abc");
    assert_eq!((&v).into_iter().count(), 3);
}

#[test]
fn formatting() {
    let v = ByteStr::new(b"ab\"\n\xFF");
    assert_eq!(format!("{v:?}"), "\"ab\\\"\\n\\xff\"");
    assert_eq!(format!("{}", ByteStr::new(b"plain")), "plain");
}

#[test]
fn hash_value_is_content_stable() {
    let backing = b"hello world hello".to_vec();
    let v = ByteStr::new(&backing);
    assert_eq!(v.hash_value(), ByteStr::new(b"hello world hello").hash_value());
    assert_eq!(v.slice(..5).hash_value(), v.slice(12..).hash_value());
    assert_ne!(v.slice(..5).hash_value(), v.slice(..6).hash_value());
}

#[test]
fn to_twine_copies_the_bytes() {
    let v = ByteStr::new(b"borrowed bytes");
    let owned = v.to_twine().unwrap();
    assert_eq!(owned.as_bytes(), v.as_bytes());
}

#[test]
fn edit_distances() {
    let v = ByteStr::new(b"kitten");
    assert_eq!(v.edit_distance("sitting"), 3);
    assert_eq!(v.edit_distance(v), 0);
    assert_eq!(v.edit_distance_bounded("sitting", 3), Some(3));
    assert_eq!(v.edit_distance_bounded("sitting", 2), None);
}
