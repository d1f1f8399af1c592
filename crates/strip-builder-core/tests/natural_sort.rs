use std::cmp::Ordering;
use strip_builder_core::natural::{Token, natural_cmp, natural_key};

#[test]
fn numeric_suffixes_sort_by_value() {
    let mut names: Vec<String> = (0..12).rev().map(|i| format!("f{}.png", i)).collect();
    names.sort_by(|a, b| natural_cmp(a, b));
    let expected: Vec<String> = (0..12).map(|i| format!("f{}.png", i)).collect();
    assert_eq!(names, expected);
}

#[test]
fn ten_sorts_after_nine_not_after_one() {
    assert_eq!(natural_cmp("f9.png", "f10.png"), Ordering::Less);
    assert_eq!(natural_cmp("f10.png", "f2.png"), Ordering::Greater);
    assert_eq!(natural_cmp("f1.png", "f10.png"), Ordering::Less);
}

#[test]
fn zero_padding_width_does_not_matter() {
    let mut names = vec!["bangs10.png", "bangs02.png", "bangs9.png", "bangs001.png"];
    names.sort_by(|a, b| natural_cmp(a, b));
    assert_eq!(
        names,
        vec!["bangs001.png", "bangs02.png", "bangs9.png", "bangs10.png"]
    );
}

#[test]
fn text_compares_case_insensitively() {
    assert_eq!(natural_cmp("Run2.png", "run10.png"), Ordering::Less);
    assert_eq!(natural_key("IDLE3.PNG"), natural_key("idle3.png"));
}

#[test]
fn padded_and_unpadded_numbers_are_equal_keys() {
    assert_eq!(natural_key("f01.png"), natural_key("f1.png"));
}

#[test]
fn key_alternates_text_and_numbers() {
    let k = natural_key("10a");
    assert_eq!(
        k.0,
        vec![
            Token::Text(String::new()),
            Token::Num("10".into()),
            Token::Text("a".into()),
        ]
    );
    let k = natural_key("f0");
    assert_eq!(
        k.0,
        vec![
            Token::Text("f".into()),
            Token::Num(String::new()),
            Token::Text(String::new()),
        ]
    );
}

#[test]
fn very_long_numbers_do_not_overflow() {
    let a = "f99999999999999999999999999.png";
    let b = "f100000000000000000000000000.png";
    assert_eq!(natural_cmp(a, b), Ordering::Less);
}
