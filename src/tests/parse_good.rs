#![allow(clippy::float_cmp)]

use alloc::vec;

use crate::{ArrayToken, StringToken, Token, parse};

#[test]
fn integer() {
    let token = parse("42").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 2);
    assert_eq!(number.value, 42.0);
    assert_eq!(number.literal, "42");
}

#[test]
fn negative_integer() {
    let token = parse("-7").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 2);
    assert_eq!(number.value, -7.0);
    assert_eq!(number.literal, "-7");
}

#[test]
fn decimal() {
    let token = parse("3.14").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 4);
    assert_eq!(number.value, 3.14);
    assert_eq!(number.literal, "3.14");
}

#[test]
fn negative_decimal() {
    let token = parse("-0.99").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 5);
    assert_eq!(number.value, -0.99);
    assert_eq!(number.literal, "-0.99");
}

#[test]
fn scientific_notation() {
    let token = parse("6.02e23").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 7);
    assert_eq!(number.value, 6.02e23);
    assert_eq!(number.literal, "6.02e23");

    let token = parse("1.23e-4").unwrap();
    assert_eq!(token.as_number().unwrap().literal, "1.23e-4");

    // Exponent marker case and explicit plus are preserved verbatim.
    let token = parse("2.5E+10").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(number.value, 2.5E+10);
    assert_eq!(number.literal, "2.5E+10");
}

#[test]
fn zero() {
    let token = parse("0").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 1);
    assert_eq!(number.value, 0.0);
    assert_eq!(number.literal, "0");
}

#[test]
fn number_with_whitespace() {
    // Leading whitespace counts into skip, trailing does not.
    let token = parse("  123 ").unwrap();
    let number = token.as_number().unwrap();
    assert_eq!(token.skip(), 5);
    assert_eq!(number.value, 123.0);
    assert_eq!(number.literal, "123");
}

#[test]
fn empty_string() {
    let token = parse("\"\"").unwrap();
    assert_eq!(token.skip(), 2);
    assert_eq!(token.as_string().unwrap().value, "");
}

#[test]
fn normal_string() {
    let token = parse("\"hello\"").unwrap();
    assert_eq!(token.skip(), 7);
    assert_eq!(token.as_string().unwrap().value, "hello");
}

#[test]
fn string_with_escaped_backslash() {
    let token = parse("\"a\\\\b\"").unwrap();
    assert_eq!(token.skip(), 6);
    assert_eq!(token.as_string().unwrap().value, "a\\b");
}

#[test]
fn string_with_mixed_escapes() {
    let token = parse("\"a\\b\\n\\u0041\\t\"").unwrap();
    assert_eq!(token.skip(), 15);
    assert_eq!(token.as_string().unwrap().value, "a\u{0008}\n\\u0041\t");
}

#[test]
fn string_with_whitespace() {
    let token = parse("  \"abc\"  ").unwrap();
    assert_eq!(token.skip(), 7);
    assert_eq!(token.as_string().unwrap().value, "abc");
}

#[test]
fn unicode_escape_kept_verbatim() {
    let token = parse("\"\\u0041\"").unwrap();
    assert_eq!(token.skip(), 8);
    assert_eq!(token.as_string().unwrap().value, "\\u0041");
}

#[test]
fn keyword_literals() {
    assert!(parse("null").unwrap().is_null());
    assert_eq!(parse("true").unwrap().as_bool(), Some(true));
    assert_eq!(parse("false").unwrap().as_bool(), Some(false));
    assert_eq!(parse("  null ").unwrap().skip(), 6);
}

#[test]
fn array_of_scalars_full_tree() {
    assert_eq!(
        parse("[null, true, \"x\"]").unwrap(),
        Token::Array(ArrayToken {
            skip: 17,
            elements: vec![
                Token::Null { skip: 4 },
                Token::True { skip: 4 },
                Token::String(StringToken {
                    skip: 3,
                    value: "x".into()
                }),
            ],
        })
    );
}

#[test]
fn empty_composites() {
    assert_eq!(parse("{}").unwrap().as_object().unwrap().members.len(), 0);
    assert_eq!(parse("[]").unwrap().as_array().unwrap().elements.len(), 0);
    assert_eq!(parse(" [ ] ").unwrap().skip(), 4);
}

#[test]
fn object_member_order_is_preserved() {
    let token = parse("{\"b\":1,\"a\":2,\"c\":3}").unwrap();
    let object = token.as_object().unwrap();
    let keys: alloc::vec::Vec<&str> = object
        .members
        .iter()
        .map(|member| member.key.value.as_str())
        .collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn duplicate_keys_are_both_retained() {
    let token = parse("{\"a\":1,\"a\":2}").unwrap();
    let object = token.as_object().unwrap();
    assert_eq!(object.members.len(), 2);
    assert_eq!(object.members[0].key.value, "a");
    assert_eq!(object.members[0].value.as_number().unwrap().value, 1.0);
    assert_eq!(object.members[1].key.value, "a");
    assert_eq!(object.members[1].value.as_number().unwrap().value, 2.0);
}

#[test]
fn nested_document() {
    let text = "{\"name\": \"deep\", \"tags\": [1, 2.5, null], \"meta\": {\"ok\": true}}";
    let token = parse(text).unwrap();
    assert_eq!(token.skip(), text.chars().count());

    let object = token.as_object().unwrap();
    assert_eq!(object.members.len(), 3);
    assert_eq!(object.members[0].key.value, "name");
    assert_eq!(
        object.members[0].value.as_string().unwrap().value,
        "deep"
    );

    let tags = object.members[1].value.as_array().unwrap();
    assert_eq!(tags.elements.len(), 3);
    assert_eq!(tags.elements[1].as_number().unwrap().literal, "2.5");
    assert!(tags.elements[2].is_null());

    let meta = object.members[2].value.as_object().unwrap();
    assert_eq!(meta.members[0].key.value, "ok");
    assert_eq!(meta.members[0].value.as_bool(), Some(true));
}

#[test]
fn deeply_nested_arrays() {
    let token = parse("[[[[]]]]").unwrap();
    assert_eq!(token.skip(), 8);
    let mut current = token.as_array().unwrap();
    for _ in 0..3 {
        current = current.elements[0].as_array().unwrap();
    }
    assert!(current.elements.is_empty());
}

#[test]
fn skip_is_counted_in_characters() {
    let token = parse("{\"é\": \"née\"}").unwrap();
    assert_eq!(token.skip(), 12);
    let object = token.as_object().unwrap();
    assert_eq!(object.members[0].key.value, "é");
    assert_eq!(object.members[0].value.as_string().unwrap().value, "née");
}
