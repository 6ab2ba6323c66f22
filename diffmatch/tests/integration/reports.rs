//! Rendered reports.

use diffmatch::{
    Difference, Expectation, Options, Tag, Value, difference, expect_map, expect_seq, map, seq,
};
use diffmatch_testhelpers::IPanic;
use indoc::indoc;
use insta::assert_snapshot;

fn report(expected: &Expectation, actual: &Value, options: &Options) -> Result<String, IPanic> {
    Ok(Difference::new(expected, actual, options)?.render_plain())
}

#[test]
fn substitution_then_addition() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let output = difference(&seq![1, 2], &seq![0, 2, 3], &Options::new())?.unwrap_or_default();
    assert_snapshot!(output, @r"
    [
      - 1+ 0,
      + 3
    ]
    Where, - 1 missing, + 2 additional
    ");
    Ok(())
}

#[test]
fn nested_differences_keep_their_shape() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = seq![
        map! { "id" => 1, "tags" => seq!["a", "b"] },
        map! { "id" => 2, "tags" => seq![] },
    ];
    let actual = seq![
        map! { "id" => 1, "tags" => seq!["a", "c"] },
        map! { "id" => 2, "tags" => seq![] },
    ];
    let output = difference(&expected, &actual, &Options::new())?.unwrap_or_default();
    assert_eq!(
        output,
        indoc! {r#"
            [
              {
                "tags": [
                  - "b"+ "c"
                ]
              }
            ]
            Where, - 1 missing, + 1 additional"#}
    );
    Ok(())
}

#[test]
fn every_matcher_glyph() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = expect_map! {
        "code" => Expectation::pattern(r"\d")?,
        "count" => Expectation::of_type(Tag::INTEGER),
        "even" => Expectation::predicate("even", |v| matches!(v, Value::Int(i) if i % 2 == 0)),
        "score" => Expectation::interval(0, 10),
        "kind" => Expectation::of_type(Tag::TEXT) | Expectation::literal(Value::Null),
    };
    let actual = map! {
        "code" => "a3b",
        "count" => 12,
        "even" => 4,
        "score" => 11,
        "kind" => Value::Null,
    };
    assert_snapshot!(report(&expected, &actual, &Options::new())?, @r#"
    {
      "code": ~ "a(3)b",
      "count": : 12,
      "even": { 4,
      "score": - 0..=10+ 11,
      "kind": | null
    }
    Where, - 1 missing, + 1 additional, ~ 1 match_pattern, : 1 match_type, { 1 match_predicate, | 1 match_alternative
    "#);
    Ok(())
}

#[test]
fn missing_and_additional_keys() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = map! { "a" => 1, "b" => map! { "c" => 2 } };
    let actual = map! { "b" => map! { "c" => 2, "d" => 3 }, "e" => seq![true] };
    assert_snapshot!(report(&Expectation::from(expected), &actual, &Options::new())?, @r#"
    {
      - "a": 1,
      "b": {
        + "d": 3
      },
      + "e": [true]
    }
    Where, - 1 missing, + 2 additional
    "#);
    Ok(())
}

#[test]
fn shape_mismatch_is_one_entry() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = expect_map! { "items" => expect_seq![1, 2] };
    let actual = map! { "items" => map! { "0" => 1, "1" => 2 } };
    assert_snapshot!(report(&expected, &actual, &Options::new())?, @r#"
    {
      "items": - [1, 2]+ {"0": 1, "1": 2}
    }
    Where, - 1 missing, + 1 additional
    "#);
    Ok(())
}

#[test]
fn tagged_values() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let point = Tag::from("point");
    let expected = Value::tagged(point.clone(), seq![1, 2]);
    let actual = Value::tagged(Tag::from("vector"), seq![1, 2]);
    let output = difference(&expected, &actual, &Options::new())?.unwrap_or_default();
    assert_snapshot!(output, @r"
    - point([1, 2])+ vector([1, 2])
    Where, - 1 missing, + 1 additional
    ");

    let kind = Expectation::of_type(point.clone());
    assert_eq!(difference(&kind, &Value::tagged(point, 1), &Options::new())?, None);
    Ok(())
}
