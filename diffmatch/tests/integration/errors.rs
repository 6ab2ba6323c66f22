//! Conditions that abort a comparison.

use diffmatch::{
    DiffError, Expectation, Options, Repeat, SharedValue, Tag, Value, difference, expect_map,
    expect_seq, seq,
};

fn cyclic_list() -> SharedValue {
    let node = SharedValue::new(Value::Null);
    *node.write() = seq![1, Value::Shared(node.clone())];
    node
}

#[test]
fn repeat_needs_a_sequence() {
    diffmatch_testhelpers::setup();
    let texts = Expectation::all(Tag::TEXT, 0_usize..);
    assert_eq!(
        difference(&texts, &Value::from("x"), &Options::new()),
        Err(DiffError::NotASequence { found: Tag::TEXT })
    );

    // Errors abort the whole comparison, even deep inside a larger diff.
    let nested = expect_map! { "a" => 1, "list" => texts };
    let actual = diffmatch::map! { "a" => 2, "list" => 5 };
    assert_eq!(
        difference(&nested, &actual, &Options::new()),
        Err(DiffError::NotASequence {
            found: Tag::INTEGER
        })
    );
}

#[test]
fn repeat_inside_a_sequence_only_applies_to_its_partner() {
    diffmatch_testhelpers::setup();
    let expected = expect_seq![Expectation::all(Tag::INTEGER, 0_usize..), "x"];
    assert_eq!(
        difference(&expected, &seq![seq![1, 2], "x"], &Options::new()),
        Ok(None)
    );

    // Still an error when the alignment pairs the repeat with a non-sequence.
    assert_eq!(
        difference(&expected, &seq![7, "x"], &Options::new()),
        Err(DiffError::NotASequence {
            found: Tag::INTEGER
        })
    );
}

#[test]
fn repeat_bounds_must_be_ordered() {
    diffmatch_testhelpers::setup();
    let inverted = Expectation::from(Repeat::new(Tag::TEXT).min(4).max(2));
    let err = difference(&inverted, &seq!["a"], &Options::new()).unwrap_err();
    assert_eq!(err, DiffError::InvalidSizeBounds { min: 4, max: 2 });
    assert_eq!(
        err.to_string(),
        "invalid repeat bounds: min 4 is greater than max 2"
    );
}

#[test]
fn unknown_color_scheme() {
    diffmatch_testhelpers::setup();
    let options = Options::new().color_scheme_named("neon");
    assert_eq!(
        difference(&Value::from(1), &Value::from(1), &options),
        Err(DiffError::UnknownColorScheme {
            name: "neon".into()
        })
    );
}

#[test]
fn cycles_in_the_actual_value() {
    diffmatch_testhelpers::setup();
    let node = cyclic_list();
    let actual = Value::Shared(node.clone());
    assert_eq!(
        difference(&seq![1, seq![1]], &actual, &Options::new()),
        Err(DiffError::CyclicStructure)
    );
    *node.write() = Value::Null;
}

#[test]
fn cycles_in_the_expected_value() {
    diffmatch_testhelpers::setup();
    let node = cyclic_list();
    let expected = Value::Shared(node.clone());
    assert_eq!(
        difference(&expected, &seq![1, seq![1]], &Options::new()),
        Err(DiffError::CyclicStructure)
    );
    assert_eq!(
        difference(&expected, &expected, &Options::new()),
        Err(DiffError::CyclicStructure)
    );
    *node.write() = Value::Null;
}

#[test]
fn invalid_pattern() {
    diffmatch_testhelpers::setup();
    let err = Expectation::pattern("(unclosed").unwrap_err();
    assert!(matches!(err, DiffError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}
