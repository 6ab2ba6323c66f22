//! Behavioral properties every comparison satisfies.

use diffmatch::{
    Composite, Difference, Expectation, Options, Repeat, Tag, Value, difference, expect_map,
    expect_seq, map, seq,
};
use diffmatch_testhelpers::{IPanic, visible_text};

fn sample_values() -> Vec<Value> {
    let shared = Value::shared(map! { "x" => 1, "y" => 2 });
    vec![
        Value::Null,
        Value::from(true),
        Value::from(-7),
        Value::from(2.5),
        Value::from("hello"),
        seq![],
        seq![1, "two", seq![3.0, Value::Null]],
        map! { "a" => 1, "b" => seq![true, false], "c" => map! { "d" => "e" } },
        Value::tagged(Tag::from("point"), seq![1, 2]),
        seq![shared.clone(), shared],
    ]
}

#[test]
fn every_value_matches_itself() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    for value in sample_values() {
        assert_eq!(difference(&value, &value, &Options::new())?, None, "{value}");
        let literal = Expectation::literal(value.clone());
        assert_eq!(difference(&literal, &value, &Options::new())?, None, "{value}");
    }
    Ok(())
}

#[test]
fn integers_and_floats_compare_numerically() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    assert_eq!(
        difference(&Value::from(1), &Value::from(1.0), &Options::new())?,
        None
    );
    Ok(())
}

#[test]
fn mapping_counts_follow_key_sets() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = map! { "a" => 1, "b" => 2, "c" => 3 };
    let actual = map! { "b" => 2, "c" => 3, "d" => 5, "e" => 6 };

    let plain = Difference::new(&expected, &actual, &Options::new())?;
    assert_eq!(plain.counts().missing(), 1);
    assert_eq!(plain.counts().additional(), 2);

    let optional = Difference::new(&expected, &actual, &Options::new().optional_key("a"))?;
    assert_eq!(optional.counts().missing(), 0);
    assert_eq!(optional.counts().additional(), 2);

    let ignoring = Options::new().optional_key("a").ignore_additional(true);
    let ignoring = Difference::new(&expected, &actual, &ignoring)?;
    assert_eq!(ignoring.counts().missing(), 0);
    assert_eq!(ignoring.counts().additional(), 0);
    assert!(ignoring.is_match());
    Ok(())
}

#[test]
fn sequence_insertion_is_one_additional() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let diff = Difference::new(&seq![1, 2, 4, 5], &seq![1, 2, 3, 4, 5], &Options::new())?;
    assert_eq!(diff.counts().additional(), 1);
    assert_eq!(diff.counts().missing(), 0);
    assert!(!diff.is_match());
    assert_eq!(diff.render_plain(), "[\n  + 3\n]\nWhere, + 1 additional");
    Ok(())
}

#[test]
fn sequence_deletion_is_one_missing() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let diff = Difference::new(&seq![1, 2, 3, 4, 5], &seq![1, 2, 4, 5], &Options::new())?;
    assert_eq!(diff.counts().missing(), 1);
    assert_eq!(diff.counts().additional(), 0);
    assert!(!diff.is_match());
    assert_eq!(diff.render_plain(), "[\n  - 3\n]\nWhere, - 1 missing");
    Ok(())
}

#[test]
fn text_pattern() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let lowercase = Expectation::pattern("[a-z]")?;
    assert_eq!(difference(&lowercase, &Value::from("a"), &Options::new())?, None);

    let diff = Difference::new(&lowercase, &Value::from("A"), &Options::new())?;
    assert_eq!(diff.counts().missing(), 1);
    assert_eq!(diff.counts().additional(), 1);
    assert_eq!(
        diff.render_plain(),
        "- /[a-z]/+ \"A\"\nWhere, - 1 missing, + 1 additional"
    );
    Ok(())
}

#[test]
fn repeat_with_size_interval() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let texts = Expectation::all(Tag::TEXT, 2_usize..=3);
    assert_eq!(
        difference(&texts, &seq!["a", "b", "c"], &Options::new())?,
        None
    );

    let at_least_three = Expectation::from(Repeat::new(Tag::TEXT).min(3));
    let diff = Difference::new(&at_least_three, &seq!["ay", "be"], &Options::new())?;
    assert_eq!(diff.counts().missing(), 1);
    assert_eq!(diff.counts().get(diffmatch::Category::MatchType), 2);
    assert_eq!(
        diff.render_plain(),
        "[\n  : \"ay\",\n  : \"be\",\n  - text\n]\nWhere, - 1 missing, : 2 match_type"
    );
    Ok(())
}

#[test]
fn composite_reports_the_best_alternative() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let spanish = expect_map! {
        "nombre" => Expectation::of_type(Tag::TEXT),
        "edad" => Expectation::of_type(Tag::NUMBER),
    };
    let english = expect_map! {
        "name" => Expectation::of_type(Tag::TEXT),
        "age" => Expectation::of_type(Tag::NUMBER),
    };
    let person = Expectation::from(Composite::new().or(spanish).or(english));
    let actual = map! { "name" => "Bob", "age" => "old" };

    let diff = Difference::new(&person, &actual, &Options::new())?;
    assert_eq!(diff.tree().alternative(), Some(1));
    assert_eq!(
        diff.render_plain(),
        "{\n  \"name\": : \"Bob\",\n  \"age\": - number+ \"old\"\n}\nWhere, - 1 missing, + 1 additional, : 1 match_type"
    );

    let fine = map! { "name" => "Bob", "age" => 42 };
    assert_eq!(difference(&person, &fine, &Options::new())?, None);
    Ok(())
}

#[test]
fn composite_ties_go_to_the_first_alternative() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let either = Expectation::literal(1) | Expectation::literal(2);
    let diff = Difference::new(&either, &Value::from(3), &Options::new())?;
    assert_eq!(diff.tree().alternative(), Some(0));
    assert_eq!(diff.render_plain(), "- 1+ 3\nWhere, - 1 missing, + 1 additional");
    Ok(())
}

#[test]
fn rendering_is_idempotent() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = expect_seq![1, Expectation::pattern(r"^\d+$")?, map! { "k" => seq![1, 2] }];
    let actual = seq![2, "12", map! { "k" => seq![2] }];
    let diff = Difference::new(&expected, &actual, &Options::new())?;
    assert_eq!(diff.render_plain(), diff.render_plain());
    assert_eq!(diff.render_ansi(), diff.render_ansi());
    assert_eq!(diff.render_html(), diff.render_html());
    Ok(())
}

#[test]
fn ansi_and_html_report_the_same_counts() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let expected = expect_map! {
        "id" => Expectation::of_type(Tag::INTEGER),
        "tags" => expect_seq!["a", "b"],
        "gone" => true,
    };
    let actual = map! { "id" => "x", "tags" => seq!["a", "c", "d"], "new" => Value::Null };
    let diff = Difference::new(&expected, &actual, &Options::new())?;

    let ansi = diff.render_ansi();
    let html = diff.render_html();
    assert_ne!(ansi, html);

    let summary = |report: &str| {
        visible_text(report)
            .lines()
            .last()
            .map(str::to_owned)
            .unwrap_or_default()
    };
    assert_eq!(summary(&ansi), summary(&html));
    assert_eq!(summary(&ansi), "Where, - 3 missing, + 4 additional");
    assert_eq!(visible_text(&ansi), diff.render_plain());
    assert_eq!(visible_text(&html), diff.render_plain());
    Ok(())
}
