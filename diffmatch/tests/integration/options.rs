//! How options change comparisons and reports.

use diffmatch::{
    AlternativeOptions, Category, Composite, Difference, Expectation, Options, Style, StyleTable,
    Tag, TypeRegistry, Value, difference, map, seq,
};
use diffmatch_testhelpers::IPanic;
use insta::assert_snapshot;

#[test]
fn quiet_hides_matches_and_extra_elements() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let output = difference(&seq![1, 2], &seq![0, 2, 3], &Options::new().quiet(true))?
        .unwrap_or_default();
    assert_snapshot!(output, @r"
    [
      - 1+ 0
    ]
    Where, - 1 missing, + 1 additional
    ");
    Ok(())
}

#[test]
fn quiet_alone_does_not_forgive_additional_keys() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let diff = Difference::new(
        &map! { "a" => 1 },
        &map! { "a" => 1, "b" => 2 },
        &Options::new().quiet(true),
    )?;
    assert!(!diff.is_match());
    assert_eq!(diff.render_plain(), "{\n  + \"b\": 2\n}\nWhere, + 1 additional");
    Ok(())
}

#[test]
fn verbose_shows_value_matches() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let output = difference(&seq![1, 2], &seq![0, 2, 3], &Options::new().verbose(true))?
        .unwrap_or_default();
    assert_snapshot!(output, @r"
    [
      - 1+ 0,
      2,
      + 3
    ]
    Where, - 1 missing, + 2 additional,   1 match_value
    ");
    Ok(())
}

#[test]
fn ignore_additional() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let options = Options::new().ignore_additional(true);
    assert_eq!(difference(&seq![1, 2], &seq![1, 2, 3], &options)?, None);
    assert_eq!(
        difference(&map! { "a" => 1 }, &map! { "a" => 1, "b" => 2 }, &options)?,
        None
    );

    // The additional half of a substitution is still shown and counted.
    let diff = Difference::new(&seq![1], &seq![2], &options)?;
    assert!(!diff.is_match());
    assert_eq!(diff.counts().additional(), 1);
    Ok(())
}

#[test]
fn optional_keys_are_never_missing_or_additional() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let options = Options::new().optional_keys(["nickname", "email"]);
    let expected = map! { "name" => "Ada", "nickname" => "ada" };
    let actual = map! { "name" => "Ada", "email" => "ada@example.com" };
    assert_eq!(difference(&expected, &actual, &options)?, None);

    let wrong = map! { "name" => "Ada", "nickname" => "countess" };
    let diff = Difference::new(&expected, &wrong, &options)?;
    assert_eq!(diff.counts().missing(), 1);
    Ok(())
}

#[test]
fn alternative_options_apply_per_alternative() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let strict_or_loose = Composite::new().or(map! { "id" => 1, "kind" => "a" }).or_with(
        map! { "id" => 1 },
        AlternativeOptions::new().ignore_additional(true),
    );
    let expectation = Expectation::from(strict_or_loose);
    let diff = Difference::new(&expectation, &map! { "id" => 1, "extra" => true }, &Options::new())?;
    assert!(diff.is_match());
    assert_eq!(diff.tree().alternative(), Some(1));
    Ok(())
}

#[test]
fn char_diff() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let options = Options::new().char_diff(true);
    let diff = Difference::new(&Value::from("kitten"), &Value::from("sitting"), &options)?;
    assert_eq!(diff.counts().missing(), 2);
    assert_eq!(diff.counts().additional(), 3);
    assert_snapshot!(diff.render_plain(), @r#"
    "[-k][+s]itt[-e][+i]n[+g]"
    Where, - 2 missing, + 3 additional
    "#);

    // Single characters fall back to a whole-value mismatch.
    let diff = Difference::new(&Value::from("a"), &Value::from("b"), &options)?;
    assert_eq!(diff.render_plain(), "- \"a\"+ \"b\"\nWhere, - 1 missing, + 1 additional");
    Ok(())
}

#[test]
fn html_output() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let options = Options::new().html_output(true);
    let output = difference(&map! { "a" => "<b>" }, &map! {}, &options)?.unwrap_or_default();
    assert!(output.contains("<span style=\"color: red\">"));
    assert!(output.contains("&quot;a&quot;: "));
    assert!(output.contains("&lt;b&gt;"));
    assert!(!output.contains("\x1b["));
    Ok(())
}

#[test]
fn color_schemes() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let actual = seq![1, 2];
    let expected = seq![1];

    let default = difference(&expected, &actual, &Options::new().color_enabled(true))?
        .unwrap_or_default();
    assert!(default.contains("\x1b[33m"));

    let white = difference(
        &expected,
        &actual,
        &Options::new().color_scheme_named("white_background"),
    )?
    .unwrap_or_default();
    assert!(white.contains("\x1b[35m"));
    assert!(!white.contains("\x1b[33m"));
    Ok(())
}

#[test]
fn custom_style_table() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let table = StyleTable::DEFAULT.with_style(Category::Missing, Style::new(None, "!"));
    let diff = Difference::new(
        &seq![1, 2],
        &seq![1],
        &Options::new().color_scheme(table).color_enabled(false),
    )?;
    assert_eq!(diff.render(), "[\n  ! 2\n]\nWhere, ! 1 missing");
    Ok(())
}

#[test]
fn custom_type_registry() -> Result<(), IPanic> {
    diffmatch_testhelpers::setup();
    let animal = Tag::from("animal");
    let dog = Tag::from("dog");
    let registry = TypeRegistry::default().with_subtype(dog.clone(), animal.clone());

    let expected = Expectation::of_type(animal);
    let rex = Value::tagged(dog, map! { "name" => "Rex" });
    assert!(difference(&expected, &rex, &Options::new())?.is_some());
    assert_eq!(
        difference(&expected, &rex, &Options::new().type_registry(registry))?,
        None
    );
    Ok(())
}
