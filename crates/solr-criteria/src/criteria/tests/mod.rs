
use super::*;
use crate::value::Value;
use time::macros::{date, datetime};

fn field_1() -> Criteria {
    match Criteria::r#where("field_1") {
        Ok(criteria) => criteria,
        Err(err) => panic!("valid field rejected: {err}"),
    }
}

fn predicates(criteria: &Criteria) -> Vec<String> {
    criteria.leaf().predicates().to_vec()
}

// ----------------------------------------------------------------------
// Construction
// ----------------------------------------------------------------------

#[test]
fn where_rejects_an_empty_field() {
    assert_eq!(Criteria::r#where(""), Err(CriteriaError::EmptyField));
}

#[test]
fn and_where_rejects_an_empty_field() {
    let err = field_1().is("foo").and_where("").err();
    assert_eq!(err, Some(CriteriaError::EmptyField));
}

#[test]
fn where_focuses_the_new_leaf() {
    let criteria = field_1();

    assert_eq!(criteria.field(), "field_1");
    assert!(predicates(&criteria).is_empty());
    assert!(!criteria.leaf().is_negated());
    assert_eq!(criteria.leaf().boost(), None);
    assert!(!criteria.leaf().hides_field());
    assert_eq!(criteria.leaf_count(), 1);
}

#[test]
fn and_where_moves_the_cursor_to_the_new_leaf() -> Result<()> {
    let criteria = field_1().is("foo").is("bar").and_where("field_2")?.is("baz");

    assert_eq!(criteria.field(), "field_2");
    assert_eq!(predicates(&criteria), ["baz"]);

    let all: Vec<_> = criteria.leaves().map(|leaf| leaf.predicates().len()).collect();
    assert_eq!(all, [2, 1]);

    Ok(())
}

#[test]
fn injecting_focuses_the_injected_most_recent_leaf() -> Result<()> {
    let other = Criteria::r#where("field_4")?
        .is("spring")
        .and_where("field_5")?
        .is("data");
    let criteria = field_1().is("foo").or_where(other)?.is("boot");

    assert_eq!(criteria.field(), "field_5");
    assert_eq!(predicates(&criteria), ["data", "boot"]);
    assert_eq!(criteria.leaf_count(), 3);
    assert_eq!(
        criteria.to_string(),
        "field_1:foo OR (field_4:spring AND field_5:(data boot))"
    );

    Ok(())
}

#[test]
fn combinators_after_injection_target_the_overall_root() -> Result<()> {
    let other = Criteria::r#where("x")?.is("foo").or_where("y")?.is("bar");
    let criteria = field_1()
        .is("foo")
        .and_where(other)?
        .and_where("field_2")?
        .is("baz");

    assert_eq!(
        criteria.to_string(),
        "field_1:foo AND (x:foo OR y:bar) AND field_2:baz"
    );

    Ok(())
}

#[test]
fn target_conversions() {
    assert_eq!(Target::from("a"), Target::Field("a".to_string()));
    assert_eq!(Target::from(String::from("b")), Target::Field("b".to_string()));
    assert!(matches!(Target::from(field_1()), Target::Expression(_)));
}

// ----------------------------------------------------------------------
// Equality
// ----------------------------------------------------------------------

#[test]
fn is_appends_formatted_tokens() {
    let criteria = field_1().is("is").is("another is");

    assert_eq!(predicates(&criteria), ["is", "\"another is\""]);
    assert_eq!(criteria.to_string(), "field_1:(is \"another is\")");
}

#[test]
fn is_with_null_negates_match_all() {
    let criteria = field_1().is(Value::Null);

    assert_eq!(predicates(&criteria), ["[* TO *]"]);
    assert!(criteria.leaf().is_negated());
    assert_eq!(criteria.to_string(), "-field_1:[* TO *]");
}

#[test]
fn is_with_list_delegates_to_in() {
    let criteria = field_1().is(vec!["foo", "bar"]);

    assert_eq!(predicates(&criteria), ["foo", "bar"]);
}

#[test]
fn in_flattens_nested_lists_depth_first() {
    let values = Value::list([
        Value::from("one"),
        Value::from("two"),
        Value::list([
            Value::from("nested-one"),
            Value::from("nested-two"),
            Value::from(vec!["deep-one", "deep-two", "deep-three"]),
            Value::from("nested-three"),
        ]),
        Value::from("three"),
    ]);
    let criteria = field_1().is(values);

    assert_eq!(predicates(&criteria).len(), 9);
    assert_eq!(
        criteria.to_string(),
        "field_1:(one two nested\\-one nested\\-two deep\\-one deep\\-two deep\\-three nested\\-three three)"
    );
}

#[test]
fn is_with_f32_uses_its_decimal_form() {
    assert_eq!(field_1().is(0.1f32).to_string(), "field_1:0.1");
    assert_eq!(
        field_1().is(1e21).is(0.1f32).to_string(),
        "field_1:(1000000000000000000000 0.1)"
    );
}

#[test]
fn in_escapes_negative_floats() {
    let criteria = field_1().r#in([-48.303_056, -14.290_556]);

    assert_eq!(criteria.to_string(), "field_1:(\\-48.303056 \\-14.290556)");
}

#[test]
fn in_with_empty_list_adds_nothing() {
    let criteria = field_1().r#in(Vec::<i32>::new());

    assert!(predicates(&criteria).is_empty());
    assert_eq!(criteria.to_string(), "field_1:[* TO *]");
}

#[test]
fn dates_render_as_escaped_utc() {
    let offset = field_1().is(datetime!(2015-08-21 17:00:00 +02:00));
    assert_eq!(offset.to_string(), "field_1:2015\\-08\\-21T15\\:00\\:00Z");

    let naive = field_1().is(datetime!(2012-08-21 06:35));
    assert_eq!(naive.to_string(), "field_1:2012\\-08\\-21T06\\:35\\:00Z");

    let day = field_1().is(date!(2016 - 12 - 25));
    assert_eq!(day.to_string(), "field_1:2016\\-12\\-25T00\\:00\\:00Z");
}

#[test]
fn wildcard_value_is_not_escaped() {
    assert_eq!(field_1().is("*").to_string(), "field_1:*");
}

// ----------------------------------------------------------------------
// Ranges
// ----------------------------------------------------------------------

#[test]
fn between_bounds_and_inclusivity() {
    assert_eq!(field_1().between(100, 200).to_string(), "field_1:[100 TO 200]");
    assert_eq!(
        field_1().between_with(100, 200, false, true).to_string(),
        "field_1:{100 TO 200]"
    );
    assert_eq!(
        field_1().between_with(100, 200, true, false).to_string(),
        "field_1:[100 TO 200}"
    );
    assert_eq!(
        field_1().between(100, Value::Null).to_string(),
        "field_1:[100 TO *]"
    );
    assert_eq!(
        field_1().between(-200, -100).to_string(),
        "field_1:[\\-200 TO \\-100]"
    );
}

#[test]
fn open_ended_ranges() {
    assert_eq!(field_1().less_than(1).to_string(), "field_1:[* TO 1}");
    assert_eq!(field_1().less_than_equal(1).to_string(), "field_1:[* TO 1]");
    assert_eq!(field_1().greater_than(1).to_string(), "field_1:{1 TO *]");
    assert_eq!(field_1().greater_than_equal(1).to_string(), "field_1:[1 TO *]");
}

#[test]
fn list_bound_joins_its_tokens() {
    let criteria = field_1().between(vec!["a", "b"], "c");
    assert_eq!(criteria.to_string(), "field_1:[a b TO c]");
}

#[test]
fn null_and_not_null() {
    assert_eq!(field_1().is_not_null().to_string(), "field_1:[* TO *]");
    assert_eq!(field_1().is_null().to_string(), "-field_1:[* TO *]");
}

// ----------------------------------------------------------------------
// Wildcards
// ----------------------------------------------------------------------

#[test]
fn wildcard_predicates_broadcast_through_lists() -> Result<()> {
    let contains = field_1().contains(["one", "two", "three"]);
    assert_eq!(contains.to_string(), "field_1:(*one* *two* *three*)");

    let starts = field_1().starts_with(vec![Value::from("one"), Value::from(vec!["two"])])?;
    assert_eq!(starts.to_string(), "field_1:(one* two*)");

    let ends = field_1().ends_with(["one", "two", "three"])?;
    assert_eq!(ends.to_string(), "field_1:(*one *two *three)");

    Ok(())
}

#[test]
fn wildcards_escape_the_term() -> Result<()> {
    let criteria = field_1().starts_with("a-b")?;
    assert_eq!(predicates(&criteria), ["a\\-b*"]);

    Ok(())
}

#[test]
fn starts_with_rejects_whitespace() {
    let err = field_1().starts_with("a b c").err();
    assert_eq!(
        err,
        Some(CriteriaError::WhitespaceInWildcard("a b c".to_string()))
    );
}

#[test]
fn ends_with_rejects_whitespace_in_any_element() {
    let err = field_1().ends_with(["ok", "not ok"]).err();
    assert_eq!(
        err,
        Some(CriteriaError::WhitespaceInWildcard("not ok".to_string()))
    );
}

#[test]
fn chain_keeps_insertion_order() -> Result<()> {
    let criteria = field_1()
        .starts_with("start")?
        .ends_with("end")?
        .contains("contains")
        .is("is");

    assert_eq!(
        criteria.to_string(),
        "field_1:(start* *end *contains* is)"
    );

    Ok(())
}

// ----------------------------------------------------------------------
// Approximate matching
// ----------------------------------------------------------------------

#[test]
fn fuzzy_with_and_without_distance() -> Result<()> {
    assert_eq!(field_1().fuzzy("value_1", None)?.to_string(), "field_1:value_1~");
    assert_eq!(
        field_1().fuzzy("value_1", Some(0.5))?.to_string(),
        "field_1:value_1~0.5"
    );
    assert_eq!(
        field_1().fuzzy("value_1", Some(1.0))?.to_string(),
        "field_1:value_1~1.0"
    );

    Ok(())
}

#[test]
fn fuzzy_rejects_distance_out_of_bounds() {
    for distance in [2.0, -0.1, f64::NAN] {
        let err = field_1().fuzzy("a b", Some(distance)).err();
        assert!(
            matches!(err, Some(CriteriaError::FuzzyDistanceOutOfBounds(_))),
            "distance {distance}"
        );
    }
}

#[test]
fn sloppy_quotes_the_phrase() -> Result<()> {
    let criteria = field_1().sloppy("value1 value2", 2)?;
    assert_eq!(criteria.to_string(), "field_1:\"value1 value2\"~2");

    Ok(())
}

#[test]
fn sloppy_rejects_bad_input() {
    assert_eq!(
        field_1().sloppy("a b", -2).err(),
        Some(CriteriaError::InvalidSlop(-2))
    );
    assert_eq!(
        field_1().sloppy("a b", 0).err(),
        Some(CriteriaError::InvalidSlop(0))
    );
    assert_eq!(
        field_1().sloppy("a", 1).err(),
        Some(CriteriaError::SingleTermPhrase("a".to_string()))
    );
}

#[test]
fn expression_is_stored_verbatim() {
    let criteria = field_1().expression("(have fun using +solr && expressions*)");
    assert_eq!(
        criteria.to_string(),
        "field_1:(have fun using +solr && expressions*)"
    );
}

// ----------------------------------------------------------------------
// Geo
// ----------------------------------------------------------------------

#[test]
fn circles_hide_the_field_prefix() -> Result<()> {
    let within = field_1().within_circle(-48.303_056, -14.290_556, 5.0)?;
    assert!(within.leaf().hides_field());
    assert_eq!(within.field(), "field_1");
    assert_eq!(
        within.to_string(),
        "{!geofilt pt=-48.303056,-14.290556 sfield=field_1 d=5.0}"
    );

    let precise = field_1().within_circle(-48.303_056, -14.290_556, 5.123_456)?;
    assert_eq!(
        precise.to_string(),
        "{!geofilt pt=-48.303056,-14.290556 sfield=field_1 d=5.123456}"
    );

    let near = field_1().near_circle(48.303_056, 14.290_556, 1.0)?;
    assert_eq!(
        near.to_string(),
        "{!bbox pt=48.303056,14.290556 sfield=field_1 d=1.0}"
    );

    Ok(())
}

#[test]
fn circles_reject_negative_distance() {
    assert_eq!(
        field_1().within_circle(1.0, 1.0, -1.0).err(),
        Some(CriteriaError::InvalidDistance(-1.0))
    );
    assert_eq!(
        field_1().near_circle(1.0, 1.0, -1.0).err(),
        Some(CriteriaError::InvalidDistance(-1.0))
    );
    assert!(field_1().near_circle(1.0, 1.0, f64::NAN).is_err());
}

#[test]
fn within_box_keeps_the_field_prefix() -> Result<()> {
    let criteria = field_1().within_box(-48.303_056, -14.290_556, -48.303_056, -14.290_556)?;

    assert!(!criteria.leaf().hides_field());
    assert_eq!(
        criteria.to_string(),
        "field_1:[-48.303056,-14.290556 TO -48.303056,-14.290556]"
    );

    Ok(())
}

#[test]
fn geo_calls_reject_non_finite_numbers() {
    let err = field_1().within_box(1.0, f64::INFINITY, 1.0, 1.0).err();
    assert_eq!(err, Some(CriteriaError::NonFiniteCoordinate(f64::INFINITY)));

    let err = field_1().within_box(f64::NAN, 1.0, 1.0, 1.0).err();
    assert!(matches!(err, Some(CriteriaError::NonFiniteCoordinate(c)) if c.is_nan()));

    let err = field_1().within_circle(f64::NEG_INFINITY, 1.0, 5.0).err();
    assert_eq!(err, Some(CriteriaError::NonFiniteCoordinate(f64::NEG_INFINITY)));

    let err = field_1().near_circle(1.0, 1.0, f64::INFINITY).err();
    assert_eq!(err, Some(CriteriaError::InvalidDistance(f64::INFINITY)));
}

// ----------------------------------------------------------------------
// Modifiers
// ----------------------------------------------------------------------

#[test]
fn not_negates_the_focused_leaf_only() -> Result<()> {
    let criteria = field_1().is("foo").and_where("field_2")?.is("bar").not();

    assert_eq!(criteria.to_string(), "field_1:foo AND -field_2:bar");

    Ok(())
}

#[test]
fn boost_is_rendered_with_a_decimal() -> Result<()> {
    let criteria = field_1().is("value_1").boost(2.0)?;

    assert_eq!(criteria.leaf().boost(), Some("2.0"));
    assert_eq!(criteria.to_string(), "field_1:value_1^2.0");

    Ok(())
}

#[test]
fn boost_rejects_negative_and_nan() {
    assert_eq!(
        field_1().boost(-1.0).err(),
        Some(CriteriaError::InvalidBoost(-1.0))
    );
    assert!(field_1().boost(f64::NAN).is_err());
    assert!(field_1().boost(0.0).is_ok());
}
