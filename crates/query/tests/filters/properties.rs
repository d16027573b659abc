use query::{FilterQuery, Operator, Value, filter, params};

#[test]
fn test_repeated_path_gets_increasing_suffixes() {
    let mut query = FilterQuery::new();
    let mut chain = query.builder().compare("age", Operator::ALL[0], 0);
    for (i, op) in Operator::ALL.iter().enumerate().skip(1) {
        chain = chain.or().compare("age", *op, i as i64);
    }
    let raw = chain.build().unwrap();

    let names: Vec<_> = raw.values.keys().collect();
    let expected: Vec<_> = (1..=16).map(|n| format!("age{n}")).collect();
    assert_eq!(names, expected);
    for (i, name) in expected.iter().enumerate() {
        assert_eq!(raw.values.get(name), Some(&Value::Int(i as i64)));
    }
}

#[test]
fn test_build_with_matches_deferred_render() {
    let mut query = FilterQuery::new();
    let chain = query
        .builder()
        .search(["title", "content"], "it's")
        .and()
        .group(|q| q.between("age", 18, 30).or().is_null("age"))
        .and()
        .is_not_in("city", ["Chicago"]);

    let raw = chain.build().unwrap();
    assert_eq!(
        chain.build_with(&filter).unwrap(),
        filter(&raw.raw, Some(&raw.values))
    );
    assert_eq!(raw.render(), filter(&raw.raw, Some(&raw.values)));
}

#[test]
fn test_rendering_without_placeholders_is_identity() {
    let template = "age > 21 && (city='' || name!='')";
    let values = params! { "age" => 30, "city" => "Miami" };
    assert_eq!(filter(template, Some(&values)), template);
    assert_eq!(filter(template, None), template);
}

#[test]
fn test_single_quote_is_backslash_escaped() {
    let values = params! { "name" => "O'Brien" };
    assert_eq!(filter("name={:name}", Some(&values)), r"name='O\'Brien'");
}

#[test]
fn test_between_shapes_are_not_simplified() {
    let mut query = FilterQuery::new();
    let raw = query
        .builder()
        .between("age", 18, 30)
        .and()
        .not_between("age", 18, 30)
        .build()
        .unwrap();

    assert_eq!(
        raw.raw,
        "(age>={:age1} && age<={:age2}) && (age<{:age3} || age>{:age4})"
    );
}

#[test]
fn test_group_shares_parameter_numbering() {
    let mut query = FilterQuery::new();
    let raw = query
        .builder()
        .equal("name", "a")
        .and()
        .group(|q| q.equal("name", "b"))
        .or()
        .equal("name", "c")
        .build()
        .unwrap();

    assert_eq!(
        raw.raw,
        "name={:name1} && (name={:name2}) || name={:name3}"
    );
    assert_eq!(raw.values.len(), 3);
}
