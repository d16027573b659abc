use chrono::NaiveDate;
use query::{FilterQuery, Params, QueryError, Value, filter, params, path};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_grouped_not_equal_chain() {
    let mut query = FilterQuery::new();
    let rendered = query
        .builder()
        .equal("name", "John")
        .and()
        .open()
        .not_equal("age", 20)
        .or()
        .not_equal("age", 30)
        .close()
        .and()
        .equal("city", "New York")
        .build_with(&filter)
        .unwrap();

    assert_eq!(
        rendered,
        "name='John' && (age!=20 || age!=30) && city='New York'"
    );
}

#[test]
fn test_in_before_substitution() {
    let mut query = FilterQuery::new();
    let raw = query.builder().is_in("age", [20, 30, 40]).build().unwrap();

    assert_eq!(raw.raw, "(age={:age1} || age={:age2} || age={:age3})");
    assert_eq!(raw.values, params! { "age1" => 20, "age2" => 30, "age3" => 40 });
}

#[test]
fn test_full_post_query() {
    let mut query = FilterQuery::new();
    let raw = query
        .builder()
        .equal("user.name", "John")
        .and()
        .open()
        .any_not_like("title", "foo")
        .or()
        .any_like("title", "bar")
        .close()
        .and()
        .is_in("user.age", [20, 30, 40])
        .and()
        .between("createdAt", date(2021, 1, 1), date(2021, 12, 31))
        .and()
        .not_between("user.age", 20, 30)
        .and()
        .is_in("user.city", ["New York", "Los Angeles"])
        .and()
        .is_not_in("user.city", ["Chicago", "Miami"])
        .and()
        .custom(filter("content~{:content}", Some(&params! { "content" => "test" })))
        .build()
        .unwrap();

    assert_eq!(
        raw.render(),
        "user.name='John' && (title?!~'foo' || title?~'bar') && (user.age=20 || user.age=30 || user.age=40) && (createdAt>='2021-01-01 00:00:00.000Z' && createdAt<='2021-12-31 00:00:00.000Z') && (user.age<20 || user.age>30) && (user.city='New York' || user.city='Los Angeles') && (user.city!='Chicago' && user.city!='Miami') && content~'test'"
    );
}

#[test]
fn test_group_callbacks() {
    let mut query = FilterQuery::new();
    let rendered = query
        .builder()
        .equal("name", "Alice")
        .or()
        .equal("name", "Bob")
        .and()
        .group(|q| q.equal("name", "Alice").or().equal("name", "Bob"))
        .and()
        .group(|q| {
            q.is_not_null("name")
                .and()
                .group(|q| q.equal("name", "Alice").or().equal("name", "Bob"))
        })
        .build_with(&filter)
        .unwrap();

    assert_eq!(
        rendered,
        "name='Alice' || name='Bob' && (name='Alice' || name='Bob') && (name!='' && (name='Alice' || name='Bob'))"
    );
}

#[test]
fn test_reused_query_appends() {
    let mut query = FilterQuery::new();

    let first = query
        .builder()
        .equal("user.name", "John")
        .build_with(&filter)
        .unwrap();
    assert_eq!(first, "user.name='John'");

    let second = query
        .builder()
        .equal("user.name", "John")
        .and()
        .equal("user.age", 20)
        .build_with(&filter)
        .unwrap();
    assert_eq!(second, "user.name='John'user.name='John' && user.age=20");
}

#[test]
fn test_cloned_query_branches_independently() {
    let mut base = FilterQuery::new();
    base.builder().any_like("tags", "sports").and();

    let search = |term: &str| {
        let mut query = base.clone();
        let rendered = query
            .builder()
            .search(["title", "content", "tags", "author"], term)
            .build_with(&filter)
            .unwrap();
        rendered
    };

    assert_eq!(
        search("basketba"),
        "tags?~'sports' && (title~'basketba' || content~'basketba' || tags~'basketba' || author~'basketba')"
    );
    assert_eq!(
        search("footba"),
        "tags?~'sports' && (title~'footba' || content~'footba' || tags~'footba' || author~'footba')"
    );
}

#[test]
fn test_back_relation_paths() {
    let mut query = FilterQuery::new();
    let rendered = query
        .builder()
        .equal("anything_via_author", date(2021, 12, 31))
        .and()
        .equal("anything_via_author.anything", date(2021, 12, 31))
        .build_with(&filter)
        .unwrap();

    assert_eq!(
        rendered,
        "anything_via_author='2021-12-31 00:00:00.000Z' && anything_via_author.anything='2021-12-31 00:00:00.000Z'"
    );
}

#[test]
fn test_modified_paths_are_opaque() {
    let mut query = FilterQuery::new();
    let raw = query
        .builder()
        .equal(path::with_modifier("tags", path::Modifier::Length), 2)
        .and()
        .like(path::with_modifier("name", path::Modifier::Lower), "john")
        .build()
        .unwrap();

    assert_eq!(
        raw.raw,
        "tags:length={:tags:length1} && name:lower~{:name:lower1}"
    );
    assert_eq!(raw.render(), "tags:length=2 && name:lower~'john'");
}

#[test]
fn test_heterogeneous_values() {
    let mut query = FilterQuery::new();
    let rendered = query
        .builder()
        .equal("isVisible", true)
        .and()
        .equal("deletedAt", Value::Null)
        .and()
        .equal("meta", serde_json::json!({"k": "it's"}))
        .and()
        .equal("numbers", vec![1, 2])
        .and()
        .equal("score", 2.5)
        .build_with(&filter)
        .unwrap();

    assert_eq!(
        rendered,
        r#"isVisible=true && deletedAt=null && meta='{"k":"it\'s"}' && numbers='[1,2]' && score=2.5"#
    );
}

#[test]
fn test_unclosed_group_scenario() {
    let mut query = FilterQuery::new();
    let chain = query.builder().equal("a", 1).and().open().equal("b", 2);

    assert_eq!(chain.build(), Err(QueryError::UnclosedGroup { depth: 1 }));
}

#[test]
fn test_external_filter_function() {
    let seen = std::cell::RefCell::new(None);
    let external = |raw: &str, params: Option<&Params>| {
        *seen.borrow_mut() = params.map(Params::len);
        format!("[{raw}]")
    };

    let mut query = FilterQuery::new();
    let rendered = query
        .builder()
        .equal("name", "John")
        .build_with(&external)
        .unwrap();

    assert_eq!(rendered, "[name={:name1}]");
    assert_eq!(*seen.borrow(), Some(1));
}
