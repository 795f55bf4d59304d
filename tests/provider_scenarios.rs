//! End-to-end lookup behavior against real resource files.

use prop_config::{ConfigError, ConfigProvider, LoadFailure, ResourceLocator, RESOURCE_NAME};

mod common;

#[test]
fn test_database_scenario() {
    let dir = common::resource_dir("# database\ndb.host=localhost\ndb.port=\n");
    let provider = common::provider_for(&dir);

    assert_eq!(provider.get_property("db.host").unwrap(), "localhost");
    assert!(matches!(
        provider.get_property("db.port"),
        Err(ConfigError::MissingKey { key }) if key == "db.port"
    ));
    assert!(matches!(
        provider.get_property("db.missing"),
        Err(ConfigError::MissingKey { key }) if key == "db.missing"
    ));
}

#[test]
fn test_trailing_whitespace_is_not_part_of_value() {
    let dir = common::resource_dir("db.host=localhost   \ndb.port=8080\t\npadded=x\\ \n");
    let provider = common::provider_for(&dir);

    assert_eq!(provider.get_property("db.host").unwrap(), "localhost");
    assert_eq!(provider.get_property("db.port").unwrap(), "8080");
    assert_eq!(provider.get_property("padded").unwrap(), "x ");
}

#[test]
fn test_missing_resource_then_set_properties() {
    let dir = tempfile::tempdir().unwrap();
    let provider = ConfigProvider::new(ResourceLocator::in_dir(dir.path()));

    let err = provider.get().unwrap_err();
    assert!(err.to_string().contains(RESOURCE_NAME));
    assert!(matches!(err, ConfigError::Load { source: LoadFailure::NotFound { .. }, .. }));

    provider.set_properties(common::map(&[("a", "1")]));
    assert_eq!(provider.get_property("a").unwrap(), "1");
}

#[test]
fn test_every_non_blank_value_is_returned_verbatim() {
    let content = "\
app.name = Demo Service
app.greeting=Hello\\, world
paths.home : /srv/demo
list=a,b,c
multi=one \\
      two
";
    let dir = common::resource_dir(content);
    let provider = common::provider_for(&dir);

    let all = provider.get_all_properties().unwrap();
    assert_eq!(all.len(), 5);
    for (key, value) in &all {
        assert_eq!(&provider.get_property(key).unwrap(), value);
    }
    assert_eq!(all["app.greeting"], "Hello, world");
    assert_eq!(all["multi"], "one two");
}

#[test]
fn test_get_all_after_set_is_exactly_the_set_mapping() {
    let dir = common::resource_dir("loaded=1\nother=2\n");
    let provider = common::provider_for(&dir);
    provider.get().unwrap();

    let first = common::map(&[("x", "1"), ("y", "")]);
    provider.set_properties(first.clone());
    assert_eq!(provider.get_all_properties().unwrap(), first);

    let second = common::map(&[]);
    provider.set_properties(second.clone());
    assert_eq!(provider.get_all_properties().unwrap(), second);
}

#[test]
fn test_repeated_get_returns_identical_contents() {
    let dir = common::resource_dir("k=v\n");
    let provider = common::provider_for(&dir);

    let first = provider.get().unwrap();
    std::fs::remove_file(dir.path().join(RESOURCE_NAME)).unwrap();
    for _ in 0..5 {
        assert_eq!(provider.get().unwrap(), first);
    }
}

#[test]
fn test_malformed_resource_is_load_error() {
    let dir = common::resource_dir("ok=1\nbroken=\\u00\n");
    let provider = common::provider_for(&dir);

    match provider.get_property("ok") {
        Err(ConfigError::Load { resource, source: LoadFailure::Parse(parse) }) => {
            assert_eq!(resource, RESOURCE_NAME);
            assert_eq!(parse.line, 2);
        }
        other => panic!("expected parse failure, got {other:?}"),
    }
}
