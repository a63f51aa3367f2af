use optmap_parser::{parse, Opt, Schema, Value};

#[test]
fn test_value_accessors() {
    let value = Value::Bool(true);
    assert_eq!(value.as_bool(), Some(true));
    assert_eq!(value.as_str(), None);
    assert_eq!(value.to_string(), "true");

    let value = Value::from("archive.tar.gz");
    assert_eq!(value.as_str(), Some("archive.tar.gz"));
    assert_eq!(value.as_bool(), None);
    assert_eq!(value.to_string(), "archive.tar.gz");
}

#[test]
fn test_value_comparisons() {
    assert_eq!(Value::Bool(false), false);
    assert_eq!(Value::Str("x".to_string()), "x");
    assert_ne!(Value::Str("true".to_string()), true);
    assert_ne!(Value::Bool(true), "true");
    assert_eq!(Value::from(String::from("x")), Value::from("x"));
}

#[test]
fn test_schema_push() {
    let mut schema = Schema::new();
    schema.push(Opt::flag().long("--verbose"));
    schema.push(Opt::value().long("--file").short("-f"));

    let parsed = parse(&schema, ["--verbose"]).unwrap();
    assert_eq!(parsed["--verbose"], true);
    assert_eq!(parsed.options().len(), 3);
}

#[test]
fn test_parsed_lookup() {
    let schema = Schema::new().with(Opt::value().long("--file").short("-f"));
    let parsed = parse(&schema, ["--file", "archive.tar.gz"]).unwrap();

    assert_eq!(parsed.get("--file"), Some(&Value::from("archive.tar.gz")));
    assert_eq!(parsed.get("-f"), parsed.get("--file"));
    assert_eq!(parsed.get("--other"), None);
    assert_eq!(parsed.options()["-f"], "archive.tar.gz");
}

#[test]
#[should_panic(expected = "alias '--other' was not declared")]
fn test_index_panics_on_undeclared_alias() {
    let schema = Schema::new().with(Opt::value().long("--file"));
    let parsed = parse(&schema, Vec::<String>::new()).unwrap();
    let _ = &parsed["--other"];
}
