use optmap_parser::{parse, ErrorKind, Opt, Schema};

fn schema() -> Schema {
    Schema::new()
        .with(Opt::flag().long("--verbose").short("-v"))
        .with(Opt::value().long("--file").short("-f"))
}

#[test]
fn test_unrecognized_long() {
    let err = parse(&schema(), ["--bogus"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some("--bogus"));
    assert_eq!(err.to_string(), "unrecognized option '--bogus'");
}

#[test]
fn test_unrecognized_short() {
    let err = parse(&schema(), ["-x"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some("-x"));
}

#[test]
fn test_unrecognized_short_inside_chain() {
    // -vx expands to -v -x; -v resolves fine, -x fails on its own
    let err = parse(&schema(), ["-vx"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some("-x"));
}

#[test]
fn test_unrecognized_equals_name() {
    // the error names the option, not the whole token
    let err = parse(&schema(), ["--bogus=42"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some("--bogus"));
    assert_eq!(err.to_string(), "unrecognized option '--bogus'");
}

#[test]
fn test_double_dash_is_not_special() {
    let err = parse(&schema(), ["--", "-v"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some("--"));
}

#[test]
fn test_empty_token() {
    let err = parse(&schema(), [""]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some(""));
}

#[test]
fn test_numeric_chain_expansion() {
    // -n23 has chain shape, so it expands to -n -2 -3 and the digits
    // fail resolution
    let schema = Schema::new().with(Opt::value().short("-n"));
    let err = parse(&schema, ["-n23"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.token(), Some("-2"));
}

#[test]
fn test_error_is_std_error() {
    use std::error::Error as _;

    let err = parse(&schema(), ["--bogus"]).unwrap_err();
    assert!(err.source().is_none());
    assert_eq!(
        format!("{:?}", err),
        "Error { kind: UnrecognizedOption, token: Some(\"--bogus\") }"
    );
}
