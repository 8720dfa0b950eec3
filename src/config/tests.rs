// Author: Dustin Pilgrim
// License: MIT

use super::*;
use std::collections::HashMap;
use std::fs;

#[test]
fn test_config_from_string() {
    let config_content = r#"
app_name: TestApp
app:
  version: "1.0.0"
  debug: true
  server:
    host: localhost
    port: 8080
  features:
    - auth
    - logging
"#;
    let config = SigilConfig::from_str(config_content).expect("Failed to parse config");

    let version: String = config.get("app.version").expect("Failed to get version");
    assert_eq!(version, "1.0.0");

    let host: String = config.get("app.server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("app.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = config.get("app.debug").expect("Failed to get debug");
    assert_eq!(debug, true);

    let features: Vec<String> = config.get("app.features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    assert!(config.has("app.server.host"));
    assert!(!config.has("app.nonexistent"));

    let server_keys = config.get_keys("app.server").expect("Failed to get server keys");
    assert!(server_keys.contains(&"host".to_string()));
    assert!(server_keys.contains(&"port".to_string()));
}

#[test]
fn test_config_resolves_property_references() {
    let config_content = r#"
defaults:
  retries: 3
  backoff: exponential
job:
  $ref: defaults
  name: nightly
"#;
    let config = SigilConfig::from_str(config_content).expect("Failed to parse config");

    let retries: u32 = config.get("job.retries").expect("Failed to get job.retries");
    assert_eq!(retries, 3);

    let name: String = config.get("job.name").expect("Failed to get job.name");
    assert_eq!(name, "nightly");
}

#[test]
fn test_config_from_file_resolves_file_references() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("shared.yaml"),
        "tools:\n  - fmt\n  - lint\n",
    )
    .expect("Failed to write fixture");
    fs::write(
        dir.path().join("main.yaml"),
        "agent:\n  tools:\n    $ref: shared.yaml::tools\n",
    )
    .expect("Failed to write fixture");

    let config =
        SigilConfig::from_file(dir.path().join("main.yaml")).expect("Failed to load config");
    let tools: Vec<String> = config.get("agent.tools").expect("Failed to get tools");
    assert_eq!(tools, vec!["fmt", "lint"]);
}

#[test]
fn test_config_from_file_with_globals() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("globals.yaml"),
        "providers:\n  default:\n    model: small\n",
    )
    .expect("Failed to write fixture");
    fs::write(
        dir.path().join("main.yaml"),
        "agent:\n  provider:\n    $ref: $global::providers.default\n",
    )
    .expect("Failed to write fixture");

    let config = SigilConfig::from_file_with_globals(
        dir.path().join("main.yaml"),
        dir.path().join("globals.yaml"),
    )
    .expect("Failed to load config");

    let model: String = config.get("agent.provider.model").expect("Failed to get model");
    assert_eq!(model, "small");
}

#[test]
fn test_config_from_file_with_fallback() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("real.yaml"), "name: fallback_hit\n")
        .expect("Failed to write fixture");

    let config = SigilConfig::from_file_with_fallback(
        dir.path().join("missing.yaml"),
        dir.path().join("real.yaml"),
    )
    .expect("Failed to load config via fallback");

    let name: String = config.get("name").expect("Failed to get name");
    assert_eq!(name, "fallback_hit");
}

#[test]
fn test_string_enum_validation() {
    let config_content = r#"
theme:
  border: rounded
  invalid: bad_value
"#;
    let config = SigilConfig::from_str(config_content).expect("Failed to parse config");

    let border = config.get_string_enum("theme.border", &["plain", "rounded", "thick"]);
    assert!(border.is_ok());

    let invalid = config.get_string_enum("theme.invalid", &["good", "better"]);
    assert!(invalid.is_err());
}

#[test]
fn test_order_preservation() {
    let config_content = r#"
nested:
  alpha: a
  beta: b
  gamma: c
"#;
    let config = SigilConfig::from_str(config_content).unwrap();
    let keys = config.get_keys("nested").unwrap();
    assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
}

// ===== Conversion Tests =====

#[test]
fn test_string_conversion() {
    let value = Value::String("hello".to_string());
    let result: Result<String, SigilError> = value.try_into();
    assert_eq!(result.unwrap(), "hello");
}

#[test]
fn test_string_conversion_error() {
    let value = Value::Number(42.0);
    let result: Result<String, SigilError> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_numeric_conversions() {
    let result: Result<f64, SigilError> = Value::Number(3.14).try_into();
    assert_eq!(result.unwrap(), 3.14);

    let result: Result<i32, SigilError> = Value::Number(42.0).try_into();
    assert_eq!(result.unwrap(), 42);

    let result: Result<u64, SigilError> = Value::Number(123456789.0).try_into();
    assert_eq!(result.unwrap(), 123456789);
}

#[test]
fn test_unsigned_range_checks() {
    let result: Result<u8, SigilError> = Value::Number(255.0).try_into();
    assert_eq!(result.unwrap(), 255);

    let result: Result<u8, SigilError> = Value::Number(256.0).try_into();
    assert!(result.is_err());

    let result: Result<u8, SigilError> = Value::Number(-1.0).try_into();
    assert!(result.is_err());

    let result: Result<u16, SigilError> = Value::Number(65536.0).try_into();
    assert!(result.is_err());
}

#[test]
fn test_bool_conversion() {
    let result: Result<bool, SigilError> = Value::Bool(true).try_into();
    assert_eq!(result.unwrap(), true);

    let result: Result<bool, SigilError> = Value::String("yes".to_string()).try_into();
    assert!(result.is_err());
}

#[test]
fn test_vec_conversion() {
    let value = Value::Array(vec![
        Value::String("one".to_string()),
        Value::String("two".to_string()),
    ]);
    let result: Result<Vec<String>, SigilError> = value.try_into();
    assert_eq!(result.unwrap(), vec!["one", "two"]);
}

#[test]
fn test_vec_mixed_types_error() {
    let value = Value::Array(vec![Value::String("one".to_string()), Value::Number(2.0)]);
    let result: Result<Vec<String>, SigilError> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_option_conversion() {
    let result: Result<Option<String>, SigilError> = Value::Null.try_into();
    assert_eq!(result.unwrap(), None);

    let result: Result<Option<i32>, SigilError> = Value::Number(42.0).try_into();
    assert_eq!(result.unwrap(), Some(42));
}

#[test]
fn test_hashmap_conversion() {
    let config = SigilConfig::from_str("env:\n  USER: alice\n  HOME: /home/alice\n")
        .expect("Failed to parse config");

    let map: HashMap<String, String> = config.get("env").expect("Failed to get env map");
    assert_eq!(map.get("USER"), Some(&"alice".to_string()));
    assert_eq!(map.get("HOME"), Some(&"/home/alice".to_string()));
}

#[test]
fn test_tuple_conversion() {
    let value = Value::Array(vec![
        Value::String("key".to_string()),
        Value::String("value".to_string()),
    ]);
    let result: Result<(String, String), SigilError> = value.try_into();
    assert_eq!(result.unwrap(), ("key".to_string(), "value".to_string()));
}

#[test]
fn test_config_with_all_types() {
    let config_content = r#"
types:
  string_val: hello
  int_val: 42
  float_val: 3.14
  bool_val: true
  null_val: null
  array_val: [1, 2, 3]
  nested:
    key: value
"#;
    let config = SigilConfig::from_str(config_content).expect("Failed to parse config");

    let s: String = config.get("types.string_val").unwrap();
    assert_eq!(s, "hello");

    let i: i32 = config.get("types.int_val").unwrap();
    assert_eq!(i, 42);

    let f: f64 = config.get("types.float_val").unwrap();
    assert!((f - 3.14).abs() < 0.001);

    let b: bool = config.get("types.bool_val").unwrap();
    assert_eq!(b, true);

    let opt: Option<String> = config.get("types.null_val").unwrap();
    assert_eq!(opt, None);

    let arr: Vec<i32> = config.get("types.array_val").unwrap();
    assert_eq!(arr, vec![1, 2, 3]);
}

#[test]
fn test_get_optional_missing_path() {
    let config = SigilConfig::from_str("a: 1").expect("Failed to parse config");
    let missing: Option<String> = config
        .get_optional("does.not.exist")
        .expect("get_optional should not fail on missing paths");
    assert_eq!(missing, None);
}

#[test]
fn test_get_or_fallback() {
    let config = SigilConfig::from_str("server:\n  port: 9000\n").expect("Failed to parse config");
    assert_eq!(config.get_or("server.port", 8080u16), 9000);
    assert_eq!(config.get_or("server.timeout", 30u64), 30);
}

#[test]
fn test_config_type_mismatch_errors() {
    let config = SigilConfig::from_str("data:\n  value: not a number\n")
        .expect("Failed to parse config");

    let result: Result<i32, SigilError> = config.get("data.value");
    assert!(result.is_err());
}
