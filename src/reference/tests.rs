use super::*;
use crate::value::Value;

fn parse_yaml(input: &str) -> Value {
    serde_yaml::from_str(input).expect("Failed to parse test YAML")
}

// ===== String Form Tests =====

#[test]
fn test_plain_property_path() {
    let r = Ref::parse_str("server.host").expect("Failed to parse property ref");
    assert_eq!(r.ref_type, RefType::Property);
    assert_eq!(r.path, "server.host");
    assert_eq!(r.file, "");
    assert_eq!(r.mode, MergeMode::Merge);
}

#[test]
fn test_empty_string_is_property_ref() {
    let r = Ref::parse_str("").expect("Failed to parse empty ref");
    assert_eq!(r.ref_type, RefType::Property);
    assert_eq!(r.path, "");
    assert_eq!(r.mode, MergeMode::Merge);
}

#[test]
fn test_mode_suffix_tokens() {
    let cases = [
        ("tasks!merge", MergeMode::Merge),
        ("tasks!replace", MergeMode::Replace),
        ("tasks!append", MergeMode::Append),
    ];
    for (input, expected) in cases {
        let r = Ref::parse_str(input).expect("Failed to parse mode suffix");
        assert_eq!(r.path, "tasks");
        assert_eq!(r.mode, expected);
    }
}

#[test]
fn test_invalid_mode_token() {
    let err = Ref::parse_str("tasks!overwrite").unwrap_err();
    match err {
        SigilError::ParseError { message, code, .. } => {
            assert!(message.contains("invalid mode: overwrite"));
            assert_eq!(code, Some(201));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_global_prefix() {
    let r = Ref::parse_str("$global::a.b").expect("Failed to parse global ref");
    assert_eq!(r.ref_type, RefType::Global);
    assert_eq!(r.path, "a.b");
    assert_eq!(r.file, "");
}

#[test]
fn test_global_prefix_with_mode() {
    let r = Ref::parse_str("$global::providers.openai!replace").unwrap();
    assert_eq!(r.ref_type, RefType::Global);
    assert_eq!(r.path, "providers.openai");
    assert_eq!(r.mode, MergeMode::Replace);
}

#[test]
fn test_file_locator_with_path() {
    let r = Ref::parse_str("./x.yaml::a.0").expect("Failed to parse file ref");
    assert_eq!(r.ref_type, RefType::File);
    assert_eq!(r.file, "./x.yaml");
    assert_eq!(r.path, "a.0");
    assert_eq!(r.mode, MergeMode::Merge);
}

#[test]
fn test_file_locator_variants() {
    for locator in ["shared.yml", "dir/shared.yaml", "catalog.json", "https://example.com/base.yaml"] {
        let input = format!("{}::tools", locator);
        let r = Ref::parse_str(&input).expect("Failed to parse file ref");
        assert_eq!(r.ref_type, RefType::File, "locator: {}", locator);
        assert_eq!(r.file, locator);
        assert_eq!(r.path, "tools");
    }
}

#[test]
fn test_file_locator_with_mode() {
    let r = Ref::parse_str("./base.yaml::tasks!append").unwrap();
    assert_eq!(r.ref_type, RefType::File);
    assert_eq!(r.mode, MergeMode::Append);
    assert_eq!(r.path, "tasks");
}

#[test]
fn test_double_colon_without_locator_is_property() {
    // "foo::bar" has no separator, scheme, or extension before the "::",
    // so the whole string is treated as a property path.
    let r = Ref::parse_str("foo::bar").expect("Failed to parse");
    assert_eq!(r.ref_type, RefType::Property);
    assert_eq!(r.path, "foo::bar");
}

// ===== Mapping Form Tests =====

#[test]
fn test_mapping_property() {
    let v = parse_yaml("type: property\npath: agents.0.model");
    let r = Ref::parse(&v).expect("Failed to parse mapping ref");
    assert_eq!(r.ref_type, RefType::Property);
    assert_eq!(r.path, "agents.0.model");
    assert_eq!(r.mode, MergeMode::Merge);
}

#[test]
fn test_mapping_file_with_mode() {
    let v = parse_yaml("type: file\nfile: ./shared.yaml\npath: tools\nmode: replace");
    let r = Ref::parse(&v).expect("Failed to parse mapping ref");
    assert_eq!(r.ref_type, RefType::File);
    assert_eq!(r.file, "./shared.yaml");
    assert_eq!(r.path, "tools");
    assert_eq!(r.mode, MergeMode::Replace);
}

#[test]
fn test_mapping_global() {
    let v = parse_yaml("type: global\npath: schemas.user");
    let r = Ref::parse(&v).expect("Failed to parse mapping ref");
    assert_eq!(r.ref_type, RefType::Global);
    assert_eq!(r.path, "schemas.user");
}

#[test]
fn test_mapping_missing_type() {
    let v = parse_yaml("path: a.b");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("type is required"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_mapping_invalid_type_token() {
    let v = parse_yaml("type: remote\npath: a.b");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("invalid type: remote"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_mapping_unknown_field() {
    let v = parse_yaml("type: property\npath: a.b\nfrom: somewhere");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("unknown field 'from'"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_mapping_file_requires_file_field() {
    let v = parse_yaml("type: file\npath: a.b");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("file type requires file field"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_mapping_invalid_file_locator() {
    let v = parse_yaml("type: file\nfile: notafile\npath: a.b");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("invalid file path: notafile"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_mapping_property_requires_path() {
    let v = parse_yaml("type: property");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("path is required for property type"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_mapping_invalid_mode() {
    let v = parse_yaml("type: property\npath: a\nmode: squash");
    let err = Ref::parse(&v).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("invalid mode: squash"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_non_reference_values() {
    let err = Ref::parse(&Value::Number(7.0)).unwrap_err();
    match err {
        SigilError::ParseError { message, .. } => {
            assert!(message.contains("string or a mapping"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}
