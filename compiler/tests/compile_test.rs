#![cfg(test)]

use enumwire_compiler::{
    compile_source,
    error::WireError,
    extractor::extract_descriptors,
    parser::parse_schema,
    tokenizer::tokenize_schema,
};

#[test]
fn test_parse_schema() {
    let input = r#"
    package telegram;

    [converter]
    enum ChatMemberStatus {
      Creator = "creator";
      Member = "member";
      Left = "left";
    }

    enum Internal {
      Untagged;
    }
    "#;

    let tokens = tokenize_schema(input).expect("tokenize_schema failed");
    let ast = parse_schema(&tokens).expect("parse_schema failed");

    assert_eq!(ast.package.as_deref(), Some("telegram"));
    assert_eq!(ast.enums.len(), 2);

    let status = &ast.enums[0];
    assert!(status.has_marker);
    assert_eq!(status.name, "ChatMemberStatus");
    assert_eq!(status.members.len(), 3);
    assert_eq!(status.members[0].name, "Creator");
    assert_eq!(status.members[0].wire.as_deref(), Some("creator"));
    assert_eq!(status.members[1].name, "Member");
    assert_eq!(status.members[1].wire.as_deref(), Some("member"));
    assert_eq!(status.members[2].name, "Left");
    assert_eq!(status.members[2].wire.as_deref(), Some("left"));

    let internal = &ast.enums[1];
    assert!(!internal.has_marker);
    assert_eq!(internal.name, "Internal");
    assert_eq!(internal.members.len(), 1);
    assert_eq!(internal.members[0].wire, None);
}

#[test]
fn test_parse_error_reports_position() {
    let input = "enum Status {\n  Active =\n}";
    let tokens = tokenize_schema(input).expect("tokenize_schema failed");
    let err = parse_schema(&tokens).expect_err("parse should fail");
    match err {
        WireError::ParseError { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unmarked_enum_produces_no_descriptor() {
    let input = r#"
    enum Internal {
      A = "a";
    }
    "#;

    let extraction = compile_source(input).expect("compile_source failed");
    assert!(extraction.is_clean());
    assert!(extraction.descriptors.is_empty());
}

#[test]
fn test_member_order_is_declaration_order() {
    let input = r#"
    [converter]
    enum Status {
      Zeta = "zeta";
      Alpha = "alpha";
      Mid = "mid";
    }
    "#;

    let extraction = compile_source(input).expect("compile_source failed");
    let keys: Vec<&str> = extraction.descriptors[0]
        .members
        .iter()
        .map(|m| m.key.as_str())
        .collect();
    assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_missing_annotation_identifies_member() {
    let input = r#"
    [converter]
    enum Status {
      Active = "active";
      Pending;
    }

    [converter]
    enum Kind {
      Photo = "photo";
    }
    "#;

    let extraction = compile_source(input).expect("compile_source failed");

    // The bad enum is rejected with a diagnostic naming the member...
    assert_eq!(extraction.diagnostics.len(), 1);
    match &extraction.diagnostics[0] {
        WireError::MissingAnnotation { enum_name, member, .. } => {
            assert_eq!(enum_name, "Status");
            assert_eq!(member, "Pending");
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }

    // ...and the other enum in the same file is unaffected.
    assert_eq!(extraction.descriptors.len(), 1);
    assert_eq!(extraction.descriptors[0].name, "Kind");
}

#[test]
fn test_duplicate_wire_string_is_rejected() {
    let input = r#"
    [converter]
    enum Status {
      Active = "x";
      Inactive = "x";
    }
    "#;

    let extraction = compile_source(input).expect("compile_source failed");
    assert!(extraction.descriptors.is_empty());
    match &extraction.diagnostics[0] {
        WireError::DuplicateWireString { enum_name, member, value, .. } => {
            assert_eq!(enum_name, "Status");
            assert_eq!(member, "Inactive");
            assert_eq!(value, "x");
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }
}

#[test]
fn test_duplicate_enum_keeps_first() {
    let input = r#"
    [converter]
    enum Status {
      Active = "active";
    }

    [converter]
    enum Status {
      Inactive = "inactive";
    }
    "#;

    let extraction = compile_source(input).expect("compile_source failed");
    assert_eq!(extraction.descriptors.len(), 1);
    assert_eq!(extraction.descriptors[0].members[0].key, "Active");
    assert!(matches!(
        extraction.diagnostics[0],
        WireError::DuplicateEnum { .. }
    ));
}

#[test]
fn test_has_unknown_member_is_case_insensitive() {
    for wire in ["unknown", "Unknown", "UNKNOWN"] {
        let input = format!(
            "[converter]\nenum Status {{\n  Missing = \"{}\";\n  Active = \"active\";\n}}",
            wire
        );
        let tokens = tokenize_schema(&input).expect("tokenize_schema failed");
        let ast = parse_schema(&tokens).expect("parse_schema failed");
        let extraction = extract_descriptors(&ast);
        assert!(extraction.descriptors[0].has_unknown_member, "wire {}", wire);
    }

    let input = "[converter]\nenum Status {\n  Active = \"active\";\n}";
    let extraction = compile_source(input).expect("compile_source failed");
    assert!(!extraction.descriptors[0].has_unknown_member);
}

#[test]
fn test_namespace_flows_into_descriptor() {
    let input = r#"
    package telegram;

    [converter]
    enum Status {
      Active = "active";
    }
    "#;

    let extraction = compile_source(input).expect("compile_source failed");
    assert_eq!(
        extraction.descriptors[0].namespace.as_deref(),
        Some("telegram")
    );
}
