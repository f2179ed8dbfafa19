use schemaform_core::{
    parse_schema, EditorState, FieldControl, FieldError, FormState, InputType, SchemaError,
    SubmitOutcome,
};
use serde_json::json;

const NAME_SCHEMA: &str = r#"{"formTitle":"Test","formDescription":"d","fields":[{"id":"name","label":"Name","type":"text","required":true}]}"#;

#[test]
fn test_end_to_end_required_name() {
    let editor = EditorState::with_text(NAME_SCHEMA);
    let schema = editor.schema().cloned().expect("schema should parse");

    let state = FormState::default().with_schema(Some(schema));
    let model = state.model().unwrap();
    assert_eq!(model.fields.len(), 1);
    assert_eq!(model.fields[0].field.label, "Name");
    assert!(matches!(
        model.fields[0].control,
        FieldControl::SingleLine { input_type: InputType::Text, .. }
    ));

    // Empty submit
    let (state, outcome) = state.submit();
    assert_eq!(outcome, SubmitOutcome::Rejected(vec!["name".to_string()]));
    assert_eq!(
        state.error("name").map(|e| e.to_string()).as_deref(),
        Some("This field is required")
    );

    // Filled submit
    let (state, outcome) = state
        .with_value("name", Some("John Doe".to_string()))
        .submit();
    assert!(state.errors().is_empty());
    match outcome {
        SubmitOutcome::Accepted(submission) => {
            assert_eq!(submission.into_value(), json!({"name": "John Doe"}));
        }
        other => panic!("expected accepted submission, got {:?}", other),
    }
}

#[test]
fn test_invalid_text_leaves_renderer_without_schema() {
    let state = FormState::new(parse_schema(NAME_SCHEMA).unwrap());
    assert!(state.has_schema());

    for bad in ["{", r#"{"formTitle":"x"}"#] {
        let editor = EditorState::with_text(bad);
        assert!(editor.error().is_some());
        let state = state.clone().with_schema(editor.schema().cloned());
        assert!(!state.has_schema());
        assert_eq!(state.submit().1, SubmitOutcome::NoSchema);
    }
}

#[test]
fn test_wrong_shape_examples() {
    let cases = [
        r#"{"formTitle":"t","formDescription":"d"}"#,
        r#"{"formTitle":"t","formDescription":"d","fields":[{"id":"d","label":"D","type":"date"}]}"#,
        // the browser harness fixture omits formDescription
        r#"{"formTitle":"Test Form","fields":[{"id":"name","type":"text","label":"Name","required":true}]}"#,
    ];
    for raw in cases {
        assert!(
            matches!(parse_schema(raw), Err(SchemaError::SchemaMismatch { .. })),
            "expected mismatch for {}",
            raw
        );
    }
}

#[test]
fn test_rendered_blocks_match_declared_order() {
    let raw = r#"{
        "formTitle": "Order",
        "formDescription": "",
        "fields": [
            {"id": "c", "label": "C", "type": "textarea"},
            {"id": "a", "label": "A", "type": "email"},
            {"id": "b", "label": "B", "type": "radio", "options": [{"label": "X", "value": "x"}]},
            {"id": "d", "label": "D", "type": "select"}
        ]
    }"#;
    let state = FormState::new(parse_schema(raw).unwrap());
    let model = state.model().unwrap();
    let ids: Vec<_> = model.fields.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["c", "a", "b", "d"]);
    assert!(matches!(model.fields[3].control, FieldControl::MissingOptions { .. }));
}

#[test]
fn test_digits_pattern() {
    let raw = r#"{"formTitle":"t","formDescription":"d","fields":[
        {"id":"code","label":"Code","type":"text","validation":{"pattern":"^[0-9]+$"}},
        {"id":"other","label":"Other","type":"text","required":true}
    ]}"#;
    let state = FormState::new(parse_schema(raw).unwrap())
        .with_value("other", Some("filled".to_string()));

    let (state, outcome) = state.with_value("code", Some("abc".to_string())).submit();
    assert_eq!(outcome, SubmitOutcome::Rejected(vec!["code".to_string()]));
    assert_eq!(state.error("code"), Some(&FieldError::PatternMismatch));
    assert!(state.error("other").is_none());
    assert_eq!(state.value("other"), Some("filled"));

    let (_, outcome) = state.with_value("code", Some("123".to_string())).submit();
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
}

#[test]
fn test_lookahead_pattern_accepts_matching_input() {
    let raw = r#"{"formTitle":"t","formDescription":"d","fields":[
        {"id":"pw","label":"Password","type":"text","validation":{"pattern":"^(?=.*[0-9]).{4,}$"}}
    ]}"#;
    let state = FormState::new(parse_schema(raw).unwrap());
    assert!(state.model().unwrap().fields[0].rule.pattern_error().is_none());

    let (state, outcome) = state.with_value("pw", Some("abcd".to_string())).submit();
    assert_eq!(outcome, SubmitOutcome::Rejected(vec!["pw".to_string()]));
    assert_eq!(state.error("pw"), Some(&FieldError::PatternMismatch));

    let (_, outcome) = state.with_value("pw", Some("abc1".to_string())).submit();
    let SubmitOutcome::Accepted(submission) = outcome else {
        panic!("expected submission to be accepted");
    };
    assert_eq!(submission.get("pw"), Some(&json!("abc1")));
}

#[test]
fn test_broken_pattern_does_not_panic() {
    let raw = r#"{"formTitle":"t","formDescription":"d","fields":[
        {"id":"code","label":"Code","type":"text","validation":{"pattern":"(["}}
    ]}"#;
    let state = FormState::new(parse_schema(raw).unwrap());
    let model = state.model().unwrap();
    assert!(model.fields[0].rule.pattern_error().is_some());

    let (state, outcome) = state.with_value("code", Some("xy".to_string())).submit();
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert!(matches!(state.error("code"), Some(FieldError::BrokenPattern(_))));
}
