use techform::{
    DocumentFormat, ErrorCode, FieldPath, FormState, RawPayload, RawTech, SchemaRules,
    SignupSchema, SubmitOutcome, parse_prefill_str, render_payload,
};

fn payload(email: &str, techs: Vec<RawTech>) -> RawPayload {
    RawPayload {
        name: "ana lima".into(),
        email: email.into(),
        password: "123456".into(),
        techs,
    }
}

#[test]
fn accepted_payload_renders_in_field_order() {
    let schema = SignupSchema::standard().expect("schema");
    let accepted = schema
        .validate(&payload(
            "Ana@X.com.br",
            vec![RawTech::new("Rust", "50"), RawTech::new("Go", "10")],
        ))
        .expect("valid payload");

    let rendered = render_payload(&accepted).expect("render");
    let name_at = rendered.find("\"name\"").expect("name key");
    let email_at = rendered.find("\"email\"").expect("email key");
    let techs_at = rendered.find("\"techs\"").expect("techs key");
    assert!(name_at < email_at && email_at < techs_at);
    assert!(rendered.contains("\"email\": \"ana@x.com.br\""));
    assert!(rendered.contains("\"knowledge\": 10"));
}

#[test]
fn custom_suffix_changes_domain_rule() {
    let schema =
        SignupSchema::new(SchemaRules::default().with_email_suffix(".pt")).expect("schema");
    let techs = vec![RawTech::new("Rust", "50"), RawTech::new("Go", "10")];

    assert!(schema.validate(&payload("ana@x.pt", techs.clone())).is_ok());
    let errors = schema
        .validate(&payload("ana@x.com.br", techs))
        .expect_err("suffix mismatch");
    assert_eq!(
        errors.code(&FieldPath::Email),
        Some(ErrorCode::DomainNotAllowed)
    );
    assert_eq!(
        errors.message(&FieldPath::Email),
        Some("Email must end with .pt")
    );
}

#[test]
fn prefill_document_drives_a_submission() {
    let prefill = parse_prefill_str(
        r#"{
            "name": "joão silva",
            "email": "JOAO@EMPRESA.COM.BR",
            "password": "segredo",
            "techs": [
                {"title": "Rust", "knowledge": 100},
                {"title": "SQL", "knowledge": "1"}
            ]
        }"#,
        DocumentFormat::Json,
    )
    .expect("prefill parses");

    let mut state = FormState::new();
    state.seed(&prefill);
    let schema = SignupSchema::standard().expect("schema");
    assert_eq!(state.submit(&schema), SubmitOutcome::Accepted);

    let output = state.output().expect("output");
    assert_eq!(output.payload.name, "João Silva");
    assert_eq!(output.payload.email, "joao@empresa.com.br");
    assert_eq!(output.payload.techs[0].knowledge, 100.0);
}
