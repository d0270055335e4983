use crate::{
    domain::{FieldPath, RawPayload, RawTech},
    form::{ErrorSlot, FocusTarget, FormError, FormState, SubmitOutcome},
    schema::{ErrorCode, SignupSchema},
};

fn schema() -> SignupSchema {
    SignupSchema::standard().expect("standard schema compiles")
}

fn set(state: &mut FormState, path: FieldPath, value: &str) {
    let binding = state.register_field(path).expect("field registered");
    binding.set(state, value).expect("value stored");
}

fn fill_valid(state: &mut FormState) {
    set(state, FieldPath::Name, "ana lima");
    set(state, FieldPath::Email, "Ana@X.com.br");
    set(state, FieldPath::Password, "123456");
    let first = state.append_tech();
    let second = state.append_tech();
    set(state, FieldPath::TechTitle(first), "Rust");
    set(state, FieldPath::TechKnowledge(first), "50");
    set(state, FieldPath::TechTitle(second), "Go");
    set(state, FieldPath::TechKnowledge(second), "10");
}

#[test]
fn appending_twice_creates_independent_rows() {
    let mut state = FormState::new();
    assert!(state.techs().is_empty());

    assert_eq!(state.append_tech(), 0);
    assert_eq!(state.append_tech(), 1);
    assert_eq!(state.techs().len(), 2);

    set(&mut state, FieldPath::TechTitle(1), "Go");
    assert_eq!(state.techs()[0].title.value(), "");
    assert_eq!(state.techs()[1].title.value(), "Go");
    assert_eq!(state.techs()[0].knowledge.value(), "0");
}

#[test]
fn append_focuses_new_title() {
    let mut state = FormState::new();
    state.append_tech();
    let index = state.append_tech();
    assert_eq!(
        state.focused(),
        FocusTarget::Field(FieldPath::TechTitle(index))
    );
}

#[test]
fn appended_row_is_an_unaccepted_edit() {
    let mut state = FormState::new();
    assert!(!state.is_dirty());
    state.append_tech();
    assert!(state.is_dirty());

    let mut seeded = FormState::new();
    seeded.seed(&RawPayload {
        name: "ana lima".into(),
        email: "ana@x.com.br".into(),
        password: "123456".into(),
        techs: vec![RawTech::new("Rust", "50"), RawTech::new("Go", "1")],
    });
    assert!(!seeded.is_dirty());
    assert_eq!(seeded.submit(&schema()), SubmitOutcome::Accepted);
    seeded.append_tech();
    assert!(seeded.is_dirty());
    assert!(matches!(
        seeded.submit(&schema()),
        SubmitOutcome::Rejected { .. }
    ));
    assert!(seeded.is_dirty(), "rejected submit keeps the row unaccepted");
}

#[test]
fn registering_unknown_or_list_path_fails() {
    let state = FormState::new();
    assert_eq!(
        state.register_field(FieldPath::TechTitle(0)),
        Err(FormError::UnknownField(FieldPath::TechTitle(0)))
    );
    assert_eq!(
        state.register_field(FieldPath::Techs),
        Err(FormError::NotScalar(FieldPath::Techs))
    );
    assert!(matches!(
        state.register_field_str("techs.x.title"),
        Err(FormError::InvalidPath(_))
    ));
}

#[test]
fn registering_by_dotted_path() {
    let mut state = FormState::new();
    state.append_tech();
    let binding = state
        .register_field_str("techs.0.knowledge")
        .expect("row exists");
    assert_eq!(binding.path(), &FieldPath::TechKnowledge(0));
    assert_eq!(binding.value(&state), Some("0"));
}

#[test]
fn empty_form_reports_every_field() {
    let mut state = FormState::new();
    let outcome = state.submit(&schema());
    assert_eq!(outcome, SubmitOutcome::Rejected { issues: 4 });
    assert!(state.output().is_none());

    let paths: Vec<_> = state.errors().iter().map(|(path, _)| path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            FieldPath::Name,
            FieldPath::Email,
            FieldPath::Password,
            FieldPath::Techs,
        ]
    );
    assert_eq!(
        state.errors().code(&FieldPath::Techs),
        Some(ErrorCode::TooFewEntries)
    );
}

#[test]
fn accepted_submission_normalizes_and_clears_state() {
    let mut state = FormState::new();
    fill_valid(&mut state);
    assert!(state.is_dirty());

    assert_eq!(state.submit(&schema()), SubmitOutcome::Accepted);
    assert_eq!(state.error_count(), 0);
    assert!(!state.is_dirty());

    let output = state.output().expect("output stored");
    assert_eq!(output.payload.name, "Ana Lima");
    assert_eq!(output.payload.email, "ana@x.com.br");
    assert!(output.rendered.contains("\"knowledge\": 50"));
    assert!(output.rendered.contains("\"title\": \"Go\""));

    // Inputs keep what the user typed.
    assert_eq!(
        state.field(&FieldPath::Name).map(|field| field.value()),
        Some("ana lima")
    );
}

#[test]
fn rejected_resubmit_keeps_output_and_replaces_errors() {
    let schema = schema();
    let mut state = FormState::new();
    fill_valid(&mut state);
    state.submit(&schema);

    set(&mut state, FieldPath::Password, "123");
    set(&mut state, FieldPath::TechKnowledge(0), "101");
    let outcome = state.submit(&schema);
    assert_eq!(outcome, SubmitOutcome::Rejected { issues: 2 });
    assert!(state.output().is_some());
    assert_eq!(
        state.errors().code(&FieldPath::TechKnowledge(0)),
        Some(ErrorCode::OutOfRange)
    );

    set(&mut state, FieldPath::Password, "123456");
    assert_eq!(state.error_count(), 2);
    state.submit(&schema);
    assert_eq!(state.error_count(), 1);
    assert!(!state.errors().contains(&FieldPath::Password));
}

#[test]
fn error_slot_reports_message_per_path() {
    let mut state = FormState::new();
    set(&mut state, FieldPath::Email, "ana@x.com");
    state.submit(&schema());

    assert_eq!(
        state.error_slot(&FieldPath::Email),
        ErrorSlot::HasError("Email must end with .com.br")
    );
    assert_eq!(
        state.error_slot(&FieldPath::Name),
        ErrorSlot::HasError("Name is required")
    );
    assert_eq!(state.error_slot(&FieldPath::TechTitle(3)), ErrorSlot::Clear);
}

#[test]
fn focus_wraps_in_both_directions() {
    let mut state = FormState::new();
    state.append_tech();
    assert_eq!(state.focus_targets().len(), 7);

    state.focus(&FocusTarget::Submit);
    state.focus_next();
    assert_eq!(state.focused(), FocusTarget::Field(FieldPath::Name));
    state.focus_prev();
    assert_eq!(state.focused(), FocusTarget::Submit);
    state.focus_prev();
    assert_eq!(state.focused(), FocusTarget::AddTech);
    assert!(state.focused_field().is_none());
}

#[test]
fn focus_rejects_missing_target() {
    let mut state = FormState::new();
    assert!(!state.focus(&FocusTarget::Field(FieldPath::TechTitle(0))));
    assert_eq!(state.focus_index(), 0);
}

#[test]
fn seeded_values_stay_pristine() {
    let mut state = FormState::new();
    state.seed(&RawPayload {
        name: "ana lima".into(),
        email: "ana@x.com.br".into(),
        password: "123456".into(),
        techs: vec![RawTech::new("Rust", "50"), RawTech::new("Go", "1")],
    });

    assert!(!state.is_dirty());
    assert_eq!(state.techs().len(), 2);
    assert_eq!(state.raw_payload().techs[1], RawTech::new("Go", "1"));
    assert_eq!(state.submit(&schema()), SubmitOutcome::Accepted);
}
