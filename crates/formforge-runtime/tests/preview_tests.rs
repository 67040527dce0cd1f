use formforge_engine::SubmitError;
use formforge_runtime::*;
use formforge_runtime::keys::submission_key;
use formforge_types::{FieldId, FieldPatch, FormId, Submission};

/// Builder-side setup: one short-text field labeled "Name".
fn name_form(backend: MemoryBackend) -> (MemoryBackend, FormId, FieldId) {
    let mut store = FormStore::new(backend);
    let field = store.add_field().unwrap();
    store
        .update_field(&field, FieldPatch::new().label("Name"))
        .unwrap();
    let form_id = store.form().id.clone();
    (store.into_backend(), form_id, field)
}

#[test]
fn test_launch_without_id_redirects() {
    let backend = MemoryBackend::new();
    let launch = launch_preview(&backend, None).unwrap();
    assert!(matches!(launch, PreviewLaunch::RedirectToBuilder));
}

#[test]
fn test_launch_with_unknown_id_redirects() {
    let backend = MemoryBackend::new();
    let launch = launch_preview(&backend, Some(&FormId::new("form-ghost"))).unwrap();
    assert!(matches!(launch, PreviewLaunch::RedirectToBuilder));
}

#[test]
fn test_launch_loads_the_persisted_form() {
    let (backend, form_id, _) = name_form(MemoryBackend::new());

    let launch = launch_preview(&backend, Some(&form_id)).unwrap();

    let PreviewLaunch::Ready(session) = launch else {
        panic!("expected a ready session");
    };
    assert_eq!(session.form().id, form_id);
    assert_eq!(session.form().fields[0].label, "Name");
}

#[test]
fn test_blank_submit_writes_nothing() {
    let (mut backend, form_id, field) = name_form(MemoryBackend::new());
    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };

    let outcome = submit_preview(&mut backend, &mut session).unwrap();

    assert!(matches!(
        outcome,
        SubmitOutcome::FixErrors(SubmitError::InvalidAnswers { invalid_count: 1 })
    ));
    assert!(session.error(&field).is_some());
    assert!(backend.get(&submission_key(&form_id)).unwrap().is_none());
}

#[test]
fn test_filled_submit_persists_the_submission() {
    let (mut backend, form_id, field) = name_form(MemoryBackend::new());
    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };

    session.set_answer(&field, "Alice");
    let outcome = submit_preview(&mut backend, &mut session).unwrap();

    let SubmitOutcome::Submitted(submission) = outcome else {
        panic!("expected a submission");
    };
    assert_eq!(submission.responses.get(&field).unwrap(), "Alice");

    let blob = backend.get(&submission_key(&form_id)).unwrap().unwrap();
    let stored: Submission = serde_json::from_str(&blob).unwrap();
    assert_eq!(stored.form_id, form_id);
    assert_eq!(stored.responses.get(&field).unwrap(), "Alice");
}

#[test]
fn test_rejected_submit_leaves_prior_submission_unchanged() {
    let (mut backend, form_id, field) = name_form(MemoryBackend::new());

    // First respondent submits successfully
    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };
    session.set_answer(&field, "Alice");
    submit_preview(&mut backend, &mut session).unwrap();

    // Second respondent leaves the field blank
    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };
    let outcome = submit_preview(&mut backend, &mut session).unwrap();
    assert!(matches!(outcome, SubmitOutcome::FixErrors(_)));

    let blob = backend.get(&submission_key(&form_id)).unwrap().unwrap();
    let stored: Submission = serde_json::from_str(&blob).unwrap();
    assert_eq!(stored.responses.get(&field).unwrap(), "Alice");
}

#[test]
fn test_resubmit_overwrites_last_write_wins() {
    let (mut backend, form_id, field) = name_form(MemoryBackend::new());

    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };
    session.set_answer(&field, "Alice");
    submit_preview(&mut backend, &mut session).unwrap();

    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };
    session.set_answer(&field, "Bob");
    submit_preview(&mut backend, &mut session).unwrap();

    let blob = backend.get(&submission_key(&form_id)).unwrap().unwrap();
    let stored: Submission = serde_json::from_str(&blob).unwrap();
    assert_eq!(stored.responses.get(&field).unwrap(), "Bob");
}

#[test]
fn test_submission_persist_failure_leaves_session_open() {
    let (backend, form_id, field) = name_form(MemoryBackend::new());
    let PreviewLaunch::Ready(mut session) = launch_preview(&backend, Some(&form_id)).unwrap()
    else {
        panic!("expected a ready session");
    };
    session.set_answer(&field, "Alice");

    // Swap in a backend whose quota is already unreachable
    let mut full = MemoryBackend::with_quota(1);
    let result = submit_preview(&mut full, &mut session);
    assert!(matches!(result, Err(Error::Storage(_))));

    // The session did not become terminal, so the submit can be retried
    let mut backend = backend;
    let outcome = submit_preview(&mut backend, &mut session).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
}
