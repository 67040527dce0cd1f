use formforge_engine::{PreviewSession, SubmitError};
use formforge_types::{Form, FormId, Submission};

use crate::Result;
use crate::keys::{form_key, submission_key};
use crate::storage::StorageBackend;

/// Outcome of navigating to the preview route.
#[derive(Debug)]
pub enum PreviewLaunch {
    /// The form was found; a fresh session over it.
    Ready(PreviewSession),

    /// No form id was given, or nothing is persisted under it. The caller
    /// should navigate back to the builder; this is not an error.
    RedirectToBuilder,
}

/// Load a persisted form and start a preview session over it.
pub fn launch_preview<B: StorageBackend>(
    backend: &B,
    form_id: Option<&FormId>,
) -> Result<PreviewLaunch> {
    let Some(id) = form_id else {
        return Ok(PreviewLaunch::RedirectToBuilder);
    };
    let Some(blob) = backend.get(&form_key(id))? else {
        return Ok(PreviewLaunch::RedirectToBuilder);
    };
    let form: Form = serde_json::from_str(&blob)?;
    Ok(PreviewLaunch::Ready(PreviewSession::new(form)))
}

/// Outcome of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// All answers passed; the submission was persisted and the session is
    /// terminal.
    Submitted(Submission),

    /// Validation rejected the attempt. Nothing was persisted and the
    /// session's error map holds the per-field messages.
    FixErrors(SubmitError),
}

/// Validate the session's answers and, on success, persist the submission
/// under the form's submission key, overwriting any previous one.
///
/// The session only becomes terminal after the write succeeds, so a storage
/// failure leaves it open and the same submit can be retried.
pub fn submit_preview<B: StorageBackend>(
    backend: &mut B,
    session: &mut PreviewSession,
) -> Result<SubmitOutcome> {
    match session.submit() {
        Ok(submission) => {
            let key = submission_key(&submission.form_id);
            let blob = serde_json::to_string(&submission)?;
            backend.set(&key, &blob)?;
            session.mark_submitted();
            Ok(SubmitOutcome::Submitted(submission))
        }
        Err(error) => Ok(SubmitOutcome::FixErrors(error)),
    }
}
