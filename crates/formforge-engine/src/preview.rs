use std::collections::BTreeMap;
use std::fmt;

use formforge_types::{AnswerSet, FieldId, Form, Submission};

use crate::validate::{ValidationError, validate_answer};

/// Progress of a preview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// Accepting answers.
    InProgress,

    /// A submission was produced and persisted; the session no longer
    /// accepts answers.
    Submitted,
}

/// Why a submit attempt was rejected. Rejection is recoverable: the session
/// stays open and the error map holds the per-field messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// At least one field failed validation; nothing was recorded.
    InvalidAnswers { invalid_count: usize },

    /// The session already produced a submission.
    AlreadySubmitted,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InvalidAnswers { invalid_count } => {
                write!(
                    f,
                    "please fix {invalid_count} invalid field(s) before submitting"
                )
            }
            SubmitError::AlreadySubmitted => {
                write!(f, "this preview session was already submitted")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Fill-out state for one loaded form: the raw answers, a parallel map of
/// inline validation messages, and a completeness percentage.
///
/// Answers are kept raw even when invalid so the user keeps seeing what
/// they typed; validation only gates [`PreviewSession::submit`].
#[derive(Debug, Clone)]
pub struct PreviewSession {
    form: Form,
    answers: AnswerSet,
    errors: BTreeMap<FieldId, ValidationError>,
    state: PreviewState,
}

impl PreviewSession {
    /// Start a fresh session over a loaded form.
    pub fn new(form: Form) -> Self {
        Self {
            form,
            answers: AnswerSet::new(),
            errors: BTreeMap::new(),
            state: PreviewState::InProgress,
        }
    }

    /// The form being filled out.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Current session state.
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// The raw answer entered for a field, if any.
    pub fn answer(&self, id: &FieldId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    /// All answers entered so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The inline validation error for a field, if its current answer is
    /// invalid.
    pub fn error(&self, id: &FieldId) -> Option<ValidationError> {
        self.errors.get(id).copied()
    }

    /// Record an answer, validating it immediately.
    ///
    /// The raw value is stored regardless of the validation outcome; only
    /// the error map reflects it. Unknown field ids and sessions that have
    /// already submitted are silent no-ops.
    pub fn set_answer(&mut self, id: &FieldId, value: impl Into<String>) {
        if self.state == PreviewState::Submitted {
            return;
        }
        let Some(field) = self.form.field(id) else {
            return;
        };
        let value = value.into();
        match validate_answer(&field.kind, &value) {
            Ok(()) => {
                self.errors.remove(id);
            }
            Err(error) => {
                self.errors.insert(id.clone(), error);
            }
        }
        self.answers.insert(id.clone(), value);
    }

    /// Percentage of fields with a non-empty answer, rounded for display.
    ///
    /// A form with no fields is 0% complete. Invalid but non-empty answers
    /// count as filled; completeness tracks progress, not correctness.
    pub fn completeness(&self) -> u8 {
        let total = self.form.fields.len();
        if total == 0 {
            return 0;
        }
        let filled = self.answers.values().filter(|value| !value.is_empty()).count();
        (filled as f64 / total as f64 * 100.0).round() as u8
    }

    /// Re-validate every field against the current answers and build a
    /// submission snapshot. A missing answer validates as the empty string.
    ///
    /// On rejection the error map is replaced wholesale so stale messages
    /// do not linger. The session does not transition here: the caller
    /// marks it submitted once the snapshot is safely persisted, so a
    /// failed persist leaves the session open for retry.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if self.state == PreviewState::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }

        let mut errors = BTreeMap::new();
        for field in &self.form.fields {
            let value = self.answers.get(&field.id).map(String::as_str).unwrap_or("");
            if let Err(error) = validate_answer(&field.kind, value) {
                errors.insert(field.id.clone(), error);
            }
        }

        if !errors.is_empty() {
            let invalid_count = errors.len();
            self.errors = errors;
            return Err(SubmitError::InvalidAnswers { invalid_count });
        }

        self.errors.clear();
        Ok(Submission::new(self.form.id.clone(), self.answers.clone()))
    }

    /// Transition to the terminal submitted state. Further answers are
    /// ignored and further submits fail.
    pub fn mark_submitted(&mut self) {
        self.state = PreviewState::Submitted;
    }
}
