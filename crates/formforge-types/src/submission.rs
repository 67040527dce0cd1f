use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::FieldId;
use crate::form::FormId;

/// Transient mapping from field id to the entered answer during preview.
///
/// An absent key means the field is unanswered.
pub type AnswerSet = BTreeMap<FieldId, String>;

/// Persisted snapshot of an answer-set at successful submit time.
///
/// Immutable once written; a later submit for the same form overwrites it
/// under the same key (last write wins, no history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub form_id: FormId,
    pub responses: AnswerSet,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Snapshot the given answers with the current timestamp.
    pub fn new(form_id: FormId, responses: AnswerSet) -> Self {
        Self {
            form_id,
            responses,
            submitted_at: Utc::now(),
        }
    }
}
