use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::field::{Field, FieldId, FieldPatch};

/// Title shown when the stored title is empty.
pub const UNTITLED_FORM: &str = "Untitled Form";

/// Identifier of a form, used as the suffix of its persistence keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Create a FormId from an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh unique identifier
    pub fn generate() -> Self {
        Self(format!("form-{}", Uuid::new_v4()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FormId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FormId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for FormId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named, ordered collection of fields.
///
/// Field order is significant (it is the render and completeness order) and
/// changes only through [`Form::move_field`] and the add/delete operations.
/// Field ids are unique within one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub title: String,
    pub fields: Vec<Field>,
}

impl Form {
    /// Create an empty form with a fresh id.
    pub fn new() -> Self {
        Self::with_id(FormId::generate())
    }

    /// Create an empty form under a known id.
    pub fn with_id(id: FormId) -> Self {
        Self {
            id,
            title: String::new(),
            fields: Vec::new(),
        }
    }

    /// Title for display, falling back to [`UNTITLED_FORM`] when the stored
    /// title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_FORM
        } else {
            &self.title
        }
    }

    /// Replace the title verbatim (no trimming).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a new field with builder defaults, returning its id.
    pub fn add_field(&mut self) -> FieldId {
        let field = Field::new();
        let id = field.id.clone();
        self.fields.push(field);
        id
    }

    /// Remove the field with the given id; unknown ids are ignored.
    /// Returns whether a field was removed.
    pub fn delete_field(&mut self, id: &FieldId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| &field.id != id);
        self.fields.len() != before
    }

    /// Patch the field with the given id in place, preserving its position;
    /// unknown ids are ignored. Returns whether a field was updated.
    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Look up a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| &field.id == id)
    }

    /// Look up a field by id, mutably.
    pub fn field_mut(&mut self, id: &FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| &field.id == id)
    }

    /// Move the field at `from` to `to`, shifting the fields in between by
    /// one position.
    ///
    /// Policy for out-of-range indices: both are clamped to the last valid
    /// index, so a move on an empty form or a clamped-equal pair is a
    /// silent no-op. Never panics. Returns whether the order changed.
    pub fn move_field(&mut self, from: usize, to: usize) -> bool {
        if self.fields.is_empty() {
            return false;
        }
        let last = self.fields.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        if from == to {
            return false;
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        true
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
