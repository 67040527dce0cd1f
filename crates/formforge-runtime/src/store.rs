use formforge_types::{FieldId, FieldPatch, Form, FormId};

use crate::Result;
use crate::keys::form_key;
use crate::storage::StorageBackend;

/// The builder's owned form state plus its write-through persistence.
///
/// The caller holds the single instance; there is no hidden global. Every
/// mutating operation applies to the in-memory form and then persists the
/// full JSON snapshot before returning, so a concurrent reader observes the
/// latest committed state or the previous one, never a partial write.
///
/// A failed persist surfaces as an error without rolling back the in-memory
/// change, so the same action can be retried.
#[derive(Debug)]
pub struct FormStore<B: StorageBackend> {
    form: Form,
    backend: B,
}

impl<B: StorageBackend> FormStore<B> {
    /// Start a new empty form. Nothing is persisted until the first
    /// mutation.
    pub fn new(backend: B) -> Self {
        Self {
            form: Form::new(),
            backend,
        }
    }

    /// Load a previously persisted form for further editing.
    ///
    /// Returns `None` when nothing is stored under the id.
    pub fn open(backend: B, id: &FormId) -> Result<Option<Self>> {
        let Some(blob) = backend.get(&form_key(id))? else {
            return Ok(None);
        };
        let form: Form = serde_json::from_str(&blob)?;
        Ok(Some(Self { form, backend }))
    }

    /// The current in-memory form.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// The underlying storage backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Give up the store, handing back the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Append a new field with builder defaults, returning its id.
    pub fn add_field(&mut self) -> Result<FieldId> {
        let id = self.form.add_field();
        self.persist()?;
        Ok(id)
    }

    /// Delete the field with the given id; unknown ids are ignored.
    pub fn delete_field(&mut self, id: &FieldId) -> Result<()> {
        self.form.delete_field(id);
        self.persist()
    }

    /// Patch the field with the given id in place; unknown ids are ignored.
    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> Result<()> {
        self.form.update_field(id, patch);
        self.persist()
    }

    /// Reorder fields; see [`Form::move_field`] for the clamping policy.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<()> {
        self.form.move_field(from, to);
        self.persist()
    }

    /// Replace the title verbatim (no trimming).
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.form.set_title(title);
        self.persist()
    }

    /// Overwrite an option of a single-select field; see
    /// [`formforge_types::Field::set_option`].
    pub fn set_option(&mut self, id: &FieldId, index: usize, value: impl Into<String>) -> Result<()> {
        if let Some(field) = self.form.field_mut(id) {
            field.set_option(index, value);
        }
        self.persist()
    }

    /// Append an option to a single-select field.
    pub fn push_option(&mut self, id: &FieldId, value: impl Into<String>) -> Result<()> {
        if let Some(field) = self.form.field_mut(id) {
            field.push_option(value);
        }
        self.persist()
    }

    /// Remove an option from a single-select field; the last remaining
    /// option is kept.
    pub fn remove_option(&mut self, id: &FieldId, index: usize) -> Result<()> {
        if let Some(field) = self.form.field_mut(id) {
            field.remove_option(index);
        }
        self.persist()
    }

    /// Persist the current snapshot explicitly (the save-draft and publish
    /// actions).
    pub fn save(&mut self) -> Result<()> {
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let key = form_key(&self.form.id);
        let blob = serde_json::to_string(&self.form)?;
        self.backend.set(&key, &blob)
    }
}
