use formforge_types::FormId;

/// Storage key holding a form definition.
pub fn form_key(id: &FormId) -> String {
    format!("form-{id}")
}

/// Storage key holding the submission belonging to a form.
pub fn submission_key(id: &FormId) -> String {
    format!("submission-{id}")
}
