use formforge_types::FieldKind;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Why an answer was rejected. `Display` yields the message shown inline
/// next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty (after trimming) answer to a text field.
    Required,

    /// Single-select answer that is empty or not one of the field's options.
    NoOptionSelected,

    /// Not an absolute http(s) URL.
    InvalidUrl,

    /// Not of the shape YYYY-MM-DD.
    InvalidDate,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::Required => "This field is required",
            ValidationError::NoOptionSelected => "Please select an option",
            ValidationError::InvalidUrl => "Please enter a valid URL",
            ValidationError::InvalidDate => "Please enter a valid date",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for ValidationError {}

/// Check a candidate answer against a field kind.
///
/// Pure and stateless, so it is safe to run on every keystroke. The date
/// rule checks shape only; calendar validity is not verified, so
/// `2024-02-31` passes. That matches the builder's accepted behavior.
pub fn validate_answer(kind: &FieldKind, value: &str) -> Result<(), ValidationError> {
    match kind {
        FieldKind::ShortText | FieldKind::LongText => {
            if value.trim().is_empty() {
                Err(ValidationError::Required)
            } else {
                Ok(())
            }
        }
        FieldKind::SingleSelect { options } => {
            if value.is_empty() || !options.iter().any(|option| option == value) {
                Err(ValidationError::NoOptionSelected)
            } else {
                Ok(())
            }
        }
        FieldKind::Url => {
            if URL_REGEX.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidUrl)
            }
        }
        FieldKind::Date => {
            if DATE_REGEX.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidDate)
            }
        }
    }
}
