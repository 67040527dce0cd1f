use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Label a freshly created field starts out with.
pub const DEFAULT_LABEL: &str = "Write a question";

/// Help text a freshly created field starts out with.
pub const DEFAULT_HELP: &str = "This is a help text";

/// Option a field receives when it becomes single-select without any
/// options of its own.
pub const DEFAULT_OPTION: &str = "Option 1";

/// Stable identifier of a field, unique within one form.
///
/// Assigned at creation and never reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Create a FieldId from an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh unique identifier
    pub fn generate() -> Self {
        Self(format!("field-{}", Uuid::new_v4()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of question a field asks, determining its input widget and its
/// validation rule.
///
/// The option list is only inhabited for single-select fields; the other
/// kinds cannot carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text answer.
    ShortText,

    /// Multi-line text answer.
    LongText,

    /// Pick exactly one of a fixed set of options.
    SingleSelect { options: Vec<String> },

    /// Absolute http(s) URL.
    Url,

    /// Calendar date entered as YYYY-MM-DD.
    Date,
}

impl FieldKind {
    /// Create a single-select kind, falling back to one default option when
    /// the given list is empty (a single-select field always has at least
    /// one option).
    pub fn single_select(options: Vec<String>) -> Self {
        if options.is_empty() {
            Self::SingleSelect {
                options: vec![DEFAULT_OPTION.to_string()],
            }
        } else {
            Self::SingleSelect { options }
        }
    }

    /// Check if this is the single-select kind.
    pub fn is_single_select(&self) -> bool {
        matches!(self, Self::SingleSelect { .. })
    }

    /// The option list, for single-select fields only.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::SingleSelect { options } => Some(options),
            _ => None,
        }
    }

    /// Name shown in the builder's input-type dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ShortText => "Single answer",
            Self::LongText => "Long answer",
            Self::SingleSelect { .. } => "Single select",
            Self::Url => "URL",
            Self::Date => "Date",
        }
    }
}

/// One question within a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique within the owning form.
    pub id: FieldId,

    /// Kind tag plus kind-specific payload, flattened into the field object.
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Prompt shown above the input.
    pub label: String,

    /// Secondary descriptive text shown under the prompt.
    pub help: String,
}

impl Field {
    /// Create a field with a fresh id and builder defaults (short text).
    pub fn new() -> Self {
        Self {
            id: FieldId::generate(),
            kind: FieldKind::ShortText,
            label: DEFAULT_LABEL.to_string(),
            help: DEFAULT_HELP.to_string(),
        }
    }

    /// Change the field's kind.
    ///
    /// Becoming single-select with an empty option list initializes it to
    /// one default option; leaving single-select drops the list with the
    /// variant.
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.kind = match kind {
            FieldKind::SingleSelect { options } => FieldKind::single_select(options),
            other => other,
        };
    }

    /// Apply a partial update, leaving unset parts untouched.
    pub fn apply(&mut self, patch: FieldPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(help) = patch.help {
            self.help = help;
        }
        if let Some(kind) = patch.kind {
            self.set_kind(kind);
        }
    }

    /// Overwrite the option at `index`. Ignored for non-single-select
    /// fields and out-of-range indices. Returns whether anything changed.
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) -> bool {
        match &mut self.kind {
            FieldKind::SingleSelect { options } if index < options.len() => {
                options[index] = value.into();
                true
            }
            _ => false,
        }
    }

    /// Append an option. Ignored for non-single-select fields. Returns
    /// whether anything changed.
    pub fn push_option(&mut self, value: impl Into<String>) -> bool {
        match &mut self.kind {
            FieldKind::SingleSelect { options } => {
                options.push(value.into());
                true
            }
            _ => false,
        }
    }

    /// Remove the option at `index`.
    ///
    /// Refused when it is the last remaining option (a single-select field
    /// keeps at least one). Returns whether anything changed.
    pub fn remove_option(&mut self, index: usize) -> bool {
        match &mut self.kind {
            FieldKind::SingleSelect { options } if options.len() > 1 && index < options.len() => {
                options.remove(index);
                true
            }
            _ => false,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update to a field, applied by `Form::update_field`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub help: Option<String>,
    pub kind: Option<FieldKind>,
}

impl FieldPatch {
    /// Create an empty patch (applying it is a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the help text.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Change the kind (normalized on apply, see [`Field::set_kind`]).
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
