use formforge_engine::{ValidationError, validate_answer};
use formforge_types::FieldKind;

fn select(options: &[&str]) -> FieldKind {
    FieldKind::SingleSelect {
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_empty_answer_fails_for_every_kind() {
    let kinds = [
        FieldKind::ShortText,
        FieldKind::LongText,
        select(&["A"]),
        FieldKind::Url,
        FieldKind::Date,
    ];

    for kind in &kinds {
        assert!(validate_answer(kind, "").is_err(), "{kind:?} accepted empty");
    }
}

#[test]
fn test_text_fields_require_non_whitespace() {
    assert_eq!(
        validate_answer(&FieldKind::ShortText, "   "),
        Err(ValidationError::Required)
    );
    assert_eq!(
        validate_answer(&FieldKind::LongText, "\t\n"),
        Err(ValidationError::Required)
    );
    assert_eq!(validate_answer(&FieldKind::ShortText, "Alice"), Ok(()));
    assert_eq!(
        validate_answer(&FieldKind::LongText, "A longer answer."),
        Ok(())
    );
}

#[test]
fn test_single_select_requires_membership() {
    let kind = select(&["Red", "Blue"]);

    assert_eq!(validate_answer(&kind, "Blue"), Ok(()));
    assert_eq!(
        validate_answer(&kind, "Green"),
        Err(ValidationError::NoOptionSelected)
    );
    assert_eq!(
        validate_answer(&kind, ""),
        Err(ValidationError::NoOptionSelected)
    );
}

#[test]
fn test_url_requires_absolute_http_scheme() {
    assert_eq!(validate_answer(&FieldKind::Url, "https://example.com"), Ok(()));
    assert_eq!(validate_answer(&FieldKind::Url, "http://example.com"), Ok(()));
    assert_eq!(
        validate_answer(&FieldKind::Url, "example.com"),
        Err(ValidationError::InvalidUrl)
    );
    assert_eq!(
        validate_answer(&FieldKind::Url, "ftp://example.com"),
        Err(ValidationError::InvalidUrl)
    );
}

#[test]
fn test_date_requires_yyyy_mm_dd_shape() {
    assert_eq!(validate_answer(&FieldKind::Date, "2024-03-15"), Ok(()));
    assert_eq!(
        validate_answer(&FieldKind::Date, "15-03-2024"),
        Err(ValidationError::InvalidDate)
    );
    assert_eq!(
        validate_answer(&FieldKind::Date, "2024-3-15"),
        Err(ValidationError::InvalidDate)
    );
    // Shape check only; calendar validity is accepted behavior
    assert_eq!(validate_answer(&FieldKind::Date, "2024-02-31"), Ok(()));
}

#[test]
fn test_validation_is_deterministic() {
    let kind = FieldKind::Url;
    let first = validate_answer(&kind, "not a url");
    let second = validate_answer(&kind, "not a url");
    assert_eq!(first, second);
}

#[test]
fn test_messages_are_human_readable() {
    assert_eq!(
        ValidationError::Required.to_string(),
        "This field is required"
    );
    assert_eq!(
        ValidationError::NoOptionSelected.to_string(),
        "Please select an option"
    );
    assert_eq!(
        ValidationError::InvalidUrl.to_string(),
        "Please enter a valid URL"
    );
    assert_eq!(
        ValidationError::InvalidDate.to_string(),
        "Please enter a valid date"
    );
}
