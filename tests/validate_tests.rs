// tests/validate_tests.rs

use pagekit::utils::validate::{validate_email, validate_link, validate_url};
use validator::Validate;

/// Contact form submitted from a page-builder "contact" block.
#[derive(Debug, Validate)]
struct ContactForm {
    #[validate(length(min = 1, max = 100))]
    name: String,
    #[validate(custom(function = validate_email))]
    email: String,
    #[validate(custom(function = validate_link))]
    website: String,
}

/// Image block whose source must be an absolute URL.
#[derive(Debug, Validate)]
struct ImageBlock {
    #[validate(custom(function = validate_url))]
    src: String,
}

#[test]
fn valid_form_passes() {
    let form = ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        website: "/portfolio".to_string(),
    };

    assert!(form.validate().is_ok());
}

#[test]
fn invalid_fields_are_reported() {
    // Arrange
    let form = ContactForm {
        name: "Ada".to_string(),
        email: "not-an-email".to_string(),
        website: "javascript:alert(1)".to_string(),
    };

    // Act
    let errors = form.validate().unwrap_err();

    // Assert
    let fields = errors.field_errors();
    assert_eq!(fields["email"][0].code, "invalid_email");
    assert_eq!(fields["website"][0].code, "unsafe_url");
    assert!(!fields.contains_key("name"));
}

#[test]
fn empty_link_is_allowed() {
    assert!(validate_link("").is_ok());
}

#[test]
fn image_src_must_be_absolute() {
    assert!(ImageBlock { src: "https://cdn.example.com/a.png".to_string() }.validate().is_ok());

    let errors = ImageBlock { src: "/a.png".to_string() }.validate().unwrap_err();
    assert_eq!(errors.field_errors()["src"][0].code, "invalid_url");
}
