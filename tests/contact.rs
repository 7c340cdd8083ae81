use pellet_savings_toolbox::contact::{validate, ContactForm};
use pellet_savings_toolbox::i18n::keys;

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ramesh Patel".to_string(),
        contact_number: "9876543210".to_string(),
        email: "ramesh@example.com".to_string(),
        message: "Please share a quotation for the GPB-05.".to_string(),
    }
}

#[test]
fn valid_form_passes() {
    assert!(validate(&valid_form()).is_empty());
}

#[test]
fn name_rules() {
    let mut form = valid_form();
    form.name = String::new();
    assert_eq!(validate(&form).name, Some(keys::CONTACT_NAME_REQUIRED));
    form.name = "R".to_string();
    assert_eq!(validate(&form).name, Some(keys::CONTACT_NAME_MIN_LENGTH));
}

#[test]
fn contact_number_must_be_ten_digits() {
    let mut form = valid_form();
    for bad in ["987654321", "98765432101", "98765-4321", "98765 4321", ""] {
        form.contact_number = bad.to_string();
        assert_eq!(
            validate(&form).contact_number,
            Some(keys::CONTACT_NUMBER_INVALID),
            "{bad:?} should fail"
        );
    }
    form.contact_number = "0000000000".to_string();
    assert!(validate(&form).contact_number.is_none());
}

#[test]
fn email_rules() {
    let mut form = valid_form();
    form.email = String::new();
    assert_eq!(validate(&form).email, Some(keys::CONTACT_EMAIL_REQUIRED));
    for bad in ["ramesh", "ramesh@", "@example.com", "ramesh@example", "a b@example.com"] {
        form.email = bad.to_string();
        assert_eq!(
            validate(&form).email,
            Some(keys::CONTACT_EMAIL_INVALID),
            "{bad:?} should fail"
        );
    }
}

#[test]
fn message_rules() {
    let mut form = valid_form();
    form.message = String::new();
    assert_eq!(validate(&form).message, Some(keys::CONTACT_MESSAGE_REQUIRED));
    form.message = "too short".to_string();
    assert_eq!(validate(&form).message, Some(keys::CONTACT_MESSAGE_MIN_LENGTH));
}

#[test]
fn all_failures_reported_at_once() {
    let errors = validate(&ContactForm::default());
    assert!(errors.name.is_some());
    assert!(errors.contact_number.is_some());
    assert!(errors.email.is_some());
    assert!(errors.message.is_some());
}
