use crate::i18n::keys;

/// Pure validation of the inquiry form. No submission here; the surrounding
/// application decides what to do with a valid form.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub message: String,
}

/// Field-level error keys. None means the field passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub contact_number: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.contact_number.is_none()
            && self.email.is_none()
            && self.message.is_none()
    }
}

/// Checks all four fields and reports every failure at once.
pub fn validate(form: &ContactForm) -> FormErrors {
    FormErrors {
        name: validate_name(&form.name),
        contact_number: validate_contact_number(&form.contact_number),
        email: validate_email(&form.email),
        message: validate_message(&form.message),
    }
}

fn validate_name(name: &str) -> Option<&'static str> {
    let n = name.trim();
    if n.is_empty() {
        Some(keys::CONTACT_NAME_REQUIRED)
    } else if n.chars().count() < 2 {
        Some(keys::CONTACT_NAME_MIN_LENGTH)
    } else {
        None
    }
}

fn validate_contact_number(number: &str) -> Option<&'static str> {
    let n = number.trim();
    if n.len() == 10 && n.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(keys::CONTACT_NUMBER_INVALID)
    }
}

fn validate_email(email: &str) -> Option<&'static str> {
    let e = email.trim();
    if e.is_empty() {
        return Some(keys::CONTACT_EMAIL_REQUIRED);
    }
    let mut parts = e.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains(' ');
    if local.is_empty() || local.contains(' ') || !domain_ok {
        Some(keys::CONTACT_EMAIL_INVALID)
    } else {
        None
    }
}

fn validate_message(message: &str) -> Option<&'static str> {
    let m = message.trim();
    if m.is_empty() {
        Some(keys::CONTACT_MESSAGE_REQUIRED)
    } else if m.chars().count() < 10 {
        Some(keys::CONTACT_MESSAGE_MIN_LENGTH)
    } else {
        None
    }
}
