use super::*;

fn valid_form() -> SignupForm {
    SignupForm {
        name: "Jane Smith".to_owned(),
        email: "jane@example.com".to_owned(),
        company: String::new(),
        role: "manager".to_owned(),
        password: "password1".to_owned(),
        confirm_password: "password1".to_owned(),
        accept_terms: true,
    }
}

fn error_for(form: &SignupForm, field: SignupField) -> Option<&'static str> {
    form.validate().err().and_then(|errors| errors.get(&field).copied())
}

#[test]
fn valid_form_has_no_errors() {
    assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn company_is_optional() {
    let form = SignupForm { company: String::new(), ..valid_form() };
    assert!(form.validate().is_ok());
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = SignupForm::default().validate().unwrap_err();
    let keys: Vec<SignupField> = errors.keys().copied().collect();
    // Empty password equals empty confirmation, so no mismatch error.
    assert_eq!(
        keys,
        vec![SignupField::Name, SignupField::Email, SignupField::Role, SignupField::Password, SignupField::Terms]
    );
}

#[test]
fn blank_name_is_required() {
    let form = SignupForm { name: "   ".to_owned(), ..valid_form() };
    assert_eq!(error_for(&form, SignupField::Name), Some("Name is required"));
}

#[test]
fn email_missing_and_malformed_have_distinct_messages() {
    let missing = SignupForm { email: String::new(), ..valid_form() };
    let malformed = SignupForm { email: "jane@example".to_owned(), ..valid_form() };
    assert_eq!(error_for(&missing, SignupField::Email), Some("Email is required"));
    assert_eq!(error_for(&malformed, SignupField::Email), Some("Enter a valid email address"));
}

#[test]
fn role_must_be_a_known_option() {
    let unset = SignupForm { role: String::new(), ..valid_form() };
    let unknown = SignupForm { role: "wizard".to_owned(), ..valid_form() };
    assert_eq!(error_for(&unset, SignupField::Role), Some("Select a role"));
    assert_eq!(error_for(&unknown, SignupField::Role), Some("Select a role"));
}

#[test]
fn password_needs_eight_characters() {
    let short = SignupForm { password: "1234567".to_owned(), confirm_password: "1234567".to_owned(), ..valid_form() };
    assert_eq!(error_for(&short, SignupField::Password), Some("Password must be at least 8 characters"));

    let exact = SignupForm { password: "12345678".to_owned(), confirm_password: "12345678".to_owned(), ..valid_form() };
    assert!(exact.validate().is_ok());
}

#[test]
fn whitespace_password_of_full_length_is_accepted() {
    let form = SignupForm { password: "        ".to_owned(), confirm_password: "        ".to_owned(), ..valid_form() };
    assert_eq!(error_for(&form, SignupField::Password), None);
    assert!(form.validate().is_ok());
}

#[test]
fn short_whitespace_password_is_too_short() {
    let form = SignupForm { password: "   ".to_owned(), confirm_password: "   ".to_owned(), ..valid_form() };
    assert_eq!(error_for(&form, SignupField::Password), Some("Password must be at least 8 characters"));
}

#[test]
fn confirmation_must_match() {
    let form = SignupForm { confirm_password: "password2".to_owned(), ..valid_form() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&SignupField::ConfirmPassword), Some(&"Passwords do not match"));
}

#[test]
fn terms_must_be_accepted() {
    let form = SignupForm { accept_terms: false, ..valid_form() };
    assert_eq!(error_for(&form, SignupField::Terms), Some("You must accept the terms and conditions"));
}

#[test]
fn field_keys_are_unique() {
    let fields = [
        SignupField::Name,
        SignupField::Email,
        SignupField::Role,
        SignupField::Password,
        SignupField::ConfirmPassword,
        SignupField::Terms,
    ];
    let mut keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), fields.len());
}
