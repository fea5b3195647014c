//! Per-field rules and whole-form validation

use super::clock::{Clock, SystemClock};
use super::error::FieldError;
use crate::state::{ErrorMap, FieldId, FormValues};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum age, in whole calendar years, accepted by the date-of-birth rule
pub const MINIMUM_AGE: i32 = 18;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

// Matched anywhere in the value, not anchored.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

// ISO calendar date with optional month and day: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
// Expanded years carry a sign and six digits.
static DOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4}|[+-][0-9]{6})(?:-(?:0[1-9]|1[0-2])(?:-(?:0[1-9]|[12][0-9]|3[01]))?)?$",
    )
    .expect("date of birth pattern is valid")
});

/// The registration form's rule set
pub struct RuleSet {
    clock: Box<dyn Clock>,
}

impl RuleSet {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validate one field's candidate value.
    ///
    /// `values` supplies the other fields for cross-field rules; the entry for
    /// `field` itself is ignored in favour of `value`.
    pub fn validate_field(
        &self,
        field: FieldId,
        value: &str,
        values: &FormValues,
    ) -> Option<FieldError> {
        match field {
            FieldId::Name => name(value),
            FieldId::Email => email(value),
            FieldId::Phone => phone(value),
            FieldId::Dob => dob(value, self.clock.current_year()),
            FieldId::Country => country(value),
            FieldId::Password => password(value),
            FieldId::ConfirmPassword => confirm_password(value, values.get(FieldId::Password)),
        }
    }

    /// Validate a field addressed by its wire name; unknown names are valid
    #[allow(dead_code)]
    pub fn validate_named(
        &self,
        name: &str,
        value: &str,
        values: &FormValues,
    ) -> Option<FieldError> {
        let field = name.parse::<FieldId>().ok()?;
        self.validate_field(field, value, values)
    }

    /// Run every field's rule against `values` and collect the failures
    pub fn validate_form(&self, values: &FormValues) -> ErrorMap {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| {
                self.validate_field(field, values.get(field), values)
                    .map(|error| (field, error))
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("current_year", &self.clock.current_year())
            .finish()
    }
}

fn name(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::NameRequired);
    }
    None
}

fn email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Some(FieldError::EmailInvalid);
    }
    None
}

fn phone(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::PhoneRequired);
    }
    if !PHONE_RE.is_match(value) {
        return Some(FieldError::PhoneNotTenDigits);
    }
    None
}

fn dob(value: &str, current_year: i32) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::DobRequired);
    }
    // An unparseable date has no age, so the age check cannot fail.
    let year = birth_year(value)?;
    if current_year - year < MINIMUM_AGE {
        return Some(FieldError::Underage);
    }
    None
}

/// Year component of an ISO date, if `value` is one
fn birth_year(value: &str) -> Option<i32> {
    let captures = DOB_RE.captures(value)?;
    captures["year"].parse().ok()
}

fn country(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::CountryRequired);
    }
    None
}

fn password(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Some(FieldError::PasswordTooShort);
    }
    None
}

fn confirm_password(value: &str, password: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::ConfirmPasswordRequired);
    }
    if value != password {
        return Some(FieldError::PasswordsDoNotMatch);
    }
    None
}
