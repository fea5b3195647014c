//! Per-field validation failures

/// A single validation failure; the `Display` text is what the user sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address is invalid")]
    EmailInvalid,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be 10 digits")]
    PhoneNotTenDigits,
    #[error("Date of Birth is required")]
    DobRequired,
    #[error("You must be at least 18 years old")]
    Underage,
    #[error("Country is required")]
    CountryRequired,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Confirm Password is required")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
}

impl FieldError {
    /// Whether this is the "required" failure of its field
    #[cfg(test)]
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::NameRequired
                | Self::EmailRequired
                | Self::PhoneRequired
                | Self::DobRequired
                | Self::CountryRequired
                | Self::PasswordRequired
                | Self::ConfirmPasswordRequired
        )
    }
}
