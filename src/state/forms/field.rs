//! Field registry for the registration form

use std::fmt;
use std::str::FromStr;

/// Identifies one input of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Dob,
    Country,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Every declared field, in display order
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Dob,
        FieldId::Country,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Fields force-touched on submit by the legacy policy
    pub const LEGACY_SUBMIT_TOUCHED: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Phone,
        FieldId::ConfirmPassword,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Dob => "Date of Birth (YYYY-MM-DD)",
            Self::Country => "Country",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Name used when the field is addressed by string
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Dob => "dob",
            Self::Country => "country",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Default (empty) value the registry declares for this field
    pub fn default_value(&self) -> &'static str {
        ""
    }

    /// Whether the value should be masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Position of this field in [`FieldId::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Next field, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Returned when a string names no declared field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_wire_names_parse_back() {
        for field in FieldId::ALL {
            assert_eq!(field.wire_name().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "firstName".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownField("firstName".to_string()));
        assert_eq!(err.to_string(), "unknown field: firstName");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(FieldId::Name.next(), FieldId::Email);
        assert_eq!(FieldId::ConfirmPassword.next(), FieldId::Name);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(FieldId::Email.prev(), FieldId::Name);
        assert_eq!(FieldId::Name.prev(), FieldId::ConfirmPassword);
    }

    #[test]
    fn test_secret_fields() {
        assert!(FieldId::Password.is_secret());
        assert!(FieldId::ConfirmPassword.is_secret());
        assert!(!FieldId::Email.is_secret());
    }

    #[test]
    fn test_default_values_are_empty() {
        assert!(FieldId::ALL.iter().all(|f| f.default_value().is_empty()));
    }
}
