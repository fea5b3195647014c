//! Typed maps holding values, errors and touched flags per field

use super::field::FieldId;
use crate::validation::FieldError;
use std::collections::BTreeMap;

const FIELD_COUNT: usize = FieldId::ALL.len();

/// Current value of every declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    values: [String; FIELD_COUNT],
}

impl FormValues {
    /// Values as declared by the field registry
    pub fn new() -> Self {
        Self {
            values: FieldId::ALL.map(|field| field.default_value().to_string()),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    #[cfg(test)]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate in registry order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// True when every field still holds its registry default
    pub fn is_pristine(&self) -> bool {
        self.iter().all(|(field, value)| value == field.default_value())
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors currently held per field
///
/// A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Store the verdict for a field, clearing it when valid
    pub fn set(&mut self, field: FieldId, verdict: Option<FieldError>) {
        match verdict {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate in registry order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

impl FromIterator<(FieldId, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldId, FieldError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Fields the user has left at least once, or that submit forced into view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet {
    touched: [bool; FIELD_COUNT],
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched[field.index()]
    }

    /// Mark a field touched; there is no way to untouch a single field
    pub fn touch(&mut self, field: FieldId) {
        self.touched[field.index()] = true;
    }

    pub fn touch_all(&mut self, fields: impl IntoIterator<Item = FieldId>) {
        for field in fields {
            self.touch(field);
        }
    }

    /// Touched fields in registry order
    pub fn iter(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL
            .into_iter()
            .filter(move |field| self.is_touched(*field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_entry_for_every_field() {
            let values = FormValues::new();
            assert_eq!(values.iter().count(), FieldId::ALL.len());
            assert!(values.is_pristine());
        }

        #[test]
        fn test_set_and_get() {
            let mut values = FormValues::new();
            values.set(FieldId::Email, "a@b.com");
            assert_eq!(values.get(FieldId::Email), "a@b.com");
            assert_eq!(values.get(FieldId::Name), "");
            assert!(!values.is_pristine());
        }

        #[test]
        fn test_with_builder() {
            let values = FormValues::new()
                .with(FieldId::Password, "y")
                .with(FieldId::ConfirmPassword, "y");
            assert_eq!(values.get(FieldId::Password), "y");
            assert_eq!(values.get(FieldId::ConfirmPassword), "y");
        }
    }

    mod error_map {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_none_clears_entry() {
            let mut errors = ErrorMap::new();
            errors.set(FieldId::Name, Some(FieldError::NameRequired));
            assert!(errors.get(FieldId::Name).is_some());
            errors.set(FieldId::Name, None);
            assert!(errors.get(FieldId::Name).is_none());
            assert!(errors.is_empty());
        }

        #[test]
        fn test_iter_follows_registry_order() {
            let errors: ErrorMap = [
                (FieldId::Password, FieldError::PasswordRequired),
                (FieldId::Email, FieldError::EmailRequired),
            ]
            .into_iter()
            .collect();

            let fields: Vec<FieldId> = errors.iter().map(|(f, _)| f).collect();
            assert_eq!(fields, vec![FieldId::Email, FieldId::Password]);
            assert_eq!(errors.len(), 2);
        }
    }

    mod touched_set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_untouched() {
            let touched = TouchedSet::new();
            assert_eq!(touched.iter().next(), None);
            assert!(FieldId::ALL.iter().all(|f| !touched.is_touched(*f)));
        }

        #[test]
        fn test_touch_is_sticky() {
            let mut touched = TouchedSet::new();
            touched.touch(FieldId::Phone);
            touched.touch(FieldId::Phone);
            assert!(touched.is_touched(FieldId::Phone));
            assert_eq!(touched.iter().collect::<Vec<_>>(), vec![FieldId::Phone]);
        }

        #[test]
        fn test_touch_all() {
            let mut touched = TouchedSet::new();
            touched.touch_all(FieldId::LEGACY_SUBMIT_TOUCHED);
            assert!(!touched.is_touched(FieldId::Dob));
            assert!(!touched.is_touched(FieldId::Country));
            assert_eq!(touched.iter().count(), 5);
        }
    }
}
