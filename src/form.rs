//! The registration form session: one record, its per-field errors, and the
//! password visibility flag.
//!
//! A `RegistrationForm` is created empty when the form mounts, mutated
//! field-by-field as the user types, and read out as a snapshot at submit
//! time. Each mutation revalidates the touched field, so the error map always
//! reflects the current values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lang::Language;
use crate::validators;

/// The flat record the form collects, shaped exactly like the JSON body the
/// account-creation endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_check: String,
    pub lang: Language,
}

/// The five validated fields. `lang` is a selection and cannot be invalid,
/// so it is not listed here.
///
/// Ordered so error maps iterate in the form's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    LastName,
    Email,
    Password,
    PasswordCheck,
}

impl Field {
    /// Every validated field, in display order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::PasswordCheck,
    ];

    /// Label shown next to the field's input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PasswordCheck => "Repeat password",
        }
    }
}

/// One form session: the record under edit plus derived validation state.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    record: RegistrationRecord,
    errors: BTreeMap<Field, &'static str>,
    show_password: bool,
}

impl RegistrationForm {
    /// Create an empty form session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field value and revalidate it. Editing the password also
    /// revalidates the confirmation, which must track live password edits.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.record.name = value,
            Field::LastName => self.record.last_name = value,
            Field::Email => self.record.email = value,
            Field::Password => self.record.password = value,
            Field::PasswordCheck => self.record.password_check = value,
        }
        self.revalidate(field);
        if field == Field::Password {
            self.revalidate(Field::PasswordCheck);
        }
    }

    /// Store the language selection. Selections cannot be invalid.
    pub fn set_lang(&mut self, lang: Language) {
        self.record.lang = lang;
    }

    /// Revalidate every field, replacing the whole error map.
    ///
    /// # Returns
    /// `true` iff the form is valid afterwards.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();
        for field in Field::ALL {
            self.revalidate(field);
        }
        self.errors.is_empty()
    }

    /// The current error message for one field, if it is invalid.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// All current field errors, in display order.
    pub fn errors(&self) -> &BTreeMap<Field, &'static str> {
        &self.errors
    }

    /// Whether the error map is empty.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// An immutable copy of the record for submission.
    pub fn snapshot(&self) -> RegistrationRecord {
        self.record.clone()
    }

    /// The record under edit.
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// Flip the display mode of both password fields. No validation impact.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Whether password values are currently shown in clear text.
    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    fn revalidate(&mut self, field: Field) {
        let result = match field {
            Field::Name => validators::validate_name(&self.record.name),
            Field::LastName => validators::validate_name(&self.record.last_name),
            Field::Email => validators::validate_email(&self.record.email),
            Field::Password => validators::validate_password(&self.record.password),
            Field::PasswordCheck => validators::validate_password_check(
                &self.record.password_check,
                &self.record.password,
            ),
        };
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(msg) => {
                self.errors.insert(field, msg);
            }
        }
    }
}
